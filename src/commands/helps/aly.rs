pub const HELP: &str = r#"Aly is a project manager and toolchain probe for firmware and RTL designs.

Usage:
    aly [options] [command]

Commands:
    new             create a new project
    init            initialize a project in an existing directory
    show            print information about the current project
    probe           discover installed toolchains
    env             print aly environment information
    config          modify configuration values

Options:
    --version       print version information and exit
    --color <when>  coloring: auto, always, never
    --help, -h      print help information

Use 'aly help <command>' for more information about a command.
"#;
