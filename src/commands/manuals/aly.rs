pub const MANUAL: &str = r#"NAME
    aly - project manager and toolchain probe for firmware and RTL designs

SYNOPSIS
    aly [options] [command]

DESCRIPTION
    Aly manages projects that pair hardware sources with the firmware that runs
    on them. A project is any directory holding the file '.aly/config' along with
    a 'firmware/' and an 'rtl/' directory. Commands that operate on a project
    search the current directory and then every parent directory for the first
    '.aly/config' file.

    Configuration is layered. The project's '.aly/config' file takes precedence
    over the global file '$ALY_HOME/config.toml'.

OPTIONS
    --version
        Print version information and exit

    --color <when>
        Coloring: auto, always, never

    --help, -h
        Print help information

EXAMPLES
    aly new soc
    aly probe riscv --check
    aly help config
"#;
