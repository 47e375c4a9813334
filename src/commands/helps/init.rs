pub const HELP: &str = r#"Initialize a project in an existing directory.

Usage:
    aly init [options] [<path>]

Args:
    <path>          the directory to initialize (default: .)

Options:
    --name <name>   project name (default: the directory name)
    --force         skip the prompt for a non-empty directory

Use 'aly help init' to read more about the command.
"#;
