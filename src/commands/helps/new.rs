pub const HELP: &str = r#"Create a new project.

Usage:
    aly new [options] <path>

Args:
    <path>          the new directory to make

Options:
    --name <name>   project name (default: the directory name)

Use 'aly help new' to read more about the command.
"#;
