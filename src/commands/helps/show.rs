pub const HELP: &str = r#"Print information about the current project.

Usage:
    aly show [options]

Options:
    --files         list the collected rtl and firmware sources

Use 'aly help show' to read more about the command.
"#;
