pub const HELP: &str = r#"Print aly environment information.

Usage:
    aly env [<key>...]

Args:
    <key>           lookup a variable to display its value

Use 'aly help env' to read more about the command.
"#;
