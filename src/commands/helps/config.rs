pub const HELP: &str = r#"Modify configuration values.

Usage:
    aly config [options]

Options:
    --global                edit the global configuration file
    --list                  list the configuration files in effect
    --set <key=value>...    write a value to a key
    --unset <key>...        remove a key
    --push <key=value>...   append a value to a list
    --pop <key>...          remove the last value of a list

Use 'aly help config' to read more about the command.
"#;
