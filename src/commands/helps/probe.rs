pub const HELP: &str = r#"Discover installed toolchains.

Usage:
    aly probe [options] [<toolchain>...]

Args:
    <toolchain>     riscv, vivado, or plantuml (default: all)

Options:
    --json          print the results as json
    --check         exit with an error if a toolchain is incomplete

Use 'aly help probe' to read more about the command.
"#;
