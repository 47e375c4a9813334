pub const MANUAL: &str = r#"NAME
    config - modify configuration values

SYNOPSIS
    aly config [options]

DESCRIPTION
    This command displays and edits configuration files. Without options, the
    combined configuration is printed. Edits apply to the current project's
    '.aly/config' file, or to the global file when '--global' is given or when
    run outside of a project.

    Keys are written as <table>.<key>. The supported keys are:

    project.name            the project name
    project.uuid            the project identifier
    toolchain.riscv-prefix  the RISC-V program prefix
    toolchain.paths         directories searched before PATH
    toolchain.plantuml-jar  location of plantuml.jar
    env.<KEY>               exported as ALY_ENV_<KEY>

    Edits are checked before the file is saved, and comments and formatting of
    the file are preserved.

OPTIONS
    --global
        Edit the global configuration file

    --list
        List the configuration files in effect

    --set <key=value>...
        Write a value to a key

    --unset <key>...
        Remove a key

    --push <key=value>...
        Append a value to a list

    --pop <key>...
        Remove the last value of a list

EXAMPLES
    aly config --set toolchain.riscv-prefix=riscv32-unknown-elf-
    aly config --global --push toolchain.paths=/tools/Xilinx/Vivado/2023.2/bin
    aly config --unset env.BOARD
"#;
