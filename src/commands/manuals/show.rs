pub const MANUAL: &str = r#"NAME
    show - print information about the current project

SYNOPSIS
    aly show [options]

DESCRIPTION
    This command displays the current project's name, identifier, root
    directory, and size on disk, along with whether each entry of the project
    structure exists and how many sources were found.

    Sources are collected from 'rtl/' (*.v, *.vh, *.sv, *.svh, *.vhd, *.vhdl)
    and 'firmware/' (*.c, *.h, *.cpp, *.hpp, *.s, *.S, *.ld). Files excluded
    by '.gitignore' files are skipped.

OPTIONS
    --files
        List the collected rtl and firmware sources

EXAMPLES
    aly show
    aly show --files
"#;
