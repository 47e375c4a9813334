pub const MANUAL: &str = r#"NAME
    probe - discover installed toolchains

SYNOPSIS
    aly probe [options] [<toolchain>...]

DESCRIPTION
    This command searches for the programs each toolchain needs and reports
    where they were found. Directories listed in the 'toolchain.paths'
    configuration key are searched before the directories in 'PATH'.

    riscv
        The compiler, objcopy, objdump, and size programs. The program prefix
        is read from 'toolchain.riscv-prefix' or, when not set, is the first of
        'riscv64-unknown-elf-', 'riscv32-unknown-elf-', 'riscv-none-elf-', and
        'riscv64-linux-gnu-' with an installed compiler.

    vivado
        The xvlog, xvhdl, xelab, and xsim simulation programs.

    plantuml
        A java runtime and a 'plantuml.jar' file, searched for at
        'toolchain.plantuml-jar', 'docs/source/', and 'docs/' of the project.
        A missing runtime or jar only produces a warning since diagrams are
        optional.

    A toolchain is complete when every program is found, partial when some
    are found, and missing otherwise.

OPTIONS
    <toolchain>
        riscv, vivado, or plantuml (default: all)

    --json
        Print the results as json

    --check
        Exit with an error if a toolchain is incomplete

EXAMPLES
    aly probe
    aly probe riscv vivado --check
    aly probe --json
"#;
