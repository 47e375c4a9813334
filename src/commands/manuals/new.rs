pub const MANUAL: &str = r#"NAME
    new - create a new project

SYNOPSIS
    aly new [options] <path>

DESCRIPTION
    This command creates a new directory at <path> holding the project
    structure: '.aly/config', 'firmware/', and 'rtl/'. The configuration file
    records the project name and a newly generated identifier.

    The path must not exist and must not be located inside another project.
    To turn an existing directory into a project, use 'aly init'.

    By default the directory's name becomes the project name. A name must begin
    with an ascii letter and may only contain ascii letters, digits, '-', and '_'.

OPTIONS
    <path>
        The new directory to make

    --name <name>
        Project name (default: the directory name)

EXAMPLES
    aly new blinky
    aly new ./designs/2024-soc --name soc
"#;
