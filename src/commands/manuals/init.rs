pub const MANUAL: &str = r#"NAME
    init - initialize a project in an existing directory

SYNOPSIS
    aly init [options] [<path>]

DESCRIPTION
    This command creates the project structure inside an existing directory,
    which defaults to the current working directory. Existing 'firmware/' and
    'rtl/' directories and their contents are kept.

    If the directory already holds files, the command asks before continuing
    unless '--force' is given. It is an error to initialize a directory that is
    already a project or lies inside another project.

OPTIONS
    <path>
        The directory to initialize (default: .)

    --name <name>
        Project name (default: the directory name)

    --force
        Skip the prompt for a non-empty directory

EXAMPLES
    aly init
    aly init ../uart --name uart_lite
"#;
