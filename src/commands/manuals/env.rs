pub const MANUAL: &str = r#"NAME
    env - print aly environment information

SYNOPSIS
    aly env [<key>...]

DESCRIPTION
    This command prints the environment variables aly defines. When run from
    within a project, the project variables are included.

    ALY_HOME, ALY_RISCV_PREFIX, ALY_PROJECT_ROOT, ALY_PROJECT_NAME,
    ALY_PROJECT_UUID, ALY_FIRMWARE_DIR, ALY_RTL_DIR, NO_COLOR

    Every entry of the '[env]' configuration table is also exported with the
    prefix 'ALY_ENV_'.

    When keys are given, only their values are printed, one per line. Keys are
    case insensitive.

OPTIONS
    <key>
        Lookup a variable to display its value

EXAMPLES
    aly env
    aly env ALY_RTL_DIR
"#;
