//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// C type name (positional).
pub fn type_arg() -> Arg {
    Arg::new("type")
        .value_name("TYPE")
        .required(true)
        .help("C type name, e.g. 'unsigned long' or 'struct timespec'")
}

/// One or more C type names (positional).
pub fn types_arg() -> Arg {
    Arg::new("types")
        .value_name("TYPE")
        .required(true)
        .num_args(1..)
        .help("C type names")
}

/// Macro name (positional).
pub fn macro_arg() -> Arg {
    Arg::new("macro")
        .value_name("MACRO")
        .required(true)
        .help("Macro name to test with #ifdef")
}

/// Constant expression (positional).
pub fn constant_arg() -> Arg {
    Arg::new("constant")
        .value_name("NAME")
        .required(true)
        .help("Integer constant, enumerator or macro")
}

/// Header included by every probe program (-H/--header).
pub fn header_arg() -> Arg {
    Arg::new("header")
        .short('H')
        .long("header")
        .value_name("HEADER")
        .action(ArgAction::Append)
        .help("Header to include, e.g. '<zlib.h>' or 'mylib.h' (repeatable)")
}

/// Include directory (-I/--include).
pub fn include_arg() -> Arg {
    Arg::new("include")
        .short('I')
        .long("include")
        .value_name("DIR")
        .value_parser(value_parser!(PathBuf))
        .action(ArgAction::Append)
        .help("Add a directory to the compiler's include path (repeatable)")
}

/// Compiler executable (--cc).
pub fn cc_arg() -> Arg {
    Arg::new("cc")
        .long("cc")
        .value_name("COMPILER")
        .help("C compiler command, may carry arguments (default: $CC, then cc)")
}

/// Extra compiler flag (--cflag).
pub fn cflag_arg() -> Arg {
    Arg::new("cflag")
        .long("cflag")
        .value_name("FLAG")
        .allow_hyphen_values(true)
        .action(ArgAction::Append)
        .help("Extra compiler flag, appended after $CFLAGS (repeatable)")
}

/// Scratch directory (--work-dir).
pub fn work_dir_arg() -> Arg {
    Arg::new("work_dir")
        .long("work-dir")
        .value_name("DIR")
        .value_parser(value_parser!(PathBuf))
        .help("Directory for scratch files (default: system temp dir)")
}

/// JSON probe configuration (--config).
pub fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("JSON probe configuration; flags are applied on top")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for compile/run log, -vv to also dump probe sources)")
}

/// Read a constant as unsigned (--unsigned).
pub fn unsigned_arg() -> Arg {
    Arg::new("unsigned")
        .long("unsigned")
        .action(ArgAction::SetTrue)
        .help("Read the value as unsigned long long")
}

/// Output JSON (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output JSON instead of text")
}

/// Type to alias (-t/--type).
pub fn alias_type_arg() -> Arg {
    Arg::new("alias_type")
        .short('t')
        .long("type")
        .value_name("TYPE")
        .action(ArgAction::Append)
        .help("Emit a type alias for this C type (repeatable)")
}

/// Signed constant to emit (-c/--const).
pub fn signed_const_arg() -> Arg {
    Arg::new("signed_const")
        .short('c')
        .long("const")
        .value_name("NAME")
        .action(ArgAction::Append)
        .help("Emit an i64 constant (repeatable)")
}

/// Unsigned constant to emit (--unsigned-const).
pub fn unsigned_const_arg() -> Arg {
    Arg::new("unsigned_const")
        .long("unsigned-const")
        .value_name("NAME")
        .action(ArgAction::Append)
        .help("Emit a u64 constant (repeatable)")
}

/// Visibility of emitted items (--visibility).
pub fn visibility_arg() -> Arg {
    Arg::new("visibility")
        .long("visibility")
        .value_name("VIS")
        .default_value("pub")
        .help("Visibility of emitted items, e.g. pub, 'pub(crate)', or '' for private")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}
