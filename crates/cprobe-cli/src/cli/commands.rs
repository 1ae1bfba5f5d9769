//! Command builders for the CLI.
//!
//! Every subcommand accepts the same probe flags (headers, include dirs,
//! compiler and work dir), added by `with_probe_args`.

use clap::Command;

use super::args::*;

/// Add the flags that configure how probe programs are built.
fn with_probe_args(cmd: Command) -> Command {
    cmd.arg(header_arg())
        .arg(include_arg())
        .arg(cc_arg())
        .arg(cflag_arg())
        .arg(work_dir_arg())
        .arg(config_arg())
        .arg(verbose_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("cprobe")
        .about("Probe the representation of types, macros and constants in a C API")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(size_of_command())
        .subcommand(align_of_command())
        .subcommand(signed_command())
        .subcommand(defined_command())
        .subcommand(rust_type_command())
        .subcommand(constant_command())
        .subcommand(layout_command())
        .subcommand(bindings_command())
}

pub fn size_of_command() -> Command {
    let cmd = Command::new("size-of")
        .about("Print the size of a C type in bytes")
        .after_help(
            r#"EXAMPLES:
  cprobe size-of 'long double'
  cprobe size-of z_stream -H '<zlib.h>'"#,
        )
        .arg(type_arg());
    with_probe_args(cmd)
}

pub fn align_of_command() -> Command {
    let cmd = Command::new("align-of")
        .about("Print the alignment of a C type in bytes (needs C11)")
        .arg(type_arg());
    with_probe_args(cmd)
}

pub fn signed_command() -> Command {
    let cmd = Command::new("signed")
        .about("Print whether an arithmetic C type is signed")
        .after_help(
            r#"EXAMPLES:
  cprobe signed char
  cprobe signed off_t -H '<sys/types.h>'"#,
        )
        .arg(type_arg());
    with_probe_args(cmd)
}

pub fn defined_command() -> Command {
    let cmd = Command::new("defined")
        .about("Print whether a macro is defined")
        .after_help(
            r#"EXAMPLES:
  cprobe defined __STDC__
  cprobe defined SQLITE_OMIT_LOAD_EXTENSION -H '<sqlite3.h>'"#,
        )
        .arg(macro_arg());
    with_probe_args(cmd)
}

pub fn rust_type_command() -> Command {
    let cmd = Command::new("rust-type")
        .about("Print the Rust primitive with the same representation as a C type")
        .after_help(
            r#"EXAMPLES:
  cprobe rust-type 'unsigned long'
  cprobe rust-type alias_float_32_bit -H test_types.h -I tests/fixtures"#,
        )
        .arg(type_arg());
    with_probe_args(cmd)
}

pub fn constant_command() -> Command {
    let cmd = Command::new("constant")
        .about("Print the value of an integer constant or macro")
        .after_help(
            r#"EXAMPLES:
  cprobe constant INT_MIN -H '<limits.h>'
  cprobe constant UINT64_MAX --unsigned -H '<stdint.h>'"#,
        )
        .arg(constant_arg())
        .arg(unsigned_arg());
    with_probe_args(cmd)
}

pub fn layout_command() -> Command {
    let cmd = Command::new("layout")
        .about("Print size, alignment and representation of C types")
        .after_help(
            r#"EXAMPLES:
  cprobe layout int 'struct timespec' -H '<time.h>'
  cprobe layout size_t ptrdiff_t -H '<stddef.h>' --json"#,
        )
        .arg(types_arg())
        .arg(json_arg());
    with_probe_args(cmd)
}

pub fn bindings_command() -> Command {
    let cmd = Command::new("bindings")
        .about("Generate Rust type aliases and constants")
        .after_help(
            r#"EXAMPLES:
  cprobe bindings -H '<zlib.h>' -t uLong -c Z_OK -c Z_STREAM_END
  cprobe bindings -H mylib.h -I include -t mylib_handle -o src/sys.rs

Items are emitted in command-line order."#,
        )
        .arg(alias_type_arg())
        .arg(signed_const_arg())
        .arg(unsigned_const_arg())
        .arg(visibility_arg())
        .arg(output_file_arg())
        .arg(json_arg());
    with_probe_args(cmd)
}
