//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Probe flags are accepted by every subcommand
//! 2. Params extraction: correct fields are extracted from ArgMatches
//! 3. Bindings entries keep command-line order

use std::path::PathBuf;

use super::commands::{
    bindings_command, build_cli, constant_command, layout_command, size_of_command,
};
use super::dispatch::*;
use crate::commands::bindings::BindingsEntry;
use crate::commands::query::Query;

#[test]
fn cli_is_well_formed() {
    build_cli().debug_assert();
}

#[test]
fn every_subcommand_accepts_probe_flags() {
    let cli = build_cli();
    for sub in cli.get_subcommands() {
        let name = sub.get_name().to_string();
        let mut argv = vec![name.clone()];
        match name.as_str() {
            "bindings" => argv.extend(["-t", "foo_t"].map(String::from)),
            _ => argv.push("x".into()),
        }
        argv.extend(
            [
                "-H", "<stdint.h>", "-I", "inc", "--cc", "clang", "--cflag", "-O2",
                "--work-dir", "/tmp", "--config", "probe.json", "-vv",
            ]
            .map(String::from),
        );
        let result = sub.clone().try_get_matches_from(argv);
        assert!(result.is_ok(), "{} should accept probe flags: {:?}", name, result.err());
    }
}

#[test]
fn probe_params_extraction() {
    let m = size_of_command()
        .try_get_matches_from([
            "size-of",
            "unsigned long",
            "-H",
            "<zlib.h>",
            "--header",
            "mylib.h",
            "-I",
            "vendor/include",
            "--cflag",
            "-std=c11",
            "--cflag=-m32",
        ])
        .unwrap();
    let params = ProbeParams::from_matches(&m);
    assert_eq!(params.headers, ["<zlib.h>", "mylib.h"]);
    assert_eq!(params.include_dirs, [PathBuf::from("vendor/include")]);
    assert_eq!(params.cflags, ["-std=c11", "-m32"]);
    assert_eq!(params.compiler, None);
    assert_eq!(params.work_dir, None);
}

#[test]
fn query_kind_from_subcommand() {
    assert_eq!(QueryKind::from_subcommand("size-of"), Some(QueryKind::SizeOf));
    assert_eq!(QueryKind::from_subcommand("rust-type"), Some(QueryKind::RustType));
    assert_eq!(QueryKind::from_subcommand("layout"), None);
}

#[test]
fn size_of_params() {
    let m = size_of_command()
        .try_get_matches_from(["size-of", "struct timespec"])
        .unwrap();
    let params = QueryParams::from_matches(QueryKind::SizeOf, &m);
    assert_eq!(params.query, Query::SizeOf("struct timespec".into()));
}

#[test]
fn constant_params_signedness() {
    let m = constant_command()
        .try_get_matches_from(["constant", "INT_MIN"])
        .unwrap();
    let params = QueryParams::from_matches(QueryKind::Constant, &m);
    assert_eq!(params.query, Query::SignedConstant("INT_MIN".into()));

    let m = constant_command()
        .try_get_matches_from(["constant", "UINT64_MAX", "--unsigned"])
        .unwrap();
    let params = QueryParams::from_matches(QueryKind::Constant, &m);
    assert_eq!(params.query, Query::UnsignedConstant("UINT64_MAX".into()));
}

#[test]
fn size_of_requires_type() {
    assert!(size_of_command().try_get_matches_from(["size-of"]).is_err());
}

#[test]
fn layout_params() {
    let m = layout_command()
        .try_get_matches_from(["layout", "int", "long double", "--json"])
        .unwrap();
    let params = LayoutParams::from_matches(&m);
    assert_eq!(params.types, ["int", "long double"]);
    assert!(params.json);
}

#[test]
fn bindings_entries_keep_command_line_order() {
    let m = bindings_command()
        .try_get_matches_from([
            "bindings",
            "-c",
            "Z_OK",
            "-t",
            "uLong",
            "--unsigned-const",
            "Z_NULL",
            "--const",
            "Z_STREAM_END",
            "--type",
            "uInt",
        ])
        .unwrap();
    let params = BindingsParams::from_matches(&m);
    assert_eq!(
        params.entries,
        [
            BindingsEntry::SignedConstant("Z_OK".into()),
            BindingsEntry::Type("uLong".into()),
            BindingsEntry::UnsignedConstant("Z_NULL".into()),
            BindingsEntry::SignedConstant("Z_STREAM_END".into()),
            BindingsEntry::Type("uInt".into()),
        ]
    );
    assert_eq!(params.visibility, "pub");
    assert!(!params.json);
    assert_eq!(params.output, None);
}

#[test]
fn bindings_visibility_and_output() {
    let m = bindings_command()
        .try_get_matches_from([
            "bindings",
            "-t",
            "uLong",
            "--visibility",
            "pub(crate)",
            "-o",
            "src/sys.rs",
        ])
        .unwrap();
    let params = BindingsParams::from_matches(&m);
    assert_eq!(params.visibility, "pub(crate)");
    assert_eq!(params.output, Some(PathBuf::from("src/sys.rs")));
}
