//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors pull the relevant fields
//! - `Into<*Args>` impls bridge dispatch to command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use crate::commands::bindings::{BindingsArgs, BindingsEntry};
use crate::commands::layout::LayoutArgs;
use crate::commands::probe_loader::ProbeArgs;
use crate::commands::query::{Query, QueryArgs};

/// Probe flags shared by every subcommand.
#[derive(Debug, Default)]
pub struct ProbeParams {
    pub headers: Vec<String>,
    pub include_dirs: Vec<PathBuf>,
    pub compiler: Option<String>,
    pub cflags: Vec<String>,
    pub work_dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

impl ProbeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            headers: strings(m, "header"),
            include_dirs: m
                .get_many::<PathBuf>("include")
                .map(|dirs| dirs.cloned().collect())
                .unwrap_or_default(),
            compiler: m.get_one::<String>("cc").cloned(),
            cflags: strings(m, "cflag"),
            work_dir: m.get_one::<PathBuf>("work_dir").cloned(),
            config: m.get_one::<PathBuf>("config").cloned(),
        }
    }
}

impl From<ProbeParams> for ProbeArgs {
    fn from(p: ProbeParams) -> Self {
        Self {
            headers: p.headers,
            include_dirs: p.include_dirs,
            compiler: p.compiler,
            cflags: p.cflags,
            work_dir: p.work_dir,
            config: p.config,
        }
    }
}

/// Which single-answer question a subcommand asks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryKind {
    SizeOf,
    AlignOf,
    Signed,
    Defined,
    RustType,
    Constant,
}

impl QueryKind {
    pub fn from_subcommand(name: &str) -> Option<Self> {
        let kind = match name {
            "size-of" => QueryKind::SizeOf,
            "align-of" => QueryKind::AlignOf,
            "signed" => QueryKind::Signed,
            "defined" => QueryKind::Defined,
            "rust-type" => QueryKind::RustType,
            "constant" => QueryKind::Constant,
            _ => return None,
        };
        Some(kind)
    }
}

pub struct QueryParams {
    pub probe: ProbeParams,
    pub query: Query,
}

impl QueryParams {
    pub fn from_matches(kind: QueryKind, m: &ArgMatches) -> Self {
        let one = |id: &str| m.get_one::<String>(id).cloned().unwrap_or_default();
        let query = match kind {
            QueryKind::SizeOf => Query::SizeOf(one("type")),
            QueryKind::AlignOf => Query::AlignOf(one("type")),
            QueryKind::Signed => Query::Signed(one("type")),
            QueryKind::Defined => Query::Defined(one("macro")),
            QueryKind::RustType => Query::RustType(one("type")),
            QueryKind::Constant if m.get_flag("unsigned") => {
                Query::UnsignedConstant(one("constant"))
            }
            QueryKind::Constant => Query::SignedConstant(one("constant")),
        };
        Self {
            probe: ProbeParams::from_matches(m),
            query,
        }
    }
}

impl From<QueryParams> for QueryArgs {
    fn from(p: QueryParams) -> Self {
        Self {
            probe: p.probe.into(),
            query: p.query,
        }
    }
}

pub struct LayoutParams {
    pub probe: ProbeParams,
    pub types: Vec<String>,
    pub json: bool,
}

impl LayoutParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            probe: ProbeParams::from_matches(m),
            types: strings(m, "types"),
            json: m.get_flag("json"),
        }
    }
}

impl From<LayoutParams> for LayoutArgs {
    fn from(p: LayoutParams) -> Self {
        Self {
            probe: p.probe.into(),
            types: p.types,
            json: p.json,
        }
    }
}

pub struct BindingsParams {
    pub probe: ProbeParams,
    pub entries: Vec<BindingsEntry>,
    pub visibility: String,
    pub output: Option<PathBuf>,
    pub json: bool,
}

impl BindingsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            probe: ProbeParams::from_matches(m),
            entries: bindings_entries(m),
            visibility: m
                .get_one::<String>("visibility")
                .cloned()
                .unwrap_or_else(|| "pub".to_string()),
            output: m.get_one::<PathBuf>("output").cloned(),
            json: m.get_flag("json"),
        }
    }
}

impl From<BindingsParams> for BindingsArgs {
    fn from(p: BindingsParams) -> Self {
        Self {
            probe: p.probe.into(),
            entries: p.entries,
            visibility: p.visibility,
            output: p.output,
            json: p.json,
        }
    }
}

fn strings(m: &ArgMatches, id: &str) -> Vec<String> {
    m.get_many::<String>(id)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

/// Merge `-t`, `-c` and `--unsigned-const` back into command-line order.
fn bindings_entries(m: &ArgMatches) -> Vec<BindingsEntry> {
    let mut indexed: Vec<(usize, BindingsEntry)> = Vec::new();
    let mut collect = |id: &str, make: fn(String) -> BindingsEntry| {
        if let (Some(indices), Some(values)) = (m.indices_of(id), m.get_many::<String>(id)) {
            indexed.extend(indices.zip(values).map(|(i, v)| (i, make(v.clone()))));
        }
    };
    collect("alias_type", BindingsEntry::Type);
    collect("signed_const", BindingsEntry::SignedConstant);
    collect("unsigned_const", BindingsEntry::UnsignedConstant);
    indexed.sort_by_key(|(i, _)| *i);
    indexed.into_iter().map(|(_, entry)| entry).collect()
}
