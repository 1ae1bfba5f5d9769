use std::fmt::Display;

use cprobe_lib::{Probe, ProbeResult};

use super::probe_loader::{ProbeArgs, load_probe_or_exit};

/// A question with a single printed answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    SizeOf(String),
    AlignOf(String),
    Signed(String),
    Defined(String),
    RustType(String),
    SignedConstant(String),
    UnsignedConstant(String),
}

pub struct QueryArgs {
    pub probe: ProbeArgs,
    pub query: Query,
}

pub fn run(args: QueryArgs) {
    let probe = load_probe_or_exit(&args.probe);
    match answer(&probe, &args.query) {
        Ok(answer) => println!("{}", answer),
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    }
}

/// Ask the probe and format the answer for printing.
pub fn answer(probe: &Probe<'_>, query: &Query) -> Result<String, String> {
    match query {
        Query::SizeOf(type_) => text(probe.size_of(type_)),
        Query::AlignOf(type_) => text(probe.align_of(type_)),
        Query::Signed(type_) => text(probe.is_signed(type_)),
        Query::Defined(token) => text(probe.is_defined_macro(token)),
        Query::RustType(type_) => match probe.equivalent_rust_type(type_) {
            Ok(Some(primitive)) => Ok(primitive.to_string()),
            Ok(None) => Err(format!("no Rust primitive matches C type `{}`", type_)),
            Err(e) => Err(e.to_string()),
        },
        Query::SignedConstant(name) => text(probe.signed_integer_constant(name)),
        Query::UnsignedConstant(name) => text(probe.unsigned_integer_constant(name)),
    }
}

fn text<T: Display>(result: ProbeResult<T>) -> Result<String, String> {
    result.map(|value| value.to_string()).map_err(|e| e.to_string())
}
