use std::fs;
use std::path::PathBuf;

use cprobe_lib::{BindingsRequest, EmitConfig};

use super::probe_loader::{ProbeArgs, load_probe_or_exit};

/// One requested declaration, in command-line order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingsEntry {
    Type(String),
    SignedConstant(String),
    UnsignedConstant(String),
}

pub struct BindingsArgs {
    pub probe: ProbeArgs,
    pub entries: Vec<BindingsEntry>,
    pub visibility: String,
    pub output: Option<PathBuf>,
    pub json: bool,
}

pub fn build_request(entries: &[BindingsEntry]) -> BindingsRequest {
    let mut request = BindingsRequest::new();
    for entry in entries {
        match entry {
            BindingsEntry::Type(name) => request.add_type(name.as_str()),
            BindingsEntry::SignedConstant(name) => request.add_signed_constant(name.as_str()),
            BindingsEntry::UnsignedConstant(name) => request.add_unsigned_constant(name.as_str()),
        };
    }
    request
}

pub fn run(args: BindingsArgs) {
    if args.entries.is_empty() {
        eprintln!("error: nothing to generate: pass --type, --const or --unsigned-const");
        std::process::exit(1);
    }

    let probe = load_probe_or_exit(&args.probe);
    let bindings = match build_request(&args.entries).generate(&probe) {
        Ok(bindings) => bindings,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let output = if args.json {
        match serde_json::to_string_pretty(&bindings) {
            Ok(json) => json + "\n",
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        let config = EmitConfig {
            visibility: args.visibility,
            header_comment: Some("Generated by cprobe. Do not edit.".to_string()),
            ..EmitConfig::default()
        };
        bindings.render(&config)
    };

    match args.output {
        Some(path) => {
            if let Err(e) = fs::write(&path, output) {
                eprintln!("error: failed to write '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => print!("{}", output),
    }
}
