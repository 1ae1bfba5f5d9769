//! cprobe: examine a C API by compiling and running tiny C programs.
//!
//! The main goal is to help Rust build scripts produce bindings to C
//! libraries: the representation of types and the values of constants are
//! read from the real toolchain instead of being guessed.
//!
//! # Example
//!
//! ```no_run
//! use cprobe_lib::Probe;
//!
//! let probe = Probe::system().expect("temp dir is usable");
//! assert_eq!(probe.size_of("char").unwrap(), 1);
//! assert!(probe.is_defined_macro("__STDC__").unwrap());
//! ```
//!
//! # Source encoding
//!
//! Generated C source is UTF-8. Program output is decoded lossily, so a
//! compile or run closure that needs another encoding must translate.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod bindings;
pub mod config;
pub mod error;
pub mod output;
pub mod probe;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod error_tests;

pub use bindings::{Bindings, BindingsRequest, EmitConfig, Item};
pub use config::{ConfigError, ProbeConfig};
pub use error::{CommandResult, NewProbeError, ProbeError, ProbeResult};
pub use output::CompileRunOutput;
pub use probe::Probe;

pub use cprobe_core::{NumericKind, RustPrimitive, TypeLayout};
