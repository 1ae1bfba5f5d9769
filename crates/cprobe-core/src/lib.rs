#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for cprobe.
//!
//! Two layers:
//! - **Numeric model**: the fixed-width integer and IEEE-754 float widths a C
//!   type can be mapped onto, and their native Rust primitives
//! - **Layout records**: what a probe learned about one C type

pub mod layout;
pub mod numeric;
pub mod utils;


pub use layout::TypeLayout;
pub use numeric::{NumericKind, ParsePrimitiveError, RustPrimitive};
