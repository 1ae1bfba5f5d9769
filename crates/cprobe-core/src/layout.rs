//! Probed layout of a single C type.

use crate::numeric::{NumericKind, RustPrimitive};

/// Everything a probe learned about one C type.
///
/// `kind` is only known for scalar arithmetic types; aggregates and pointers
/// carry just their size and alignment.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TypeLayout {
    pub c_type: String,
    pub size: usize,
    /// `None` when the compiler lacks C11 `alignof`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<NumericKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rust: Option<RustPrimitive>,
}

impl TypeLayout {
    /// Build a layout, deriving the Rust primitive from `kind` and `size`.
    pub fn new(
        c_type: impl Into<String>,
        size: usize,
        align: Option<usize>,
        kind: Option<NumericKind>,
    ) -> Self {
        let rust = kind.and_then(|kind| RustPrimitive::from_layout(kind, size));
        Self {
            c_type: c_type.into(),
            size,
            align,
            kind,
            rust,
        }
    }
}
