//! Fixed-width numeric model.
//!
//! C only guarantees minimum widths for its integer types, so a probe has to
//! discover the actual width and signedness of each type. Once known, the pair
//! maps onto exactly one Rust primitive. Rust's own fixed-width types are used
//! directly; no alias layer is introduced on this side.

use std::fmt;
use std::str::FromStr;

/// Representation family of a numeric C type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericKind {
    /// Two's-complement signed integer.
    SignedInt,
    /// Unsigned integer.
    UnsignedInt,
    /// IEEE-754 binary floating point.
    Float,
}

impl NumericKind {
    pub fn is_signed(self) -> bool {
        !matches!(self, NumericKind::UnsignedInt)
    }
}

/// Native Rust primitive with a guaranteed width.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RustPrimitive {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
}

impl RustPrimitive {
    pub const ALL: [RustPrimitive; 10] = [
        RustPrimitive::I8,
        RustPrimitive::I16,
        RustPrimitive::I32,
        RustPrimitive::I64,
        RustPrimitive::U8,
        RustPrimitive::U16,
        RustPrimitive::U32,
        RustPrimitive::U64,
        RustPrimitive::F32,
        RustPrimitive::F64,
    ];

    /// Rust spelling of the type, e.g. `"u32"`.
    pub fn name(self) -> &'static str {
        match self {
            RustPrimitive::I8 => "i8",
            RustPrimitive::I16 => "i16",
            RustPrimitive::I32 => "i32",
            RustPrimitive::I64 => "i64",
            RustPrimitive::U8 => "u8",
            RustPrimitive::U16 => "u16",
            RustPrimitive::U32 => "u32",
            RustPrimitive::U64 => "u64",
            RustPrimitive::F32 => "f32",
            RustPrimitive::F64 => "f64",
        }
    }

    /// Width in bytes.
    pub fn size(self) -> usize {
        match self {
            RustPrimitive::I8 | RustPrimitive::U8 => 1,
            RustPrimitive::I16 | RustPrimitive::U16 => 2,
            RustPrimitive::I32 | RustPrimitive::U32 | RustPrimitive::F32 => 4,
            RustPrimitive::I64 | RustPrimitive::U64 | RustPrimitive::F64 => 8,
        }
    }

    pub fn kind(self) -> NumericKind {
        match self {
            RustPrimitive::I8 | RustPrimitive::I16 | RustPrimitive::I32 | RustPrimitive::I64 => {
                NumericKind::SignedInt
            }
            RustPrimitive::U8 | RustPrimitive::U16 | RustPrimitive::U32 | RustPrimitive::U64 => {
                NumericKind::UnsignedInt
            }
            RustPrimitive::F32 | RustPrimitive::F64 => NumericKind::Float,
        }
    }

    pub fn is_signed(self) -> bool {
        self.kind().is_signed()
    }

    pub fn is_integer(self) -> bool {
        !matches!(self.kind(), NumericKind::Float)
    }

    /// Pick the primitive matching a probed representation.
    ///
    /// Returns `None` for widths Rust has no primitive for (e.g. a 16-byte
    /// `__int128` or an 80-bit `long double`).
    pub fn from_layout(kind: NumericKind, size: usize) -> Option<Self> {
        let primitive = match (kind, size) {
            (NumericKind::SignedInt, 1) => RustPrimitive::I8,
            (NumericKind::SignedInt, 2) => RustPrimitive::I16,
            (NumericKind::SignedInt, 4) => RustPrimitive::I32,
            (NumericKind::SignedInt, 8) => RustPrimitive::I64,
            (NumericKind::UnsignedInt, 1) => RustPrimitive::U8,
            (NumericKind::UnsignedInt, 2) => RustPrimitive::U16,
            (NumericKind::UnsignedInt, 4) => RustPrimitive::U32,
            (NumericKind::UnsignedInt, 8) => RustPrimitive::U64,
            (NumericKind::Float, 4) => RustPrimitive::F32,
            (NumericKind::Float, 8) => RustPrimitive::F64,
            _ => return None,
        };
        Some(primitive)
    }
}

impl fmt::Display for RustPrimitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown Rust primitive: {0:?}")]
pub struct ParsePrimitiveError(pub String);

impl FromStr for RustPrimitive {
    type Err = ParsePrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RustPrimitive::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| ParsePrimitiveError(s.to_string()))
    }
}
