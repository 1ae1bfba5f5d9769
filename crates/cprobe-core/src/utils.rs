use std::borrow::Cow;

/// Check that `s` is a valid C identifier (`[A-Za-z_][A-Za-z0-9_]*`).
///
/// # Examples
/// ```
/// use cprobe_core::utils::is_c_identifier;
/// assert!(is_c_identifier("__STDC__"));
/// assert!(!is_c_identifier("1abc"));
/// ```
pub fn is_c_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Rust keywords, strict and reserved, as of edition 2024.
const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "Self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be written as raw identifiers either.
const NOT_RAW: &[&str] = &["_", "crate", "self", "Self", "super"];

/// Spell a C identifier as a Rust identifier.
///
/// Keywords become raw identifiers (`match` → `r#match`). Returns `None` for
/// names with no Rust spelling: non-identifiers, `_`, and the path keywords
/// `crate`, `self`, `Self`, `super`.
///
/// # Examples
/// ```
/// use cprobe_core::utils::rust_identifier;
/// assert_eq!(rust_identifier("size_t").as_deref(), Some("size_t"));
/// assert_eq!(rust_identifier("type").as_deref(), Some("r#type"));
/// assert_eq!(rust_identifier("_"), None);
/// ```
pub fn rust_identifier(name: &str) -> Option<Cow<'_, str>> {
    if !is_c_identifier(name) || NOT_RAW.contains(&name) {
        return None;
    }
    if RUST_KEYWORDS.contains(&name) {
        Some(Cow::Owned(format!("r#{}", name)))
    } else {
        Some(Cow::Borrowed(name))
    }
}

/// Normalize a header name into an `#include` operand.
///
/// Already-delimited names (`<stdio.h>`, `"foo.h"`) are kept; bare names are
/// wrapped in double quotes.
///
/// # Examples
/// ```
/// use cprobe_core::utils::normalize_header;
/// assert_eq!(normalize_header("<stdint.h>"), "<stdint.h>");
/// assert_eq!(normalize_header("zlib.h"), "\"zlib.h\"");
/// ```
pub fn normalize_header(header: &str) -> String {
    let header = header.trim();
    let delimited = (header.starts_with('<') && header.ends_with('>'))
        || (header.len() >= 2 && header.starts_with('"') && header.ends_with('"'));
    if delimited {
        header.to_string()
    } else {
        format!("\"{}\"", header)
    }
}
