//! Rust declarations generated from probe results.
//!
//! A [`BindingsRequest`] names the C types and constants to look up; running
//! it against a [`Probe`] yields [`Bindings`], which render as Rust source
//! suitable for `include!` from a build script's `OUT_DIR`.

use std::borrow::Cow;

use cprobe_core::RustPrimitive;
use cprobe_core::utils::rust_identifier;
use indexmap::IndexMap;

use crate::error::{ProbeError, ProbeResult};
use crate::probe::Probe;

/// One generated declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Item {
    TypeAlias(RustPrimitive),
    SignedConstant(i64),
    UnsignedConstant(u64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Request {
    Type(String),
    SignedConstant(String),
    UnsignedConstant(String),
}

impl Request {
    fn name(&self) -> &str {
        match self {
            Request::Type(name) | Request::SignedConstant(name) | Request::UnsignedConstant(name) => {
                name.as_str()
            }
        }
    }
}

/// Ordered list of C names to turn into Rust declarations.
#[derive(Debug, Clone, Default)]
pub struct BindingsRequest {
    requests: Vec<Request>,
}

impl BindingsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a `type` alias for an arithmetic C type.
    pub fn add_type(&mut self, c_type: impl Into<String>) -> &mut Self {
        self.requests.push(Request::Type(c_type.into()));
        self
    }

    /// Request an `i64` constant.
    pub fn add_signed_constant(&mut self, name: impl Into<String>) -> &mut Self {
        self.requests.push(Request::SignedConstant(name.into()));
        self
    }

    /// Request a `u64` constant.
    pub fn add_unsigned_constant(&mut self, name: impl Into<String>) -> &mut Self {
        self.requests.push(Request::UnsignedConstant(name.into()));
        self
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Probe every requested name, in order.
    ///
    /// Names must be C identifiers that Rust can spell, possibly as raw
    /// identifiers; `_`, `self`, `Self`, `super` and `crate` are rejected. The
    /// first failing probe aborts generation.
    pub fn generate(&self, probe: &Probe<'_>) -> ProbeResult<Bindings> {
        let mut bindings = Bindings::new();
        for request in &self.requests {
            let name = request.name();
            if rust_identifier(name).is_none() {
                return Err(ProbeError::InvalidIdentifier(name.to_string()));
            }
            let item = match request {
                Request::Type(c_type) => probe
                    .equivalent_rust_type(c_type)?
                    .map(Item::TypeAlias)
                    .ok_or_else(|| ProbeError::Unrepresentable(c_type.clone()))?,
                Request::SignedConstant(name) => {
                    Item::SignedConstant(probe.signed_integer_constant(name)?)
                }
                Request::UnsignedConstant(name) => {
                    Item::UnsignedConstant(probe.unsigned_integer_constant(name)?)
                }
            };
            tracing::debug!("{} => {:?}", name, item);
            bindings.insert(name, item);
        }
        Ok(bindings)
    }
}

/// Configuration for Rust emission.
#[derive(Clone, Debug)]
pub struct EmitConfig {
    /// Visibility prefix, e.g. `pub` or `pub(crate)`. Empty for private.
    pub visibility: String,
    /// Silence naming lints for C-style names.
    pub allow_naming_lints: bool,
    /// Emitted as `//` lines at the top.
    pub header_comment: Option<String>,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            visibility: "pub".to_string(),
            allow_naming_lints: true,
            header_comment: None,
        }
    }
}

/// Probe results keyed by C name, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct Bindings {
    items: IndexMap<String, Item>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an item. Replacing an existing name keeps its position.
    ///
    /// `render` only produces valid Rust for names accepted by
    /// [`rust_identifier`].
    pub fn insert(&mut self, name: impl Into<String>, item: Item) -> Option<Item> {
        self.items.insert(name.into(), item)
    }

    pub fn get(&self, name: &str) -> Option<Item> {
        self.items.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Item)> {
        self.items.iter().map(|(name, item)| (name.as_str(), *item))
    }

    /// Render as Rust source.
    pub fn render(&self, config: &EmitConfig) -> String {
        let mut out = String::new();

        if let Some(comment) = &config.header_comment {
            for line in comment.lines() {
                if line.is_empty() {
                    out.push_str("//\n");
                } else {
                    out.push_str(&format!("// {}\n", line));
                }
            }
            out.push('\n');
        }

        let vis = if config.visibility.is_empty() {
            String::new()
        } else {
            format!("{} ", config.visibility)
        };

        for (name, item) in &self.items {
            let ident = rust_identifier(name).unwrap_or(Cow::Borrowed(name.as_str()));
            match item {
                Item::TypeAlias(primitive) => {
                    if config.allow_naming_lints && !is_upper_camel_case(name) {
                        out.push_str("#[allow(non_camel_case_types)]\n");
                    }
                    out.push_str(&format!("{}type {} = {};\n", vis, ident, primitive));
                }
                Item::SignedConstant(value) => {
                    push_const_lint(&mut out, config, name);
                    out.push_str(&format!("{}const {}: i64 = {};\n", vis, ident, value));
                }
                Item::UnsignedConstant(value) => {
                    push_const_lint(&mut out, config, name);
                    out.push_str(&format!("{}const {}: u64 = {};\n", vis, ident, value));
                }
            }
        }
        out
    }
}

fn push_const_lint(out: &mut String, config: &EmitConfig, name: &str) {
    if config.allow_naming_lints && name.chars().any(|c| c.is_ascii_lowercase()) {
        out.push_str("#[allow(non_upper_case_globals)]\n");
    }
}

fn is_upper_camel_case(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_uppercase()) && !name.contains('_')
}
