//! Violation message templates and the renderer the engine consults for every
//! message.
//!
//! Templates use positional placeholders `{0}`, `{1}`, … . Argument `{0}` is
//! always the offending path text (joined by `,` for groups); the remaining
//! arguments depend on the [`ViolationKind`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::error::ConfigError;

/// One template key per violation class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Empty value without `omitempty`. Args: path.
    Empty,
    /// No listed predicate accepted the value. Args: path, attempted formats.
    Format,
    /// `regexp` did not match. Args: path, pattern.
    Pattern,
    /// Value not among the `enum` literals. Args: path, allowed, actual.
    Enum,
    /// Number below `min`. Args: path, bound, actual.
    Minimum,
    /// Number above `max`. Args: path, bound, actual.
    Maximum,
    /// String shorter than `min` characters. Args: path, bound, actual length.
    MinLength,
    /// String longer than `max` characters. Args: path, bound, actual length.
    MaxLength,
    /// Every member of a must-group was empty. Args: paths, member list, group.
    Group,
    /// A callback rejected the value. Args: path, callback message.
    Callback,
}

impl ViolationKind {
    pub const ALL: [ViolationKind; 10] = [
        ViolationKind::Empty,
        ViolationKind::Format,
        ViolationKind::Pattern,
        ViolationKind::Enum,
        ViolationKind::Minimum,
        ViolationKind::Maximum,
        ViolationKind::MinLength,
        ViolationKind::MaxLength,
        ViolationKind::Group,
        ViolationKind::Callback,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ViolationKind::Empty => "empty",
            ViolationKind::Format => "format",
            ViolationKind::Pattern => "pattern",
            ViolationKind::Enum => "enum",
            ViolationKind::Minimum => "minimum",
            ViolationKind::Maximum => "maximum",
            ViolationKind::MinLength => "min_length",
            ViolationKind::MaxLength => "max_length",
            ViolationKind::Group => "group",
            ViolationKind::Callback => "callback",
        }
    }

    /// The built-in English template.
    pub fn default_template(self) -> &'static str {
        match self {
            ViolationKind::Empty => "not allowed empty",
            ViolationKind::Format => "is not one of the [{1}]",
            ViolationKind::Pattern => "could be malformed",
            ViolationKind::Enum => "should be one of [{1}], current value is [{2}]",
            ViolationKind::Minimum => "should be greater than equal [{1}], current value is [{2}]",
            ViolationKind::Maximum => "should be less than equal [{1}], current value is [{2}]",
            ViolationKind::MinLength => {
                "length should be greater than equal [{1}], current length is [{2}]"
            }
            ViolationKind::MaxLength => {
                "length should be less than equal [{1}], current length is [{2}]"
            }
            ViolationKind::Group => "at least one of [{1}] should be valued",
            ViolationKind::Callback => "{1}",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── MessageRenderer ────────────────────────────────────────────────────────

/// Extension point for message localization.
pub trait MessageRenderer {
    /// Locale tag of the messages this renderer produces.
    fn locale(&self) -> &str;

    fn render(&self, kind: ViolationKind, args: &[String]) -> String;
}

/// Template catalog for one locale.
///
/// Keys missing from the catalog fall back to the English defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub locale: String,
    #[serde(default)]
    pub templates: HashMap<ViolationKind, String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::english()
    }
}

impl Catalog {
    pub fn english() -> Self {
        Catalog {
            locale: "en".to_string(),
            templates: HashMap::new(),
        }
    }

    pub fn new(locale: &str) -> Self {
        Catalog {
            locale: locale.to_string(),
            templates: HashMap::new(),
        }
    }

    pub fn with_template(mut self, kind: ViolationKind, template: &str) -> Self {
        self.templates.insert(kind, template.to_string());
        self
    }

    pub fn template(&self, kind: ViolationKind) -> &str {
        self.templates
            .get(&kind)
            .map(|t| t.as_str())
            .unwrap_or_else(|| kind.default_template())
    }

    /// Loads a catalog from YAML:
    ///
    /// ```yaml
    /// locale: zh
    /// templates:
    ///   minimum: "应该大于等于[{1}]，当前值为[{2}]"
    /// ```
    pub fn from_yaml(input: &str) -> Result<Catalog, ConfigError> {
        serde_saphyr::from_str(input)
            .map_err(|e| ConfigError::new(format!("invalid message catalog: {}", e)))
    }
}

impl MessageRenderer for Catalog {
    fn locale(&self) -> &str {
        &self.locale
    }

    fn render(&self, kind: ViolationKind, args: &[String]) -> String {
        fill_template(self.template(kind), args)
    }
}

/// Substitutes `{n}` placeholders with `args[n]`. Placeholders without a
/// matching argument are left as written.
pub fn fill_template(template: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let substituted = after.find('}').and_then(|end| {
            let index: usize = after[..end].parse().ok()?;
            let arg = args.get(index)?;
            Some((arg, end))
        });
        match substituted {
            Some((arg, end)) => {
                out.push_str(arg);
                rest = &after[end + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
