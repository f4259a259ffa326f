//! The constraint descriptor applied to one node, and the three forms a rule
//! table entry may take before it is normalized into one.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use crate::error::Diagnostic;
use crate::grammar;
use crate::value::{Inspect, Number};

// ─── Callback ───────────────────────────────────────────────────────────────

type CallbackFn = dyn Fn(&dyn Inspect) -> Result<(), String> + Send + Sync;

/// A caller-supplied check that alone decides pass/fail for a node.
///
/// The returned `Err` text becomes the violation message.
#[derive(Clone)]
pub struct Callback(Arc<CallbackFn>);

impl Callback {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&dyn Inspect) -> Result<(), String> + Send + Sync + 'static,
    {
        Callback(Arc::new(f))
    }

    pub fn call(&self, value: &dyn Inspect) -> Result<(), String> {
        (self.0)(value)
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}

// ─── Rule ───────────────────────────────────────────────────────────────────

/// Constraints for one node.
///
/// When `callback` is set it is the only check that runs. Otherwise the
/// node's kind decides which of the remaining fields apply: `min`/`max` bound
/// numbers by value and strings by character count, `pattern` and `formats`
/// only look at strings (formats also accept numbers).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Rule {
    /// Predicate names from the atom registry; any one passing is enough.
    #[serde(rename = "is", skip_serializing_if = "Vec::is_empty")]
    pub formats: Vec<String>,
    /// Groups of sibling fields of which at least one must be non-empty.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub must: Vec<String>,
    #[serde(
        rename = "enum",
        deserialize_with = "deserialize_literals",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub enumeration: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<Number>,
    #[serde(rename = "regexp", skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(rename = "omitempty")]
    pub omit_empty: bool,
    #[serde(skip)]
    pub callback: Option<Callback>,
}

impl Rule {
    pub fn from_callback(callback: Callback) -> Self {
        Rule {
            callback: Some(callback),
            ..Rule::default()
        }
    }

    /// Parses a constraint grammar string, see [`grammar::parse`].
    pub fn parse(input: &str) -> (Rule, Vec<Diagnostic>) {
        grammar::parse(input)
    }

    /// Canonical grammar text for this rule, see [`grammar::to_grammar`].
    pub fn to_grammar(&self) -> String {
        grammar::to_grammar(self)
    }

    pub fn omit_empty(mut self) -> Self {
        self.omit_empty = true;
        self
    }

    pub fn is(mut self, formats: &[&str]) -> Self {
        self.formats = formats.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn must(mut self, groups: &[&str]) -> Self {
        self.must = groups.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn one_of(mut self, literals: &[&str]) -> Self {
        self.enumeration = literals.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn range(mut self, min: Option<Number>, max: Option<Number>) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn regexp(mut self, pattern: &str) -> Self {
        self.pattern = Some(pattern.to_string());
        self
    }
}

/// Enum literals may be written as strings or bare numbers in YAML/JSON.
fn deserialize_literals<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<Value>::deserialize(deserializer)?;
    raw.into_iter()
        .map(|v| match v {
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            other => Err(serde::de::Error::custom(format!(
                "enum literal must be a string or number, got {}",
                other
            ))),
        })
        .collect()
}

// ─── RuleSource ─────────────────────────────────────────────────────────────

/// What a rule table stores under a pattern.
#[derive(Clone, Debug, PartialEq)]
pub enum RuleSource {
    Grammar(String),
    Structured(Rule),
    Callback(Callback),
}

impl RuleSource {
    /// Normalizes the entry into a [`Rule`]. Grammar text may yield warnings.
    pub fn materialize(&self) -> (Rule, Vec<Diagnostic>) {
        match self {
            RuleSource::Grammar(text) => grammar::parse(text),
            RuleSource::Structured(rule) => (rule.clone(), Vec::new()),
            RuleSource::Callback(cb) => (Rule::from_callback(cb.clone()), Vec::new()),
        }
    }
}

impl From<&str> for RuleSource {
    fn from(text: &str) -> Self {
        RuleSource::Grammar(text.to_string())
    }
}

impl From<String> for RuleSource {
    fn from(text: String) -> Self {
        RuleSource::Grammar(text)
    }
}

impl From<Rule> for RuleSource {
    fn from(rule: Rule) -> Self {
        RuleSource::Structured(rule)
    }
}

impl From<Callback> for RuleSource {
    fn from(cb: Callback) -> Self {
        RuleSource::Callback(cb)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SourceRepr {
    Grammar(String),
    Structured(Rule),
}

impl<'de> Deserialize<'de> for RuleSource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match SourceRepr::deserialize(deserializer)? {
            SourceRepr::Grammar(text) => RuleSource::Grammar(text),
            SourceRepr::Structured(rule) => RuleSource::Structured(rule),
        })
    }
}
