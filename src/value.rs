//! Capability-based inspection of the values being validated.
//!
//! The engine never looks at concrete types. Anything that implements
//! [`Inspect`] describes itself as one [`Node`] kind, and traversal is
//! defined purely over those kinds.

use indexmap::IndexMap;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// Exposes a value's shape to the validation engine.
///
/// Records implement this by listing their fields:
///
/// ```rust
/// use fieldcheck::value::{Field, Inspect, Node};
///
/// struct Login {
///     name: String,
///     password: Option<String>,
/// }
///
/// impl Inspect for Login {
///     fn inspect(&self) -> Node<'_> {
///         Node::Record(vec![
///             Field::new("Name", &self.name).validate("regexp:^[a-z]+$"),
///             Field::new("Password", &self.password).optional(),
///         ])
///     }
/// }
/// ```
pub trait Inspect {
    fn inspect(&self) -> Node<'_>;
}

/// The closed set of node kinds traversal understands.
pub enum Node<'a> {
    Record(Vec<Field<'a>>),
    Sequence(Vec<&'a dyn Inspect>),
    /// Entries in iteration order, keys already stringified.
    Keyed(Vec<(String, &'a dyn Inspect)>),
    /// A nullable reference; `None` is null.
    Optional(Option<&'a dyn Inspect>),
    Scalar(Scalar<'a>),
}

impl Node<'_> {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Record(_) => "record",
            Node::Sequence(_) => "sequence",
            Node::Keyed(_) => "keyed",
            Node::Optional(_) => "optional",
            Node::Scalar(_) => "scalar",
        }
    }
}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Record(fields) => f
                .debug_list()
                .entries(fields.iter().map(|fd| fd.name))
                .finish(),
            Node::Sequence(items) => write!(f, "Sequence(len={})", items.len()),
            Node::Keyed(entries) => f
                .debug_list()
                .entries(entries.iter().map(|(k, _)| k))
                .finish(),
            Node::Optional(inner) => write!(f, "Optional(null={})", inner.is_none()),
            Node::Scalar(s) => write!(f, "{:?}", s),
        }
    }
}

/// Leaf values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scalar<'a> {
    Str(&'a str),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
}

impl<'a> Scalar<'a> {
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Scalar::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Scalar::Int(i) => Some(i as f64),
            Scalar::Uint(u) => Some(u as f64),
            Scalar::Float(f) => Some(f),
            _ => None,
        }
    }

    /// Integral value, if the scalar is an integer or a float with no
    /// fractional part.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Scalar::Int(i) => Some(i),
            Scalar::Uint(u) => i64::try_from(u).ok(),
            Scalar::Float(f) if f.fract() == 0.0 && f.is_finite() => Some(f as i64),
            _ => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Scalar::Int(_) | Scalar::Uint(_) | Scalar::Float(_))
    }

    /// The scalar as a [`Number`], keeping integers exact.
    pub fn as_number(&self) -> Option<Number> {
        match *self {
            Scalar::Int(i) => Some(Number::Int(i)),
            Scalar::Uint(u) => Some(Number::Uint(u)),
            Scalar::Float(f) => Some(Number::Float(f)),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Str(s) => f.write_str(s),
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::Uint(u) => write!(f, "{}", u),
            Scalar::Float(v) => write!(f, "{}", v),
            Scalar::Bool(b) => write!(f, "{}", b),
        }
    }
}

// ─── Number ─────────────────────────────────────────────────────────────────

/// A numeric literal from a rule: a bound or an `enum` member.
///
/// Integral literals are kept as integers so values beyond 2^53 compare
/// exactly; only fractional literals fall back to `f64`.
#[derive(Clone, Copy, Debug)]
pub enum Number {
    Int(i64),
    Uint(u64),
    Float(f64),
}

impl Number {
    /// Parses a decimal literal. Non-finite floats are rejected.
    pub fn parse(text: &str) -> Option<Number> {
        let text = text.trim();
        if let Ok(i) = text.parse::<i64>() {
            return Some(Number::Int(i));
        }
        if let Ok(u) = text.parse::<u64>() {
            return Some(Number::Uint(u));
        }
        text.parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(Number::Float)
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Uint(u) => u as f64,
            Number::Float(f) => f,
        }
    }

    fn as_i128(self) -> Option<i128> {
        match self {
            Number::Int(i) => Some(i128::from(i)),
            Number::Uint(u) => Some(i128::from(u)),
            Number::Float(_) => None,
        }
    }
}

impl From<i64> for Number {
    fn from(i: i64) -> Self {
        Number::Int(i)
    }
}

impl From<u64> for Number {
    fn from(u: u64) -> Self {
        Number::Uint(u)
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Number::Float(f)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.as_i128(), other.as_i128()) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            Number::Uint(u) => write!(f, "{}", u),
            Number::Float(v) => write!(f, "{}", v),
        }
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Number::Int(i) => serializer.serialize_i64(i),
            Number::Uint(u) => serializer.serialize_u64(u),
            Number::Float(f) => serializer.serialize_f64(f),
        }
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NumberVisitor;

        impl Visitor<'_> for NumberVisitor {
            type Value = Number;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a finite number")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Number, E> {
                Ok(Number::Int(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Number, E> {
                Ok(i64::try_from(v).map_or(Number::Uint(v), Number::Int))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Number, E> {
                if v.is_finite() {
                    Ok(Number::Float(v))
                } else {
                    Err(E::custom(format!("non-finite number {}", v)))
                }
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Number, E> {
                Number::parse(v).ok_or_else(|| E::custom(format!("invalid number [{}]", v)))
            }
        }

        deserializer.deserialize_any(NumberVisitor)
    }
}

// ─── Field ──────────────────────────────────────────────────────────────────

/// One record field as seen by traversal.
pub struct Field<'a> {
    pub name: &'a str,
    pub value: &'a dyn Inspect,
    /// Inline constraint grammar.
    pub validate: Option<&'a str>,
    /// Set when the field is optional on the wire; used as `omitempty` when
    /// there is no inline grammar.
    pub optional: bool,
    /// Hidden fields are never validated and never join group checks.
    pub exported: bool,
}

impl<'a> Field<'a> {
    pub fn new(name: &'a str, value: &'a dyn Inspect) -> Self {
        Field {
            name,
            value,
            validate: None,
            optional: false,
            exported: true,
        }
    }

    pub fn hidden(name: &'a str, value: &'a dyn Inspect) -> Self {
        Field {
            exported: false,
            ..Field::new(name, value)
        }
    }

    pub fn validate(mut self, grammar: &'a str) -> Self {
        self.validate = Some(grammar);
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// The grammar traversal resolves this field with: the inline annotation
    /// if any, else `omitempty` for optional fields.
    pub fn inline_grammar(&self) -> Option<&'a str> {
        match self.validate {
            Some(g) if !g.is_empty() => Some(g),
            _ if self.optional => Some("omitempty"),
            _ => None,
        }
    }
}

// ─── Scalars ────────────────────────────────────────────────────────────────

impl Inspect for str {
    fn inspect(&self) -> Node<'_> {
        Node::Scalar(Scalar::Str(self))
    }
}

impl Inspect for String {
    fn inspect(&self) -> Node<'_> {
        Node::Scalar(Scalar::Str(self.as_str()))
    }
}

impl Inspect for bool {
    fn inspect(&self) -> Node<'_> {
        Node::Scalar(Scalar::Bool(*self))
    }
}

macro_rules! inspect_signed {
    ($($t:ty),*) => {$(
        impl Inspect for $t {
            fn inspect(&self) -> Node<'_> {
                Node::Scalar(Scalar::Int(*self as i64))
            }
        }
    )*};
}

macro_rules! inspect_unsigned {
    ($($t:ty),*) => {$(
        impl Inspect for $t {
            fn inspect(&self) -> Node<'_> {
                Node::Scalar(Scalar::Uint(*self as u64))
            }
        }
    )*};
}

inspect_signed!(i8, i16, i32, i64, isize);
inspect_unsigned!(u8, u16, u32, u64, usize);

impl Inspect for f32 {
    fn inspect(&self) -> Node<'_> {
        Node::Scalar(Scalar::Float(f64::from(*self)))
    }
}

impl Inspect for f64 {
    fn inspect(&self) -> Node<'_> {
        Node::Scalar(Scalar::Float(*self))
    }
}

// ─── References ─────────────────────────────────────────────────────────────

impl<T: Inspect + ?Sized> Inspect for &T {
    fn inspect(&self) -> Node<'_> {
        (**self).inspect()
    }
}

impl<T: Inspect + ?Sized> Inspect for Box<T> {
    fn inspect(&self) -> Node<'_> {
        (**self).inspect()
    }
}

impl<T: Inspect + ?Sized> Inspect for Rc<T> {
    fn inspect(&self) -> Node<'_> {
        (**self).inspect()
    }
}

impl<T: Inspect + ?Sized> Inspect for Arc<T> {
    fn inspect(&self) -> Node<'_> {
        (**self).inspect()
    }
}

impl<T: Inspect> Inspect for Option<T> {
    fn inspect(&self) -> Node<'_> {
        Node::Optional(self.as_ref().map(|v| v as &dyn Inspect))
    }
}

// ─── Sequences ──────────────────────────────────────────────────────────────

impl<T: Inspect> Inspect for [T] {
    fn inspect(&self) -> Node<'_> {
        Node::Sequence(self.iter().map(|v| v as &dyn Inspect).collect())
    }
}

impl<T: Inspect, const N: usize> Inspect for [T; N] {
    fn inspect(&self) -> Node<'_> {
        self.as_slice().inspect()
    }
}

impl<T: Inspect> Inspect for Vec<T> {
    fn inspect(&self) -> Node<'_> {
        self.as_slice().inspect()
    }
}

impl<T: Inspect> Inspect for VecDeque<T> {
    fn inspect(&self) -> Node<'_> {
        Node::Sequence(self.iter().map(|v| v as &dyn Inspect).collect())
    }
}

// ─── Keyed collections ──────────────────────────────────────────────────────

impl<K: fmt::Display, V: Inspect, S> Inspect for HashMap<K, V, S> {
    fn inspect(&self) -> Node<'_> {
        Node::Keyed(
            self.iter()
                .map(|(k, v)| (k.to_string(), v as &dyn Inspect))
                .collect(),
        )
    }
}

impl<K: fmt::Display, V: Inspect> Inspect for BTreeMap<K, V> {
    fn inspect(&self) -> Node<'_> {
        Node::Keyed(
            self.iter()
                .map(|(k, v)| (k.to_string(), v as &dyn Inspect))
                .collect(),
        )
    }
}

impl<K: fmt::Display, V: Inspect, S> Inspect for IndexMap<K, V, S> {
    fn inspect(&self) -> Node<'_> {
        Node::Keyed(
            self.iter()
                .map(|(k, v)| (k.to_string(), v as &dyn Inspect))
                .collect(),
        )
    }
}

// ─── serde_json::Value ──────────────────────────────────────────────────────

impl Inspect for Value {
    fn inspect(&self) -> Node<'_> {
        match self {
            Value::Null => Node::Optional(None),
            Value::Bool(b) => Node::Scalar(Scalar::Bool(*b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Node::Scalar(Scalar::Int(i))
                } else if let Some(u) = n.as_u64() {
                    Node::Scalar(Scalar::Uint(u))
                } else {
                    Node::Scalar(Scalar::Float(n.as_f64().unwrap_or(f64::NAN)))
                }
            }
            Value::String(s) => Node::Scalar(Scalar::Str(s)),
            Value::Array(items) => Node::Sequence(items.iter().map(|v| v as &dyn Inspect).collect()),
            Value::Object(map) => Node::Keyed(
                map.iter()
                    .map(|(k, v)| (k.clone(), v as &dyn Inspect))
                    .collect(),
            ),
        }
    }
}
