//! Field paths and the wildcard patterns that address them.
//!
//! A path is rendered as its segments each prefixed by `.`, so the root is the
//! empty string and a field below it is `.name`. Patterns use the same text
//! form with `*` standing for exactly one arbitrary segment.

use std::borrow::Cow;
use std::fmt;

pub const SEPARATOR: char = '.';
pub const WILDCARD: &str = "*";

// ─── FieldPath ──────────────────────────────────────────────────────────────

/// One step from a composite to one of its children.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    /// A record field, already passed through the configured name casing.
    Field(String),
    /// A sequence position.
    Index(usize),
    /// A keyed-collection key in its string form. The key is one segment
    /// even when its text contains `.`; such entries are only reachable from
    /// rule tables through a `*` in that position.
    Key(String),
}

impl Segment {
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Segment::Field(name) | Segment::Key(name) => Cow::Borrowed(name),
            Segment::Index(i) => Cow::Owned(i.to_string()),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

/// Location of a node inside the validated value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<Segment>,
}

impl FieldPath {
    pub fn root() -> Self {
        FieldPath::default()
    }

    /// Builds a path from text; every segment becomes a field segment.
    pub fn parse(text: &str) -> Self {
        FieldPath {
            segments: split_segments(text)
                .map(|s| Segment::Field(s.to_string()))
                .collect(),
        }
    }

    pub fn child(&self, segment: Segment) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend(self.segments.iter().cloned());
        segments.push(segment);
        FieldPath { segments }
    }

    pub fn field(&self, name: impl Into<String>) -> Self {
        self.child(Segment::Field(name.into()))
    }

    pub fn index(&self, index: usize) -> Self {
        self.child(Segment::Index(index))
    }

    pub fn key(&self, key: impl Into<String>) -> Self {
        self.child(Segment::Key(key.into()))
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for seg in &self.segments {
            write!(f, "{}{}", SEPARATOR, seg)?;
        }
        Ok(())
    }
}

impl PartialEq<str> for FieldPath {
    fn eq(&self, other: &str) -> bool {
        // Compare segment-wise against the text form without allocating.
        let mut rest = other;
        for seg in &self.segments {
            let Some(after) = rest.strip_prefix(SEPARATOR) else {
                return false;
            };
            let text = seg.as_text();
            let Some(after) = after.strip_prefix(text.as_ref()) else {
                return false;
            };
            rest = after;
        }
        rest.is_empty()
    }
}

impl PartialEq<&str> for FieldPath {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

// ─── RulePattern ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PatternSegment {
    Any,
    Literal(String),
}

/// A path whose segments may be `*`. Matching is positional: a pattern only
/// matches paths with exactly as many segments.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RulePattern {
    segments: Vec<PatternSegment>,
}

impl RulePattern {
    /// Parses the text form. The leading separator is optional, so `a.b`
    /// and `.a.b` are the same pattern.
    pub fn parse(text: &str) -> Self {
        RulePattern {
            segments: split_segments(text)
                .map(|s| {
                    if s == WILDCARD {
                        PatternSegment::Any
                    } else {
                        PatternSegment::Literal(s.to_string())
                    }
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn has_wildcard(&self) -> bool {
        self.segments.iter().any(|s| *s == PatternSegment::Any)
    }

    pub fn matches(&self, path: &FieldPath) -> bool {
        self.segments.len() == path.len()
            && self
                .segments
                .iter()
                .zip(path.segments())
                .all(|(pat, seg)| match pat {
                    PatternSegment::Any => true,
                    PatternSegment::Literal(lit) => *lit == seg.as_text(),
                })
    }
}

impl fmt::Display for RulePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for seg in &self.segments {
            match seg {
                PatternSegment::Any => write!(f, "{}{}", SEPARATOR, WILDCARD)?,
                PatternSegment::Literal(lit) => write!(f, "{}{}", SEPARATOR, lit)?,
            }
        }
        Ok(())
    }
}

fn split_segments(text: &str) -> impl Iterator<Item = &str> {
    let body = text.strip_prefix(SEPARATOR).unwrap_or(text);
    // The root has no segments at all rather than one empty segment.
    let body = if body.is_empty() { None } else { Some(body) };
    body.into_iter().flat_map(|b| b.split(SEPARATOR))
}
