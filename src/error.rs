use serde::{Deserialize, Serialize};
use std::fmt;

use crate::path::FieldPath;
use crate::render::ViolationKind;

/// Diagnostic severity level. Configuration defects never fail a
/// validation, so every diagnostic is a warning.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticSeverity {
    Warning,
}

/// A structured diagnostic produced while parsing rules or evaluating them.
///
/// Diagnostics describe configuration defects (an unknown clause, a predicate
/// name nobody registered, a regular expression that does not compile). They
/// never fail a validation; the offending check is skipped instead.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: DiagnosticSeverity,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub message: String,
}

impl Diagnostic {
    pub(crate) fn warning(code: &str, message: String) -> Self {
        Diagnostic {
            severity: DiagnosticSeverity::Warning,
            code: code.to_string(),
            path: None,
            message,
        }
    }

    pub(crate) fn at(mut self, path: &FieldPath) -> Self {
        self.path = Some(path.to_string());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{} at `{}`: {}", self.code, path, self.message),
            None => write!(f, "{}: {}", self.code, self.message),
        }
    }
}

/// One value violation: the offending paths and the rendered message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationError {
    pub kind: ViolationKind,
    /// Never empty. Group violations address every member of the group.
    pub fields: Vec<FieldPath>,
    pub message: String,
    /// Positional template arguments the message was rendered from.
    pub args: Vec<String>,
}

impl ValidationError {
    /// Paths joined by `,`, as used in messages and `Display`.
    pub fn field_list(&self) -> String {
        join_paths(&self.fields)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` {}", self.field_list(), self.message)
    }
}

impl std::error::Error for ValidationError {}

pub(crate) fn join_paths(paths: &[FieldPath]) -> String {
    paths
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Result of a validation pass: every violation in traversal order plus the
/// configuration warnings met on the way.
#[derive(Clone, Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<Diagnostic>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// `Ok` with the warnings when nothing was violated, the report otherwise.
    pub fn into_result(self) -> Result<Vec<Diagnostic>, ValidationReport> {
        if self.errors.is_empty() {
            Ok(self.warnings)
        } else {
            Err(self)
        }
    }

    /// Violations that address `path` (alone or as part of a group).
    pub fn errors_at<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a ValidationError> {
        self.errors
            .iter()
            .filter(move |e| e.fields.iter().any(|f| f.to_string() == path))
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}

/// Produced when a configuration document (rule table, validator settings,
/// message catalog) cannot be loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigError {
    pub message: String,
}

impl ConfigError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        ConfigError {
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ConfigError {}
