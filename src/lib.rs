//! Structural validation for nested runtime values.
//!
//! A value describes its shape through [`Inspect`]; constraints come from two
//! places, the inline grammar attached to record fields and a path-addressed
//! [`RuleTable`]. The engine walks the whole value and reports every
//! violation with the path it occurred at:
//!
//! ```text
//! value ──inspect──▶ Node tree ──walk──▶ resolve(path) ──▶ evaluate ──▶ ValidationReport
//!                                          ▲
//!                          inline grammar ─┴─ RuleTable (+ per-call overlays)
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use fieldcheck::{Field, Inspect, Node, RuleTable, Validator};
//!
//! struct Signup {
//!     name: String,
//!     age: u32,
//!     country: String,
//! }
//!
//! impl Inspect for Signup {
//!     fn inspect(&self) -> Node<'_> {
//!         Node::Record(vec![
//!             Field::new("Name", &self.name).validate("regexp:^[a-z]+$"),
//!             Field::new("Age", &self.age).validate("min:18"),
//!             Field::new("Country", &self.country),
//!         ])
//!     }
//! }
//!
//! let validator = Validator::builder()
//!     .rule(".Country", "is:countryCodeAlpha2")
//!     .build();
//!
//! let report = validator.validate(&Signup {
//!     name: "bob".into(),
//!     age: 16,
//!     country: "XX".into(),
//! });
//!
//! assert_eq!(report.errors.len(), 2);
//! assert_eq!(
//!     report.errors[0].to_string(),
//!     "`.Age` should be greater than equal [18], current value is [16]"
//! );
//! assert_eq!(report.errors[1].to_string(), "`.Country` is not one of the [countryCodeAlpha2]");
//!
//! // Per-call overlays win over the validator's own table.
//! let relaxed = RuleTable::new().with(".Country", "omitempty");
//! let report = validator.validate_with(
//!     &Signup { name: "bob".into(), age: 30, country: "XX".into() },
//!     &[&relaxed],
//! );
//! assert!(report.is_valid());
//! ```

pub mod atoms;
pub mod casing;
pub mod config;
pub mod engine;
pub mod error;
pub mod grammar;
pub mod groups;
pub mod log;
pub mod path;
pub mod render;
pub mod rule;
pub mod table;
pub mod value;

pub use atoms::{AtomRegistry, Predicate};
pub use casing::NameCase;
pub use config::ValidatorConfig;
pub use engine::{Validator, ValidatorBuilder};
pub use error::*;
pub use log::{LogLevel, Logger, NullLogger, TracingLogger};
pub use path::{FieldPath, RulePattern, Segment};
pub use render::{Catalog, MessageRenderer, ViolationKind};
pub use rule::{Callback, Rule, RuleSource};
pub use table::RuleTable;
pub use value::{Field, Inspect, Node, Number, Scalar};

/// Validates `value` with the inline grammar of its fields only, using the
/// built-in atoms and English messages.
///
/// # Example
///
/// ```rust
/// let ports = vec![80u16, 0, 443];
/// assert!(fieldcheck::validate(&ports).is_valid());
///
/// let names = vec!["ok".to_string(), String::new()];
/// let report = fieldcheck::validate(&names);
/// assert_eq!(report.to_string(), "`.1` not allowed empty");
/// ```
pub fn validate(value: &dyn Inspect) -> ValidationReport {
    Validator::new().validate(value)
}
