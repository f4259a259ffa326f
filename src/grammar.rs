//! The compact constraint grammar attached to fields and stored in rule
//! tables.
//!
//! ```text
//! clause(;clause)*
//! clause := "omitempty" | key ":" value
//! key    := must | regexp | enum | min | max | range | is
//! ```
//!
//! Only the first `:` of a clause separates key and value, so `regexp` values
//! keep any further colons. Clauses are split on `;` before anything else,
//! which means a pattern cannot contain `;`.
//!
//! Parsing never fails. Clauses that cannot be understood are reported as
//! warning diagnostics and skipped.

use crate::error::Diagnostic;
use crate::rule::Rule;
use crate::value::Number;

pub const CLAUSE_SEPARATOR: char = ';';
pub const LIST_SEPARATOR: char = ',';
pub const OMIT_EMPTY: &str = "omitempty";

pub const W_UNRECOGNIZED_CLAUSE: &str = "W-001";
pub const W_INVALID_NUMBER: &str = "W-002";

/// Parses `input` into a fresh [`Rule`].
pub fn parse(input: &str) -> (Rule, Vec<Diagnostic>) {
    let mut rule = Rule::default();
    let diagnostics = parse_into(input, &mut rule);
    (rule, diagnostics)
}

/// Parses `input` on top of an existing rule.
///
/// Keys present in `input` overwrite the rule's values; list-valued keys
/// replace the whole list. Keys absent from `input` are left untouched, which
/// is how inline field grammar augments a rule found in a table.
pub fn parse_into(input: &str, rule: &mut Rule) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for clause in input.split(CLAUSE_SEPARATOR) {
        let clause = clause.trim_start();
        if clause.is_empty() {
            continue;
        }
        if clause.trim_end() == OMIT_EMPTY {
            rule.omit_empty = true;
            continue;
        }

        let Some((key, value)) = clause.split_once(':') else {
            diagnostics.push(unrecognized(clause));
            continue;
        };

        match key.trim() {
            "must" => rule.must = split_list(value),
            "regexp" => rule.pattern = Some(value.to_string()),
            "enum" => rule.enumeration = split_list(value),
            "is" => {
                // `is:` with nothing after it leaves any inherited formats alone
                if !value.trim().is_empty() {
                    rule.formats = split_list(value);
                }
            }
            "min" => match parse_number(value) {
                Some(n) => rule.min = Some(n),
                None => diagnostics.push(invalid_number(clause)),
            },
            "max" => match parse_number(value) {
                Some(n) => rule.max = Some(n),
                None => diagnostics.push(invalid_number(clause)),
            },
            "range" => {
                let bounds: Vec<&str> = value.split(LIST_SEPARATOR).collect();
                match bounds.as_slice() {
                    [upper] => match parse_number(upper) {
                        Some(hi) => rule.max = Some(hi),
                        None => diagnostics.push(invalid_number(clause)),
                    },
                    [lower, upper] => match (parse_number(lower), parse_number(upper)) {
                        (Some(lo), Some(hi)) => {
                            rule.min = Some(lo);
                            rule.max = Some(hi);
                        }
                        _ => diagnostics.push(invalid_number(clause)),
                    },
                    _ => diagnostics.push(invalid_number(clause)),
                }
            }
            _ => diagnostics.push(unrecognized(clause)),
        }
    }

    diagnostics
}

/// Renders the canonical grammar text for `rule`.
///
/// Clause order is fixed (`omitempty`, `must`, `is`, `enum`, `min`, `max`,
/// `regexp`) and `regexp` comes last. Parsing the output yields an equal
/// rule. Callbacks have no textual form and are dropped.
pub fn to_grammar(rule: &Rule) -> String {
    let mut clauses: Vec<String> = Vec::new();

    if rule.omit_empty {
        clauses.push(OMIT_EMPTY.to_string());
    }
    if !rule.must.is_empty() {
        clauses.push(format!("must:{}", rule.must.join(",")));
    }
    if !rule.formats.is_empty() {
        clauses.push(format!("is:{}", rule.formats.join(",")));
    }
    if !rule.enumeration.is_empty() {
        clauses.push(format!("enum:{}", rule.enumeration.join(",")));
    }
    if let Some(min) = rule.min {
        clauses.push(format!("min:{}", min));
    }
    if let Some(max) = rule.max {
        clauses.push(format!("max:{}", max));
    }
    if let Some(pattern) = &rule.pattern {
        clauses.push(format!("regexp:{}", pattern));
    }

    clauses.join(";")
}

/// Splits a comma-separated list, trimming items, dropping empty ones and
/// keeping only the first occurrence of each.
fn split_list(value: &str) -> Vec<String> {
    let mut items: Vec<String> = Vec::new();
    for item in value.split(LIST_SEPARATOR) {
        let item = item.trim();
        if !item.is_empty() && !items.iter().any(|i| i == item) {
            items.push(item.to_string());
        }
    }
    items
}

fn parse_number(text: &str) -> Option<Number> {
    Number::parse(text)
}

fn unrecognized(clause: &str) -> Diagnostic {
    Diagnostic::warning(
        W_UNRECOGNIZED_CLAUSE,
        format!("can't recognize rule clause [{}]", clause),
    )
}

fn invalid_number(clause: &str) -> Diagnostic {
    Diagnostic::warning(
        W_INVALID_NUMBER,
        format!("invalid numeric literal in rule clause [{}]", clause),
    )
}
