//! Recursive traversal and per-node rule evaluation.
//!
//! Every composite resolves a rule for each direct child, evaluates it (which
//! recurses into composite children), then checks the must-groups its
//! children declared. Violations are aggregated in pre-order; nothing stops
//! the walk early.

use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::atoms::AtomRegistry;
use crate::casing::NameCase;
use crate::error::{Diagnostic, ValidationError, ValidationReport, join_paths};
use crate::groups::GroupTracker;
use crate::log::{LogLevel, Logger, TracingLogger};
use crate::path::FieldPath;
use crate::render::{Catalog, MessageRenderer, ViolationKind};
use crate::rule::{Rule, RuleSource};
use crate::table::RuleTable;
use crate::value::{Inspect, Node, Number, Scalar};

pub const W_UNKNOWN_PREDICATE: &str = "W-003";
pub const W_INVALID_REGEX: &str = "W-004";

// ─── Validator ──────────────────────────────────────────────────────────────

/// Validates values against a rule table and an atom registry.
///
/// A validator is immutable once built and can be shared across threads;
/// each call works on its own copy of any per-call overlays.
#[derive(Clone)]
pub struct Validator {
    table: RuleTable,
    atoms: Arc<AtomRegistry>,
    name_case: NameCase,
    renderer: Arc<dyn MessageRenderer + Send + Sync>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl Default for Validator {
    fn default() -> Self {
        Validator::builder().build()
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("table", &self.table)
            .field("atoms", &self.atoms.len())
            .field("name_case", &self.name_case)
            .field("locale", &self.renderer.locale())
            .finish()
    }
}

impl Validator {
    pub fn new() -> Self {
        Validator::default()
    }

    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::default()
    }

    pub fn rules(&self) -> &RuleTable {
        &self.table
    }

    pub fn atoms(&self) -> &AtomRegistry {
        &self.atoms
    }

    pub fn name_case(&self) -> NameCase {
        self.name_case
    }

    pub fn locale(&self) -> &str {
        self.renderer.locale()
    }

    /// Walks `value` from the root and reports every violation.
    pub fn validate(&self, value: &dyn Inspect) -> ValidationReport {
        self.run(value, &self.table)
    }

    /// Like [`validate`](Self::validate) with `overlays` merged over the
    /// validator's table for this call only; later overlays win.
    pub fn validate_with(&self, value: &dyn Inspect, overlays: &[&RuleTable]) -> ValidationReport {
        if overlays.is_empty() {
            return self.run(value, &self.table);
        }
        let table = self.table.merged(overlays);
        self.run(value, &table)
    }

    fn run(&self, value: &dyn Inspect, table: &RuleTable) -> ValidationReport {
        let mut pass = Pass {
            validator: self,
            table,
            regexes: HashMap::new(),
            report: ValidationReport::default(),
        };
        pass.walk(value.inspect(), &FieldPath::root());
        pass.report
    }
}

// ─── ValidatorBuilder ───────────────────────────────────────────────────────

/// Assembles a [`Validator`]. Unset parts default to an empty rule table,
/// the built-in atoms, declared field names, English messages and the
/// `tracing` logger.
#[derive(Default)]
pub struct ValidatorBuilder {
    table: RuleTable,
    atoms: Option<Arc<AtomRegistry>>,
    name_case: NameCase,
    renderer: Option<Arc<dyn MessageRenderer + Send + Sync>>,
    logger: Option<Arc<dyn Logger + Send + Sync>>,
}

impl ValidatorBuilder {
    /// Replaces the rule table.
    pub fn rules(mut self, table: RuleTable) -> Self {
        self.table = table;
        self
    }

    /// Adds one entry to the rule table.
    pub fn rule(mut self, key: &str, source: impl Into<RuleSource>) -> Self {
        self.table.insert(key, source);
        self
    }

    pub fn atoms(mut self, registry: AtomRegistry) -> Self {
        self.atoms = Some(Arc::new(registry));
        self
    }

    /// Shares an already-built registry snapshot between validators.
    pub fn shared_atoms(mut self, registry: Arc<AtomRegistry>) -> Self {
        self.atoms = Some(registry);
        self
    }

    pub fn name_case(mut self, name_case: NameCase) -> Self {
        self.name_case = name_case;
        self
    }

    pub fn renderer<R>(mut self, renderer: R) -> Self
    where
        R: MessageRenderer + Send + Sync + 'static,
    {
        self.renderer = Some(Arc::new(renderer));
        self
    }

    pub fn logger<L>(mut self, logger: L) -> Self
    where
        L: Logger + Send + Sync + 'static,
    {
        self.logger = Some(Arc::new(logger));
        self
    }

    pub fn build(self) -> Validator {
        Validator {
            table: self.table,
            atoms: self
                .atoms
                .unwrap_or_else(|| Arc::new(AtomRegistry::builtin())),
            name_case: self.name_case,
            renderer: self.renderer.unwrap_or_else(|| Arc::new(Catalog::english())),
            logger: self.logger.unwrap_or_else(|| Arc::new(TracingLogger)),
        }
    }
}

// ─── One validation pass ────────────────────────────────────────────────────

struct Pass<'v> {
    validator: &'v Validator,
    table: &'v RuleTable,
    /// Compiled `regexp` clauses; `None` marks a pattern that failed to compile.
    regexes: HashMap<String, Option<Regex>>,
    report: ValidationReport,
}

/// Follows non-null optional references down to the first other node.
fn deref(mut node: Node<'_>) -> Node<'_> {
    loop {
        match node {
            Node::Optional(Some(inner)) => node = inner.inspect(),
            other => return other,
        }
    }
}

fn is_empty(node: &Node<'_>) -> bool {
    match node {
        Node::Optional(inner) => inner.is_none(),
        Node::Sequence(items) => items.is_empty(),
        Node::Keyed(entries) => entries.is_empty(),
        Node::Scalar(Scalar::Str(s)) => s.is_empty(),
        Node::Record(_) | Node::Scalar(_) => false,
    }
}

impl Pass<'_> {
    /// Visits the direct children of a composite, then its groups. Scalars
    /// and null references have no children.
    fn walk(&mut self, node: Node<'_>, path: &FieldPath) {
        let mut groups = GroupTracker::new();

        match deref(node) {
            Node::Record(fields) => {
                for field in fields.into_iter().filter(|f| f.exported) {
                    let child = path.field(self.validator.name_case.apply(field.name));
                    self.visit(field.value, &child, field.inline_grammar(), &mut groups);
                }
            }
            Node::Sequence(items) => {
                for (i, item) in items.into_iter().enumerate() {
                    self.visit(item, &path.index(i), None, &mut groups);
                }
            }
            Node::Keyed(entries) => {
                for (key, item) in entries {
                    self.visit(item, &path.key(key), None, &mut groups);
                }
            }
            Node::Optional(_) | Node::Scalar(_) => return,
        }

        for (name, members) in groups.unsatisfied() {
            let list = join_paths(members);
            self.violation(
                ViolationKind::Group,
                members.to_vec(),
                vec![list.clone(), list, name.to_string()],
            );
        }
    }

    fn visit(
        &mut self,
        value: &dyn Inspect,
        path: &FieldPath,
        inline: Option<&str>,
        groups: &mut GroupTracker,
    ) {
        let (rule, diagnostics) = self.table.resolve(path, inline);
        for diagnostic in diagnostics {
            self.warn(diagnostic);
        }
        let empty = self.evaluate(&rule, value, path);
        groups.record(path, &rule.must, empty);
    }

    /// Applies `rule` to one node and returns whether the node was empty.
    fn evaluate(&mut self, rule: &Rule, value: &dyn Inspect, path: &FieldPath) -> bool {
        let node = deref(value.inspect());
        let empty = is_empty(&node);

        if let Some(callback) = &rule.callback {
            if let Err(message) = callback.call(value) {
                self.violation(
                    ViolationKind::Callback,
                    vec![path.clone()],
                    vec![path.to_string(), message],
                );
            }
            return empty;
        }

        if empty {
            if !rule.omit_empty {
                self.violation(ViolationKind::Empty, vec![path.clone()], vec![path.to_string()]);
            }
            return true;
        }

        match node {
            Node::Scalar(Scalar::Str(s)) => self.check_string(rule, s, path),
            Node::Scalar(n) if n.is_numeric() => self.check_number(rule, n, path),
            Node::Scalar(_) | Node::Optional(_) => {}
            composite => self.walk(composite, path),
        }
        false
    }

    /// Formats decide alone when any of them resolves. Otherwise the first
    /// configured of pattern, enum and length bounds applies.
    fn check_string(&mut self, rule: &Rule, s: &str, path: &FieldPath) {
        if !rule.formats.is_empty() && self.check_formats(rule, &Scalar::Str(s), path).is_some() {
            return;
        }

        if let Some(pattern) = &rule.pattern {
            let matched = self.regex(pattern, path).map(|re| re.is_match(s));
            if matched == Some(false) {
                self.violation(
                    ViolationKind::Pattern,
                    vec![path.clone()],
                    vec![path.to_string(), pattern.clone()],
                );
            }
            return;
        }

        if !rule.enumeration.is_empty() {
            if !rule.enumeration.iter().any(|e| e == s) {
                self.violation(
                    ViolationKind::Enum,
                    vec![path.clone()],
                    vec![path.to_string(), rule.enumeration.join(","), s.to_string()],
                );
            }
            return;
        }

        let len = s.chars().count();
        let counted = Number::Uint(len as u64);
        if let Some(min) = rule.min
            && counted < min
        {
            self.violation(
                ViolationKind::MinLength,
                vec![path.clone()],
                vec![path.to_string(), min.to_string(), len.to_string()],
            );
        }
        if let Some(max) = rule.max
            && counted > max
        {
            self.violation(
                ViolationKind::MaxLength,
                vec![path.clone()],
                vec![path.to_string(), max.to_string(), len.to_string()],
            );
        }
    }

    /// Formats decide alone when any of them resolves. Otherwise `enum`
    /// applies if present, else `min` and `max` independently.
    fn check_number(&mut self, rule: &Rule, n: Scalar<'_>, path: &FieldPath) {
        if !rule.formats.is_empty() && self.check_formats(rule, &n, path).is_some() {
            return;
        }
        let Some(value) = n.as_number() else {
            return;
        };

        if !rule.enumeration.is_empty() {
            let allowed = rule
                .enumeration
                .iter()
                .filter_map(|e| Number::parse(e))
                .any(|e| e == value);
            if !allowed {
                self.violation(
                    ViolationKind::Enum,
                    vec![path.clone()],
                    vec![path.to_string(), rule.enumeration.join(","), n.to_string()],
                );
            }
            return;
        }

        if let Some(min) = rule.min
            && value < min
        {
            self.violation(
                ViolationKind::Minimum,
                vec![path.clone()],
                vec![path.to_string(), min.to_string(), n.to_string()],
            );
        }
        if let Some(max) = rule.max
            && value > max
        {
            self.violation(
                ViolationKind::Maximum,
                vec![path.clone()],
                vec![path.to_string(), max.to_string(), n.to_string()],
            );
        }
    }

    /// `Some(passed)` when at least one format name is registered, `None`
    /// (with a warning) when none is.
    fn check_formats(&mut self, rule: &Rule, value: &Scalar<'_>, path: &FieldPath) -> Option<bool> {
        match self.validator.atoms.check_any(&rule.formats, value) {
            Some(true) => Some(true),
            Some(false) => {
                self.violation(
                    ViolationKind::Format,
                    vec![path.clone()],
                    vec![path.to_string(), rule.formats.join(",")],
                );
                Some(false)
            }
            None => {
                self.warn(
                    Diagnostic::warning(
                        W_UNKNOWN_PREDICATE,
                        format!("no predicate registered for [{}]", rule.formats.join(",")),
                    )
                    .at(path),
                );
                None
            }
        }
    }

    fn regex(&mut self, pattern: &str, path: &FieldPath) -> Option<&Regex> {
        if !self.regexes.contains_key(pattern) {
            let compiled = match Regex::new(pattern) {
                Ok(re) => Some(re),
                Err(e) => {
                    self.warn(
                        Diagnostic::warning(
                            W_INVALID_REGEX,
                            format!("compile regexp [{}] failed: {}", pattern, e),
                        )
                        .at(path),
                    );
                    None
                }
            };
            self.regexes.insert(pattern.to_string(), compiled);
        }
        self.regexes.get(pattern).and_then(|re| re.as_ref())
    }

    fn violation(&mut self, kind: ViolationKind, fields: Vec<FieldPath>, args: Vec<String>) {
        let message = self.validator.renderer.render(kind, &args);
        self.report.errors.push(ValidationError {
            kind,
            fields,
            message,
            args,
        });
    }

    fn warn(&mut self, diagnostic: Diagnostic) {
        self.validator
            .logger
            .log(LogLevel::Warn, &diagnostic.to_string());
        self.report.warnings.push(diagnostic);
    }
}
