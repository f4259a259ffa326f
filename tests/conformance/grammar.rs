use fieldcheck::grammar;
use fieldcheck::{DiagnosticSeverity, Number, Rule};
use serde::Deserialize;

use super::common::load_suite;

#[derive(Debug, Deserialize)]
struct GrammarCase {
    name: String,
    input: String,
    expected: Rule,
    #[serde(default)]
    warnings: Vec<String>,
}

// ─── parse ──────────────────────────────────────────────────────────────────

#[test]
fn grammar_suite() {
    let cases: Vec<GrammarCase> = load_suite("grammar.yaml");
    assert!(!cases.is_empty());

    let mut failures = Vec::new();
    for case in &cases {
        let (rule, diagnostics) = grammar::parse(&case.input);
        let codes: Vec<String> = diagnostics.iter().map(|d| d.code.clone()).collect();

        if rule != case.expected {
            failures.push(format!(
                "{}: expected {:?}, got {:?}",
                case.name, case.expected, rule
            ));
        }
        if codes != case.warnings {
            failures.push(format!(
                "{}: expected warnings {:?}, got {:?}",
                case.name, case.warnings, codes
            ));
        }
    }

    assert!(failures.is_empty(), "grammar failures:\n{}", failures.join("\n"));
}

#[test]
fn diagnostics_are_warnings_without_a_path() {
    let (_, diagnostics) = grammar::parse("nope:1");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, DiagnosticSeverity::Warning);
    assert!(diagnostics[0].path.is_none());
    assert!(diagnostics[0].message.contains("nope:1"));
}

#[test]
fn unrecognized_clause_does_not_discard_the_rest() {
    let (rule, diagnostics) = grammar::parse("min:1;bogus;max:4;enum:x");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(rule.min, Some(Number::Int(1)));
    assert_eq!(rule.max, Some(Number::Int(4)));
    assert_eq!(rule.enumeration, vec!["x"]);
}

// ─── parse_into ─────────────────────────────────────────────────────────────

#[test]
fn parse_into_overrides_only_named_keys() {
    let (mut rule, _) = grammar::parse("min:1;max:5;is:email;must:a,b");
    let diagnostics = grammar::parse_into("max:10;is:", &mut rule);

    assert!(diagnostics.is_empty());
    assert_eq!(rule.min, Some(Number::Int(1)));
    assert_eq!(rule.max, Some(Number::Int(10)));
    assert_eq!(rule.formats, vec!["email"]);
    assert_eq!(rule.must, vec!["a", "b"]);
}

#[test]
fn parse_into_replaces_lists() {
    let (mut rule, _) = grammar::parse("enum:a,b;must:g1");
    grammar::parse_into("enum:c;must:g2,g3", &mut rule);
    assert_eq!(rule.enumeration, vec!["c"]);
    assert_eq!(rule.must, vec!["g2", "g3"]);
}

#[test]
fn parse_into_keeps_omitempty_once_set() {
    let (mut rule, _) = grammar::parse("omitempty");
    grammar::parse_into("min:2", &mut rule);
    assert!(rule.omit_empty);
}

// ─── to_grammar ─────────────────────────────────────────────────────────────

#[test]
fn canonical_form_has_fixed_clause_order() {
    let (rule, _) = grammar::parse("regexp:^ab$;max:3;omitempty;enum:x,y;min:1;must:g;is:alpha");
    assert_eq!(
        rule.to_grammar(),
        "omitempty;must:g;is:alpha;enum:x,y;min:1;max:3;regexp:^ab$"
    );
}

#[test]
fn canonical_form_parses_back_to_the_same_rule() {
    let cases: Vec<GrammarCase> = load_suite("grammar.yaml");
    for case in &cases {
        let text = case.expected.to_grammar();
        let (reparsed, diagnostics) = grammar::parse(&text);
        assert!(diagnostics.is_empty(), "{}: {:?}", case.name, diagnostics);
        assert_eq!(reparsed, case.expected, "{}: via {:?}", case.name, text);
    }
}

#[test]
fn builders_match_parsed_rules() {
    let built = Rule::default()
        .omit_empty()
        .must(&["id"])
        .is(&["email", "phone"])
        .range(Some(Number::Int(1)), Some(Number::Int(64)));
    let (parsed, _) = Rule::parse("omitempty;must:id;is:email,phone;range:1,64");
    assert_eq!(built, parsed);
}

#[test]
fn integral_bounds_stay_exact() {
    let (rule, diagnostics) = grammar::parse("min:-9223372036854775808;max:18446744073709551614");
    assert!(diagnostics.is_empty());
    assert_eq!(rule.min, Some(Number::Int(i64::MIN)));
    assert_eq!(rule.max, Some(Number::Uint(u64::MAX - 1)));
    assert_ne!(rule.max, Some(Number::Uint(u64::MAX)));
    assert_eq!(rule.to_grammar(), "min:-9223372036854775808;max:18446744073709551614");
}

#[test]
fn fractional_bounds_render_without_trailing_zeroes() {
    let (rule, _) = grammar::parse("min:10.0;max:2.5");
    assert_eq!(rule.min, Some(Number::Int(10)));
    assert_eq!(rule.to_grammar(), "min:10;max:2.5");
}
