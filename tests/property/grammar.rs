use fieldcheck::{Number, Rule};
use fieldcheck::grammar::{parse, to_grammar};
use proptest::prelude::*;

fn arb_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[a-z][a-zA-Z0-9_]{0,6}", 0..4)
        .prop_map(|set| set.into_iter().collect())
}

fn arb_bound() -> impl Strategy<Value = Option<Number>> {
    prop_oneof![
        Just(None),
        any::<i64>().prop_map(|n| Some(Number::Int(n))),
        (i64::MAX as u64 + 1..=u64::MAX).prop_map(|n| Some(Number::Uint(n))),
        (-1.0e6..1.0e6f64).prop_map(|f| Some(Number::Float(f))),
    ]
}

/// Rules that have a textual form: no callback, no `;` inside the pattern.
fn arb_rule() -> impl Strategy<Value = Rule> {
    (
        any::<bool>(),
        arb_names(),
        arb_names(),
        arb_names(),
        arb_bound(),
        arb_bound(),
        prop::option::of("[a-z0-9^$.*+?()\\[\\]:|-]{0,16}"),
    )
        .prop_map(|(omit_empty, must, formats, enumeration, min, max, pattern)| Rule {
            formats,
            must,
            enumeration,
            min,
            max,
            pattern,
            omit_empty,
            callback: None,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn canonical_text_round_trips(rule in arb_rule()) {
        let text = to_grammar(&rule);
        let (parsed, diagnostics) = parse(&text);
        prop_assert!(diagnostics.is_empty(), "{:?} -> {:?}", text, diagnostics);
        prop_assert_eq!(parsed, rule, "via {:?}", text);
    }

    #[test]
    fn parse_never_panics(input in any::<String>()) {
        let (_, diagnostics) = parse(&input);
        for d in &diagnostics {
            prop_assert!(d.code == "W-001" || d.code == "W-002", "{:?}", d);
        }
    }

    #[test]
    fn parsing_the_canonical_form_is_idempotent(input in "[a-z:;, ._0-9^$-]{0,40}") {
        let (first, _) = parse(&input);
        let (second, diagnostics) = parse(&to_grammar(&first));
        prop_assert!(diagnostics.is_empty());
        prop_assert_eq!(second, first);
    }

    #[test]
    fn clause_order_does_not_matter(rule in arb_rule(), seed in any::<u64>()) {
        let text = to_grammar(&rule);
        let mut clauses: Vec<&str> = text.split(';').filter(|c| !c.is_empty()).collect();
        // Deterministic shuffle driven by the seed.
        let len = clauses.len();
        if len > 1 {
            let mut s = seed;
            for i in (1..len).rev() {
                s = s.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                clauses.swap(i, (s >> 33) as usize % (i + 1));
            }
        }
        let (parsed, _) = parse(&clauses.join(";"));
        prop_assert_eq!(parsed, rule);
    }
}
