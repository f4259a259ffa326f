use fieldcheck::{FieldPath, Number, RulePattern, RuleTable};
use proptest::prelude::*;

fn arb_segments() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-Z][a-zA-Z0-9_]{0,5}|[0-9]{1,3}", 1..6)
}

fn build_path(segments: &[String]) -> FieldPath {
    segments
        .iter()
        .fold(FieldPath::root(), |path, seg| match seg.parse::<usize>() {
            Ok(i) if i.to_string() == *seg => path.index(i),
            _ => path.field(seg.clone()),
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn path_text_is_its_own_pattern(segments in arb_segments()) {
        let path = build_path(&segments);
        let text = path.to_string();
        prop_assert!(path == text.as_str());
        prop_assert!(RulePattern::parse(&text).matches(&path));
        // Without the leading separator too.
        prop_assert!(RulePattern::parse(&text[1..]).matches(&path));
    }

    #[test]
    fn wildcards_match_any_segment(
        segments in arb_segments(),
        mask in prop::collection::vec(any::<bool>(), 6),
    ) {
        let path = build_path(&segments);
        let text: String = segments
            .iter()
            .zip(&mask)
            .map(|(seg, wild)| format!(".{}", if *wild { "*" } else { seg.as_str() }))
            .collect();
        prop_assert!(RulePattern::parse(&text).matches(&path), "{} vs {}", text, path);
    }

    #[test]
    fn patterns_of_other_lengths_never_match(segments in arb_segments(), extra in 1usize..3) {
        let path = build_path(&segments);
        let longer = format!("{}{}", path, ".*".repeat(extra));
        prop_assert!(!RulePattern::parse(&longer).matches(&path));

        let shorter: String = std::iter::repeat(".*").take(segments.len() - 1).collect();
        prop_assert!(!RulePattern::parse(&shorter).matches(&path));
    }

    #[test]
    fn exact_entries_shadow_wildcards(segments in arb_segments()) {
        let path = build_path(&segments);
        let wildcard: String = std::iter::repeat(".*").take(segments.len()).collect();
        let table = RuleTable::new()
            .with(&wildcard, "min:1")
            .with(&path.to_string(), "min:2");
        let (rule, _) = table.resolve(&path, None);
        prop_assert_eq!(rule.min, Some(Number::Int(2)));
    }
}
