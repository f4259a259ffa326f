use fieldcheck::{Callback, FieldPath, Number, Rule, RulePattern, RuleSource, RuleTable};

fn path(text: &str) -> FieldPath {
    FieldPath::parse(text)
}

// ─── Patterns ───────────────────────────────────────────────────────────────

#[test]
fn pattern_leading_separator_is_optional() {
    assert_eq!(RulePattern::parse("a.b"), RulePattern::parse(".a.b"));
    assert_eq!(RulePattern::parse("a.b").to_string(), ".a.b");
    assert!(RulePattern::parse("").is_empty());
}

#[test]
fn wildcard_matches_exactly_one_segment() {
    let pattern = RulePattern::parse(".*.B.BB");
    assert!(pattern.has_wildcard());
    assert!(pattern.matches(&path(".x.B.BB")));
    assert!(pattern.matches(&FieldPath::root().index(3).field("B").field("BB")));
    assert!(!pattern.matches(&path(".B.BB")));
    assert!(!pattern.matches(&path(".x.y.B.BB")));
    assert!(!pattern.matches(&path(".x.B.CC")));
}

#[test]
fn index_and_key_segments_match_their_text() {
    let pattern = RulePattern::parse(".items.0.name");
    assert!(pattern.matches(&FieldPath::root().field("items").index(0).field("name")));
    let pattern = RulePattern::parse(".labels.env");
    assert!(pattern.matches(&FieldPath::root().field("labels").key("env")));
}

#[test]
fn path_display_prefixes_every_segment() {
    assert_eq!(FieldPath::root().to_string(), "");
    assert!(FieldPath::root().is_root());
    let p = FieldPath::root().field("A").index(2).key("k");
    assert!(!p.is_root());
    assert_eq!(p.to_string(), ".A.2.k");
    assert_eq!(p, ".A.2.k");
    assert_ne!(p, ".A.2");
    assert_eq!(p.len(), 3);
}

// ─── Lookup ─────────────────────────────────────────────────────────────────

#[test]
fn exact_entry_wins_over_wildcards() {
    let table = RuleTable::new()
        .with(".*.name", "min:1")
        .with(".user.name", "min:5");
    let (rule, _) = table.resolve(&path(".user.name"), None);
    assert_eq!(rule.min, Some(Number::Int(5)));
    let (rule, _) = table.resolve(&path(".team.name"), None);
    assert_eq!(rule.min, Some(Number::Int(1)));
}

#[test]
fn exact_entries_need_the_same_segment_count() {
    let table = RuleTable::new().with(".M.a.b", "min:3").with(".M.*", "min:1");
    let dotted_key = FieldPath::root().field("M").key("a.b");
    assert_eq!(dotted_key.to_string(), ".M.a.b");
    assert_eq!(table.resolve(&dotted_key, None).0.min, Some(Number::Int(1)));
    assert_eq!(table.resolve(&path(".M.a.b"), None).0.min, Some(Number::Int(3)));
}

#[test]
fn first_matching_wildcard_in_insertion_order_wins() {
    let table = RuleTable::new()
        .with(".*.name", "min:1")
        .with(".team.*", "min:2");
    let (rule, _) = table.resolve(&path(".team.name"), None);
    assert_eq!(rule.min, Some(Number::Int(1)));
}

#[test]
fn keys_are_normalized_on_insert() {
    let mut table = RuleTable::new();
    table.insert("a.b", "min:1");
    table.insert(".a.b", "min:2");
    assert_eq!(table.len(), 1);
    assert_eq!(table.get("a.b"), Some(&RuleSource::Grammar("min:2".into())));
    assert_eq!(table.keys().collect::<Vec<_>>(), vec![".a.b"]);
}

#[test]
fn unmatched_path_resolves_to_default_rule() {
    let table = RuleTable::new().with(".a", "min:1");
    let (rule, diagnostics) = table.resolve(&path(".b"), None);
    assert_eq!(rule, Rule::default());
    assert!(diagnostics.is_empty());
}

// ─── Inline merge ───────────────────────────────────────────────────────────

#[test]
fn inline_grammar_overrides_table_keys() {
    let table = RuleTable::new().with(".age", "min:1;max:5;must:g");
    let (rule, _) = table.resolve(&path(".age"), Some("max:10"));
    assert_eq!(rule.min, Some(Number::Int(1)));
    assert_eq!(rule.max, Some(Number::Int(10)));
    assert_eq!(rule.must, vec!["g"]);
}

#[test]
fn inline_grammar_applies_on_top_of_structured_rules() {
    let table = RuleTable::new().with(".code", Rule::default().is(&["countryCodeAlpha2"]));
    let (rule, _) = table.resolve(&path(".code"), Some("omitempty"));
    assert!(rule.omit_empty);
    assert_eq!(rule.formats, vec!["countryCodeAlpha2"]);
}

#[test]
fn empty_inline_grammar_is_ignored() {
    let table = RuleTable::new().with(".a", "min:3");
    let (rule, _) = table.resolve(&path(".a"), Some(""));
    assert_eq!(rule.min, Some(Number::Int(3)));
}

#[test]
fn callback_entries_materialize_as_callback_rules() {
    let table = RuleTable::new().with(".x", Callback::new(|_| Err("hello world".into())));
    let (rule, _) = table.resolve(&path(".x"), None);
    assert!(rule.callback.is_some());
    assert!(rule.formats.is_empty());
}

#[test]
fn diagnostics_carry_the_resolved_path() {
    let table = RuleTable::new().with(".a", "bogus");
    let (_, diagnostics) = table.resolve(&path(".a"), Some("min:x"));
    let codes: Vec<&str> = diagnostics.iter().map(|d| d.code.as_str()).collect();
    assert_eq!(codes, vec!["W-001", "W-002"]);
    assert!(diagnostics.iter().all(|d| d.path.as_deref() == Some(".a")));
}

// ─── Overlays ───────────────────────────────────────────────────────────────

#[test]
fn later_overlays_win() {
    let base = RuleTable::new().with(".a", "min:1").with(".b", "min:1");
    let first = RuleTable::new().with(".a", "min:2");
    let second = RuleTable::new().with("a", "min:3");

    let merged = base.merged(&[&first, &second]);
    assert_eq!(merged.resolve(&path(".a"), None).0.min, Some(Number::Int(3)));
    assert_eq!(merged.resolve(&path(".b"), None).0.min, Some(Number::Int(1)));
    // The base table is untouched.
    assert_eq!(base.resolve(&path(".a"), None).0.min, Some(Number::Int(1)));
}

// ─── Loading ────────────────────────────────────────────────────────────────

#[test]
fn table_from_yaml_accepts_grammar_and_structured_entries() {
    let yaml = r#"
.name: "regexp:^[a-z]+$"
".*.code":
  is: [countryCodeAlpha2]
  omitempty: true
.level:
  enum: [1, 2, 3]
"#;
    let table = RuleTable::from_yaml(yaml).unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(
        table.get(".name"),
        Some(&RuleSource::Grammar("regexp:^[a-z]+$".into()))
    );

    let (code, _) = table.resolve(&path(".user.code"), None);
    assert!(code.omit_empty);
    assert_eq!(code.formats, vec!["countryCodeAlpha2"]);

    let (level, _) = table.resolve(&path(".level"), None);
    assert_eq!(level.enumeration, vec!["1", "2", "3"]);
}

#[test]
fn table_from_json_preserves_declaration_order() {
    let json = r#"{"z": "min:1", "a": {"max": 2}, "*.m": "omitempty"}"#;
    let table = RuleTable::from_json(json).unwrap();
    assert_eq!(table.keys().collect::<Vec<_>>(), vec![".z", ".a", ".*.m"]);
}

#[test]
fn unknown_structured_keys_are_rejected() {
    let err = RuleTable::from_json(r#"{"a": {"minimum": 2}}"#).unwrap_err();
    assert!(err.message.contains("invalid rule table"), "{}", err);
}
