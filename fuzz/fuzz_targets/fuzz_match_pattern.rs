#![no_main]

use arbitrary::Arbitrary;
use fieldcheck::{FieldPath, RulePattern, RuleTable};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    patterns: Vec<String>,
    path: String,
}

fuzz_target!(|input: Input| {
    let path = FieldPath::parse(&input.path);

    let mut table = RuleTable::new();
    for pattern in &input.patterns {
        let parsed = RulePattern::parse(pattern);
        if parsed.matches(&path) {
            assert_eq!(parsed.len(), path.len());
        }
        table.insert(pattern, "omitempty");
    }

    let _ = table.resolve(&path, Some(&input.path));
});
