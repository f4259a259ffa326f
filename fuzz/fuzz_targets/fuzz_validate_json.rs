#![no_main]

use fieldcheck::{NullLogger, RuleTable, Validator};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // The first byte splits the input into a rule table and a JSON document.
    let split = data[0] as usize % data.len();
    let (rules_bytes, doc_bytes) = data[1..].split_at(split.min(data.len() - 1));

    let Ok(doc) = serde_json::from_slice::<serde_json::Value>(doc_bytes) else {
        return;
    };
    let table = std::str::from_utf8(rules_bytes)
        .ok()
        .and_then(|text| RuleTable::from_json(text).ok())
        .unwrap_or_default();

    let validator = Validator::builder().rules(table).logger(NullLogger).build();
    let report = validator.validate(&doc);
    for err in &report.errors {
        assert!(!err.fields.is_empty());
    }
});
