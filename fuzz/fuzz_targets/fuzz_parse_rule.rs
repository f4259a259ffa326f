#![no_main]

use fieldcheck::grammar::{parse, to_grammar};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    let (rule, _) = parse(input);

    // The canonical form of whatever was parsed must parse back cleanly.
    let (reparsed, diagnostics) = parse(&to_grammar(&rule));
    assert!(diagnostics.is_empty(), "canonical form produced warnings: {:?}", diagnostics);
    assert_eq!(reparsed, rule);
});
