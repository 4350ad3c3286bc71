#![no_main]
use libfuzzer_sys::fuzz_target;
use nameparts::ParsedName;

// Re-parsing a rendered parse must not panic, and parsable output must
// stay parsable.
fuzz_target!(|data: &str| {
    let name = ParsedName::parse(data);
    if !name.is_unparsable() {
        let rendered = name.to_string();
        ParsedName::parse(&rendered);
    }
});
