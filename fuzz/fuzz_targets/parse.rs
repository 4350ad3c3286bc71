#![no_main]
use libfuzzer_sys::fuzz_target;
use nameparts::ParsedName;

fuzz_target!(|data: &str| {
    ParsedName::parse(data);
});
