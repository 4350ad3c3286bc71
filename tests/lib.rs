use nameparts::ParsedName;
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;

#[test]
fn parsing() {
    let f = File::open("tests/parse-cases.txt").unwrap();
    let reader = BufReader::new(f);

    for line in reader.lines() {
        let line = line.unwrap();

        if line.starts_with('#') || !line.contains('|') {
            continue;
        }

        let parts: Vec<&str> = line.split('|').collect();
        let input = parts[0];
        let name = ParsedName::parse(input);

        let slots = [
            ("title", parts[1]),
            ("first", parts[2]),
            ("middle", parts[3]),
            ("last", parts[4]),
            ("suffix", parts[5]),
            ("nickname", parts[6]),
        ];

        let map = name.as_map();
        for (slot, expected) in slots {
            assert!(
                map[slot] == expected,
                "[{}] expected {} {:?}, got {:?}",
                input,
                slot,
                expected,
                map[slot]
            );
        }
    }
}

fn space_join(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

// Re-parsing the natural-order and sort-order renderings of a parsed
// name gives back the same decomposition, provided the suffix slot holds
// at most one entry.
#[test]
fn round_trip_stability() {
    let inputs = [
        "John Doe",
        "Dr. John A. Smith",
        "John Smith Jr.",
        "pennie von bergen wessels",
        "Dr. Juan Q. Xavier de la Vega III",
        "Doe, John A. Jr.",
        "Kenneth Clarke Q.C.",
    ];

    for input in inputs {
        let name = ParsedName::parse(input);
        let map = name.as_map();

        let natural = space_join(&[
            map["title"].as_str(),
            map["first"].as_str(),
            map["middle"].as_str(),
            map["last"].as_str(),
            map["suffix"].as_str(),
        ]);
        let sorted = format!(
            "{}, {} {} {}, {}",
            map["last"], map["title"], map["first"], map["middle"], map["suffix"]
        );

        for variant in [natural, sorted] {
            let again = ParsedName::parse(&variant);
            assert!(
                again.as_map() == map,
                "[{}] re-parsing {:?} changed slots: {:?} vs {:?}",
                input,
                variant,
                again.as_map(),
                map
            );
        }
    }
}

// No name fragment is silently dropped: the alphabetic characters of
// the output (nicknames included) match those of the input.
#[test]
fn content_conservation() {
    let inputs = [
        "John Doe",
        "Doe, Dr. John A. Jr.",
        "John Doe Jr., CLU, CFP",
        "Benjamin (Ben) Franklin",
        "pennie von bergen wessels",
        "Juan Velasquez y Garcia",
        "King of the Hill",
        "Lt.Gov. Kathleen Kennedy Townsend",
    ];

    fn sorted_alpha(s: &str) -> Vec<char> {
        let mut chars: Vec<char> = s
            .chars()
            .filter(|c| c.is_alphabetic())
            .flat_map(char::to_lowercase)
            .collect();
        chars.sort_unstable();
        chars
    }

    for input in inputs {
        let name = ParsedName::parse(input);
        let output = name.values().collect::<Vec<_>>().join(" ");
        assert!(
            sorted_alpha(&output) == sorted_alpha(input),
            "[{}] content changed: {:?}",
            input,
            output
        );
    }
}

#[test]
fn two_token_names_never_join() {
    let name = ParsedName::parse("Van Nguyen");
    assert_eq!(name.first(), "van");
    assert_eq!(name.last(), "nguyen");
}

#[test]
fn prefix_chain_forms_one_surname() {
    let name = ParsedName::parse("pennie von bergen wessels");
    assert_eq!(name.first(), "pennie");
    assert_eq!(name.last(), "von bergen wessels");
}

#[test]
fn suffix_acronym_with_periods() {
    let name = ParsedName::parse("Kenneth Clarke Q.C.");
    assert_eq!(name.first(), "kenneth");
    assert_eq!(name.last(), "clarke");
    assert_eq!(name.suffix(), "qc");
}

#[test]
fn lastname_comma_with_suffix_tail() {
    let name = ParsedName::parse("Doe, John A. Jr.");
    assert_eq!(name.title(), "");
    assert_eq!(name.first(), "john");
    assert_eq!(name.middle(), "a");
    assert_eq!(name.last(), "doe");
    assert_eq!(name.suffix(), "jr");
}

#[test]
fn nickname_in_parentheses() {
    let name = ParsedName::parse("Benjamin (Ben) Franklin");
    assert_eq!(name.first(), "benjamin");
    assert_eq!(name.last(), "franklin");
    assert_eq!(name.nickname(), "ben");
    assert_eq!(name.middle(), "");
}

#[test]
fn unparsable_inputs_never_equal_each_other() {
    assert_ne!(ParsedName::parse(""), ParsedName::parse(""));
    assert_ne!(ParsedName::parse("***"), ParsedName::parse("***"));
}
