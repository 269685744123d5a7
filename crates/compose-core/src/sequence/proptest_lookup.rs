//! Property-based tests for sequence lookup over the embedded table.

use proptest::prelude::*;

use super::{default_entries, SequenceLookup, SequenceTable};

fn arb_keystroke() -> impl Strategy<Value = char> {
    // Punctuation and letters dominate real sequences
    prop_oneof![
        4 => prop::sample::select(vec![
            '!', '"', '$', '\'', '*', '+', '-', '.', '/', ':', '<', '=', '>', '?', '@',
            '^', '_', '`', '|', '~', ' ',
        ]),
        4 => proptest::char::range('a', 'z'),
        2 => proptest::char::range('A', 'Z'),
        1 => proptest::char::range('0', '9'),
        1 => any::<char>(),
    ]
}

fn arb_input() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_keystroke(), 0..8).prop_map(|v| v.into_iter().collect())
}

proptest! {
    #[test]
    fn queries_agree_with_lookup(input in arb_input()) {
        let table = SequenceTable::global();
        match table.lookup(&input) {
            SequenceLookup::Absent => {
                prop_assert!(!table.is_prefix_or_sequence(&input));
                prop_assert_eq!(table.resolve(&input), None);
            }
            SequenceLookup::Prefix => {
                prop_assert!(table.is_prefix_or_sequence(&input));
                prop_assert_eq!(table.resolve(&input), None);
            }
            SequenceLookup::Terminal(result) => {
                prop_assert!(table.is_prefix_or_sequence(&input));
                prop_assert_eq!(table.resolve(&input), Some(result));
            }
        }
    }

    #[test]
    fn queries_are_idempotent(input in arb_input()) {
        let table = SequenceTable::global();
        prop_assert_eq!(table.lookup(&input), table.lookup(&input));
        prop_assert_eq!(table.resolve(&input), table.resolve(&input));
        prop_assert_eq!(
            table.is_prefix_or_sequence(&input),
            table.is_prefix_or_sequence(&input)
        );
    }

    #[test]
    fn recognised_input_has_recognised_prefixes(input in arb_input()) {
        let table = SequenceTable::global();
        if table.is_prefix_or_sequence(&input) {
            for (end, _) in input.char_indices().skip(1) {
                prop_assert!(table.is_prefix_or_sequence(&input[..end]));
            }
        }
    }

    #[test]
    fn recognised_input_matches_some_entry(input in arb_input()) {
        let table = SequenceTable::global();
        let starts_entry = default_entries()
            .unwrap()
            .iter()
            .any(|e| !input.is_empty() && e.sequence.starts_with(input.as_str()));
        prop_assert_eq!(table.is_prefix_or_sequence(&input), starts_entry);
    }
}
