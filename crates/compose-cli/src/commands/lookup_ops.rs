use compose_core::sequence::{SequenceLookup, SequenceTable};
use compose_core::unicode::{format_codepoint, scalar_values};

/// One-line description of what `input` is in `table`.
pub fn describe(table: &SequenceTable, input: &str) -> String {
    match table.lookup(input) {
        SequenceLookup::Absent => "absent".to_string(),
        SequenceLookup::Prefix => "prefix".to_string(),
        SequenceLookup::Terminal(result) => {
            let codepoints: Vec<String> = scalar_values(result)
                .into_iter()
                .map(format_codepoint)
                .collect();
            format!("terminal {result} {}", codepoints.join(" "))
        }
    }
}

pub fn lookup(input: &str) {
    println!("{}", describe(SequenceTable::global(), input));
}
