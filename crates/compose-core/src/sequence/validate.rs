use std::collections::HashMap;

use super::config::Entry;
use crate::unicode::single_scalar;

/// An authoring defect in a sequence table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableDefect {
    #[error("empty sequence for result {result:?}")]
    EmptySequence { result: String },
    #[error("empty result for sequence {sequence:?}")]
    EmptyResult { sequence: String },
    #[error("sequence {sequence:?} registered as both {first:?} and {second:?}")]
    ConflictingDuplicate {
        sequence: String,
        first: String,
        second: String,
    },
    #[error("sequence {shorter:?} is a strict prefix of {longer:?} and would complete first")]
    Shadowed { shorter: String, longer: String },
    #[error("result for {sequence:?} is U+{actual:04X}, table says U+{expected:04X}")]
    CodepointMismatch {
        sequence: String,
        expected: u32,
        actual: u32,
    },
}

#[derive(Debug, thiserror::Error)]
#[error("sequence table has {} defect(s), first: {}", .0.len(), .0[0])]
pub struct ValidationError(Vec<TableDefect>);

impl ValidationError {
    pub fn defects(&self) -> &[TableDefect] {
        &self.0
    }

    pub fn into_defects(self) -> Vec<TableDefect> {
        self.0
    }
}

/// Check `entries` for authoring defects, reporting all of them in entry order.
pub fn validate(entries: &[Entry]) -> Result<(), ValidationError> {
    let mut defects = Vec::new();
    // sequence -> first registered result
    let mut seen: HashMap<&str, &str> = HashMap::with_capacity(entries.len());

    for entry in entries {
        if entry.sequence.is_empty() {
            defects.push(TableDefect::EmptySequence {
                result: entry.result.clone(),
            });
            continue;
        }
        if entry.result.is_empty() {
            defects.push(TableDefect::EmptyResult {
                sequence: entry.sequence.clone(),
            });
        }
        match seen.get(entry.sequence.as_str()) {
            Some(&first) if first != entry.result => {
                defects.push(TableDefect::ConflictingDuplicate {
                    sequence: entry.sequence.clone(),
                    first: first.to_string(),
                    second: entry.result.clone(),
                });
            }
            Some(_) => {}
            None => {
                seen.insert(&entry.sequence, &entry.result);
            }
        }
        if let Some(actual) = single_scalar(&entry.result) {
            if actual != entry.codepoint {
                defects.push(TableDefect::CodepointMismatch {
                    sequence: entry.sequence.clone(),
                    expected: entry.codepoint,
                    actual,
                });
            }
        }
    }

    for entry in entries {
        let seq = entry.sequence.as_str();
        for (end, _) in seq.char_indices().skip(1) {
            let shorter = &seq[..end];
            if seen.contains_key(shorter) {
                defects.push(TableDefect::Shadowed {
                    shorter: shorter.to_string(),
                    longer: seq.to_string(),
                });
            }
        }
    }

    if defects.is_empty() {
        Ok(())
    } else {
        Err(ValidationError(defects))
    }
}
