//! Compose-sequence lookup.
//!
//! A compose sequence is a short run of ordinary keystrokes (`"!="`, `"\"o"`,
//! `"wk"`) standing for one decorated or symbolic character. The table records
//! every prefix of every registered sequence so that a caller feeding
//! keystrokes one at a time can tell "keep typing" from "dead end" from
//! "complete match".

mod config;
mod table;
mod trie;
mod validate;

#[cfg(test)]
mod proptest_lookup;

pub use config::{default_entries, parse_sequences_toml, Entry, SequenceConfigError};
pub use table::{default_toml, DEFAULT_TOML};
pub use trie::{Marker, SequenceLookup, SequenceTable};
pub use validate::{validate, TableDefect, ValidationError};
