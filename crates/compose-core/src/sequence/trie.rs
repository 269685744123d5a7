use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::{debug, debug_span, warn};

use super::config::{default_entries, Entry};
use super::validate::{validate, ValidationError};

/// Record kept for every non-empty prefix of a registered sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    /// Strict prefix of at least one longer sequence; nothing to produce yet.
    Prefix,
    /// Complete sequence producing this character.
    Terminal(String),
}

/// Result of looking up the keystrokes typed so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceLookup<'a> {
    /// No registered sequence starts with the input.
    Absent,
    /// Strict prefix of a registered sequence; keep typing.
    Prefix,
    /// Complete sequence and the character it produces.
    Terminal(&'a str),
}

struct Node {
    marker: Marker,
    children: HashMap<char, Node>,
}

impl Node {
    fn prefix() -> Self {
        Self {
            marker: Marker::Prefix,
            children: HashMap::new(),
        }
    }
}

/// Immutable prefix table over compose sequences.
pub struct SequenceTable {
    root: Node,
    keys: usize,
}

impl SequenceTable {
    /// Get or initialize the global table built from the embedded sequences.
    pub fn global() -> &'static SequenceTable {
        static INSTANCE: OnceLock<SequenceTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let entries = default_entries().expect("embedded sequence TOML must be valid");
            SequenceTable::build_checked(&entries)
                .expect("embedded sequence table must be free of defects")
        })
    }

    /// Build a table from `entries`.
    ///
    /// The result does not depend on entry order, with one exception: when the
    /// same sequence is registered with different results, the last one wins.
    /// Use [`SequenceTable::build_checked`] to reject such tables instead.
    pub fn build(entries: &[Entry]) -> Self {
        let _span = debug_span!("build_sequence_table", entries = entries.len()).entered();
        let mut table = SequenceTable {
            root: Node::prefix(),
            keys: 0,
        };
        for entry in entries {
            table.insert(&entry.sequence, &entry.result);
        }
        debug!(keys = table.keys, "sequence table built");
        table
    }

    /// Validate `entries`, then build. Fails on any authoring defect.
    pub fn build_checked(entries: &[Entry]) -> Result<Self, ValidationError> {
        validate(entries)?;
        Ok(Self::build(entries))
    }

    fn insert(&mut self, sequence: &str, result: &str) {
        if sequence.is_empty() {
            warn!(result, "skipping empty sequence");
            return;
        }
        let mut created = 0;
        let mut node = &mut self.root;
        for c in sequence.chars() {
            // Existing records are never touched on the way down, so a
            // shorter sequence's Terminal survives a later, longer insert.
            node = node.children.entry(c).or_insert_with(|| {
                created += 1;
                Node::prefix()
            });
        }
        let previous = std::mem::replace(&mut node.marker, Marker::Terminal(result.to_string()));
        self.keys += created;
        if let Marker::Terminal(old) = previous {
            if old != result {
                warn!(sequence, old = %old, new = result, "conflicting duplicate sequence");
            }
        }
    }

    /// The record stored for `input`, if any.
    pub fn marker(&self, input: &str) -> Option<&Marker> {
        if input.is_empty() {
            return None;
        }
        let mut node = &self.root;
        for c in input.chars() {
            node = node.children.get(&c)?;
        }
        Some(&node.marker)
    }

    /// Classify `input` as absent, a prefix, or a complete sequence.
    pub fn lookup(&self, input: &str) -> SequenceLookup<'_> {
        match self.marker(input) {
            None => SequenceLookup::Absent,
            Some(Marker::Prefix) => SequenceLookup::Prefix,
            Some(Marker::Terminal(result)) => SequenceLookup::Terminal(result),
        }
    }

    /// True if `input` is a complete sequence or a strict prefix of one.
    pub fn is_prefix_or_sequence(&self, input: &str) -> bool {
        match self.lookup(input) {
            SequenceLookup::Absent => false,
            SequenceLookup::Prefix | SequenceLookup::Terminal(_) => true,
        }
    }

    /// The character for a complete sequence. Prefixes and unknown input
    /// both yield `None`.
    pub fn resolve(&self, input: &str) -> Option<&str> {
        match self.lookup(input) {
            SequenceLookup::Terminal(result) => Some(result),
            SequenceLookup::Absent | SequenceLookup::Prefix => None,
        }
    }

    /// Number of recorded keys (distinct non-empty prefixes).
    pub fn len(&self) -> usize {
        self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys == 0
    }
}
