use serde::Deserialize;

use super::table::DEFAULT_TOML;

/// One registered compose sequence.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Entry {
    /// Keystrokes typed in compose mode.
    pub sequence: String,
    /// The character produced once the whole sequence has been typed.
    pub result: String,
    /// Reference scalar value of `result`.
    pub codepoint: u32,
}

#[derive(Deserialize)]
struct SequenceConfig {
    sequences: Vec<Entry>,
}

#[derive(Debug, thiserror::Error)]
pub enum SequenceConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("sequence table is empty")]
    Empty,
}

/// Parse TOML text into entries, keeping authoring order.
pub fn parse_sequences_toml(toml_str: &str) -> Result<Vec<Entry>, SequenceConfigError> {
    let config: SequenceConfig =
        toml::from_str(toml_str).map_err(|e| SequenceConfigError::Parse(e.to_string()))?;

    if config.sequences.is_empty() {
        return Err(SequenceConfigError::Empty);
    }

    Ok(config.sequences)
}

/// Entries of the embedded default table.
pub fn default_entries() -> Result<Vec<Entry>, SequenceConfigError> {
    parse_sequences_toml(DEFAULT_TOML)
}
