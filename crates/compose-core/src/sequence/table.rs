pub const DEFAULT_TOML: &str = include_str!("default_sequences.toml");

/// Returns the embedded default sequence table TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}
