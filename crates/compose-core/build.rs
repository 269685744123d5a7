fn main() {
    // Validate the embedded sequence table at compile time.
    validate_toml(
        "src/sequence/default_sequences.toml",
        include_str!("src/sequence/default_sequences.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}
