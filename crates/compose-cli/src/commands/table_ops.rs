use std::fs;
use std::process;

use serde::Serialize;

use compose_core::sequence::{
    default_entries, default_toml, parse_sequences_toml, validate, Entry, DEFAULT_TOML,
};
use compose_core::unicode::format_codepoint;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Serialize)]
struct ListedEntry<'a> {
    sequence: &'a str,
    result: &'a str,
    codepoint: String,
}

/// Entries whose sequence starts with `prefix`, in authoring order.
pub fn filter_entries<'a>(entries: &'a [Entry], prefix: &str) -> Vec<&'a Entry> {
    entries
        .iter()
        .filter(|e| e.sequence.starts_with(prefix))
        .collect()
}

pub fn export() {
    print!("{}", default_toml());
}

pub fn list(prefix: Option<&str>, json: bool) {
    let entries = die!(default_entries(), "Error: {}");
    let matched = filter_entries(&entries, prefix.unwrap_or(""));
    if json {
        let listed: Vec<ListedEntry<'_>> = matched
            .iter()
            .map(|e| ListedEntry {
                sequence: &e.sequence,
                result: &e.result,
                codepoint: format_codepoint(e.codepoint),
            })
            .collect();
        let out = die!(serde_json::to_string_pretty(&listed), "Error: {}");
        println!("{out}");
    } else {
        for e in matched {
            println!("{:?}\t{}\t{}", e.sequence, e.result, format_codepoint(e.codepoint));
        }
    }
}

pub fn validate_file(file: Option<&str>) {
    let content = match file {
        Some(path) => die!(fs::read_to_string(path), "Error reading {path}: {}"),
        None => DEFAULT_TOML.to_string(),
    };
    let entries = die!(parse_sequences_toml(&content), "Error: {}");
    if let Err(err) = validate(&entries) {
        for defect in err.defects() {
            eprintln!("defect: {defect}");
        }
        eprintln!("Error: {err}");
        process::exit(1);
    }
    println!("OK: {} sequences", entries.len());
}
