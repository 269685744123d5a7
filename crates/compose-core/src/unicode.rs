//! Scalar-value helpers used to cross-check result characters against their
//! reference codepoints.

/// Unicode scalar values of `s`, in order.
pub fn scalar_values(s: &str) -> Vec<u32> {
    s.chars().map(u32::from).collect()
}

/// The scalar value of `s` when it consists of exactly one `char`.
///
/// Results built from a base character plus combining marks return `None`;
/// they carry no single reference codepoint to compare against.
pub fn single_scalar(s: &str) -> Option<u32> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(u32::from(c)),
        _ => None,
    }
}

/// Format a codepoint in `U+XXXX` notation (at least four hex digits).
pub fn format_codepoint(cp: u32) -> String {
    format!("U+{cp:04X}")
}
