//! Helpers for normalizing untrusted upload filenames.

/// Sanitize an untrusted filename for filesystem use.
///
/// Every character outside `[A-Za-z0-9._-]` is replaced with `_`; the result
/// always has the same number of characters as the input.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Derive the lowercase extension from a filename.
///
/// Returns the suffix starting at the last `.`, or an empty string for
/// dotless names and leading-dot names such as `.bashrc`.
pub fn file_extension(name: &str) -> String {
    match name.rfind('.') {
        Some(idx) if idx > 0 => name[idx..].to_ascii_lowercase(),
        _ => String::new(),
    }
}
