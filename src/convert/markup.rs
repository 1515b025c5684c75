//! HTML and plain-text conversion.

use super::{ConversionResult, ConvertError};
use std::path::Path;

pub(super) fn html_to_markdown(path: &Path) -> Result<ConversionResult, ConvertError> {
    let html = read_lossy(path)?;
    Ok(ConversionResult {
        markdown: html2md::parse_html(&html),
        ..Default::default()
    })
}

/// Text-family formats pass through untouched; Markdown is a superset of
/// plain text.
pub(super) fn plain_to_markdown(path: &Path) -> Result<ConversionResult, ConvertError> {
    Ok(ConversionResult {
        markdown: read_lossy(path)?,
        ..Default::default()
    })
}

fn read_lossy(path: &Path) -> Result<String, ConvertError> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn invalid_utf8_is_replaced_not_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("latin1.txt");
        let mut file = std::fs::File::create(&path).expect("create fixture");
        file.write_all(b"caf\xe9").expect("write");

        let result = plain_to_markdown(&path).expect("conversion");
        assert!(result.markdown.starts_with("caf"));
        assert!(result.markdown.contains('\u{FFFD}'));
    }
}
