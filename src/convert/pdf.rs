//! PDF text extraction, delegated to the `pdf-extract` crate.

use super::{ConversionResult, ConvertError};
use std::path::Path;

pub(super) fn to_markdown(path: &Path) -> Result<ConversionResult, ConvertError> {
    let text =
        pdf_extract::extract_text(path).map_err(|err| ConvertError::Extraction(err.to_string()))?;
    Ok(ConversionResult {
        markdown: text.trim().to_string(),
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn corrupt_pdf_reports_extraction_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.pdf");
        let mut file = std::fs::File::create(&path).expect("create fixture");
        file.write_all(b"%PDF-1.7 truncated garbage").expect("write");
        let err = to_markdown(&path).expect_err("must fail");
        assert!(matches!(err, ConvertError::Extraction(_)));
    }
}
