//! Extension-based dispatch to the per-format converter bindings.

use super::{ConversionResult, ConvertError, DocumentConverter, markup, office, pdf, tabular};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Production converter delegating to format-specific extraction crates.
#[derive(Debug, Default)]
pub struct MarkdownConverter;

impl MarkdownConverter {
    /// Construct a new converter instance.
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DocumentConverter for MarkdownConverter {
    async fn convert(&self, path: &Path) -> Result<ConversionResult, ConvertError> {
        let path: PathBuf = path.to_path_buf();
        // Format libraries are synchronous and CPU-bound; keep them off the
        // async runtime.
        tokio::task::spawn_blocking(move || convert_file(&path))
            .await
            .map_err(|err| ConvertError::Extraction(format!("conversion task failed: {err}")))?
    }
}

fn convert_file(path: &Path) -> Result<ConversionResult, ConvertError> {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "pdf" => pdf::to_markdown(path),
        "docx" => office::to_markdown(path),
        "xlsx" | "xlsm" | "xls" => tabular::workbook_to_markdown(path),
        "csv" => tabular::csv_to_markdown(path),
        "html" | "htm" => markup::html_to_markdown(path),
        "txt" | "md" | "markdown" | "json" | "xml" | "log" => markup::plain_to_markdown(path),
        "" => Err(ConvertError::Unsupported("(no extension)".to_string())),
        other => Err(ConvertError::Unsupported(format!(".{other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_fixture(dir: &tempfile::TempDir, name: &str, bytes: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).expect("create fixture");
        file.write_all(bytes).expect("write fixture");
        path
    }

    #[test]
    fn plain_text_passes_through() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_fixture(&dir, "notes.txt", b"# Already markdown\n\nBody text.");
        let result = convert_file(&path).expect("conversion");
        assert_eq!(result.markdown, "# Already markdown\n\nBody text.");
        assert!(result.title.is_none());
    }

    #[test]
    fn html_is_rendered_as_markdown() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_fixture(&dir, "page.html", b"<h1>Heading</h1><p>Body</p>");
        let result = convert_file(&path).expect("conversion");
        assert!(result.markdown.contains("Heading"));
        assert!(result.markdown.contains("Body"));
    }

    #[test]
    fn unknown_extension_is_unsupported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_fixture(&dir, "track.mp3", b"\x00\x01");
        let err = convert_file(&path).expect_err("must fail");
        assert!(matches!(err, ConvertError::Unsupported(_)));
        assert!(err.to_string().contains(".mp3"));
    }

    #[test]
    fn missing_extension_is_unsupported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_fixture(&dir, "README", b"plain");
        let err = convert_file(&path).expect_err("must fail");
        assert!(matches!(err, ConvertError::Unsupported(_)));
    }

    #[test]
    fn corrupt_workbook_reports_extraction_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_fixture(&dir, "broken.xlsx", b"this is not a zip archive");
        let err = convert_file(&path).expect_err("must fail");
        assert!(matches!(err, ConvertError::Extraction(_)));
    }

    #[tokio::test]
    async fn trait_object_dispatches_and_returns() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_fixture(&dir, "data.json", b"{\"key\": 1}");
        let converter: &dyn DocumentConverter = &MarkdownConverter::new();
        let result = converter.convert(&path).await.expect("conversion");
        assert!(result.markdown.contains("\"key\""));
    }
}
