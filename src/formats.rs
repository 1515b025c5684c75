//! Static catalog of file formats advertised by `GET /supported-formats`.
//!
//! The catalog mirrors what the deployment advertises to clients and is
//! intentionally broader than what the bundled converter accepts; uploads in
//! an advertised-but-unconvertible format take the regular conversion-failure
//! path.

use serde::Serialize;

/// Advertised maximum upload size in megabytes.
pub const MAX_FILE_SIZE_MB: usize = 256;

/// Category → extension catalog returned by the supported-formats endpoint.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SupportedFormats {
    /// Office and PDF document formats.
    pub documents: &'static [&'static str],
    /// Raster image formats.
    pub images: &'static [&'static str],
    /// Markup and plain-text formats.
    pub text_formats: &'static [&'static str],
    /// Archive container formats.
    pub archives: &'static [&'static str],
    /// E-book formats.
    pub ebooks: &'static [&'static str],
    /// Audio formats.
    pub audio: &'static [&'static str],
    /// Special-case inputs that are not file extensions.
    pub other: &'static [&'static str],
}

/// The static format catalog advertised by the service.
pub const fn catalog() -> SupportedFormats {
    SupportedFormats {
        documents: &[".pdf", ".docx", ".pptx", ".xlsx"],
        images: &[".png", ".jpg", ".jpeg", ".gif", ".bmp", ".tiff"],
        text_formats: &[".html", ".htm", ".csv", ".json", ".xml", ".txt"],
        archives: &[".zip"],
        ebooks: &[".epub"],
        audio: &[".mp3", ".wav", ".m4a", ".flac"],
        other: &["youtube_urls"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_advertises_core_document_formats() {
        let formats = catalog();
        for extension in [".pdf", ".docx", ".pptx", ".xlsx"] {
            assert!(formats.documents.contains(&extension));
        }
        assert_eq!(MAX_FILE_SIZE_MB, 256);
    }

    #[test]
    fn catalog_is_static_across_calls() {
        let first = serde_json::to_value(catalog()).expect("serialize");
        let second = serde_json::to_value(catalog()).expect("serialize");
        assert_eq!(first, second);
    }
}
