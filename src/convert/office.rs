//! Word document extraction, delegated to the `docx-rs` crate.

use super::{ConversionResult, ConvertError};
use docx_rs::{DocumentChild, ParagraphChild, RunChild};
use std::path::Path;

pub(super) fn to_markdown(path: &Path) -> Result<ConversionResult, ConvertError> {
    let bytes = std::fs::read(path)?;
    let docx =
        docx_rs::read_docx(&bytes).map_err(|err| ConvertError::Extraction(err.to_string()))?;

    let mut paragraphs: Vec<String> = Vec::new();
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            let text: String = paragraph
                .children
                .iter()
                .filter_map(|node| match node {
                    ParagraphChild::Run(run) => Some(
                        run.children
                            .iter()
                            .filter_map(|part| match part {
                                RunChild::Text(text) => Some(text.text.as_str()),
                                _ => None,
                            })
                            .collect::<String>(),
                    ),
                    _ => None,
                })
                .collect();
            if !text.is_empty() {
                paragraphs.push(text);
            }
        }
    }

    Ok(ConversionResult {
        markdown: paragraphs.join("\n\n"),
        ..Default::default()
    })
}
