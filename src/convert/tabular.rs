//! Spreadsheet and CSV rendering, delegated to `calamine` and `csv`.

use super::{ConversionResult, ConvertError};
use calamine::{Reader, open_workbook_auto};
use std::collections::BTreeMap;
use std::path::Path;

pub(super) fn workbook_to_markdown(path: &Path) -> Result<ConversionResult, ConvertError> {
    let mut workbook =
        open_workbook_auto(path).map_err(|err| ConvertError::Extraction(err.to_string()))?;
    let names = workbook.sheet_names().to_owned();

    let mut sections = Vec::new();
    for name in &names {
        let range = workbook
            .worksheet_range(name)
            .map_err(|err| ConvertError::Extraction(err.to_string()))?;
        let rows: Vec<Vec<String>> = range
            .rows()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect();
        sections.push(format!("## {name}\n\n{}", render_table(&rows)));
    }

    let mut metadata = BTreeMap::new();
    metadata.insert("sheets".to_string(), names.len().to_string());

    Ok(ConversionResult {
        markdown: sections.join("\n"),
        title: None,
        metadata,
    })
}

pub(super) fn csv_to_markdown(path: &Path) -> Result<ConversionResult, ConvertError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|err| ConvertError::Extraction(err.to_string()))?;

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|err| ConvertError::Extraction(err.to_string()))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    let mut metadata = BTreeMap::new();
    metadata.insert("rows".to_string(), rows.len().to_string());

    Ok(ConversionResult {
        markdown: render_table(&rows),
        title: None,
        metadata,
    })
}

/// Render rows as a pipe table, treating the first row as the header.
fn render_table(rows: &[Vec<String>]) -> String {
    let Some((header, body)) = rows.split_first() else {
        return String::new();
    };
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);

    let mut out = String::new();
    out.push_str(&render_row(header, width));
    out.push_str(&render_separator(width));
    for row in body {
        out.push_str(&render_row(row, width));
    }
    out
}

fn render_row(cells: &[String], width: usize) -> String {
    let mut line = String::from("|");
    for idx in 0..width {
        let cell = cells.get(idx).map(String::as_str).unwrap_or("");
        line.push(' ');
        line.push_str(&escape_cell(cell));
        line.push_str(" |");
    }
    line.push('\n');
    line
}

fn render_separator(width: usize) -> String {
    let mut line = String::from("|");
    for _ in 0..width {
        line.push_str(" --- |");
    }
    line.push('\n');
    line
}

fn escape_cell(cell: &str) -> String {
    cell.replace('\n', " ").replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn render_table_pads_ragged_rows() {
        let rows = vec![
            vec!["name".to_string(), "qty".to_string()],
            vec!["apples".to_string()],
        ];
        let table = render_table(&rows);
        assert_eq!(table, "| name | qty |\n| --- | --- |\n| apples |  |\n");
    }

    #[test]
    fn render_table_escapes_pipes_and_newlines() {
        let rows = vec![vec!["a|b".to_string(), "two\nlines".to_string()]];
        let table = render_table(&rows);
        assert!(table.contains("a\\|b"));
        assert!(table.contains("two lines"));
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert_eq!(render_table(&[]), "");
    }

    #[test]
    fn csv_file_becomes_pipe_table() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("data.csv");
        let mut file = std::fs::File::create(&path).expect("create fixture");
        file.write_all(b"name,qty\napples,3\npears,5\n").expect("write");

        let result = csv_to_markdown(&path).expect("conversion");
        assert!(result.markdown.starts_with("| name | qty |\n| --- | --- |\n"));
        assert!(result.markdown.contains("| apples | 3 |"));
        assert_eq!(result.metadata.get("rows").map(String::as_str), Some("3"));
    }
}
