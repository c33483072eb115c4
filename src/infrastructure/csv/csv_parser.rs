// ============================================================
// CSV PARSER
// ============================================================
// Parse one delimited race-result file into a typed frame

use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::domain::error::{AppError, Result};
use crate::domain::race::RaceFrame;

/// Delimited-file parser for race-result tables
#[derive(Debug, Clone)]
pub struct CsvParser {
    /// Field separator (default: semicolon)
    delimiter: u8,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self { delimiter: b';' }
    }
}

impl CsvParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Parse a file; the frame is tagged with the file's name
    pub fn parse_file(&self, path: &Path) -> Result<RaceFrame> {
        let source_file = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let bytes = fs::read(path).map_err(|e| AppError::file_parse(&source_file, e))?;
        let content = String::from_utf8_lossy(&bytes);

        self.parse_content(&source_file, &content)
    }

    /// Parse delimited content. The first record is the header; headers and
    /// values are trimmed.
    pub fn parse_content(&self, source_file: &str, content: &str) -> Result<RaceFrame> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(Trim::All)
            .flexible(true)
            .from_reader(content.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| {
                AppError::file_parse(source_file, format!("failed to read headers: {}", e))
            })?
            .iter()
            .map(str::to_string)
            .collect();

        if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
            return Err(AppError::file_parse(source_file, "no columns to parse"));
        }

        let mut records = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                AppError::file_parse(source_file, format!("row {}: {}", index + 1, e))
            })?;

            if record.len() > headers.len() {
                return Err(AppError::file_parse(
                    source_file,
                    format!(
                        "row {}: expected {} fields, saw {}",
                        index + 1,
                        headers.len(),
                        record.len()
                    ),
                ));
            }

            records.push(record.iter().map(str::to_string).collect::<Vec<_>>());
        }

        Ok(RaceFrame::from_records(source_file, headers, &records))
    }
}
