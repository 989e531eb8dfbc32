//! Format detection and the raw row model.
//!
//! Stage one of the pipeline: given a byte buffer and the submitted
//! filename, pick a parser by suffix and produce a [`RawTable`]: the header
//! row exactly as the file presents it plus one ordered field→value mapping
//! per data row. This stage normalizes shape only, never cell types.

use encoding_rs::Encoding;

use crate::{
    data::Cell,
    delimited, workbook,
    error::{IngestError, IngestResult},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Workbook,
}

impl FileFormat {
    /// Case-insensitive suffix sniffing; anything but `.csv`, `.xlsx`, and
    /// `.xls` is rejected.
    pub fn detect(filename: &str) -> IngestResult<Self> {
        let lowered = filename.to_lowercase();
        if lowered.ends_with(".csv") {
            Ok(FileFormat::Csv)
        } else if lowered.ends_with(".xlsx") || lowered.ends_with(".xls") {
            Ok(FileFormat::Workbook)
        } else {
            Err(IngestError::UnsupportedFormat {
                filename: filename.to_string(),
            })
        }
    }
}

/// One data row: field name → raw value, in source column order. Workbook
/// rows are sparse (only populated cells under non-empty headers appear).
pub type RawRow = Vec<(String, Cell)>;

#[derive(Debug, Clone)]
pub struct RawTable {
    /// Trimmed, original-case headers from row 1. Workbook header cells with
    /// no value are kept as empty-string placeholders so positions line up.
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl RawTable {
    /// Post-parse validation shared by both formats: an empty row sequence
    /// and an all-empty header row are both terminal, in that order.
    pub fn validate(self) -> IngestResult<Self> {
        if self.rows.is_empty() {
            return Err(IngestError::EmptyFile);
        }
        if self.headers.iter().all(|header| header.is_empty()) {
            return Err(IngestError::NoHeaders);
        }
        Ok(self)
    }
}

pub fn read_table(
    buffer: &[u8],
    filename: &str,
    encoding: &'static Encoding,
) -> IngestResult<RawTable> {
    let table = match FileFormat::detect(filename)? {
        FileFormat::Csv => delimited::read_table(buffer, encoding)?,
        FileFormat::Workbook => workbook::read_table(buffer)?,
    };
    table.validate()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_matches_suffixes_case_insensitively() {
        assert_eq!(FileFormat::detect("data.csv").unwrap(), FileFormat::Csv);
        assert_eq!(FileFormat::detect("DATA.CSV").unwrap(), FileFormat::Csv);
        assert_eq!(
            FileFormat::detect("report.XLSX").unwrap(),
            FileFormat::Workbook
        );
        assert_eq!(
            FileFormat::detect("legacy.xls").unwrap(),
            FileFormat::Workbook
        );
    }

    #[test]
    fn detect_rejects_unknown_suffixes() {
        for name in ["data.txt", "data.json", "data", "data.csv.gz"] {
            assert!(matches!(
                FileFormat::detect(name),
                Err(IngestError::UnsupportedFormat { .. })
            ));
        }
    }

    #[test]
    fn validate_reports_empty_file_before_missing_headers() {
        let table = RawTable {
            headers: vec![String::new(), String::new()],
            rows: Vec::new(),
        };
        assert!(matches!(table.validate(), Err(IngestError::EmptyFile)));

        let table = RawTable {
            headers: vec![String::new()],
            rows: vec![vec![(String::new(), Cell::Text("x".into()))]],
        };
        assert!(matches!(table.validate(), Err(IngestError::NoHeaders)));
    }
}
