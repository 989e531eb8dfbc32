//! Typed failure taxonomy for the ingestion pipeline.
//!
//! Every stage fails fast with one of these variants; nothing is persisted
//! for an upload attempt that errors, and nothing is retried. Callers that
//! need to branch on the failure kind match on [`IngestError`]; command-level
//! plumbing lets the variants flow into `anyhow` via `?`.

use thiserror::Error;

use crate::dialect::Dialect;

#[derive(Debug, Error)]
pub enum IngestError {
    /// Filename suffix is not `.csv`, `.xlsx`, or `.xls`.
    #[error("Unsupported file format for '{filename}'. Upload an Excel (.xlsx, .xls) or CSV file")]
    UnsupportedFormat { filename: String },

    /// Spreadsheet workbook contains no worksheets.
    #[error("Workbook contains no worksheets")]
    NoWorksheet,

    /// Zero data rows remained after parsing.
    #[error("File contains no data rows")]
    EmptyFile,

    /// Header row has no usable column names.
    #[error("File has no column headers")]
    NoHeaders,

    /// Strict reconciliation: the expected dialect's required columns are
    /// not all present. `missing` preserves dialect-list order.
    #[error("Missing required columns for {dialect} dialect: {}", .missing.join(", "))]
    MissingColumns {
        dialect: Dialect,
        missing: Vec<String>,
    },

    /// Best-effort reconciliation: no header overlaps either dialect.
    #[error("No recognized columns; file shares nothing with any known dialect")]
    NoRecognizedColumns,

    #[error("Failed to decode input as {encoding}")]
    Encoding { encoding: &'static str },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Workbook(#[from] calamine::Error),
}

pub type IngestResult<T> = std::result::Result<T, IngestError>;
