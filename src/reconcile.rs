//! Header reconciliation against the tenant column dictionaries.
//!
//! Stage two of the pipeline. Normalizes header casing once, at the
//! boundary, so nothing downstream ever probes alternate key spellings:
//! every row gains a lower-cased duplicate of each key, and the file's
//! canonical column list is the lower-cased, order-preserving,
//! duplicate-collapsed form of the header row.
//!
//! Two modes, chosen by the caller:
//!
//! - **strict** (`Some(dialect)`): every required column of the dialect must
//!   be present; used when a new tenant's declared type has to match the
//!   file that seeds it.
//! - **best-effort** (`None`): any overlap with either dialect is accepted;
//!   used when appending a file to an existing tenant.

use std::collections::{BTreeMap, BTreeSet};

use crate::{
    data::Cell,
    dialect::Dialect,
    error::{IngestError, IngestResult},
    reader::RawTable,
};

/// A row whose original-case keys are each duplicated under their
/// lower-cased alias. Lookups prefer the lower-case canonical key.
pub type ReconciledRow = BTreeMap<String, Cell>;

#[derive(Debug, Clone)]
pub struct ReconciledTable {
    /// Canonical lower-cased column list in original header order. Case
    /// variants of the same name collapse to one entry; the last occurrence
    /// decides its position.
    pub columns: Vec<String>,
    pub rows: Vec<ReconciledRow>,
}

pub fn reconcile(table: RawTable, expected: Option<Dialect>) -> IngestResult<ReconciledTable> {
    let columns = canonical_columns(&table.headers);
    let present: BTreeSet<&str> = columns.iter().map(String::as_str).collect();

    match expected {
        Some(dialect) => {
            let missing: Vec<String> = dialect
                .required_columns()
                .iter()
                .filter(|required| !present.contains(**required))
                .map(|required| required.to_string())
                .collect();
            if !missing.is_empty() {
                return Err(IngestError::MissingColumns { dialect, missing });
            }
        }
        None => {
            let recognized = columns
                .iter()
                .any(|column| Dialect::is_recognized(column));
            if !recognized {
                return Err(IngestError::NoRecognizedColumns);
            }
        }
    }

    let rows = table
        .rows
        .into_iter()
        .map(|row| {
            let mut reconciled = ReconciledRow::new();
            for (key, cell) in row {
                if key.is_empty() {
                    continue;
                }
                let lower = key.to_lowercase();
                reconciled.insert(key, cell.clone());
                reconciled.insert(lower, cell);
            }
            reconciled
        })
        .collect();

    Ok(ReconciledTable { columns, rows })
}

fn canonical_columns(headers: &[String]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::with_capacity(headers.len());
    for header in headers {
        let lower = header.to_lowercase();
        if lower.is_empty() {
            continue;
        }
        if let Some(existing) = columns.iter().position(|column| *column == lower) {
            columns.remove(existing);
        }
        columns.push(lower);
    }
    columns
}
