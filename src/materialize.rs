//! Record materialization, the final pipeline stage.
//!
//! Turns reconciled rows into the flat string records that get persisted.
//! Every key in the dual-case representation is kept; values coerce to
//! trimmed strings under the caller's [`CellFormat`] policy. Rows that end
//! up all-empty are retained; only the workbook reader drops rows, and only
//! for the zero-populated-keys case.

use std::collections::BTreeMap;

use crate::{data::CellFormat, reconcile::ReconciledTable};

/// A persisted row: column name → trimmed string value. Sparse; a missing
/// key reads as the empty string, never as an error.
pub type Record = BTreeMap<String, String>;

#[derive(Debug, Clone)]
pub struct MaterializedFile {
    /// Canonical lower-cased column list, in source order.
    pub columns: Vec<String>,
    pub records: Vec<Record>,
}

impl MaterializedFile {
    pub fn row_count(&self) -> usize {
        self.records.len()
    }
}

pub fn materialize(table: ReconciledTable, format: &CellFormat) -> MaterializedFile {
    let records = table
        .rows
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|(key, cell)| (key, format.render(&cell)))
                .collect::<Record>()
        })
        .collect();

    MaterializedFile {
        columns: table.columns,
        records,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Cell;
    use crate::reconcile::ReconciledRow;

    fn reconciled(columns: &[&str], rows: Vec<ReconciledRow>) -> ReconciledTable {
        ReconciledTable {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows,
        }
    }

    #[test]
    fn values_coerce_to_trimmed_strings() {
        let mut row = ReconciledRow::new();
        row.insert("s_no".into(), Cell::Integer(1));
        row.insert("revenue".into(), Cell::Float(500000.0));
        row.insert("name".into(), Cell::Text("  Ann ".into()));
        let output = materialize(
            reconciled(&["s_no", "revenue", "name"], vec![row]),
            &CellFormat::default(),
        );
        let record = &output.records[0];
        assert_eq!(record.get("s_no").unwrap(), "1");
        assert_eq!(record.get("revenue").unwrap(), "500000");
        assert_eq!(record.get("name").unwrap(), "Ann");
    }

    #[test]
    fn all_empty_rows_are_retained() {
        let mut row = ReconciledRow::new();
        row.insert("email".into(), Cell::Text(String::new()));
        row.insert("name".into(), Cell::Empty);
        let output = materialize(
            reconciled(&["email", "name"], vec![row]),
            &CellFormat::default(),
        );
        assert_eq!(output.row_count(), 1);
        assert_eq!(output.records[0].get("email").unwrap(), "");
        assert_eq!(output.records[0].get("name").unwrap(), "");
    }

    #[test]
    fn columns_pass_through_unchanged() {
        let output = materialize(reconciled(&["email", "name"], Vec::new()), &CellFormat::default());
        assert_eq!(output.columns, vec!["email", "name"]);
        assert_eq!(output.row_count(), 0);
    }
}
