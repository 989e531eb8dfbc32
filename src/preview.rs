use anyhow::{Context, Result, anyhow};
use log::info;
use uuid::Uuid;

use crate::{cli::PreviewArgs, store::Store, table};

pub fn execute(args: &PreviewArgs) -> Result<()> {
    let file_id = Uuid::parse_str(&args.file_id)
        .with_context(|| format!("Parsing file id '{}'", args.file_id))?;
    let store = Store::load(&args.store)?;
    let file = store
        .file(file_id)
        .ok_or_else(|| anyhow!("No stored file with id {file_id}"))?;

    let rows: Vec<Vec<String>> = file
        .data
        .iter()
        .take(args.rows)
        .map(|record| {
            file.columns
                .iter()
                // Sparse rows are expected; a missing key reads as empty.
                .map(|column| record.get(column).cloned().unwrap_or_default())
                .collect()
        })
        .collect();

    table::print_table(&file.columns, &rows);
    info!(
        "Displayed {} of {} record(s) from '{}'",
        rows.len(),
        file.row_count(),
        file.original_name
    );
    Ok(())
}
