//! Validate a datasheet without persisting anything.
//!
//! Runs the full pipeline as a dry run: strict when a dialect is supplied,
//! best-effort otherwise. Reports the canonical columns and row count the
//! ingest would produce.

use anyhow::Result;
use log::info;

use crate::{cli::CheckArgs, ingest, table};

pub fn execute(args: &CheckArgs) -> Result<()> {
    let (filename, materialized) = ingest::ingest_from_args(&args.ingest, args.dialect)?;

    let headers = vec!["#".to_string(), "column".to_string()];
    let rows: Vec<Vec<String>> = materialized
        .columns
        .iter()
        .enumerate()
        .map(|(idx, column)| vec![(idx + 1).to_string(), column.clone()])
        .collect();
    table::print_table(&headers, &rows);

    match args.dialect {
        Some(dialect) => info!(
            "✓ '{}' satisfies the {} dialect ({} column(s), {} row(s))",
            filename,
            dialect,
            materialized.columns.len(),
            materialized.row_count()
        ),
        None => info!(
            "✓ '{}' is ingestible best-effort ({} column(s), {} row(s))",
            filename,
            materialized.columns.len(),
            materialized.row_count()
        ),
    }
    Ok(())
}
