//! Column listing for a stored datasheet.
//!
//! Renders a stored file's canonical lower-cased column names as an ASCII
//! table, in the order they appeared in the source header row.

use anyhow::{Context, Result, anyhow};
use log::info;
use uuid::Uuid;

use crate::{cli::ColumnsArgs, store::Store, table};

pub fn execute(args: &ColumnsArgs) -> Result<()> {
    let file_id = Uuid::parse_str(&args.file_id)
        .with_context(|| format!("Parsing file id '{}'", args.file_id))?;
    let store = Store::load(&args.store)?;
    let file = store
        .file(file_id)
        .ok_or_else(|| anyhow!("No stored file with id {file_id}"))?;

    let headers = vec!["#".to_string(), "column".to_string()];
    let rows: Vec<Vec<String>> = file
        .columns
        .iter()
        .enumerate()
        .map(|(idx, column)| vec![(idx + 1).to_string(), column.clone()])
        .collect();
    table::print_table(&headers, &rows);

    info!(
        "Listed {} column(s) from '{}'",
        file.columns.len(),
        file.original_name
    );
    Ok(())
}
