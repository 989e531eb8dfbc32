//! Unlink a datasheet from its tenant and delete the file document.

use anyhow::{Context, Result};
use log::info;
use uuid::Uuid;

use crate::{cli::RemoveArgs, store::Store};

pub fn execute(args: &RemoveArgs) -> Result<()> {
    let file_id = Uuid::parse_str(&args.file_id)
        .with_context(|| format!("Parsing file id '{}'", args.file_id))?;

    let mut store = Store::load(&args.store)?;
    let removed = store.unlink_and_remove_file(&args.tenant, file_id)?;
    store.save(&args.store)?;

    info!(
        "Removed '{}' ({} row(s)) from tenant '{}'",
        removed.original_name,
        removed.row_count(),
        args.tenant
    );
    Ok(())
}
