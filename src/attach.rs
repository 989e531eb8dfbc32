//! Attach a datasheet to an existing tenant.
//!
//! Best-effort mode: any file overlapping either dialect is accepted. The
//! file document and the tenant link are two separate store writes, so a
//! failed link is compensated by deleting the file document again rather
//! than leaving an orphan behind.

use anyhow::Result;
use log::{info, warn};

use crate::{cli::AttachArgs, ingest, store::Store};

pub fn execute(args: &AttachArgs) -> Result<()> {
    let (filename, materialized) = ingest::ingest_from_args(&args.ingest, None)?;
    let row_count = materialized.row_count();

    let mut store = Store::load(&args.store)?;
    let file_id = store.insert_file(&filename, materialized);
    store.save(&args.store)?;

    if let Err(link_error) = store.link_file(&args.tenant, file_id, &args.title) {
        warn!("Linking '{}' to '{}' failed; deleting the file document", filename, args.tenant);
        store.remove_file(file_id)?;
        store.save(&args.store)?;
        return Err(link_error);
    }
    store.save(&args.store)?;

    info!(
        "Attached '{}' ({} row(s)) to tenant '{}'",
        filename, row_count, args.tenant
    );
    println!("{file_id}");
    Ok(())
}
