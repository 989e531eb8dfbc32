//! Create a tenant seeded with its initial datasheet.
//!
//! Strict mode: the file must satisfy the declared user type's full column
//! list before anything is written. File document, tenant document, and the
//! link between them land in a single store write.

use anyhow::Result;
use log::info;

use crate::{cli::CreateArgs, ingest, store::Store};

pub fn execute(args: &CreateArgs) -> Result<()> {
    let (filename, materialized) = ingest::ingest_from_args(&args.ingest, Some(args.user_type))?;
    let row_count = materialized.row_count();

    let mut store = Store::load(&args.store)?;
    store.insert_tenant(&args.email, &args.title, args.user_type)?;
    let file_id = store.insert_file(&filename, materialized);
    store.link_file(&args.email, file_id, &args.title)?;
    store.save(&args.store)?;

    info!(
        "Created {} tenant '{}' with '{}' ({} row(s))",
        args.user_type, args.email, filename, row_count
    );
    println!("{file_id}");
    Ok(())
}
