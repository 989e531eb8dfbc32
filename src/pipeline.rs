//! Stage orchestration: reader → reconciler → materializer.
//!
//! One upload is processed start to finish, synchronously; every stage
//! fails fast and nothing is handed to storage unless the whole row set
//! validated. Storage itself is the caller's concern; this module only
//! produces the record set.

use encoding_rs::Encoding;
use log::debug;

use crate::{
    data::CellFormat,
    dialect::Dialect,
    error::IngestResult,
    materialize::{self, MaterializedFile},
    reader, reconcile,
};

pub fn run(
    buffer: &[u8],
    filename: &str,
    expected: Option<Dialect>,
    encoding: &'static Encoding,
    format: &CellFormat,
) -> IngestResult<MaterializedFile> {
    let raw = reader::read_table(buffer, filename, encoding)?;
    debug!(
        "Parsed '{}': {} header(s), {} raw row(s)",
        filename,
        raw.headers.len(),
        raw.rows.len()
    );

    let reconciled = reconcile::reconcile(raw, expected)?;
    debug!(
        "Reconciled '{}' into {} canonical column(s)",
        filename,
        reconciled.columns.len()
    );

    Ok(materialize::materialize(reconciled, format))
}
