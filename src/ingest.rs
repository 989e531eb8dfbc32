//! Shared plumbing for subcommands that run the ingestion pipeline.

use anyhow::{Context, Result};

use crate::{
    cli::IngestInputArgs,
    data::CellFormat,
    dialect::Dialect,
    io_utils,
    materialize::MaterializedFile,
    pipeline,
};

/// Read the input file and run it through the full pipeline. Returns the
/// submitted filename (used for format sniffing and stored verbatim)
/// alongside the materialized record set.
pub fn ingest_from_args(
    args: &IngestInputArgs,
    expected: Option<Dialect>,
) -> Result<(String, MaterializedFile)> {
    let encoding = io_utils::resolve_encoding(args.input_encoding.as_deref())?;
    let format = CellFormat::new(args.date_format.as_deref(), args.datetime_format.as_deref());
    let buffer = std::fs::read(&args.input)
        .with_context(|| format!("Reading input file {:?}", args.input))?;
    let filename = args
        .input
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| args.input.display().to_string());

    let materialized = pipeline::run(&buffer, &filename, expected, encoding, &format)?;
    Ok((filename, materialized))
}
