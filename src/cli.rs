use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::dialect::Dialect;

#[derive(Debug, Parser)]
#[command(author, version, about = "Ingest tenant datasheets into a document store", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a tenant seeded with an initial datasheet (strict dialect validation)
    Create(CreateArgs),
    /// Attach a datasheet to an existing tenant (best-effort validation)
    Attach(AttachArgs),
    /// Unlink a datasheet from its tenant and delete it
    Remove(RemoveArgs),
    /// Validate a datasheet without persisting anything
    Check(CheckArgs),
    /// List a stored datasheet's canonical columns
    Columns(ColumnsArgs),
    /// Preview the first few records of a stored datasheet
    Preview(PreviewArgs),
    /// List tenants with their linked datasheets
    Tenants(TenantsArgs),
}

#[derive(Debug, Args)]
pub struct IngestInputArgs {
    /// Datasheet to ingest (.csv, .xlsx, or .xls)
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,
    /// Character encoding for CSV input (defaults to utf-8)
    #[arg(long = "input-encoding")]
    pub input_encoding: Option<String>,
    /// strftime format for date-valued spreadsheet cells
    #[arg(long = "date-format")]
    pub date_format: Option<String>,
    /// strftime format for timestamp-valued spreadsheet cells
    #[arg(long = "datetime-format")]
    pub datetime_format: Option<String>,
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Store document to create or update
    #[arg(short, long)]
    pub store: PathBuf,
    /// Tenant email (unique across the store)
    #[arg(short, long)]
    pub email: String,
    /// Display title for the tenant and its initial file
    #[arg(short, long)]
    pub title: String,
    /// Tenant category; the datasheet must satisfy this dialect in full
    #[arg(short = 'u', long = "user-type", value_enum)]
    pub user_type: Dialect,
    #[command(flatten)]
    pub ingest: IngestInputArgs,
}

#[derive(Debug, Args)]
pub struct AttachArgs {
    /// Store document to update
    #[arg(short, long)]
    pub store: PathBuf,
    /// Email of the tenant receiving the datasheet
    #[arg(long)]
    pub tenant: String,
    /// Display title for the attached file
    #[arg(short, long)]
    pub title: String,
    #[command(flatten)]
    pub ingest: IngestInputArgs,
}

#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Store document to update
    #[arg(short, long)]
    pub store: PathBuf,
    /// Email of the tenant that owns the file
    #[arg(long)]
    pub tenant: String,
    /// Id of the stored file to remove
    #[arg(short = 'f', long = "file-id")]
    pub file_id: String,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Dialect to enforce; omit for best-effort validation
    #[arg(short = 'd', long = "dialect", value_enum)]
    pub dialect: Option<Dialect>,
    #[command(flatten)]
    pub ingest: IngestInputArgs,
}

#[derive(Debug, Args)]
pub struct ColumnsArgs {
    /// Store document to read
    #[arg(short, long)]
    pub store: PathBuf,
    /// Id of the stored file
    #[arg(short = 'f', long = "file-id")]
    pub file_id: String,
}

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Store document to read
    #[arg(short, long)]
    pub store: PathBuf,
    /// Id of the stored file
    #[arg(short = 'f', long = "file-id")]
    pub file_id: String,
    /// Number of records to display
    #[arg(short = 'n', long, default_value_t = 10)]
    pub rows: usize,
}

#[derive(Debug, Args)]
pub struct TenantsArgs {
    /// Store document to read
    #[arg(short, long)]
    pub store: PathBuf,
    /// Emit the listing as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}
