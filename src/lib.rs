pub mod attach;
pub mod check;
pub mod cli;
pub mod columns;
pub mod create;
pub mod data;
pub mod delimited;
pub mod dialect;
pub mod error;
pub mod ingest;
pub mod io_utils;
pub mod materialize;
pub mod pipeline;
pub mod preview;
pub mod reader;
pub mod reconcile;
pub mod remove;
pub mod store;
pub mod table;
pub mod tenants;
pub mod workbook;

use std::{env, sync::OnceLock};

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use crate::cli::{Cli, Commands};

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("datasheet_ingest", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Create(args) => create::execute(&args),
        Commands::Attach(args) => attach::execute(&args),
        Commands::Remove(args) => remove::execute(&args),
        Commands::Check(args) => check::execute(&args),
        Commands::Columns(args) => columns::execute(&args),
        Commands::Preview(args) => preview::execute(&args),
        Commands::Tenants(args) => tenants::execute(&args),
    }
}
