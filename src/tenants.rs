//! Tenant listing with linked datasheets.

use anyhow::{Context, Result};
use itertools::Itertools;
use log::info;
use serde::Serialize;

use crate::{cli::TenantsArgs, store::Store, table};

#[derive(Serialize)]
struct TenantListing<'a> {
    email: &'a str,
    title: &'a str,
    user_type: String,
    files: Vec<FileListing<'a>>,
}

#[derive(Serialize)]
struct FileListing<'a> {
    file_id: String,
    title: &'a str,
    filename: &'a str,
    rows: usize,
}

pub fn execute(args: &TenantsArgs) -> Result<()> {
    let store = Store::load(&args.store)?;

    let listings: Vec<TenantListing<'_>> = store
        .tenants
        .iter()
        .map(|tenant| TenantListing {
            email: &tenant.email,
            title: &tenant.title,
            user_type: tenant.user_type.to_string(),
            files: tenant
                .files
                .iter()
                .map(|link| {
                    let file = store.file(link.file_id);
                    FileListing {
                        file_id: link.file_id.to_string(),
                        title: &link.title,
                        filename: file.map(|f| f.original_name.as_str()).unwrap_or("missing"),
                        rows: file.map(|f| f.row_count()).unwrap_or(0),
                    }
                })
                .collect(),
        })
        .collect();

    if args.json {
        let rendered =
            serde_json::to_string_pretty(&listings).context("Serializing tenant listing")?;
        println!("{rendered}");
    } else {
        let headers = vec![
            "email".to_string(),
            "title".to_string(),
            "type".to_string(),
            "files".to_string(),
            "rows".to_string(),
        ];
        let rows: Vec<Vec<String>> = listings
            .iter()
            .map(|tenant| {
                vec![
                    tenant.email.to_string(),
                    tenant.title.to_string(),
                    tenant.user_type.clone(),
                    tenant.files.iter().map(|file| file.filename).join(", "),
                    tenant
                        .files
                        .iter()
                        .map(|file| file.rows)
                        .sum::<usize>()
                        .to_string(),
                ]
            })
            .collect();
        table::print_table(&headers, &rows);
    }

    info!("Listed {} tenant(s)", listings.len());
    Ok(())
}
