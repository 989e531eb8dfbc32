//! The two fixed tenant column dictionaries.
//!
//! A [`Dialect`] names the set of lower-case column identifiers a tenant
//! category expects. The lists are closed compile-time constants; a file's
//! dialect is always supplied by the caller, never inferred from content.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Account/contact-centric records keyed by an explicit serial number.
pub const WORKMATE_COLUMNS: &[&str] = &[
    "s_no",
    "account_name",
    "industry_client",
    "industry_nexuses",
    "type_of_company",
    "priority",
    "sales_manager",
    "no_of_employees",
    "revenue",
    "contact_name",
    "designation",
    "contact_number_personal",
    "phone_status",
    "email_id",
    "email_status",
    "person_linkedin_url",
    "website",
    "company_linkedin_url",
    "technologies",
    "city",
    "state",
    "country_contact_person",
    "company_address",
    "company_headquarter",
    "workmates_remark",
    "tm_remarks",
];

/// Person-centric records with name and annual revenue fields.
pub const GENERAL_COLUMNS: &[&str] = &[
    "full_name",
    "title",
    "company_name",
    "email",
    "email_status",
    "seniority",
    "departments",
    "personal_phone",
    "company_phone",
    "employees",
    "industry",
    "person_linkedin_url",
    "contact_country",
    "website",
    "technologies",
    "company_address",
    "company_linkedin_url",
    "company_country",
    "annual_revenue",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    Workmate,
    General,
}

impl Dialect {
    /// Required lower-case column list, in dialect order.
    pub fn required_columns(&self) -> &'static [&'static str] {
        match self {
            Dialect::Workmate => WORKMATE_COLUMNS,
            Dialect::General => GENERAL_COLUMNS,
        }
    }

    /// Union of both dialects' columns, used by best-effort reconciliation.
    pub fn recognized_columns() -> impl Iterator<Item = &'static str> {
        WORKMATE_COLUMNS
            .iter()
            .chain(GENERAL_COLUMNS.iter())
            .copied()
    }

    pub fn is_recognized(column: &str) -> bool {
        Self::recognized_columns().any(|known| known == column)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Workmate => write!(f, "workmate"),
            Dialect::General => write!(f, "general"),
        }
    }
}
