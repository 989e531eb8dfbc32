//! JSON-backed document store for ingested files and tenants.
//!
//! The store is one document on disk: a `files` collection of ingested
//! record sets and a `tenants` collection holding foreign-key-style links
//! to them. It is loaded whole, mutated in memory, and written back whole;
//! commands decide when intermediate states hit disk (see the attach
//! compensation sequence in `attach.rs`).

use std::{collections::BTreeMap, fs::File, io::BufReader, path::Path};

use anyhow::{Context, Result, anyhow, bail};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{dialect::Dialect, materialize::MaterializedFile};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredFile {
    pub id: Uuid,
    pub filename: String,
    pub original_name: String,
    /// Canonical lower-cased column list, in source order.
    pub columns: Vec<String>,
    pub data: Vec<BTreeMap<String, String>>,
}

impl StoredFile {
    pub fn row_count(&self) -> usize {
        self.data.len()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileLink {
    pub file_id: Uuid,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tenant {
    pub id: Uuid,
    pub email: String,
    pub title: String,
    pub user_type: Dialect,
    pub files: Vec<FileLink>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Store {
    pub files: Vec<StoredFile>,
    pub tenants: Vec<Tenant>,
}

impl Store {
    /// Load the store document; a missing file is an empty store.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Store::default());
        }
        let file = File::open(path).with_context(|| format!("Opening store file {path:?}"))?;
        let reader = BufReader::new(file);
        let store = serde_json::from_reader(reader).context("Parsing store JSON")?;
        Ok(store)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path).with_context(|| format!("Creating store file {path:?}"))?;
        serde_json::to_writer_pretty(file, self).context("Writing store JSON")
    }

    /// Persist a materialized record set as a new file document.
    pub fn insert_file(&mut self, filename: &str, materialized: MaterializedFile) -> Uuid {
        let id = Uuid::new_v4();
        self.files.push(StoredFile {
            id,
            filename: filename.to_string(),
            original_name: filename.to_string(),
            columns: materialized.columns,
            data: materialized.records,
        });
        id
    }

    pub fn file(&self, id: Uuid) -> Option<&StoredFile> {
        self.files.iter().find(|file| file.id == id)
    }

    pub fn remove_file(&mut self, id: Uuid) -> Result<StoredFile> {
        let position = self
            .files
            .iter()
            .position(|file| file.id == id)
            .ok_or_else(|| anyhow!("No stored file with id {id}"))?;
        Ok(self.files.remove(position))
    }

    pub fn insert_tenant(&mut self, email: &str, title: &str, user_type: Dialect) -> Result<Uuid> {
        if self.tenant(email).is_some() {
            bail!("Email '{email}' is already in use");
        }
        let id = Uuid::new_v4();
        self.tenants.push(Tenant {
            id,
            email: email.to_string(),
            title: title.to_string(),
            user_type,
            files: Vec::new(),
        });
        Ok(id)
    }

    pub fn tenant(&self, email: &str) -> Option<&Tenant> {
        self.tenants.iter().find(|tenant| tenant.email == email)
    }

    fn tenant_mut(&mut self, email: &str) -> Result<&mut Tenant> {
        self.tenants
            .iter_mut()
            .find(|tenant| tenant.email == email)
            .ok_or_else(|| anyhow!("No tenant with email '{email}'"))
    }

    /// Link an already-stored file to a tenant. Fails (without touching the
    /// tenant list) when the tenant does not exist; the caller compensates.
    pub fn link_file(&mut self, email: &str, file_id: Uuid, title: &str) -> Result<()> {
        let tenant = self.tenant_mut(email)?;
        tenant.files.push(FileLink {
            file_id,
            title: title.to_string(),
        });
        Ok(())
    }

    /// Unlink a file from a tenant and delete its document in one mutation.
    pub fn unlink_and_remove_file(&mut self, email: &str, file_id: Uuid) -> Result<StoredFile> {
        let tenant = self.tenant_mut(email)?;
        let position = tenant
            .files
            .iter()
            .position(|link| link.file_id == file_id)
            .ok_or_else(|| anyhow!("Tenant '{email}' has no file with id {file_id}"))?;
        tenant.files.remove(position);
        self.remove_file(file_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn materialized() -> MaterializedFile {
        let mut record = BTreeMap::new();
        record.insert("email".to_string(), "a@x.com".to_string());
        MaterializedFile {
            columns: vec!["email".to_string()],
            records: vec![record],
        }
    }

    #[test]
    fn insert_tenant_rejects_duplicate_email() {
        let mut store = Store::default();
        store
            .insert_tenant("ops@x.com", "Ops", Dialect::General)
            .unwrap();
        assert!(
            store
                .insert_tenant("ops@x.com", "Other", Dialect::Workmate)
                .is_err()
        );
    }

    #[test]
    fn link_requires_existing_tenant() {
        let mut store = Store::default();
        let file_id = store.insert_file("contacts.csv", materialized());
        assert!(store.link_file("ghost@x.com", file_id, "Contacts").is_err());
        // The failed link leaves the file document in place for the caller
        // to compensate.
        assert!(store.file(file_id).is_some());
    }

    #[test]
    fn unlink_and_remove_deletes_both_sides() {
        let mut store = Store::default();
        store
            .insert_tenant("ops@x.com", "Ops", Dialect::General)
            .unwrap();
        let file_id = store.insert_file("contacts.csv", materialized());
        store.link_file("ops@x.com", file_id, "Contacts").unwrap();

        let removed = store.unlink_and_remove_file("ops@x.com", file_id).unwrap();
        assert_eq!(removed.id, file_id);
        assert!(store.file(file_id).is_none());
        assert!(store.tenant("ops@x.com").unwrap().files.is_empty());
    }

    #[test]
    fn unlink_unknown_file_leaves_store_untouched() {
        let mut store = Store::default();
        store
            .insert_tenant("ops@x.com", "Ops", Dialect::General)
            .unwrap();
        let file_id = store.insert_file("contacts.csv", materialized());
        store.link_file("ops@x.com", file_id, "Contacts").unwrap();

        assert!(
            store
                .unlink_and_remove_file("ops@x.com", Uuid::new_v4())
                .is_err()
        );
        assert!(store.file(file_id).is_some());
        assert_eq!(store.tenant("ops@x.com").unwrap().files.len(), 1);
    }
}
