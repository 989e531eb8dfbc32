//! Store persistence tests: round-tripping the document, empty-store
//! semantics, and link bookkeeping across save/load cycles.

use std::collections::BTreeMap;

use datasheet_ingest::{
    dialect::Dialect,
    materialize::MaterializedFile,
    store::Store,
};
use tempfile::tempdir;

fn sample_file() -> MaterializedFile {
    let mut record = BTreeMap::new();
    record.insert("email".to_string(), "a@x.com".to_string());
    record.insert("name".to_string(), "Ann".to_string());
    MaterializedFile {
        columns: vec!["email".to_string(), "name".to_string()],
        records: vec![record],
    }
}

#[test]
fn missing_store_file_loads_as_empty() {
    let dir = tempdir().expect("temp dir");
    let store = Store::load(&dir.path().join("absent.json")).expect("load");
    assert!(store.files.is_empty());
    assert!(store.tenants.is_empty());
}

#[test]
fn store_round_trips_files_and_tenants() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("store.json");

    let mut store = Store::default();
    store
        .insert_tenant("ops@x.com", "Ops", Dialect::General)
        .unwrap();
    let file_id = store.insert_file("contacts.csv", sample_file());
    store.link_file("ops@x.com", file_id, "Contacts").unwrap();
    store.save(&path).expect("save");

    let reloaded = Store::load(&path).expect("reload");
    assert_eq!(reloaded.files.len(), 1);
    assert_eq!(reloaded.tenants.len(), 1);

    let file = reloaded.file(file_id).expect("file survives");
    assert_eq!(file.original_name, "contacts.csv");
    assert_eq!(file.columns, vec!["email", "name"]);
    assert_eq!(file.row_count(), 1);
    assert_eq!(file.data[0].get("email").unwrap(), "a@x.com");

    let tenant = reloaded.tenant("ops@x.com").expect("tenant survives");
    assert_eq!(tenant.user_type, Dialect::General);
    assert_eq!(tenant.files[0].file_id, file_id);
    assert_eq!(tenant.files[0].title, "Contacts");
}

#[test]
fn removal_persists_across_reload() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("store.json");

    let mut store = Store::default();
    store
        .insert_tenant("ops@x.com", "Ops", Dialect::Workmate)
        .unwrap();
    let file_id = store.insert_file("accounts.csv", sample_file());
    store.link_file("ops@x.com", file_id, "Accounts").unwrap();
    store.save(&path).unwrap();

    let mut reloaded = Store::load(&path).unwrap();
    reloaded.unlink_and_remove_file("ops@x.com", file_id).unwrap();
    reloaded.save(&path).unwrap();

    let final_store = Store::load(&path).unwrap();
    assert!(final_store.files.is_empty());
    assert!(final_store.tenant("ops@x.com").unwrap().files.is_empty());
}
