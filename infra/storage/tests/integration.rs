use ohub_storage::*;
use serde::{Deserialize, Serialize};
use tempfile::TempDir;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Snapshot {
    name: String,
    count: u32,
}

#[test]
fn test_invalid_keys_rejected() {
    let store = Store::in_memory();

    assert!(store.put("../escape", &1).is_err());
    assert!(store.get::<u32>("a/b").is_err());
    assert!(store.remove("").is_err());
}

#[test]
fn test_put_get_roundtrip_in_memory() {
    let store = Store::in_memory();
    let value = Snapshot { name: "Cairo Bikes".to_owned(), count: 3 };

    store.put("clientData", &value).unwrap();
    assert!(store.contains("clientData").unwrap());

    let loaded: Option<Snapshot> = store.get("clientData").unwrap();
    assert_eq!(loaded, Some(value));
}

#[test]
fn test_put_get_roundtrip_file_backed() {
    let temp = TempDir::new().unwrap();
    let store = Store::builder().root(temp.path()).open().unwrap();

    let value = Snapshot { name: "Delta Farms".to_owned(), count: 7 };
    store.put("clientData", &value).unwrap();

    let loaded: Option<Snapshot> = store.get("clientData").unwrap();
    assert_eq!(loaded, Some(value));
}

#[test]
fn test_values_survive_reopen() {
    let temp = TempDir::new().unwrap();

    {
        let store = Store::builder().root(temp.path()).open().unwrap();
        store.put("selectedClientId", &"c_0001").unwrap();
    }

    let store = Store::builder().root(temp.path()).create(false).open().unwrap();
    let id: Option<String> = store.get("selectedClientId").unwrap();
    assert_eq!(id.as_deref(), Some("c_0001"));
}

#[test]
fn test_missing_key_reads_as_absent() {
    let store = Store::in_memory();
    let missing: Option<Snapshot> = store.get("campaign_plan_0").unwrap();
    assert!(missing.is_none());
    assert!(!store.contains("campaign_plan_0").unwrap());
}

#[test]
fn test_corrupt_value_reads_as_absent() {
    let temp = TempDir::new().unwrap();
    let store = Store::builder().root(temp.path()).open().unwrap();

    store.put("clients", &vec![1u32, 2, 3]).unwrap();
    std::fs::write(temp.path().join("clients.json"), b"{not json").unwrap();

    // Contains sees the raw slot, get falls back to absent.
    assert!(store.contains("clients").unwrap());
    let loaded: Option<Vec<u32>> = store.get("clients").unwrap();
    assert!(loaded.is_none());
}

#[test]
fn test_type_mismatch_reads_as_absent() {
    let store = Store::in_memory();
    store.put("contractTerms", &"free text terms").unwrap();

    let as_number: Option<u64> = store.get("contractTerms").unwrap();
    assert!(as_number.is_none());

    // The raw value is untouched and still reads back with the right type.
    let as_text: Option<String> = store.get("contractTerms").unwrap();
    assert_eq!(as_text.as_deref(), Some("free text terms"));
}

#[test]
fn test_remove_is_idempotent() {
    let store = Store::in_memory();
    store.put("selectedPackage", &"starter").unwrap();

    store.remove("selectedPackage").unwrap();
    assert!(!store.contains("selectedPackage").unwrap());

    // Removing again must not fail.
    store.remove("selectedPackage").unwrap();
}

#[test]
fn test_last_writer_wins() {
    let store = Store::in_memory();

    store.put("selectedPackage", &"starter").unwrap();
    store.put("selectedPackage", &"growth").unwrap();

    let selected: Option<String> = store.get("selectedPackage").unwrap();
    assert_eq!(selected.as_deref(), Some("growth"));
}

#[test]
fn test_stale_tmp_files_purged_on_open() {
    let temp = TempDir::new().unwrap();
    let stale = temp.path().join("clients.json.ohubtmp.9");
    std::fs::write(&stale, b"partial").unwrap();

    // Backdate the file so it counts as stale regardless of test speed.
    let old = filetime_backdate(&stale);

    let _store = Store::builder().root(temp.path()).open().unwrap();
    if old {
        assert!(!stale.exists(), "stale temp file should be removed on open");
    }
}

/// Best-effort mtime rewind; returns false when the platform refuses.
fn filetime_backdate(path: &std::path::Path) -> bool {
    let Ok(file) = std::fs::File::options().write(true).open(path) else {
        return false;
    };
    let past = std::time::SystemTime::now() - std::time::Duration::from_secs(3600);
    file.set_modified(past).is_ok()
}

#[test]
fn test_backends_behave_identically() {
    let temp = TempDir::new().unwrap();
    let file_store = Store::builder().root(temp.path()).open().unwrap();
    let memory_store = Store::in_memory();

    for store in [&file_store, &memory_store] {
        store.put("packages_master", &vec!["a", "b"]).unwrap();
        let loaded: Option<Vec<String>> = store.get("packages_master").unwrap();
        assert_eq!(loaded, Some(vec!["a".to_owned(), "b".to_owned()]));

        store.remove("packages_master").unwrap();
        assert!(!store.contains("packages_master").unwrap());
    }
}
