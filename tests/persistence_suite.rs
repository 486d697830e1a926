use std::fs;
use std::sync::Arc;

use tempfile::tempdir;
use tracker_core::{
    errors::TrackerError,
    ledger::{Category, TransactionStore},
    storage::{keys, FileStorage, StorageBackend},
};

#[test]
fn added_records_roundtrip_through_storage() {
    let temp = tempdir().unwrap();
    let storage = FileStorage::new(Some(temp.path().to_path_buf())).unwrap();
    let mut store = TransactionStore::open(Arc::new(storage));
    let added = store
        .add("Coffee", "-4.50", Category::FoodAndDining)
        .unwrap();

    let storage = FileStorage::new(Some(temp.path().to_path_buf())).unwrap();
    let reloaded = TransactionStore::open(Arc::new(storage));
    assert_eq!(reloaded.len(), 1);
    let stored = &reloaded.transactions()[0];
    assert_eq!(stored.id, added.id);
    assert_eq!(stored.desc, "Coffee");
    assert!((stored.amount + 4.5).abs() < f64::EPSILON);
    assert_eq!(stored.category, Category::FoodAndDining);
}

#[test]
fn stored_layout_uses_flat_record_fields() {
    let temp = tempdir().unwrap();
    let storage = FileStorage::new(Some(temp.path().to_path_buf())).unwrap();
    let mut store = TransactionStore::open(Arc::new(storage.clone()));
    store.add("Paycheck", "2000", Category::Salary).unwrap();

    let json = storage.get(keys::TRANSACTIONS).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let record = &value.as_array().unwrap()[0];
    assert!(record.get("id").is_some());
    assert_eq!(record["desc"], "Paycheck");
    assert_eq!(record["amount"], 2000.0);
    assert_eq!(record["category"], "Salary");
}

#[test]
fn every_mutation_rewrites_the_whole_collection() {
    let temp = tempdir().unwrap();
    let storage = FileStorage::new(Some(temp.path().to_path_buf())).unwrap();
    let mut store = TransactionStore::open(Arc::new(storage.clone()));
    let coffee = store
        .add("Coffee", "-4.50", Category::FoodAndDining)
        .unwrap();
    store.add("Paycheck", "2000", Category::Salary).unwrap();

    store
        .update(&coffee.id, "Espresso", "-5.25", Category::FoodAndDining)
        .unwrap();
    let json = storage.get(keys::TRANSACTIONS).unwrap().unwrap();
    assert!(json.contains("Espresso"));
    assert!(json.contains("Paycheck"));

    store.remove(&coffee.id).unwrap();
    let json = storage.get(keys::TRANSACTIONS).unwrap().unwrap();
    assert!(!json.contains("Espresso"));
    assert!(json.contains("Paycheck"));
}

#[test]
fn malformed_collection_loads_empty() {
    let temp = tempdir().unwrap();
    let storage = FileStorage::new(Some(temp.path().to_path_buf())).unwrap();
    storage.set(keys::TRANSACTIONS, "{\"broken\":").unwrap();
    let store = TransactionStore::open(Arc::new(storage));
    assert!(store.is_empty());
}

#[test]
fn atomic_write_failure_preserves_existing_value() {
    let temp = tempdir().unwrap();
    let storage = FileStorage::new(Some(temp.path().to_path_buf())).unwrap();
    storage.set("userBudget", "100").unwrap();

    // A directory squatting on the temp-file path forces File::create to fail.
    let tmp_collision = temp.path().join("userBudget.tmp");
    fs::create_dir_all(&tmp_collision).unwrap();

    let result = storage.set("userBudget", "999");
    assert!(matches!(result, Err(TrackerError::Io(_))));
    assert_eq!(storage.get("userBudget").unwrap().as_deref(), Some("100"));
}

#[test]
fn swallowed_write_failures_keep_memory_ahead_of_storage() {
    let temp = tempdir().unwrap();
    let storage = FileStorage::new(Some(temp.path().to_path_buf())).unwrap();
    let mut store = TransactionStore::open(Arc::new(storage.clone()));

    let tmp_collision = temp.path().join(format!("{}.tmp", keys::TRANSACTIONS));
    fs::create_dir_all(&tmp_collision).unwrap();

    // The add itself succeeds even though both write attempts fail.
    store.add("Coffee", "-4.50", Category::FoodAndDining).unwrap();
    assert_eq!(store.len(), 1);
    assert!(storage.get(keys::TRANSACTIONS).unwrap().is_none());
}
