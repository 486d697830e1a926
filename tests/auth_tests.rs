use std::sync::Arc;

use tempfile::tempdir;
use tracker_core::{
    auth::{AuthError, AuthGate, AuthState},
    storage::{keys, FileStorage, StorageBackend},
};

fn storage_in(temp: &tempfile::TempDir) -> Arc<FileStorage> {
    Arc::new(FileStorage::new(Some(temp.path().to_path_buf())).unwrap())
}

#[test]
fn wrong_password_is_rejected_without_state_change() {
    let temp = tempdir().unwrap();
    let mut gate = AuthGate::open(storage_in(&temp));
    gate.signup("alice", "correct").unwrap();
    gate.logout();

    let err = gate.login("alice", "wrong").expect_err("mismatch");
    assert!(matches!(err, AuthError::InvalidCredentials));
    assert_eq!(gate.state(), AuthState::Login);
    assert_eq!(gate.session_user(), None);
}

#[test]
fn wrong_username_is_indistinguishable_from_wrong_password() {
    let temp = tempdir().unwrap();
    let mut gate = AuthGate::open(storage_in(&temp));
    gate.signup("alice", "correct").unwrap();
    gate.logout();

    let err = gate.login("mallory", "correct").expect_err("mismatch");
    assert!(matches!(err, AuthError::InvalidCredentials));
}

#[test]
fn stored_record_survives_restart_and_logout() {
    let temp = tempdir().unwrap();
    {
        let mut gate = AuthGate::open(storage_in(&temp));
        gate.signup("alice", "correct").unwrap();
        gate.logout();
    }
    let mut gate = AuthGate::open(storage_in(&temp));
    assert_eq!(gate.state(), AuthState::Login);
    gate.login("alice", "correct").unwrap();
    assert!(gate.is_authenticated());
}

#[test]
fn password_is_not_stored_in_recoverable_form() {
    let temp = tempdir().unwrap();
    let storage = storage_in(&temp);
    let mut gate = AuthGate::open(Arc::clone(&storage) as Arc<dyn StorageBackend>);
    gate.signup("alice", "hunter2").unwrap();

    let record = storage.get(keys::CREDENTIALS).unwrap().unwrap();
    assert!(!record.contains("hunter2"));
    assert!(record.contains("argon2"));
}

#[test]
fn malformed_credentials_fall_back_to_signup() {
    let temp = tempdir().unwrap();
    let storage = storage_in(&temp);
    storage.set(keys::CREDENTIALS, "not json").unwrap();
    let gate = AuthGate::open(Arc::clone(&storage) as Arc<dyn StorageBackend>);
    assert_eq!(gate.state(), AuthState::Signup);
}
