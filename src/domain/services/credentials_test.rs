use std::fs;

use anyhow::Result;
use tempdir::TempDir;
use test_utils::users_fixture;

use super::Credentials;
use crate::domain::models::RegisterError;

fn fixture_store(tmp_dir: &TempDir) -> Result<Credentials> {
    let file_path = tmp_dir.path().join("users.txt");
    fs::write(&file_path, users_fixture())?;
    return Ok(Credentials::new(file_path));
}

#[test]
fn it_loads_well_formed_lines() -> Result<()> {
    let tmp_dir = TempDir::new("credentials")?;
    let file_path = tmp_dir.path().join("users.txt");
    fs::write(&file_path, users_fixture())?;

    let users = Credentials::load(&file_path);

    assert_eq!(users.len(), 3);
    assert_eq!(users.get("alice").unwrap(), "pw1");
    assert_eq!(users.get("bob").unwrap(), "hunter2");
    assert_eq!(users.get("carol").unwrap(), "pa:ss");
    return Ok(());
}

#[test]
fn it_loads_empty_store_when_file_is_missing() -> Result<()> {
    let tmp_dir = TempDir::new("credentials")?;
    let users = Credentials::load(&tmp_dir.path().join("missing.txt"));
    assert!(users.is_empty());
    return Ok(());
}

#[test]
fn it_authenticates_exactly_the_stored_pairs() -> Result<()> {
    let tmp_dir = TempDir::new("credentials")?;
    let store = fixture_store(&tmp_dir)?;

    assert!(store.authenticate("alice", "pw1"));
    assert!(store.authenticate("bob", "hunter2"));
    assert!(store.authenticate("carol", "pa:ss"));

    assert!(!store.authenticate("alice", "hunter2"));
    assert!(!store.authenticate("alice", "PW1"));
    assert!(!store.authenticate("alice", ""));
    assert!(!store.authenticate("Alice", "pw1"));
    assert!(!store.authenticate("malformed line", ""));
    assert!(!store.authenticate("dave", "pw1"));
    return Ok(());
}

#[test]
fn it_registers_and_logs_in() -> Result<()> {
    let tmp_dir = TempDir::new("credentials")?;
    let file_path = tmp_dir.path().join("users.txt");
    let mut store = Credentials::new(file_path.clone());

    store.register("alice", "pw1")?;

    assert!(store.authenticate("alice", "pw1"));
    assert!(!store.authenticate("alice", "wrong"));
    assert_eq!(fs::read_to_string(&file_path)?, "alice:pw1\n");

    let reloaded = Credentials::new(file_path);
    assert!(reloaded.authenticate("alice", "pw1"));
    return Ok(());
}

#[test]
fn it_rejects_duplicate_username_regardless_of_password() -> Result<()> {
    let tmp_dir = TempDir::new("credentials")?;
    let file_path = tmp_dir.path().join("users.txt");
    let mut store = Credentials::new(file_path.clone());

    store.register("alice", "pw1")?;
    assert_eq!(store.register("alice", "pw1"), Err(RegisterError::AlreadyExists));
    assert_eq!(store.register("alice", "other"), Err(RegisterError::AlreadyExists));

    assert_eq!(store.len(), 1);
    assert_eq!(fs::read_to_string(&file_path)?, "alice:pw1\n");
    return Ok(());
}

#[test]
fn it_treats_usernames_case_sensitively() -> Result<()> {
    let tmp_dir = TempDir::new("credentials")?;
    let mut store = Credentials::new(tmp_dir.path().join("users.txt"));

    store.register("alice", "pw1")?;
    store.register("Alice", "pw2")?;

    assert_eq!(store.len(), 2);
    return Ok(());
}

#[test]
fn it_rejects_empty_fields() -> Result<()> {
    let tmp_dir = TempDir::new("credentials")?;
    let file_path = tmp_dir.path().join("users.txt");
    let mut store = Credentials::new(file_path.clone());

    assert_eq!(store.register("", "pw1"), Err(RegisterError::Empty));
    assert_eq!(store.register("alice", ""), Err(RegisterError::Empty));

    assert_eq!(store.len(), 0);
    assert!(!file_path.exists());
    return Ok(());
}

#[test]
fn it_ignores_save_failures() -> Result<()> {
    let tmp_dir = TempDir::new("credentials")?;
    let mut store = Credentials::new(tmp_dir.path().join("missing-dir").join("users.txt"));

    store.register("alice", "pw1")?;

    assert!(store.authenticate("alice", "pw1"));
    return Ok(());
}
