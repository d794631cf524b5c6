//! CRUD operation tests for FileStore

use std::fs;

use bingo_core::{Card, CardDraft, CardStore, FileStore, Prediction, StoreError};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn open_store() -> (TempDir, FileStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path()).unwrap();
    (dir, store)
}

/// Helper to build a draft with `n` predictions named P0..Pn
fn draft_with(name: &str, n: usize) -> CardDraft {
    (0..n).fold(CardDraft::new(name), |draft, i| {
        draft.prediction(Prediction::new(format!("P{}", i)))
    })
}

#[test]
fn test_create_and_get() {
    let (_dir, store) = open_store();

    let card = store
        .create(CardDraft::new("Finals").prediction(Prediction::new("A")))
        .unwrap();

    assert_eq!(card.id.as_str().len(), 8);
    assert!(card
        .id
        .as_str()
        .chars()
        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    assert_eq!(card.name, "Finals");
    assert_eq!(card.predictions, vec![Prediction::new("A")]);

    let retrieved = store.get(card.id.as_str()).unwrap();
    assert_eq!(retrieved, card);
}

#[test]
fn test_round_trip_keeps_every_field_and_order() {
    let (_dir, store) = open_store();
    let draft = CardDraft::new("Season")
        .prediction(Prediction::new("Third").description("goes last").note("n3"))
        .prediction(Prediction::new("First").state(true))
        .prediction(Prediction::new("Second").state(false));

    let created = store.create(draft.clone()).unwrap();
    let fetched = store.get(created.id.as_str()).unwrap();

    assert_eq!(fetched, Card::from_draft(created.id.clone(), draft));
}

#[test]
fn test_create_assigns_distinct_ids() {
    let (_dir, store) = open_store();
    let a = store.create(CardDraft::new("a")).unwrap();
    let b = store.create(CardDraft::new("a")).unwrap();
    assert_ne!(a.id, b.id);
    assert_eq!(store.list().unwrap().len(), 2);
}

#[test]
fn test_get_nonexistent() {
    let (_dir, store) = open_store();
    let result = store.get("deadbeef");
    assert!(matches!(result, Err(StoreError::NotFound(id)) if id == "deadbeef"));
}

#[test]
fn test_get_unaddressable_id_is_not_found() {
    let (dir, store) = open_store();
    fs::write(dir.path().join("secret.txt"), "x").unwrap();
    assert!(store.get("../secret").unwrap_err().is_not_found());
    assert!(store.get("secret.txt").unwrap_err().is_not_found());
}

#[test]
fn test_update_nonexistent_creates_nothing() {
    let (dir, store) = open_store();

    let result = store.update("deadbeef", draft_with("x", 1));
    assert!(matches!(result, Err(StoreError::NotFound(_))));

    assert!(!dir.path().join("deadbeef.json").exists());
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn test_update_replaces_whole_record() {
    let (_dir, store) = open_store();
    let card = store.create(draft_with("Before", 3)).unwrap();

    let updated = store
        .update(card.id.as_str(), CardDraft::new("After").prediction(Prediction::new("Only")))
        .unwrap();
    assert_eq!(updated.id, card.id);

    let fetched = store.get(card.id.as_str()).unwrap();
    assert_eq!(fetched.name, "After");
    assert_eq!(fetched.predictions, vec![Prediction::new("Only")]);
}

#[test]
fn test_update_clears_optional_fields() {
    let (_dir, store) = open_store();
    let card = store
        .create(CardDraft::new("x").prediction(Prediction::new("A").state(true).note("called it")))
        .unwrap();

    store
        .update(card.id.as_str(), CardDraft::new("x").prediction(Prediction::new("A")))
        .unwrap();

    let fetched = store.get(card.id.as_str()).unwrap();
    assert_eq!(fetched.predictions[0].state, None);
    assert_eq!(fetched.predictions[0].note, None);
}

#[test]
fn test_exists() {
    let (_dir, store) = open_store();
    let card = store.create(CardDraft::new("x")).unwrap();
    assert!(store.exists(card.id.as_str()).unwrap());
    assert!(!store.exists("00000000").unwrap());
}

#[test]
fn test_legacy_record_without_name() {
    let (dir, store) = open_store();
    fs::write(
        dir.path().join("0ld0ne01.json"),
        r#"{"id": "0ld0ne01", "predictions": [{"name": "A", "state": true}]}"#,
    )
    .unwrap();

    let card = store.get("0ld0ne01").unwrap();
    assert_eq!(card.name, "");
    assert_eq!(card.predictions, vec![Prediction::new("A").state(true)]);
}

#[test]
fn test_legacy_record_with_null_name_and_no_id() {
    let (dir, store) = open_store();
    fs::write(
        dir.path().join("abcdef12.json"),
        r#"{"name": null, "predictions": []}"#,
    )
    .unwrap();

    let card = store.get("abcdef12").unwrap();
    assert_eq!(card.id.as_str(), "abcdef12");
    assert_eq!(card.name, "");
}

#[test]
fn test_get_corrupt_record() {
    let (dir, store) = open_store();
    fs::write(dir.path().join("badbad00.json"), "{not json").unwrap();
    fs::write(dir.path().join("badbad01.json"), r#"{"name": "no predictions"}"#).unwrap();

    assert!(matches!(store.get("badbad00"), Err(StoreError::Corrupt { .. })));
    assert!(matches!(store.get("badbad01"), Err(StoreError::Corrupt { .. })));
}

#[test]
fn test_update_repairs_corrupt_record() {
    let (dir, store) = open_store();
    fs::write(dir.path().join("badbad00.json"), "{not json").unwrap();

    store.update("badbad00", draft_with("fixed", 2)).unwrap();
    assert_eq!(store.get("badbad00").unwrap().predictions.len(), 2);
}
