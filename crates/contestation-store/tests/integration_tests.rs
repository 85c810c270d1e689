//! Integration tests for contestation-store
//!
//! These tests verify the save / get / list cycle for processed petitions.

use contestation_domain::traits::{PetitionQuery, PetitionStore};
use contestation_domain::{PetitionId, PetitionRow};
use contestation_store::{SqliteStore, StoreError};

fn row(author: &str, case_type: &str) -> PetitionRow {
    PetitionRow {
        raw_text: format!("Autor: {}\nTexto da petição", author),
        author_name: author.to_string(),
        deadline: "2026-11-03".to_string(),
        case_value: 1234.56,
        case_type: case_type.to_string(),
        case_description: "Autor: X. Texto da petição".to_string(),
        contestation_model: "EXCELENTÍSSIMO(A) SENHOR(A)".to_string(),
    }
}

#[test]
fn test_store_initialization() {
    let store = SqliteStore::new(":memory:");
    assert!(store.is_ok(), "Store should initialize successfully");
    assert_eq!(store.unwrap().count().unwrap(), 0);
}

#[test]
fn test_save_and_get_petition() {
    let mut store = SqliteStore::new(":memory:").unwrap();
    let original = row("João Silva", "Extravio de Bagagens");

    let id = store.save(original.clone()).unwrap();

    let stored = store.get(id).unwrap().expect("petition should exist");
    assert_eq!(stored.id, id);
    assert_eq!(stored.row, original);
    assert!(stored.uploaded_at > 0);
}

#[test]
fn test_get_unknown_petition() {
    let store = SqliteStore::new(":memory:").unwrap();
    let id = PetitionId::new();

    assert!(store.get(id).unwrap().is_none());
    assert!(matches!(store.fetch(id), Err(StoreError::NotFound(_))));
}

#[test]
fn test_list_is_oldest_first() {
    let mut store = SqliteStore::new(":memory:").unwrap();
    let ids: Vec<PetitionId> = ["A", "B", "C"]
        .iter()
        .map(|author| store.save(row(author, "Outros")).unwrap())
        .collect();

    let listed = store.list(&PetitionQuery::default()).unwrap();
    let listed_ids: Vec<PetitionId> = listed.iter().map(|p| p.id).collect();
    assert_eq!(listed_ids, ids);
    assert_eq!(store.count().unwrap(), 3);
}

#[test]
fn test_list_by_case_type_and_limit() {
    let mut store = SqliteStore::new(":memory:").unwrap();
    for i in 0..5 {
        let case_type = if i % 2 == 0 { "Outros" } else { "Indenização por atraso de voo" };
        store.save(row(&format!("Autor {}", i), case_type)).unwrap();
    }

    let query = PetitionQuery {
        case_type: Some("Outros".to_string()),
        ..Default::default()
    };
    let others = store.list(&query).unwrap();
    assert_eq!(others.len(), 3);
    assert!(others.iter().all(|p| p.row.case_type == "Outros"));

    let limited = store
        .list(&PetitionQuery {
            limit: Some(2),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(limited.len(), 2);
    assert_eq!(limited[0].row.author_name, "Autor 0");
}

#[test]
fn test_sentinel_values_are_stored_verbatim() {
    let mut store = SqliteStore::new(":memory:").unwrap();
    let mut sentinel_row = row("Não encontrado", "Outros");
    sentinel_row.deadline = "Não encontrado".to_string();
    sentinel_row.case_value = 0.0;

    let id = store.save(sentinel_row).unwrap();
    let stored = store.fetch(id).unwrap();
    assert_eq!(stored.row.author_name, "Não encontrado");
    assert_eq!(stored.row.deadline, "Não encontrado");
    assert_eq!(stored.row.case_value, 0.0);
}

#[test]
fn test_on_disk_store_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("petitions.db");

    let id = {
        let mut store = SqliteStore::new(&path).unwrap();
        store.save(row("Maria", "Indenização por Danos Morais")).unwrap()
    };

    let reopened = SqliteStore::new(&path).unwrap();
    let stored = reopened.fetch(id).unwrap();
    assert_eq!(stored.row.author_name, "Maria");
}
