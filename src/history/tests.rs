use chrono::{Duration, TimeZone, Utc};
use tempfile::tempdir;

use super::*;

fn at(minute: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 18, 9, 0, 0).unwrap() + Duration::minutes(minute)
}

fn queries(store: &HistoryStore) -> Vec<&str> {
    store.entries().iter().map(|entry| entry.query.as_str()).collect()
}

fn empty_store() -> (HistoryStore, MemoryStorage) {
    let storage = MemoryStorage::new();
    let store = HistoryStore::open(Box::new(storage.clone()));
    (store, storage)
}

#[test]
fn missing_storage_loads_empty() {
    let (store, _) = empty_store();
    assert!(store.is_empty());
}

#[test]
fn corrupt_storage_loads_empty() {
    for contents in [
        "not json",
        "{\"query\":\"x\"}",
        "[{\"query\":\"x\"}]",
        "[{\"query\":\"\",\"time\":\"2026-10-18T09:00:00Z\",\"topResultTitle\":\"\"}]",
        "[{\"query\":\" padded \",\"time\":\"2026-10-18T09:00:00Z\",\"topResultTitle\":\"\"}]",
        "[{\"query\":\"x\",\"time\":\"yesterday\",\"topResultTitle\":\"\"}]",
        "[1, 2, 3]",
    ] {
        let store = HistoryStore::open(Box::new(MemoryStorage::with_contents(contents)));
        assert!(store.is_empty(), "expected empty history for {contents:?}");
    }
}

#[test]
fn valid_storage_is_rehydrated() {
    let contents = r#"[
        {"query":"rust","time":"2026-10-18T09:00:00.000Z","topResultTitle":"The Rust Book"},
        {"query":"tokio","time":"2026-10-17T09:00:00.000Z","topResultTitle":""}
    ]"#;
    let store = HistoryStore::open(Box::new(MemoryStorage::with_contents(contents)));
    assert_eq!(queries(&store), vec!["rust", "tokio"]);
    assert_eq!(store.entries()[0].top_result_title, "The Rust Book");
    assert_eq!(store.entries()[0].time, at(0));
}

#[test]
fn record_prepends_and_persists() {
    let (mut store, storage) = empty_store();
    store.record_at("first", "A", at(0));
    store.record_at("second", "B", at(1));

    assert_eq!(queries(&store), vec!["second", "first"]);
    let persisted = parse(&storage.contents().expect("persisted")).expect("valid json");
    assert_eq!(persisted, store.entries());
}

#[test]
fn record_trims_and_ignores_blank_queries() {
    let (mut store, storage) = empty_store();
    store.record_at("   ", "ignored", at(0));
    assert!(store.is_empty());
    assert!(storage.contents().is_none());

    store.record_at("  padded  ", "", at(0));
    assert_eq!(queries(&store), vec!["padded"]);
}

#[test]
fn store_never_exceeds_capacity_and_evicts_oldest() {
    let (mut store, _) = empty_store();
    for index in 0..MAX_ENTRIES {
        store.record_at(&format!("query {index}"), "", at(index as i64));
    }
    assert_eq!(store.len(), MAX_ENTRIES);

    store.record_at("ninth", "", at(100));
    assert_eq!(store.len(), MAX_ENTRIES);
    assert_eq!(store.entries()[0].query, "ninth");
    assert!(!queries(&store).contains(&"query 0"));
    assert!(queries(&store).contains(&"query 1"));
}

#[test]
fn touched_entry_survives_eviction() {
    let (mut store, _) = empty_store();
    for index in 0..MAX_ENTRIES {
        store.record_at(&format!("query {index}"), "", at(index as i64));
    }
    let oldest = store.entries().last().cloned().unwrap();
    store.touch(&oldest);

    store.record_at("fresh", "", at(100));
    assert!(queries(&store).contains(&"query 0"));
    assert!(!queries(&store).contains(&"query 1"));
}

#[test]
fn duplicate_query_moves_to_front_with_fresh_time() {
    let (mut store, _) = empty_store();
    store.record_at("alpha", "old title", at(0));
    store.record_at("beta", "", at(1));
    store.record_at("alpha", "new title", at(2));

    assert_eq!(queries(&store), vec!["alpha", "beta"]);
    let alpha = &store.entries()[0];
    assert_eq!(alpha.time, at(2));
    assert_eq!(alpha.top_result_title, "new title");
}

#[test]
fn query_uniqueness_is_case_sensitive() {
    let (mut store, _) = empty_store();
    store.record_at("Rust", "", at(0));
    store.record_at("rust", "", at(1));
    assert_eq!(queries(&store), vec!["rust", "Rust"]);
}

#[test]
fn touch_keeps_time_and_title() {
    let (mut store, storage) = empty_store();
    store.record_at("alpha", "A", at(0));
    store.record_at("beta", "B", at(1));

    let alpha = store.entries()[1].clone();
    store.touch(&alpha);

    assert_eq!(queries(&store), vec!["alpha", "beta"]);
    assert_eq!(store.entries()[0], alpha);
    let persisted = parse(&storage.contents().unwrap()).unwrap();
    assert_eq!(persisted[0], alpha);
}

#[test]
fn write_failures_keep_memory_authoritative() {
    let mut store = HistoryStore::open(Box::new(MemoryStorage::failing()));
    let entries = store.record_at("offline", "title", at(0)).to_vec();
    assert_eq!(entries.len(), 1);
    assert_eq!(queries(&store), vec!["offline"]);
}

#[test]
fn parse_drops_duplicates_and_caps_length() {
    let mut entries: Vec<HistoryEntry> = (0..10)
        .map(|index| HistoryEntry::new(format!("q{index}"), at(index), ""))
        .collect();
    entries.insert(1, HistoryEntry::new("q0", at(50), "dup"));
    let json = serde_json::to_string(&entries).unwrap();

    let parsed = parse(&json).unwrap();
    assert_eq!(parsed.len(), MAX_ENTRIES);
    assert_eq!(parsed[0].query, "q0");
    assert_eq!(parsed[1].query, "q1");
}

#[test]
fn file_storage_round_trips_across_stores() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("recent_searches.json");

    {
        let mut store = HistoryStore::open(Box::new(JsonFileStorage::new(&path)));
        assert!(store.is_empty());
        store.record_at("climate policy", "X", at(0));
    }

    let reopened = HistoryStore::open(Box::new(JsonFileStorage::new(&path)));
    assert_eq!(queries(&reopened), vec!["climate policy"]);
    assert_eq!(reopened.entries()[0].top_result_title, "X");

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"topResultTitle\":\"X\""));
}

#[test]
fn file_storage_reports_missing_file_as_none() {
    let dir = tempdir().unwrap();
    let storage = JsonFileStorage::new(dir.path().join("absent.json"));
    assert!(storage.read().unwrap().is_none());
}
