use std::time::Duration;

use super::*;
use crate::testing::{GatedBackend, memory_history, response};

fn status_error() -> SearchError {
    SearchError::Status {
        status: reqwest::StatusCode::BAD_GATEWAY,
    }
}

#[test]
fn blank_queries_are_ignored() {
    let (mut history, storage) = memory_history();
    let mut session = SearchSession::new();
    let ticket = session.start("seed").unwrap();
    session.complete(ticket.id, Ok(response("s", &["A"])), &mut history);
    let before = session.state().clone();
    let persisted = storage.contents();

    for query in ["", "   ", "\t\n"] {
        assert!(session.start(query).is_none());
    }

    assert_eq!(session.state(), &before);
    assert_eq!(session.phase(), SessionPhase::Idle);
    assert_eq!(history.len(), 1);
    assert_eq!(storage.contents(), persisted);
}

#[test]
fn loading_keeps_previous_output() {
    let (mut history, _) = memory_history();
    let mut session = SearchSession::new();
    let first = session.start("first").unwrap();
    session.complete(first.id, Ok(response("first summary", &["A"])), &mut history);

    session.start("second").unwrap();
    let state = session.state();
    assert!(state.is_loading());
    assert_eq!(state.query(), "second");
    assert_eq!(state.combined_summary(), "first summary");
    assert_eq!(state.results()[0].title, "A");
    assert_eq!(session.phase(), SessionPhase::Loading);
}

#[test]
fn success_replaces_output_and_records_history() {
    let (mut history, _) = memory_history();
    let mut session = SearchSession::new();
    let ticket = session.start("  climate policy ").unwrap();
    assert_eq!(ticket.query, "climate policy");

    let completion = session.complete(ticket.id, Ok(response("summary", &["X", "Y"])), &mut history);
    assert!(matches!(completion, Completion::Succeeded { result_count: 2 }));

    let state = session.state();
    assert!(!state.is_loading());
    assert_eq!(state.combined_summary(), "summary");
    assert_eq!(state.results().len(), 2);
    assert_eq!(history.entries()[0].query, "climate policy");
    assert_eq!(history.entries()[0].top_result_title, "X");
}

#[test]
fn empty_response_records_blank_title() {
    let (mut history, _) = memory_history();
    let mut session = SearchSession::new();
    let ticket = session.start("nothing").unwrap();
    session.complete(ticket.id, Ok(SearchResponse::default()), &mut history);

    assert!(session.state().results().is_empty());
    assert_eq!(history.entries()[0].top_result_title, "");
}

#[test]
fn failure_keeps_previous_output_and_history() {
    let (mut history, storage) = memory_history();
    let mut session = SearchSession::new();
    let ok = session.start("ok").unwrap();
    session.complete(ok.id, Ok(response("kept", &["K"])), &mut history);
    let persisted = storage.contents();

    let failing = session.start("broken").unwrap();
    let completion = session.complete(failing.id, Err(status_error()), &mut history);
    assert!(matches!(completion, Completion::Failed(SearchError::Status { .. })));

    let state = session.state();
    assert!(!state.is_loading());
    assert_eq!(state.combined_summary(), "kept");
    assert_eq!(state.results()[0].title, "K");
    assert_eq!(history.len(), 1);
    assert_eq!(storage.contents(), persisted);
    assert_eq!(session.phase(), SessionPhase::Idle);
}

#[test]
fn late_response_from_older_request_is_discarded() {
    let (mut history, _) = memory_history();
    let mut session = SearchSession::new();
    let a = session.start("a").unwrap();
    let b = session.start("b").unwrap();
    assert!(b.id > a.id);

    let applied = session.complete(b.id, Ok(response("from b", &["B"])), &mut history);
    assert!(matches!(applied, Completion::Succeeded { .. }));
    let stale = session.complete(a.id, Ok(response("from a", &["A"])), &mut history);
    assert!(matches!(stale, Completion::Superseded));

    assert_eq!(session.state().combined_summary(), "from b");
    assert_eq!(session.state().results()[0].title, "B");
    let queries: Vec<_> = history.entries().iter().map(|e| e.query.as_str()).collect();
    assert_eq!(queries, vec!["b"]);
}

#[test]
fn early_response_from_older_request_keeps_loading() {
    let (mut history, _) = memory_history();
    let mut session = SearchSession::new();
    let a = session.start("a").unwrap();
    let b = session.start("b").unwrap();

    let stale = session.complete(a.id, Err(status_error()), &mut history);
    assert!(matches!(stale, Completion::Superseded));
    assert!(session.state().is_loading());

    session.complete(b.id, Ok(response("b", &[])), &mut history);
    assert!(!session.state().is_loading());
}

#[test]
fn repeated_completion_is_ignored() {
    let (mut history, _) = memory_history();
    let mut session = SearchSession::new();
    let ticket = session.start("once").unwrap();
    session.complete(ticket.id, Ok(response("first", &[])), &mut history);
    let again = session.complete(ticket.id, Ok(response("second", &[])), &mut history);
    assert!(matches!(again, Completion::Superseded));
    assert_eq!(session.state().combined_summary(), "first");
}

#[test]
fn threaded_fetches_resolve_by_start_order() {
    let (backend, started) = GatedBackend::new();
    let release_a = backend.gate("a");
    let release_b = backend.gate("b");
    let runtime = SearchRuntime::spawn(backend).unwrap();
    let (mut history, _) = memory_history();
    let mut session = SearchSession::new();

    let a = session.start("a").unwrap();
    runtime
        .dispatch(a.into_request(Country::default(), UiLanguage::default()))
        .unwrap();
    assert_eq!(started.recv_timeout(Duration::from_secs(1)).unwrap(), "a");

    let b = session.start("b").unwrap();
    runtime
        .dispatch(b.into_request(Country::default(), UiLanguage::default()))
        .unwrap();
    assert_eq!(started.recv_timeout(Duration::from_secs(1)).unwrap(), "b");

    release_b.send(Ok(response("from b", &["B"]))).unwrap();
    let first = runtime.recv_timeout(Duration::from_secs(1)).unwrap();
    assert!(matches!(
        session.complete(first.id, first.result, &mut history),
        Completion::Succeeded { .. }
    ));

    release_a.send(Ok(response("from a", &["A"]))).unwrap();
    let second = runtime.recv_timeout(Duration::from_secs(1)).unwrap();
    assert!(matches!(
        session.complete(second.id, second.result, &mut history),
        Completion::Superseded
    ));

    assert_eq!(session.state().combined_summary(), "from b");
    assert_eq!(history.entries()[0].query, "b");
    assert_eq!(history.len(), 1);
}
