//! Search pipeline scenarios: teardown, filtering, failure, staleness, and
//! the criteria → engine dispatch loop

mod common;

use common::*;
use crossbeam_channel::unbounded;
use nearbite::prelude::*;

#[tokio::test]
async fn closed_businesses_are_filtered_and_order_preserved() {
    let businesses = vec![
        business("Nook", false),
        business("Gone Burger", true),
        business("Tavola", false),
        business("Sushi Hub", false),
    ];
    let (mut engine, handles) = engine_with_outcome(Ok(businesses));

    engine.search(default_query()).await;

    let names: Vec<_> = engine
        .markers()
        .iter()
        .map(|m| m.business().name.clone())
        .collect();
    assert_eq!(names, ["Nook", "Tavola", "Sushi Hub"]);

    // Markers and list entries share the 1-based ordering.
    let display: Vec<_> = engine.markers().iter().map(|m| m.display_index()).collect();
    assert_eq!(display, [1, 2, 3]);

    let entries = match handles.list_ops().last().cloned() {
        Some(ListOp::Entries(entries)) => entries,
        other => panic!("expected entries, got {:?}", other),
    };
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].index, 1);
    assert_eq!(entries[0].name, "Nook");
    assert_eq!(entries[2].index, 3);
    assert_eq!(entries[2].name, "Sushi Hub");
}

#[tokio::test]
async fn all_closed_results_surface_no_results_state() {
    let businesses = vec![
        business("Gone Burger", true),
        business("Shuttered Sushi", true),
        business("Closed Cafe", true),
    ];
    let (mut engine, handles) = engine_with_outcome(Ok(businesses));

    engine.search(default_query()).await;

    assert!(engine.markers().is_empty());
    assert_eq!(
        handles.notices(),
        ["warn: Search returned no results."]
    );
    assert_eq!(handles.list_ops().last(), Some(&ListOp::Empty));
}

#[tokio::test]
async fn transport_failure_leaves_zero_markers_and_retrievable_error() {
    let (mut engine, handles) =
        engine_with_outcome(Err(SearchError::new(Some(503), "Service Unavailable")));

    engine.search(default_query()).await;

    assert!(engine.markers().is_empty());
    let error = engine.last_error().expect("error retained");
    assert_eq!(error.status, Some(503));
    assert_eq!(error.message, "Service Unavailable");

    let notices = handles.notices();
    assert_eq!(notices.len(), 1);
    assert!(notices[0].starts_with("error: Restaurant search failed (503"));

    // Teardown ran even though the call failed.
    assert_eq!(handles.list_ops().first(), Some(&ListOp::Clear));
}

#[tokio::test]
async fn new_search_tears_down_previous_markers_first() {
    let businesses = vec![business("Nook", false), business("Tavola", false)];
    let (mut engine, handles) = engine_with_outcome(Ok(businesses));

    engine.search(default_query()).await;
    let old_ids = marker_ids(&engine);
    handles.clear_surface_ops();

    engine.search(default_query()).await;

    let ops = handles.surface_ops();
    for id in &old_ids {
        assert!(ops.contains(&SurfaceOp::Remove(*id)));
    }
    let new_ids = marker_ids(&engine);
    assert_eq!(new_ids.len(), 2);
    for id in &new_ids {
        assert!(!old_ids.contains(id));
    }
}

#[tokio::test]
async fn stale_response_is_dropped_and_current_one_applies() {
    let (mut engine, handles) = engine_with_outcome(Ok(vec![]));

    let first = engine.begin_search(default_query());
    let second = engine.begin_search(default_query());

    // The older request resolves after the newer one started.
    engine.apply_response(&first, Ok(vec![business("Stale Nook", false)]));
    assert!(engine.markers().is_empty());

    engine.apply_response(&second, Ok(vec![business("Fresh Tavola", false)]));
    let names: Vec<_> = engine
        .markers()
        .iter()
        .map(|m| m.business().name.clone())
        .collect();
    assert_eq!(names, ["Fresh Tavola"]);

    // A failure arriving for the stale ticket is dropped too.
    let third = engine.begin_search(default_query());
    engine.apply_response(&second, Err(SearchError::new(Some(500), "late failure")));
    assert!(engine.last_error().is_none());

    engine.apply_response(&third, Ok(vec![]));
    assert!(handles
        .notices()
        .contains(&"warn: Search returned no results.".to_string()));
}

#[tokio::test]
async fn new_results_restore_hover_after_a_pinned_marker() {
    let businesses = vec![business("Nook", false)];
    let (mut engine, _handles) = engine_with_outcome(Ok(businesses));

    engine.search(default_query()).await;
    let id = marker_ids(&engine)[0];
    engine.handle_event(MarkerEvent::Click(id));
    assert!(engine.hover_suppressed());

    engine.search(default_query()).await;
    assert!(!engine.hover_suppressed());

    let id = marker_ids(&engine)[0];
    engine.handle_event(MarkerEvent::HoverEnter(id));
    assert_eq!(engine.markers().active().unwrap().id(), id);
}

#[tokio::test]
async fn criteria_changes_drive_searches_through_the_channel() {
    let (tx, rx) = unbounded();
    let mut criteria = SearchCriteria::new(CriteriaCatalog::default(), tx);

    let businesses = vec![business("Nook", false)];
    let (mut engine, _handles) = engine_with_outcome(Ok(businesses));

    // Initial query from construction.
    let query = rx.try_recv().expect("initial query");
    engine.search(query).await;
    assert_eq!(engine.markers().len(), 1);

    // One effective change → exactly one queued query with the full tuple.
    criteria.set_category("pizza").unwrap();
    criteria.set_category("pizza").unwrap();
    let query = rx.try_recv().expect("query for category change");
    assert_eq!(query.category, "pizza");
    assert_eq!(query.radius, 500);
    assert!(rx.try_recv().is_err());

    engine.search(query).await;
    assert_eq!(engine.markers().len(), 1);
}
