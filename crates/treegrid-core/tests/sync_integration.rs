//! End-to-end exercise of the store + coordinator against the mock api:
//! browse into a folder, delete its only file, and absorb a refresh in
//! which the folder is now empty.
//!
//! Run with `cargo test --features mock`.

use treegrid_core::api::mock::MockApi;
use treegrid_core::{
    EntryAction, FileApi, Mutation, OperationRejected, SnapshotError, TreeNode, TreeStore,
    ViewModel, apply,
};

fn initial_snapshot() -> TreeNode {
    TreeNode::from_json(
        r#"{
            "name": "library", "path": "", "is_dir": true,
            "children": [
                {"name": "docs", "path": "docs", "is_dir": true,
                 "children": [
                    {"name": "a.txt", "path": "docs/a.txt", "is_dir": false, "size": 3}
                 ]}
            ]
        }"#,
    )
    .unwrap()
}

fn emptied_snapshot() -> TreeNode {
    TreeNode::from_json(
        r#"{
            "name": "library", "path": "", "is_dir": true,
            "children": [
                {"name": "docs", "path": "docs", "is_dir": true, "children": []}
            ]
        }"#,
    )
    .unwrap()
}

#[tokio::test]
async fn test_delete_then_refresh_leaves_an_empty_grid() {
    let api = MockApi::new();
    api.push_snapshot(Ok(initial_snapshot()));

    let mut store = TreeStore::new("");
    match api.fetch_snapshot().await {
        Ok(root) => store.replace_snapshot(root),
        Err(err) => panic!("initial fetch failed: {err}"),
    }

    // Navigate into "docs"; the file is there with its full action set.
    store.set_path("docs");
    let ViewModel::Grid(grid) = store.project() else {
        panic!("expected a grid for docs");
    };
    assert_eq!(grid.entries.len(), 1);
    assert!(grid.entries[0].actions.contains(&EntryAction::Delete));

    // Delete it. The coordinator's settle-time refresh returns a snapshot
    // in which docs still exists but is empty.
    api.push_snapshot(Ok(emptied_snapshot()));
    let report = apply(
        &api,
        Mutation::Delete {
            path: "docs/a.txt".into(),
        },
    )
    .await;
    assert!(report.outcome.is_ok());
    let refreshed = report.refresh.expect("refresh should succeed");
    store.replace_snapshot(refreshed);

    // Still in docs, now an empty grid with a back affordance to root.
    assert_eq!(store.current_path(), "docs");
    let ViewModel::Grid(grid) = store.project() else {
        panic!("expected an empty grid, not an error view");
    };
    assert!(grid.entries.is_empty());
    assert_eq!(grid.back, Some(String::new()));
}

#[tokio::test]
async fn test_viewed_folder_deleted_remotely_renders_nothing() {
    let api = MockApi::new();
    let mut store = TreeStore::new("docs");
    api.push_snapshot(Ok(initial_snapshot()));
    store.replace_snapshot(api.fetch_snapshot().await.unwrap());
    assert!(matches!(store.project(), ViewModel::Grid(_)));

    // Someone removed "docs" behind our back; the next refresh drops it.
    let without_docs =
        TreeNode::from_json(r#"{"name": "library", "path": "", "is_dir": true, "children": []}"#)
            .unwrap();
    store.replace_snapshot(without_docs);

    assert_eq!(store.current_path(), "docs");
    assert_eq!(store.project(), ViewModel::NothingToShow);
}

#[tokio::test]
async fn test_failed_mutation_still_resynchronizes() {
    let api = MockApi::new();
    let mut store = TreeStore::new("");
    api.push_snapshot(Ok(initial_snapshot()));
    store.replace_snapshot(api.fetch_snapshot().await.unwrap());

    api.push_outcome(Err(OperationRejected {
        status: Some(404),
        message: "File not found".into(),
    }));
    api.push_snapshot(Ok(emptied_snapshot()));

    let report = apply(
        &api,
        Mutation::Delete {
            path: "docs/a.txt".into(),
        },
    )
    .await;

    assert_eq!(report.outcome.unwrap_err().message, "File not found");
    // The refresh ran regardless and its result is installable.
    store.replace_snapshot(report.refresh.unwrap());
    store.set_path("docs");
    let ViewModel::Grid(grid) = store.project() else {
        panic!("expected a grid");
    };
    assert!(grid.entries.is_empty());
}

#[tokio::test]
async fn test_skipped_refresh_keeps_last_known_good_state() {
    let api = MockApi::new();
    let mut store = TreeStore::new("docs");
    api.push_snapshot(Ok(initial_snapshot()));
    store.replace_snapshot(api.fetch_snapshot().await.unwrap());

    // A periodic refresh fails at the transport level; the listener skips
    // it and the store is left untouched.
    api.push_snapshot(Err(SnapshotError::Transport("connection reset".into())));
    if let Ok(root) = api.fetch_snapshot().await {
        store.replace_snapshot(root);
    }

    let ViewModel::Grid(grid) = store.project() else {
        panic!("last-known-good snapshot should still render");
    };
    assert_eq!(grid.entries.len(), 1);
}
