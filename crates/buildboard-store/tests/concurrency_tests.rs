// Concurrent callers share nothing but the database file. These tests run
// store operations on tokio's blocking pool the same way the bot does.

use buildboard_core::errors::ExErrorKind;
use buildboard_core::model::NewBuild;
use buildboard_store::BuildStore;
use tempfile::TempDir;

fn setup_store() -> (TempDir, BuildStore) {
    let dir = TempDir::new().unwrap();
    let store = BuildStore::new(dir.path().join("builds.db"));
    store.initialize().unwrap();
    (dir, store)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_inserts_of_same_code_admit_exactly_one() {
    let (_dir, store) = setup_store();

    let mut handles = Vec::new();
    for i in 0..8 {
        let store = store.clone();
        handles.push(tokio::task::spawn_blocking(move || {
            let owner = format!("U{}", i);
            store.insert(&NewBuild::new("Ana", "RACE1", "d", owner.clone(), owner))
        }));
    }

    let mut ok = 0;
    let mut duplicates = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(()) => ok += 1,
            Err(err) => {
                assert_eq!(err.kind(), ExErrorKind::DuplicateCode, "{}", err);
                duplicates += 1;
            }
        }
    }

    assert_eq!(ok, 1);
    assert_eq!(duplicates, 7);
    assert_eq!(store.query_by_name("Ana").unwrap().len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_deletes_by_owner_succeed_once() {
    let (_dir, store) = setup_store();
    store
        .insert(&NewBuild::new("Ana", "RACE2", "d", "U1", "Alice"))
        .unwrap();

    let mut handles = Vec::new();
    for _ in 0..6 {
        let store = store.clone();
        handles.push(tokio::task::spawn_blocking(move || {
            store.delete_by_code("RACE2", "U1")
        }));
    }

    let mut ok = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(()) => ok += 1,
            Err(err) => assert_eq!(err.kind(), ExErrorKind::NotFound, "{}", err),
        }
    }

    assert_eq!(ok, 1);
    assert!(store.get_by_code("RACE2").unwrap().is_none());
}
