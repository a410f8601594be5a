use tui_memory::store::{BestScore, FileStore, KeyValueStore, BEST_MOVES_KEY};

#[test]
fn best_score_scenario_across_restarts() {
    let dir = tempfile::tempdir().unwrap();

    // No prior best; first session ends with 10 moves.
    let mut best = BestScore::new(FileStore::new(dir.path()));
    assert_eq!(best.read(), None);
    assert!(best.write_if_better(10));

    // A later process: 12 is worse, 7 is better.
    let mut best = BestScore::new(FileStore::new(dir.path()));
    assert_eq!(best.read(), Some(10));
    assert!(!best.write_if_better(12));
    assert_eq!(best.read(), Some(10));
    assert!(best.write_if_better(7));

    let best = BestScore::new(FileStore::new(dir.path()));
    assert_eq!(best.read(), Some(7));
}

#[test]
fn corrupt_file_is_treated_as_absent() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(BEST_MOVES_KEY), "lots").unwrap();

    let mut best = BestScore::new(FileStore::new(dir.path()));
    assert_eq!(best.read(), None);
    assert!(best.write_if_better(15));
    assert_eq!(
        FileStore::new(dir.path()).get(BEST_MOVES_KEY).unwrap().as_deref(),
        Some("15")
    );
}

#[test]
fn unwritable_location_degrades_silently() {
    let dir = tempfile::tempdir().unwrap();
    // A regular file where the data directory should be.
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "x").unwrap();

    let mut best = BestScore::new(FileStore::new(&blocker));
    assert_eq!(best.read(), None);
    assert!(!best.write_if_better(3));
}
