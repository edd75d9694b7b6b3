use super::*;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn test_initial_entry_is_never_popped() {
    let t0 = Instant::now();
    let mut history = EditHistory::new("base".to_string(), t0);
    assert!(!history.can_undo());
    assert_eq!(history.undo("base", t0), None);
    assert_eq!(history.undo_len(), 1);
}

#[test]
fn test_undo_then_redo_round_trip() {
    let t0 = Instant::now();
    let mut history = EditHistory::new(String::new(), t0);
    history.snapshot("a b".to_string(), SnapshotReason::Edit, t0);

    assert_eq!(history.undo("a b", t0).as_deref(), Some(""));
    assert!(history.can_redo());
    assert_eq!(history.redo(t0).as_deref(), Some("a b"));
    assert!(!history.can_redo());
    assert_eq!(history.undo_entries().collect::<Vec<_>>(), vec!["", "a b"]);
}

#[test]
fn test_redo_pushes_restored_text_so_undo_reverses_it() {
    let t0 = Instant::now();
    let mut history = EditHistory::new(String::new(), t0);
    history.snapshot("1".to_string(), SnapshotReason::Edit, t0);
    history.snapshot("2".to_string(), SnapshotReason::Edit, t0);
    history.undo("2", t0);
    history.undo("1", t0);

    assert_eq!(history.redo(t0).as_deref(), Some("1"));
    assert_eq!(history.redo(t0).as_deref(), Some("2"));
    assert_eq!(history.undo_entries().collect::<Vec<_>>(), vec!["", "1", "2"]);
    assert_eq!(history.undo("2", t0).as_deref(), Some("1"));
    assert_eq!(history.undo("1", t0).as_deref(), Some(""));
}

#[test]
fn test_edit_snapshot_clears_redo_but_replay_does_not() {
    let t0 = Instant::now();
    let mut history = EditHistory::new(String::new(), t0);
    history.snapshot("1".to_string(), SnapshotReason::Edit, t0);
    history.snapshot("2".to_string(), SnapshotReason::Edit, t0);
    history.undo("2", t0);
    history.undo("1", t0);
    assert_eq!(history.redo_len(), 2);

    history.snapshot("x".to_string(), SnapshotReason::Replay, t0);
    assert_eq!(history.redo_len(), 2);

    history.snapshot("y".to_string(), SnapshotReason::Edit, t0);
    assert_eq!(history.redo_len(), 0);
}

#[test]
fn test_stacks_are_bounded() {
    let t0 = Instant::now();
    let mut history = EditHistory::new(String::new(), t0);
    for i in 0..120 {
        history.snapshot(i.to_string(), SnapshotReason::Edit, t0);
    }
    assert_eq!(history.undo_len(), DEFAULT_HISTORY_CAPACITY);
    assert_eq!(history.undo_entries().next(), Some("70"));

    let mut current = "119".to_string();
    while let Some(text) = history.undo(&current, t0) {
        current = text;
    }
    assert_eq!(history.redo_len(), DEFAULT_HISTORY_CAPACITY - 1);
}

#[test]
fn test_custom_capacity_has_floor_of_one() {
    let t0 = Instant::now();
    let mut history = EditHistory::new(String::new(), t0).with_config(EditHistoryConfig {
        capacity: 0,
        coalesce_window_ms: 10,
    });
    history.snapshot("a".to_string(), SnapshotReason::Edit, t0);
    assert_eq!(history.undo_len(), 1);
    assert_eq!(history.config().capacity, 1);
}

#[test]
fn test_can_coalesce_rules() {
    let t0 = Instant::now();
    let history = EditHistory::new(String::new(), t0);

    assert!(history.can_coalesce("a", t0 + ms(500)));
    assert!(history.can_coalesce("é", t0 + ms(1000)));
    assert!(!history.can_coalesce("a", t0 + ms(1001)));
    assert!(!history.can_coalesce(" ", t0));
    assert!(!history.can_coalesce(".", t0));
    assert!(!history.can_coalesce("ab", t0));
    assert!(!history.can_coalesce("", t0));
}

#[test]
fn test_pending_is_committed_before_undo() {
    let t0 = Instant::now();
    let mut history = EditHistory::new(String::new(), t0);
    history.mark_pending();
    assert!(history.can_undo());

    assert_eq!(history.undo("abc", t0 + ms(10)).as_deref(), Some(""));
    assert_eq!(history.redo(t0 + ms(20)).as_deref(), Some("abc"));
}

#[test]
fn test_commit_pending_skips_duplicate_top() {
    let t0 = Instant::now();
    let mut history = EditHistory::new("same".to_string(), t0);
    history.mark_pending();
    history.commit_pending("same", t0);
    assert!(!history.is_pending());
    assert_eq!(history.undo_len(), 1);
}

#[test]
fn test_mark_pending_clears_redo() {
    let t0 = Instant::now();
    let mut history = EditHistory::new(String::new(), t0);
    history.snapshot("a".to_string(), SnapshotReason::Edit, t0);
    history.undo("a", t0);
    assert!(history.can_redo());

    history.mark_pending();
    assert!(!history.can_redo());
}

#[test]
fn test_reset_keeps_single_entry() {
    let t0 = Instant::now();
    let mut history = EditHistory::new(String::new(), t0);
    history.snapshot("a".to_string(), SnapshotReason::Edit, t0);
    history.mark_pending();
    history.reset("fresh".to_string(), t0);
    assert_eq!(history.undo_entries().collect::<Vec<_>>(), vec!["fresh"]);
    assert!(!history.is_pending());
    assert!(!history.can_redo());
}
