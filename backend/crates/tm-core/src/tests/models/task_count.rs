use crate::TaskCount;

#[test]
fn test_task_count_pending() {
    assert_eq!(TaskCount::new(10, 4).pending(), 6);
    assert_eq!(TaskCount::new(3, 3).pending(), 0);
    assert_eq!(TaskCount::default().pending(), 0);
}

#[test]
fn test_task_count_pending_never_negative() {
    // Aggregate violating completed <= total must not underflow
    assert_eq!(TaskCount::new(2, 5).pending(), 0);
}
