use super::*;

#[test]
fn push_replaces_current_notice() {
    let mut state = NoticeState::default();
    state.push_success("Course deleted");
    state.push_error("Delete failed");
    let current = state.current.clone().unwrap();
    assert_eq!(current.kind, NoticeKind::Error);
    assert_eq!(current.message, "Delete failed");
    assert_eq!(current.seq, 2);
}

#[test]
fn stale_dismiss_keeps_newer_notice() {
    let mut state = NoticeState::default();
    state.push_success("first");
    state.push_success("second");
    state.dismiss_if_current(1);
    assert_eq!(state.current.as_ref().map(|n| n.message.as_str()), Some("second"));
    state.dismiss_if_current(2);
    assert!(state.current.is_none());
}

#[test]
fn dismiss_clears_unconditionally() {
    let mut state = NoticeState::default();
    state.push_error("oops");
    state.dismiss();
    assert!(state.current.is_none());
}
