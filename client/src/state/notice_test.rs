use super::*;

#[test]
fn default_shows_nothing() {
    assert!(NoticeState::default().current.is_none());
}

#[test]
fn error_replaces_previous_notice() {
    let mut state = NoticeState::default();
    state.success("Vendor created");
    state.error("request failed: 500");
    let current = state.current.unwrap();
    assert_eq!(current.kind, NoticeKind::Error);
    assert_eq!(current.message, "request failed: 500");
}

#[test]
fn ids_increase_per_notice() {
    let mut state = NoticeState::default();
    let first = state.success("a");
    let second = state.success("b");
    assert!(second > first);
}

#[test]
fn dismiss_closes_matching_notice() {
    let mut state = NoticeState::default();
    let id = state.error("boom");
    state.dismiss(id);
    assert!(state.current.is_none());
}

#[test]
fn stale_dismiss_leaves_newer_notice() {
    let mut state = NoticeState::default();
    let old = state.success("saved");
    state.error("delete failed");
    state.dismiss(old);
    assert_eq!(state.current.map(|n| n.message).as_deref(), Some("delete failed"));
}
