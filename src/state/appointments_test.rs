use super::*;

#[test]
fn appointments_state_starts_empty_and_idle() {
    let state = AppointmentsState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert!(state.notice.is_none());
}
