use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_has_no_toast() {
    let state = UiState::default();
    assert!(state.toast.is_none());
    assert_eq!(state.toast_seq, 0);
}

// =============================================================
// Toast lifecycle
// =============================================================

#[test]
fn flash_error_sets_toast_and_bumps_seq() {
    let mut state = UiState::default();
    state.flash_error("nope");
    assert_eq!(state.toast.as_ref().map(|toast| toast.kind), Some(ToastKind::Error));
    assert_eq!(state.toast_seq, 1);
}

#[test]
fn flash_success_sets_success_kind() {
    let mut state = UiState::default();
    state.flash_success("saved");
    assert_eq!(state.toast.as_ref().map(|toast| toast.kind), Some(ToastKind::Success));
}

#[test]
fn dismiss_clears_the_current_toast() {
    let mut state = UiState::default();
    state.flash_success("saved");
    let seq = state.toast_seq;
    state.dismiss_toast(seq);
    assert!(state.toast.is_none());
}

#[test]
fn dismiss_ignores_a_stale_seq() {
    let mut state = UiState::default();
    state.flash_success("first");
    let stale = state.toast_seq;
    state.flash_error("second");
    state.dismiss_toast(stale);
    assert_eq!(state.toast.as_ref().map(|toast| toast.message.as_str()), Some("second"));
}
