use std::time::{Duration, Instant};

use super::{NotificationKind, NotificationState};

#[test]
fn starts_empty() {
    let state = NotificationState::new();
    assert!(!state.is_visible());
    assert!(state.current().is_none());
}

#[test]
fn show_makes_message_current() {
    let mut state = NotificationState::new();
    let t0 = Instant::now();

    state.success("Copied edit link!", t0);

    assert_eq!(
        state.current(),
        Some(("Copied edit link!", NotificationKind::Success))
    );
}

#[test]
fn message_survives_until_deadline() {
    let mut state = NotificationState::new();
    let t0 = Instant::now();

    state.success("Copied!", t0);
    state.tick(t0 + Duration::from_secs(2));

    assert!(state.is_visible());
}

#[test]
fn message_expires_at_deadline() {
    let mut state = NotificationState::new();
    let t0 = Instant::now();

    state.success("Copied!", t0);
    state.tick(t0 + Duration::from_secs(3));

    assert!(!state.is_visible());
}

#[test]
fn newer_message_replaces_and_restarts_the_timer() {
    let mut state = NotificationState::new();
    let t0 = Instant::now();

    state.success("first", t0);
    state.error("second", t0 + Duration::from_secs(2));

    // Past the first message's deadline but not the second's
    state.tick(t0 + Duration::from_secs(4));

    assert_eq!(state.current(), Some(("second", NotificationKind::Error)));
}

#[test]
fn tick_on_empty_state_is_a_noop() {
    let mut state = NotificationState::new();
    state.tick(Instant::now());
    assert!(!state.is_visible());
}
