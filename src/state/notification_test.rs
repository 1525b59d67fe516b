use super::*;
use crate::util::schedule::{ScheduledTasks, TaskKey, Ticket};

// =============================================================
// Show / dismiss
// =============================================================

#[test]
fn starts_empty() {
    let state = NotificationState::new(5_000);
    assert!(!state.is_visible());
    assert_eq!(state.current(), None);
}

#[test]
fn show_makes_notice_visible() {
    let mut state = NotificationState::new(5_000);
    let seq = state.show("GPS Tracker");
    let notice = state.current().unwrap();
    assert_eq!(notice.seq, seq);
    assert_eq!(notice.project_name, "GPS Tracker");
}

#[test]
fn show_replaces_existing_notice() {
    let mut state = NotificationState::new(5_000);
    let first = state.show("One");
    let second = state.show("Two");
    assert_ne!(first, second);
    assert_eq!(state.current().unwrap().project_name, "Two");
}

#[test]
fn dismiss_returns_notice() {
    let mut state = NotificationState::new(5_000);
    state.show("One");
    assert_eq!(state.dismiss().map(|n| n.project_name), Some("One".to_owned()));
    assert!(!state.is_visible());
    assert_eq!(state.dismiss(), None);
}

// =============================================================
// Auto-dismiss timer
// =============================================================

/// Timer handle that fires once the clock reaches `due_at_ms`.
struct DismissTimer {
    due_at_ms: u64,
    ticket: Ticket,
}

/// Show a notice at `now_ms` and arm its timer the way the page does.
fn show_at(state: &mut NotificationState, tasks: &mut ScheduledTasks<DismissTimer>, name: &str, now_ms: u64) -> u64 {
    let seq = state.show(name);
    let due_at_ms = now_ms + u64::from(state.auto_dismiss_ms());
    tasks.schedule_with(TaskKey::NotificationExpire(seq), |ticket| DismissTimer { due_at_ms, ticket });
    seq
}

/// Fire the timer for `seq` if it is due at `now_ms`.
fn advance(state: &mut NotificationState, tasks: &mut ScheduledTasks<DismissTimer>, seq: u64, now_ms: u64) {
    let key = TaskKey::NotificationExpire(seq);
    let Some(ticket) = tasks
        .handle(key)
        .filter(|timer| timer.due_at_ms <= now_ms)
        .map(|timer| timer.ticket)
    else {
        return;
    };
    state.dismiss_if_current(seq);
    tasks.mark_done(key, ticket);
}

#[test]
fn auto_dismiss_boundary() {
    let mut state = NotificationState::new(5_000);
    let mut tasks = ScheduledTasks::new();
    let seq = show_at(&mut state, &mut tasks, "GPS", 0);

    advance(&mut state, &mut tasks, seq, 4_999);
    assert!(state.is_visible());
    assert!(tasks.is_pending(TaskKey::NotificationExpire(seq)));

    advance(&mut state, &mut tasks, seq, 5_000);
    assert!(!state.is_visible());
    assert!(!tasks.is_pending(TaskKey::NotificationExpire(seq)));
}

#[test]
fn timer_after_manual_dismiss_is_noop() {
    let mut state = NotificationState::new(5_000);
    let mut tasks = ScheduledTasks::new();
    let seq = show_at(&mut state, &mut tasks, "GPS", 0);
    state.dismiss();
    advance(&mut state, &mut tasks, seq, 6_000);
    assert!(!state.is_visible());
}

#[test]
fn old_timer_does_not_close_replacement() {
    let mut state = NotificationState::new(5_000);
    let mut tasks = ScheduledTasks::new();
    let old = show_at(&mut state, &mut tasks, "One", 0);
    let new = show_at(&mut state, &mut tasks, "Two", 3_000);

    advance(&mut state, &mut tasks, old, 5_000);
    assert_eq!(state.current().map(|n| n.project_name.as_str()), Some("Two"));

    advance(&mut state, &mut tasks, new, 7_999);
    assert!(state.is_visible());
    advance(&mut state, &mut tasks, new, 8_000);
    assert!(!state.is_visible());
}

#[test]
fn duration_follows_config() {
    let mut state = NotificationState::new(250);
    let mut tasks = ScheduledTasks::new();
    let seq = show_at(&mut state, &mut tasks, "GPS", 1_000);
    advance(&mut state, &mut tasks, seq, 1_249);
    assert!(state.is_visible());
    advance(&mut state, &mut tasks, seq, 1_250);
    assert!(!state.is_visible());
}

#[test]
fn stale_sequence_does_not_close_newer_notice() {
    let mut state = NotificationState::new(5_000);
    let old = state.show("One");
    let new = state.show("Two");
    assert!(!state.dismiss_if_current(old));
    assert!(state.is_visible());
    assert!(state.dismiss_if_current(new));
    assert!(!state.is_visible());
}

#[test]
fn dismiss_if_current_when_empty() {
    let mut state = NotificationState::new(5_000);
    assert!(!state.dismiss_if_current(1));
}

// =============================================================
// Message
// =============================================================

#[test]
fn message_names_project() {
    assert_eq!(
        coming_soon_message("Real-Time GPS Tracking System"),
        "Real-Time GPS Tracking System will be available soon. Stay tuned for updates!"
    );
}
