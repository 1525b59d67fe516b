use std::cell::Cell;
use std::rc::Rc;

use super::*;

/// Stand-in timer handle that records when it is dropped (cancelled).
struct FakeTimer {
    ticket: Ticket,
    dropped: Rc<Cell<usize>>,
}

impl Drop for FakeTimer {
    fn drop(&mut self) {
        self.dropped.set(self.dropped.get() + 1);
    }
}

fn schedule(tasks: &mut ScheduledTasks<FakeTimer>, key: TaskKey, dropped: &Rc<Cell<usize>>) -> (Ticket, Option<FakeTimer>) {
    let mut issued = None;
    let replaced = tasks.schedule_with(key, |ticket| {
        issued = Some(ticket);
        FakeTimer { ticket, dropped: Rc::clone(dropped) }
    });
    let Some(ticket) = issued else {
        panic!("schedule_with did not build a handle");
    };
    (ticket, replaced)
}

#[test]
fn schedule_tracks_pending() {
    let mut tasks = ScheduledTasks::new();
    tasks.schedule_with(TaskKey::MenuClose, |_| 1_u32);
    assert!(tasks.is_pending(TaskKey::MenuClose));
    assert!(!tasks.is_pending(TaskKey::ScrollTrailing));
    assert_eq!(tasks.pending_count(), 1);
}

#[test]
fn tickets_are_unique() {
    let dropped = Rc::new(Cell::new(0));
    let mut tasks = ScheduledTasks::new();
    let (first, _) = schedule(&mut tasks, TaskKey::MenuStagger(0), &dropped);
    let (second, _) = schedule(&mut tasks, TaskKey::MenuStagger(1), &dropped);
    assert_ne!(first, second);
}

#[test]
fn rescheduling_replaces_previous_handle() {
    let dropped = Rc::new(Cell::new(0));
    let mut tasks = ScheduledTasks::new();
    let (first, _) = schedule(&mut tasks, TaskKey::ScrollTrailing, &dropped);
    let (_, replaced) = schedule(&mut tasks, TaskKey::ScrollTrailing, &dropped);
    assert_eq!(replaced.as_ref().map(|timer| timer.ticket), Some(first));
    drop(replaced);
    assert_eq!(dropped.get(), 1);
    assert_eq!(tasks.len(), 1);
}

#[test]
fn distinct_keys_coexist() {
    let mut tasks = ScheduledTasks::new();
    tasks.schedule_with(TaskKey::MenuStagger(0), |_| 0_u8);
    tasks.schedule_with(TaskKey::MenuStagger(1), |_| 1_u8);
    tasks.schedule_with(TaskKey::RippleCleanup(7), |_| 2_u8);
    assert_eq!(tasks.pending_count(), 3);
}

#[test]
fn mark_done_defers_release_until_next_schedule() {
    let dropped = Rc::new(Cell::new(0));
    let mut tasks = ScheduledTasks::new();
    let (ticket, _) = schedule(&mut tasks, TaskKey::RippleCleanup(1), &dropped);
    tasks.mark_done(TaskKey::RippleCleanup(1), ticket);
    assert!(!tasks.is_pending(TaskKey::RippleCleanup(1)));
    assert_eq!(tasks.len(), 1);
    assert_eq!(dropped.get(), 0);

    schedule(&mut tasks, TaskKey::RippleCleanup(2), &dropped);
    assert_eq!(dropped.get(), 1);
    assert_eq!(tasks.len(), 1);
}

#[test]
fn stale_ticket_does_not_mark_newer_timer() {
    let dropped = Rc::new(Cell::new(0));
    let mut tasks = ScheduledTasks::new();
    let (old, _) = schedule(&mut tasks, TaskKey::MenuClose, &dropped);
    let (new, _) = schedule(&mut tasks, TaskKey::MenuClose, &dropped);

    tasks.mark_done(TaskKey::MenuClose, old);
    assert!(tasks.is_pending(TaskKey::MenuClose));
    tasks.mark_done(TaskKey::MenuClose, new);
    assert!(!tasks.is_pending(TaskKey::MenuClose));
}

#[test]
fn mark_done_on_unknown_key_is_noop() {
    let dropped = Rc::new(Cell::new(0));
    let mut tasks = ScheduledTasks::new();
    let (ticket, _) = schedule(&mut tasks, TaskKey::MenuClose, &dropped);
    tasks.mark_done(TaskKey::NotificationClose, ticket);
    assert!(tasks.is_pending(TaskKey::MenuClose));
}

#[test]
fn cancel_returns_handle() {
    let mut tasks = ScheduledTasks::new();
    tasks.schedule_with(TaskKey::NotificationExpire(3), |_| "timer");
    assert_eq!(tasks.cancel(TaskKey::NotificationExpire(3)), Some("timer"));
    assert_eq!(tasks.cancel(TaskKey::NotificationExpire(3)), None);
}

#[test]
fn cancel_all_drops_everything() {
    let dropped = Rc::new(Cell::new(0));
    let mut tasks = ScheduledTasks::new();
    schedule(&mut tasks, TaskKey::MenuClose, &dropped);
    let (ticket, _) = schedule(&mut tasks, TaskKey::ActiveLinkSync, &dropped);
    tasks.mark_done(TaskKey::ActiveLinkSync, ticket);

    assert_eq!(tasks.cancel_all(), 1);
    assert_eq!(dropped.get(), 2);
    assert!(tasks.is_empty());
}
