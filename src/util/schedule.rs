//! Keyed registry of pending timers.
//!
//! Handles are owned here so teardown can cancel everything still pending.
//! In the browser `H` is a `gloo_timers` `Timeout`, whose `Drop` clears the
//! timer, so replacing or removing an entry cancels it.
//!
//! A timer never removes its own entry from inside its callback (that would
//! drop the closure while it runs). Callbacks call [`ScheduledTasks::mark_done`]
//! with the [`Ticket`] they were issued once their work is finished, and done
//! entries are pruned on the next [`ScheduledTasks::schedule_with`].

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use std::collections::HashMap;

/// Purpose of a scheduled timer. Scheduling a key that is already pending
/// replaces the earlier timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TaskKey {
    /// Trailing tracker run at the end of a throttle window.
    ScrollTrailing,
    /// Highlight the clicked link once smooth scrolling has started.
    ActiveLinkSync,
    /// Close the mobile menu shortly after a menu link click.
    MenuClose,
    /// Fade in the `n`th mobile menu link.
    MenuStagger(usize),
    /// Auto-dismiss for the notification with this sequence number.
    NotificationExpire(u64),
    /// Unmount the notification outside of its own event handler.
    NotificationClose,
    /// Remove the ripple with this sequence number.
    RippleCleanup(u64),
}

/// Identifies one scheduling of a key, so a fired timer cannot mark a newer
/// timer under the same key as done.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

struct Entry<H> {
    handle: H,
    ticket: Ticket,
    done: bool,
}

pub struct ScheduledTasks<H> {
    entries: HashMap<TaskKey, Entry<H>>,
    last_ticket: u64,
}

impl<H> Default for ScheduledTasks<H> {
    fn default() -> Self {
        Self { entries: HashMap::new(), last_ticket: 0 }
    }
}

impl<H> ScheduledTasks<H> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the handle built by `make` under `key`, returning the handle
    /// it replaced. `make` receives the ticket the timer must hand back to
    /// [`Self::mark_done`]. Entries already marked done are dropped first.
    pub fn schedule_with<F>(&mut self, key: TaskKey, make: F) -> Option<H>
    where
        F: FnOnce(Ticket) -> H,
    {
        self.prune();
        self.last_ticket += 1;
        let ticket = Ticket(self.last_ticket);
        let handle = make(ticket);
        self.entries
            .insert(key, Entry { handle, ticket, done: false })
            .map(|entry| entry.handle)
    }

    /// Flag a fired timer; its handle is released on the next prune. A stale
    /// ticket (the key was rescheduled since) is ignored.
    pub fn mark_done(&mut self, key: TaskKey, ticket: Ticket) {
        if let Some(entry) = self.entries.get_mut(&key)
            && entry.ticket == ticket
        {
            entry.done = true;
        }
    }

    #[cfg(test)]
    #[must_use]
    pub fn is_pending(&self, key: TaskKey) -> bool {
        self.entries.get(&key).is_some_and(|entry| !entry.done)
    }

    #[cfg(test)]
    /// Remove and return the handle for `key`, pending or not.
    pub fn cancel(&mut self, key: TaskKey) -> Option<H> {
        self.entries.remove(&key).map(|entry| entry.handle)
    }

    /// The handle still pending under `key`.
    #[cfg(test)]
    #[must_use]
    pub fn handle(&self, key: TaskKey) -> Option<&H> {
        self.entries.get(&key).filter(|entry| !entry.done).map(|entry| &entry.handle)
    }

    /// Drop every handle; returns how many were still pending.
    pub fn cancel_all(&mut self) -> usize {
        let pending = self.pending_count();
        self.entries.clear();
        pending
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.entries.values().filter(|entry| !entry.done).count()
    }

    #[cfg(test)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn prune(&mut self) {
        self.entries.retain(|_, entry| !entry.done);
    }
}
