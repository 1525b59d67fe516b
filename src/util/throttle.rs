//! Leading-edge throttle with a single trailing call.
//!
//! The first event of a burst runs immediately. Later events inside the same
//! window collapse into one trailing run scheduled for the end of the window,
//! so the last scroll position is always evaluated. Only whether a trailing
//! run is pending is tracked; nothing queues.

#[cfg(test)]
#[path = "throttle_test.rs"]
mod throttle_test;

/// What the caller should do with an incoming event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ThrottleDecision {
    /// Run the handler now.
    Run,
    /// Schedule one trailing call after this many milliseconds.
    Defer(f64),
    /// A trailing call is already pending; drop the event.
    Skip,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Throttle {
    window_ms: f64,
    last_run_ms: Option<f64>,
    trailing_pending: bool,
}

impl Throttle {
    #[must_use]
    pub fn new(window_ms: u32) -> Self {
        Self { window_ms: f64::from(window_ms), last_run_ms: None, trailing_pending: false }
    }

    #[cfg(test)]
    #[must_use]
    pub fn window_ms(&self) -> f64 {
        self.window_ms
    }

    #[cfg(test)]
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.trailing_pending
    }

    pub fn on_event(&mut self, now_ms: f64) -> ThrottleDecision {
        match self.last_run_ms {
            Some(last) if now_ms - last < self.window_ms => {
                if self.trailing_pending {
                    ThrottleDecision::Skip
                } else {
                    self.trailing_pending = true;
                    let remaining = self.window_ms - (now_ms - last);
                    ThrottleDecision::Defer(remaining.min(self.window_ms))
                }
            }
            _ => {
                self.last_run_ms = Some(now_ms);
                self.trailing_pending = false;
                ThrottleDecision::Run
            }
        }
    }

    /// Called when a deferred timer fires. Returns `true` if the trailing
    /// run should still happen; a `Run` in the meantime cancels it.
    pub fn on_trailing(&mut self, now_ms: f64) -> bool {
        if !self.trailing_pending {
            return false;
        }
        self.trailing_pending = false;
        self.last_run_ms = Some(now_ms);
        true
    }
}
