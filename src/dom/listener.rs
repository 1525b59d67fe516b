//! Event listeners that detach when dropped.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget};

/// A listener registered on `target`; dropping it removes the listener and
/// frees the closure.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Attach `handler` for `event`. Returns `None` if the browser rejects
    /// the registration.
    pub fn attach<F>(target: &EventTarget, event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        if let Err(err) = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            log::debug!("could not attach {event} listener: {err:?}");
            return None;
        }
        Some(Self { target: target.clone(), event, callback })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Every listener attached during setup.
#[derive(Default)]
pub struct Listeners {
    attached: Vec<Listener>,
}

impl Listeners {
    pub fn add<F>(&mut self, target: &EventTarget, event: &'static str, handler: F)
    where
        F: FnMut(Event) + 'static,
    {
        if let Some(listener) = Listener::attach(target, event, handler) {
            self.attached.push(listener);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.attached.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attached.is_empty()
    }

    /// Detach everything.
    pub fn clear(&mut self) {
        self.attached.clear();
    }
}
