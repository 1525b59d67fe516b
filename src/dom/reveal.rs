//! Reveal-on-scroll through an `IntersectionObserver`.

use std::rc::{Rc, Weak};

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom::page::Page;
use crate::dom::set_styles;
use crate::state::reveal::{HIDDEN_STYLE, SETTLED_STYLE, stagger_delay};

/// Live observer; disconnects when dropped.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Hide every reveal target and start observing them. Content is only
/// hidden once the observer exists, so a browser without one shows it as-is.
pub fn attach(page: &Rc<Page>) -> Option<RevealObserver> {
    let targets = &page.bindings.reveal_targets;
    if targets.is_empty() {
        return None;
    }

    let weak = Rc::downgrade(page);
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| on_entries(&weak, &entries, &observer),
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(page.config.reveal_threshold));
    init.set_root_margin(&page.config.reveal_root_margin);
    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => observer,
        Err(err) => {
            log::debug!("reveal-on-scroll disabled: {err:?}");
            return None;
        }
    };

    for target in targets {
        set_styles(target, HIDDEN_STYLE);
        observer.observe(target);
    }
    for (index, badge) in page.bindings.skill_badges.iter().enumerate() {
        let _ = badge.style().set_property("transition-delay", &stagger_delay(index));
    }

    Some(RevealObserver { observer, _callback: callback })
}

fn on_entries(page: &Weak<Page>, entries: &Array, observer: &IntersectionObserver) {
    let Some(page) = page.upgrade() else {
        return;
    };
    for entry in entries.iter() {
        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
            continue;
        };
        if !entry.is_intersecting() {
            continue;
        }
        let target = entry.target();
        let Some(index) = page
            .bindings
            .reveal_targets
            .iter()
            .position(|el| AsRef::<Element>::as_ref(el) == &target)
        else {
            continue;
        };
        if page.reveal.borrow_mut().mark_visible(index) {
            if let Some(element) = page.bindings.reveal_targets.get(index) {
                set_styles(element, SETTLED_STYLE);
            }
            observer.unobserve(&target);
        }
    }
    if page.reveal.borrow().is_complete() {
        observer.disconnect();
    }
}
