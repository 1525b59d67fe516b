//! Ripple feedback on button clicks.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::MouseEvent;

use crate::dom::listener::Listeners;
use crate::dom::page::{Page, schedule};
use crate::util::ripple::{Rect, RippleGeometry, skips_ripple};
use crate::util::schedule::TaskKey;

pub fn attach(page: &Rc<Page>, listeners: &mut Listeners) {
    for button in &page.bindings.ripple_buttons {
        let handler_page = Rc::clone(page);
        let host = button.clone();
        listeners.add(button, "click", move |event| {
            if skips_ripple(host.has_attribute("href"), host.get_attribute("target").as_deref()) {
                return;
            }
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let bounds = host.get_bounding_client_rect();
            let rect = Rect { left: bounds.x(), top: bounds.y(), width: bounds.width(), height: bounds.height() };
            let geometry = RippleGeometry::from_click(rect, f64::from(mouse.client_x()), f64::from(mouse.client_y()));

            let Ok(ripple) = handler_page.document.create_element("div") else {
                return;
            };
            let duration = handler_page.config.timings.ripple_ms;
            let _ = ripple.set_attribute("style", &geometry.css_text(duration));
            let style = host.style();
            let _ = style.set_property("position", "relative");
            let _ = style.set_property("overflow", "hidden");
            if host.append_child(&ripple).is_err() {
                return;
            }

            let seq = handler_page.next_ripple_seq();
            schedule(&handler_page, TaskKey::RippleCleanup(seq), duration, move |_| {
                if ripple.parent_node().is_some() {
                    ripple.remove();
                }
            });
        });
    }
}
