//! Navigation: active-section tracking, smooth scrolling and navbar fade.

use std::rc::Rc;

use js_sys::{Date, Object, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::dom::listener::Listeners;
use crate::dom::menu;
use crate::dom::page::{Page, schedule, whole_ms};
use crate::state::tracker::{ControlChange, Region, ScrollState, current_region};
use crate::util::schedule::TaskKey;
use crate::util::scroll::{
    SCROLL_TO_SECTION_GLOBAL, anchor_id, effective_navbar_height, navbar_background, navbar_opacity, scroll_target,
    section_arg,
};
use crate::util::styles::{ACTIVE_CLASS, DARK_SCHEME_QUERY};
use crate::util::throttle::ThrottleDecision;

pub fn attach(page: &Rc<Page>, listeners: &mut Listeners) {
    let links = page
        .bindings
        .nav_links
        .iter()
        .chain(page.bindings.mobile_nav_links.iter());
    for link in links {
        let handler_page = Rc::clone(page);
        let link_for_handler = link.clone();
        listeners.add(link, "click", move |event| {
            let Some(id) = link_for_handler
                .get_attribute("href")
                .and_then(|href| anchor_id(&href).map(str::to_owned))
            else {
                return;
            };
            if handler_page.document.get_element_by_id(&id).is_none() {
                return;
            }
            event.prevent_default();
            event.stop_propagation();
            menu::close(&handler_page);
            scroll_to_section(&handler_page, &id);
        });
    }

    for button in &page.bindings.contact_buttons {
        let text = button.text_content().unwrap_or_default();
        if !text.trim().contains(page.config.contact_button_text.as_str()) {
            continue;
        }
        let handler_page = Rc::clone(page);
        listeners.add(button, "click", move |event| {
            event.prevent_default();
            event.stop_propagation();
            let section = handler_page.config.contact_section.clone();
            scroll_to_section(&handler_page, &section);
        });
    }

    let scroll_page = Rc::clone(page);
    listeners.add(&page.window, "scroll", move |_| {
        update_navbar(&scroll_page);
        track_throttled(&scroll_page);
    });
    let resize_page = Rc::clone(page);
    listeners.add(&page.window, "resize", move |_| track_throttled(&resize_page));
}

/// Smooth-scroll so section `id` sits just below the navbar, then highlight
/// its link once the scroll is under way.
pub fn scroll_to_section(page: &Rc<Page>, id: &str) {
    let Some(section) = page
        .document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let Some(navbar) = page.bindings.navbar.as_ref() else {
        return;
    };

    let navbar_height = effective_navbar_height(f64::from(navbar.offset_height()), page.config.header_fallback_height);
    let top = scroll_target(f64::from(section.offset_top()), navbar_height, page.config.scroll_margin);
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    page.window.scroll_to_with_scroll_to_options(&options);

    let id = id.to_owned();
    schedule(page, TaskKey::ActiveLinkSync, page.config.timings.active_link_delay_ms, move |page| {
        let changes = page.nav.borrow_mut().set_current(Some(id.as_str()));
        apply_changes(page, &changes);
    });
}

/// `window.scrollToSection` for inline `onclick` handlers in the page.
/// Removed again on drop unless something else has replaced it.
pub struct ScrollExport {
    window: Window,
    callback: Closure<dyn Fn(JsValue)>,
}

impl ScrollExport {
    pub fn install(page: &Rc<Page>) -> Option<Self> {
        let weak = Rc::downgrade(page);
        let callback = Closure::<dyn Fn(JsValue)>::new(move |raw: JsValue| {
            let Some(page) = weak.upgrade() else {
                return;
            };
            if let Some(id) = raw.as_string().as_deref().and_then(section_arg) {
                scroll_to_section(&page, id);
            }
        });
        let target: &Object = page.window.as_ref();
        if let Err(err) = Reflect::set(target, &JsValue::from_str(SCROLL_TO_SECTION_GLOBAL), callback.as_ref()) {
            log::debug!("could not export {SCROLL_TO_SECTION_GLOBAL}: {err:?}");
            return None;
        }
        Some(Self { window: page.window.clone(), callback })
    }
}

impl Drop for ScrollExport {
    fn drop(&mut self) {
        let target: &Object = self.window.as_ref();
        let key = JsValue::from_str(SCROLL_TO_SECTION_GLOBAL);
        let installed: &JsValue = self.callback.as_ref();
        let ours = Reflect::get(target, &key).is_ok_and(|current| &current == installed);
        if ours {
            let _ = Reflect::delete_property(target, &key);
        }
    }
}

fn track_throttled(page: &Rc<Page>) {
    let decision = page.throttle.borrow_mut().on_event(Date::now());
    match decision {
        ThrottleDecision::Run => evaluate(page),
        ThrottleDecision::Defer(delay) => {
            schedule(page, TaskKey::ScrollTrailing, whole_ms(delay), |page| {
                let due = page.throttle.borrow_mut().on_trailing(Date::now());
                if due {
                    evaluate(page);
                }
            });
        }
        ThrottleDecision::Skip => {}
    }
}

/// Re-measure every section and highlight the link for the one under the
/// navbar. No-op without a navbar or nav links.
pub fn evaluate(page: &Page) {
    let Some(navbar) = page.bindings.navbar.as_ref() else {
        return;
    };
    if page.bindings.nav_links.is_empty() {
        return;
    }

    let header = effective_navbar_height(f64::from(navbar.offset_height()), page.config.header_fallback_height);
    let scroll = ScrollState::new(page.window.scroll_y().unwrap_or(0.0), header, page.config.tracker_margin);
    let regions = measure_regions(&page.bindings.sections);
    let changes = page
        .nav
        .borrow_mut()
        .set_current(current_region(&regions, scroll.comparison_point()));
    apply_changes(page, &changes);
}

fn measure_regions(sections: &[HtmlElement]) -> Vec<Region> {
    sections
        .iter()
        .filter_map(|section| {
            let id = section.id();
            if id.is_empty() {
                return None;
            }
            Some(Region::new(id, f64::from(section.offset_top()), f64::from(section.offset_height())))
        })
        .collect()
}

fn apply_changes(page: &Page, changes: &[ControlChange]) {
    for change in changes {
        if let Some(link) = page.bindings.nav_links.get(change.index) {
            let _ = link.class_list().toggle_with_force(ACTIVE_CLASS, change.active);
        }
    }
}

/// Fade the navbar background in as the page scrolls.
pub fn update_navbar(page: &Page) {
    let Some(navbar) = page.bindings.navbar.as_ref() else {
        return;
    };
    let opacity = navbar_opacity(page.window.scroll_y().unwrap_or(0.0));
    let _ = navbar
        .style()
        .set_property("background", &navbar_background(opacity, is_dark(page)));
}

fn is_dark(page: &Page) -> bool {
    if page.theme.get().is_dark() {
        return true;
    }
    let scheme_attr = page
        .document
        .document_element()
        .and_then(|root| root.get_attribute("data-color-scheme"));
    if scheme_attr.as_deref() == Some("dark") {
        return true;
    }
    page.window
        .match_media(DARK_SCHEME_QUERY)
        .ok()
        .flatten()
        .is_some_and(|mq| mq.matches())
}
