//! Mobile menu toggle, staggered reveal and dismissal.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::Node;

use crate::dom::listener::Listeners;
use crate::dom::page::{Page, schedule};
use crate::dom::set_styles;
use crate::state::menu::stagger_delay_ms;
use crate::util::schedule::TaskKey;
use crate::util::styles::{ACTIVE_CLASS, HIDDEN_CLASS};

pub fn attach(page: &Rc<Page>, listeners: &mut Listeners) {
    let Some((toggle, panel)) = page.bindings.menu() else {
        return;
    };

    let toggle_page = Rc::clone(page);
    listeners.add(toggle, "click", move |event| {
        event.prevent_default();
        event.stop_propagation();
        let opened = toggle_page.update_menu(|menu| menu.toggle());
        render(&toggle_page);
        if opened {
            stagger_links(&toggle_page);
        }
    });

    for link in &page.bindings.mobile_nav_links {
        let link_page = Rc::clone(page);
        listeners.add(link, "click", move |_| {
            schedule(&link_page, TaskKey::MenuClose, link_page.config.timings.menu_close_delay_ms, |page| close(page));
        });
    }

    let outside_page = Rc::clone(page);
    let toggle = toggle.clone();
    let panel = panel.clone();
    listeners.add(&page.document, "click", move |event| {
        let target = event.target().and_then(|target| target.dyn_into::<Node>().ok());
        let in_toggle = toggle.contains(target.as_ref());
        let in_panel = panel.contains(target.as_ref());
        if outside_page.menu.get().closes_on_outside_click(in_toggle, in_panel) {
            close(&outside_page);
        }
    });
}

/// Close the menu if it is open.
pub fn close(page: &Page) {
    if page.update_menu(|menu| menu.close()) {
        render(page);
    }
}

/// Mirror the menu state onto the panel, the toggle and its two glyphs.
fn render(page: &Page) {
    let Some((toggle, panel)) = page.bindings.menu() else {
        return;
    };
    let menu = page.menu.get();
    let icons = menu.icons();
    let _ = panel.class_list().toggle_with_force(HIDDEN_CLASS, !menu.is_open());
    let _ = toggle.class_list().toggle_with_force(ACTIVE_CLASS, menu.is_open());
    if let Some(icon) = page.bindings.menu_icon.as_ref() {
        let _ = icon.class_list().toggle_with_force(HIDDEN_CLASS, !icons.menu_icon_visible);
    }
    if let Some(icon) = page.bindings.close_icon.as_ref() {
        let _ = icon.class_list().toggle_with_force(HIDDEN_CLASS, !icons.close_icon_visible);
    }
}

fn stagger_links(page: &Rc<Page>) {
    for (index, link) in page.bindings.mobile_nav_links.iter().enumerate() {
        set_styles(link, &[("opacity", "0"), ("transform", "translateY(-10px)")]);
        let link = link.clone();
        let delay = stagger_delay_ms(index, page.config.timings.menu_stagger_ms);
        schedule(page, TaskKey::MenuStagger(index), delay, move |_| {
            if !link.is_connected() {
                return;
            }
            set_styles(
                &link,
                &[("transition", "all 0.3s ease"), ("opacity", "1"), ("transform", "translateY(0)")],
            );
        });
    }
}
