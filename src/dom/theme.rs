//! Theme toggle button.

use std::rc::Rc;

use crate::dom::listener::Listeners;
use crate::dom::nav;
use crate::dom::page::Page;
use crate::state::theme::{DARK_CLASS, Theme};

pub fn attach(page: &Rc<Page>, listeners: &mut Listeners) {
    let Some(body) = page.body() else {
        return;
    };
    page.theme.set(Theme::from_body_class(body.class_list().contains(DARK_CLASS)));

    let Some(button) = page.bindings.theme_toggle.as_ref() else {
        return;
    };
    let handler_page = Rc::clone(page);
    let label_target = button.clone();
    listeners.add(button, "click", move |_| {
        let theme = handler_page.theme.get().toggled();
        handler_page.theme.set(theme);
        let _ = body.class_list().toggle_with_force(DARK_CLASS, theme.is_dark());
        label_target.set_text_content(Some(theme.label(&handler_page.config.theme_labels)));
        nav::update_navbar(&handler_page);
    });
}
