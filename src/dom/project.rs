//! Project buttons and the "coming soon" notification.

use std::rc::Rc;

use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

use crate::components::notification::ProjectNotification;
use crate::dom::listener::Listeners;
use crate::dom::page::{Page, schedule};
use crate::util::project::{NEW_TAB_FEATURES, ProjectAction, ProjectButton};
use crate::util::schedule::TaskKey;

pub fn attach(page: &Rc<Page>, listeners: &mut Listeners) {
    for button in &page.bindings.project_buttons {
        let handler_page = Rc::clone(page);
        let clicked = button.clone();
        listeners.add(button, "click", move |event| {
            event.prevent_default();
            event.stop_propagation();

            let tag = clicked.tag_name();
            let href = clicked
                .dyn_ref::<HtmlAnchorElement>()
                .map(HtmlAnchorElement::href)
                .filter(|href| !href.is_empty());
            let data_project = clicked.get_attribute("data-project");
            let button = ProjectButton {
                tag: &tag,
                href: href.as_deref(),
                data_project: data_project.as_deref(),
            };

            match ProjectAction::classify(button, &handler_page.config) {
                ProjectAction::OpenLink(url) => {
                    let _ = handler_page
                        .window
                        .open_with_url_and_target_and_features(&url, "_blank", NEW_TAB_FEATURES);
                }
                ProjectAction::ComingSoon(name) => show_notification(&handler_page, name),
                ProjectAction::Ignore => {}
            }
        });
    }
}

/// Mount the notification for `project_name`, replacing any visible one,
/// and arm its auto-dismiss timer.
pub fn show_notification(page: &Rc<Page>, project_name: String) {
    dismiss_notification(page);
    let Some(body) = page.body() else {
        return;
    };

    let (seq, delay) = {
        let mut notification = page.notification.borrow_mut();
        (notification.show(project_name.clone()), notification.auto_dismiss_ms())
    };
    let weak = Rc::downgrade(page);
    let handle = mount_to(body, move || {
        let on_close = UnsyncCallback::new(move |()| {
            if let Some(page) = weak.upgrade() {
                request_close(&page);
            }
        });
        view! { <ProjectNotification project_name=project_name on_close=on_close/> }.into_any()
    });
    *page.notification_view.borrow_mut() = Some(handle);

    schedule(page, TaskKey::NotificationExpire(seq), delay, move |page| {
        let expired = page.notification.borrow_mut().dismiss_if_current(seq);
        if expired {
            unmount(page);
        }
    });
}

/// Close the visible notification, if any.
pub fn dismiss_notification(page: &Page) {
    page.notification.borrow_mut().dismiss();
    unmount(page);
}

/// Close requested from inside the notification's own click handler.
/// Unmounting there would dispose the callback that is still running, so
/// the close happens on the next tick.
fn request_close(page: &Rc<Page>) {
    schedule(page, TaskKey::NotificationClose, 0, |page| dismiss_notification(page));
}

fn unmount(page: &Page) {
    let handle = page.notification_view.borrow_mut().take();
    drop(handle);
}
