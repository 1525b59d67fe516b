//! "Project coming soon" overlay and dialog.

use leptos::prelude::*;

use crate::state::notification::coming_soon_message;

/// Dimmed overlay plus centered dialog for a project without a public link.
///
/// The overlay and dialog are siblings so a click on the dialog never reaches
/// the overlay's handler. Escape is handled document-wide by the bindings.
/// `on_close` is unsync because it reaches back into browser-only state.
#[component]
pub fn ProjectNotification(project_name: String, on_close: UnsyncCallback<()>) -> impl IntoView {
    let message = coming_soon_message(&project_name);
    let on_overlay = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());

    view! {
        <div class="notification-overlay" on:click=on_overlay></div>
        <div class="project-notification" role="dialog" aria-modal="true" aria-label="Project coming soon">
            <h3>"Project Coming Soon"</h3>
            <p>{message}</p>
            <button class="btn btn--primary btn--sm close-notification" on:click=on_close_click>
                "Got it"
            </button>
        </div>
    }
}
