//! Browser bindings.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host page calls `setupPortfolio` once after the document is parsed.
//! Every element is resolved up front into [`bindings::PageBindings`] and
//! shared through one [`page::Page`]; each feature module then attaches its
//! listeners exactly once. The returned handle owns all listeners, the reveal
//! observer, pending timers and the `window.scrollToSection` global, so
//! dropping it (or calling `teardown`) leaves the document as plain HTML
//! again.

pub mod bindings;
pub mod hover;
pub mod listener;
pub mod menu;
pub mod nav;
pub mod page;
pub mod project;
pub mod reveal;
pub mod ripple;
pub mod theme;

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, KeyboardEvent};

use crate::config::{CONFIG_ATTRIBUTE, PortfolioConfig};
use crate::error::BindingError;
use crate::util::scroll::section_arg;
use crate::util::styles::{BASE_CSS, BASE_STYLE_ID, REDUCED_MOTION_CSS, REDUCED_MOTION_QUERY, REDUCED_MOTION_STYLE_ID};

use self::bindings::PageBindings;
use self::listener::Listeners;
use self::nav::ScrollExport;
use self::page::Page;
use self::reveal::RevealObserver;

/// A set-up page. Dropping it tears everything down.
pub struct Portfolio {
    page: Rc<Page>,
    listeners: Listeners,
    reveal: Option<RevealObserver>,
    scroll_export: Option<ScrollExport>,
}

impl Portfolio {
    /// Resolve the page and attach every behavior once.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::NoDocument`] outside a browser window.
    pub fn setup(config: PortfolioConfig) -> Result<Self, BindingError> {
        let window = web_sys::window().ok_or(BindingError::NoDocument)?;
        let document = window.document().ok_or(BindingError::NoDocument)?;

        let bindings = PageBindings::resolve(&document, &config.selectors);
        for missing in bindings.missing(&config.selectors) {
            log::debug!("portfolio: {missing}");
        }

        inject_styles(&window, &document);

        let page = Rc::new(Page::new(window, document, config, bindings));
        let mut listeners = Listeners::default();
        nav::attach(&page, &mut listeners);
        menu::attach(&page, &mut listeners);
        theme::attach(&page, &mut listeners);
        hover::attach(&page, &mut listeners);
        project::attach(&page, &mut listeners);
        ripple::attach(&page, &mut listeners);
        attach_escape(&page, &mut listeners);
        let reveal = reveal::attach(&page);
        let scroll_export = ScrollExport::install(&page);

        nav::evaluate(&page);
        nav::update_navbar(&page);

        log::info!(
            "portfolio ready: {} listeners, {} reveal targets",
            listeners.len(),
            page.bindings.reveal_targets.len()
        );
        Ok(Self { page, listeners, reveal, scroll_export })
    }

    /// Smooth-scroll to section `id` (with or without a leading `#`).
    pub fn scroll_to_section(&self, id: &str) {
        if let Some(id) = section_arg(id) {
            nav::scroll_to_section(&self.page, id);
        }
    }

    /// Detach listeners, stop observing, cancel timers and close the
    /// notification. Safe to call more than once.
    pub fn teardown(&mut self) {
        self.listeners.clear();
        self.reveal = None;
        self.scroll_export = None;
        let cancelled = self.page.tasks.borrow_mut().cancel_all();
        project::dismiss_notification(&self.page);
        log::debug!("portfolio torn down ({cancelled} pending tasks cancelled)");
    }
}

impl Drop for Portfolio {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Handle returned to JavaScript by `setupPortfolio`.
#[wasm_bindgen]
pub struct PortfolioHandle {
    inner: Option<Portfolio>,
}

#[wasm_bindgen]
impl PortfolioHandle {
    pub fn teardown(&mut self) {
        self.inner.take();
    }

    #[wasm_bindgen(js_name = scrollToSection)]
    pub fn scroll_to_section(&self, id: &str) {
        if let Some(portfolio) = &self.inner {
            portfolio.scroll_to_section(id);
        }
    }
}

/// Set up the page. `config_json` overrides the body's
/// `data-portfolio-config` attribute; with neither, defaults apply.
///
/// # Errors
///
/// Rejects with a message when the config JSON is invalid or there is no
/// document.
#[wasm_bindgen(js_name = setupPortfolio)]
pub fn setup_portfolio(config_json: Option<String>) -> Result<PortfolioHandle, JsValue> {
    init_logging();

    let raw = config_json.or_else(|| {
        web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
            .and_then(|body| body.get_attribute(CONFIG_ATTRIBUTE))
    });
    let config = match raw {
        Some(json) => PortfolioConfig::from_json(&json).map_err(|err| JsValue::from_str(&err.to_string()))?,
        None => PortfolioConfig::default(),
    };

    let portfolio = Portfolio::setup(config).map_err(|err| JsValue::from_str(&err.to_string()))?;
    Ok(PortfolioHandle { inner: Some(portfolio) })
}

fn init_logging() {
    console_error_panic_hook::set_once();
    // Already initialized on a second setup.
    let _ = console_log::init_with_level(log::Level::Debug);
}

pub(crate) fn set_styles(element: &HtmlElement, styles: &[(&str, &str)]) {
    let style = element.style();
    for (name, value) in styles {
        let _ = style.set_property(name, value);
    }
}

fn inject_styles(window: &web_sys::Window, document: &Document) {
    inject(document, BASE_STYLE_ID, BASE_CSS);
    let reduced = window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .is_some_and(|mq| mq.matches());
    if reduced {
        inject(document, REDUCED_MOTION_STYLE_ID, REDUCED_MOTION_CSS);
    }
}

fn inject(document: &Document, id: &str, css: &str) {
    if document.get_element_by_id(id).is_some() {
        return;
    }
    let Some(head) = document.head() else {
        return;
    };
    let Ok(style) = document.create_element("style") else {
        return;
    };
    style.set_id(id);
    style.set_text_content(Some(css));
    let _ = head.append_child(&style);
}

fn attach_escape(page: &Rc<Page>, listeners: &mut Listeners) {
    let handler_page = Rc::clone(page);
    listeners.add(&page.document, "keydown", move |event| {
        let is_escape = event
            .dyn_ref::<KeyboardEvent>()
            .is_some_and(|key| key.key() == "Escape");
        if is_escape {
            menu::close(&handler_page);
            project::dismiss_notification(&handler_page);
        }
    });
}
