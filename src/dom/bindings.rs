//! Elements resolved once at setup and handed to every handler.
//!
//! Nothing here is required: an absent element leaves its field `None` (or
//! its list empty) and the behaviors that need it stay unattached.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, NodeList};

use crate::config::Selectors;
use crate::error::BindingError;

pub struct PageBindings {
    pub navbar: Option<HtmlElement>,
    pub nav_toggle: Option<HtmlElement>,
    pub mobile_menu: Option<HtmlElement>,
    pub menu_icon: Option<HtmlElement>,
    pub close_icon: Option<HtmlElement>,
    pub theme_toggle: Option<HtmlElement>,
    pub sections: Vec<HtmlElement>,
    pub nav_links: Vec<HtmlElement>,
    pub mobile_nav_links: Vec<HtmlElement>,
    pub reveal_targets: Vec<HtmlElement>,
    pub skill_badges: Vec<HtmlElement>,
    pub cards: Vec<HtmlElement>,
    pub project_cards: Vec<HtmlElement>,
    pub contact_cards: Vec<HtmlElement>,
    pub project_buttons: Vec<HtmlElement>,
    pub contact_buttons: Vec<HtmlElement>,
    pub ripple_buttons: Vec<HtmlElement>,
}

impl PageBindings {
    pub fn resolve(document: &Document, selectors: &Selectors) -> Self {
        let nav_toggle = by_id(document, &selectors.nav_toggle_id);
        // Prefer the glyphs inside the toggle; fall back to the first on the page.
        let icon = |selector: &str| {
            nav_toggle
                .as_ref()
                .and_then(|toggle| child(toggle, selector))
                .or_else(|| first_in_document(document, selector))
        };
        let menu_icon = icon(&selectors.menu_icon);
        let close_icon = icon(&selectors.close_icon);

        Self {
            navbar: by_id(document, &selectors.navbar_id),
            mobile_menu: by_id(document, &selectors.mobile_menu_id),
            theme_toggle: by_id(document, &selectors.theme_toggle_id),
            nav_toggle,
            menu_icon,
            close_icon,
            sections: all(document, &selectors.sections),
            nav_links: all(document, &selectors.nav_links),
            mobile_nav_links: all(document, &selectors.mobile_nav_links),
            reveal_targets: all(document, &selectors.reveal_targets),
            skill_badges: all(document, &selectors.skill_badges),
            cards: all(document, &selectors.cards),
            project_cards: all(document, &selectors.project_cards),
            contact_cards: all(document, &selectors.contact_cards),
            project_buttons: all(document, &selectors.project_buttons),
            contact_buttons: all(document, &selectors.contact_buttons),
            ripple_buttons: all(document, &selectors.ripple_buttons),
        }
    }

    /// Elements the page is expected to have but does not.
    pub fn missing(&self, selectors: &Selectors) -> Vec<BindingError> {
        let mut missing = Vec::new();
        for (element, id) in [
            (&self.navbar, &selectors.navbar_id),
            (&self.nav_toggle, &selectors.nav_toggle_id),
            (&self.mobile_menu, &selectors.mobile_menu_id),
            (&self.theme_toggle, &selectors.theme_toggle_id),
        ] {
            if element.is_none() {
                missing.push(BindingError::MissingId(id.clone()));
            }
        }
        for (elements, selector) in [(&self.sections, &selectors.sections), (&self.nav_links, &selectors.nav_links)] {
            if elements.is_empty() {
                missing.push(BindingError::MissingSelector(selector.clone()));
            }
        }
        missing
    }

    /// The toggle button and the panel it controls, if both exist.
    pub fn menu(&self) -> Option<(&HtmlElement, &HtmlElement)> {
        Some((self.nav_toggle.as_ref()?, self.mobile_menu.as_ref()?))
    }
}

fn by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// First match for `selector` under `root`.
pub fn child(root: &Element, selector: &str) -> Option<HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn first_in_document(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn all(document: &Document, selector: &str) -> Vec<HtmlElement> {
    document
        .query_selector_all(selector)
        .map(|list| html_elements(&list))
        .unwrap_or_default()
}

fn html_elements(list: &NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|index| list.get(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}
