//! Hover micro-interactions.

use web_sys::HtmlElement;

use crate::dom::bindings::child;
use crate::dom::listener::Listeners;
use crate::dom::page::Page;
use crate::util::hover::{HoverKind, HoverStyle};

pub fn attach(page: &Page, listeners: &mut Listeners) {
    let groups = [
        (HoverKind::SkillBadge, &page.bindings.skill_badges),
        (HoverKind::Card, &page.bindings.cards),
        (HoverKind::ProjectCard, &page.bindings.project_cards),
    ];
    for (kind, elements) in groups {
        for element in elements {
            hover(listeners, element, element.clone(), kind);
        }
    }

    for card in &page.bindings.contact_cards {
        if let Some(icon) = child(card, &page.config.selectors.contact_icon) {
            hover(listeners, card, icon, HoverKind::ContactIcon);
        }
    }
}

/// Pointer over `trigger` styles `styled`.
fn hover(listeners: &mut Listeners, trigger: &HtmlElement, styled: HtmlElement, kind: HoverKind) {
    let on_enter = styled.clone();
    listeners.add(trigger, "mouseenter", move |_| apply(&on_enter, kind.enter(), false));
    listeners.add(trigger, "mouseleave", move |_| apply(&styled, kind.leave(), kind.clears_shadow()));
}

fn apply(element: &HtmlElement, hover: HoverStyle, clear_shadow: bool) {
    let style = element.style();
    if let Some(transition) = hover.transition {
        let _ = style.set_property("transition", transition);
    }
    let _ = style.set_property("transform", hover.transform);
    match hover.box_shadow {
        Some(shadow) => {
            let _ = style.set_property("box-shadow", shadow);
        }
        None if clear_shadow => {
            let _ = style.remove_property("box-shadow");
        }
        None => {}
    }
}
