//! Scroll offsets and navbar fade.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

const NAVBAR_BASE_OPACITY: f64 = 0.8;
const NAVBAR_MAX_OPACITY: f64 = 0.95;
const NAVBAR_FADE_DISTANCE: f64 = 200.0;

/// Id from a same-document anchor `href` (`"#about"` → `"about"`).
#[must_use]
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Global the page's inline `onclick="scrollToSection('id')"` handlers call.
pub const SCROLL_TO_SECTION_GLOBAL: &str = "scrollToSection";

/// Section id passed to `scrollToSection`; a leading `#` is accepted.
#[must_use]
pub fn section_arg(raw: &str) -> Option<&str> {
    let raw = raw.trim();
    let id = raw.strip_prefix('#').unwrap_or(raw);
    (!id.is_empty()).then_some(id)
}

/// Height to use for the fixed navbar, falling back when it reads as zero.
#[must_use]
pub fn effective_navbar_height(measured: f64, fallback: f64) -> f64 {
    if measured > 0.0 { measured } else { fallback }
}

/// Window offset that puts a section just below the fixed navbar.
#[must_use]
pub fn scroll_target(section_top: f64, navbar_height: f64, margin: f64) -> f64 {
    (section_top - navbar_height - margin).max(0.0)
}

/// Navbar background opacity; grows as the page scrolls, then caps.
#[must_use]
pub fn navbar_opacity(scrolled: f64) -> f64 {
    let scrolled = scrolled.max(0.0);
    (NAVBAR_BASE_OPACITY + scrolled / NAVBAR_FADE_DISTANCE * (NAVBAR_MAX_OPACITY - NAVBAR_BASE_OPACITY))
        .min(NAVBAR_MAX_OPACITY)
}

#[must_use]
pub fn navbar_background(opacity: f64, dark: bool) -> String {
    if dark {
        format!("rgba(31, 33, 33, {opacity:.3})")
    } else {
        format!("rgba(255, 255, 255, {opacity:.3})")
    }
}
