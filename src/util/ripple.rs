//! Ripple feedback geometry for button clicks.

#[cfg(test)]
#[path = "ripple_test.rs"]
mod ripple_test;

/// Button bounds in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Square ripple centered on the click point, relative to the button.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleGeometry {
    pub size: f64,
    pub x: f64,
    pub y: f64,
}

impl RippleGeometry {
    #[must_use]
    pub fn from_click(rect: Rect, client_x: f64, client_y: f64) -> Self {
        let size = rect.width.max(rect.height);
        Self {
            size,
            x: client_x - rect.left - size / 2.0,
            y: client_y - rect.top - size / 2.0,
        }
    }

    /// Inline style for the ripple element; the animation name matches the
    /// injected `ripple` keyframes.
    #[must_use]
    pub fn css_text(&self, duration_ms: u32) -> String {
        format!(
            "position: absolute; width: {size}px; height: {size}px; left: {x}px; top: {y}px; \
             background: rgba(255, 255, 255, 0.3); border-radius: 50%; pointer-events: none; \
             transform: scale(0); animation: ripple {duration_ms}ms ease-out; z-index: 1;",
            size = self.size,
            x = self.x,
            y = self.y,
        )
    }
}

/// External links opening in a new tab navigate away; no ripple for them.
#[must_use]
pub fn skips_ripple(has_href: bool, target: Option<&str>) -> bool {
    has_href && target == Some("_blank")
}
