//! Stylesheets injected into `<head>` at setup.
//!
//! Each sheet carries an element id so setting up twice on the same
//! document does not stack duplicate rules.

#[cfg(test)]
#[path = "styles_test.rs"]
mod styles_test;

pub const BASE_STYLE_ID: &str = "portfolio-ui-styles";
pub const REDUCED_MOTION_STYLE_ID: &str = "portfolio-ui-reduced-motion";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Class marking the highlighted navigation link.
pub const ACTIVE_CLASS: &str = "active";
/// Class that hides the mobile menu panel and the inactive toggle glyph.
pub const HIDDEN_CLASS: &str = "hidden";

pub const BASE_CSS: &str = r"
.nav-link.active {
    color: var(--color-primary) !important;
    position: relative;
}

.nav-link.active::after {
    content: '';
    position: absolute;
    bottom: -8px;
    left: 0;
    right: 0;
    height: 2px;
    background: var(--color-primary);
    border-radius: 1px;
}

.mobile-nav-link.active {
    color: var(--color-primary) !important;
    font-weight: var(--font-weight-semibold);
}

.notification-overlay {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.5);
    z-index: 9999;
    backdrop-filter: blur(4px);
    animation: fadeIn 0.3s ease-out;
}

.project-notification {
    position: fixed;
    top: 50%;
    left: 50%;
    transform: translate(-50%, -50%);
    background: var(--color-surface);
    color: var(--color-text);
    padding: var(--space-24);
    border-radius: var(--radius-lg);
    box-shadow: var(--shadow-lg);
    border: 1px solid var(--color-border);
    z-index: 10000;
    max-width: 400px;
    text-align: center;
    animation: fadeInScale 0.3s ease-out;
}

.project-notification h3 {
    margin: 0 0 var(--space-16) 0;
    color: var(--color-text);
    font-size: var(--font-size-xl);
}

.project-notification p {
    margin: 0 0 var(--space-16) 0;
    color: var(--color-text-secondary);
}

@keyframes ripple {
    to {
        transform: scale(2);
        opacity: 0;
    }
}

@keyframes fadeIn {
    from { opacity: 0; }
    to { opacity: 1; }
}

@keyframes fadeInScale {
    from {
        opacity: 0;
        transform: translate(-50%, -50%) scale(0.8);
    }
    to {
        opacity: 1;
        transform: translate(-50%, -50%) scale(1);
    }
}
";

pub const REDUCED_MOTION_CSS: &str = r"
*, *::before, *::after {
    animation-duration: 0.01ms !important;
    animation-iteration-count: 1 !important;
    transition-duration: 0.01ms !important;
}
";
