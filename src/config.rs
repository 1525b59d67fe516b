//! Page configuration.
//!
//! Every field has a default matching the stock portfolio markup, so a page
//! only needs to supply the values it changes. Config is read from the JSON
//! passed to `setupPortfolio`, falling back to the body's
//! `data-portfolio-config` attribute and then to [`PortfolioConfig::default`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::ConfigError;

/// Body attribute that may carry a JSON config blob.
pub const CONFIG_ATTRIBUTE: &str = "data-portfolio-config";

/// Element ids and selectors the bindings resolve at setup.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Selectors {
    pub navbar_id: String,
    pub nav_toggle_id: String,
    pub mobile_menu_id: String,
    pub theme_toggle_id: String,
    pub menu_icon: String,
    pub close_icon: String,
    pub sections: String,
    pub nav_links: String,
    pub mobile_nav_links: String,
    pub reveal_targets: String,
    pub skill_badges: String,
    pub cards: String,
    pub project_cards: String,
    pub contact_cards: String,
    pub contact_icon: String,
    pub project_buttons: String,
    pub contact_buttons: String,
    pub ripple_buttons: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            navbar_id: "navbar".into(),
            nav_toggle_id: "nav-toggle".into(),
            mobile_menu_id: "mobile-menu".into(),
            theme_toggle_id: "dark-toggle".into(),
            menu_icon: ".menu-icon".into(),
            close_icon: ".close-icon".into(),
            sections: "section[id]".into(),
            nav_links: ".nav-link".into(),
            mobile_nav_links: ".mobile-nav-link".into(),
            reveal_targets: ".card, .skill-badge, .section-title".into(),
            skill_badges: ".skill-badge".into(),
            cards: ".card".into(),
            project_cards: ".project-card".into(),
            contact_cards: ".contact-card".into(),
            contact_icon: ".contact-icon".into(),
            project_buttons: ".project-btn".into(),
            contact_buttons: ".hero-buttons .btn--primary".into(),
            ripple_buttons: ".btn".into(),
        }
    }
}

/// Timer durations, all in milliseconds.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Timings {
    pub scroll_throttle_ms: u32,
    pub active_link_delay_ms: u32,
    pub menu_close_delay_ms: u32,
    pub menu_stagger_ms: u32,
    pub notification_ms: u32,
    pub ripple_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            scroll_throttle_ms: 100,
            active_link_delay_ms: 100,
            menu_close_delay_ms: 100,
            menu_stagger_ms: 50,
            notification_ms: 5_000,
            ripple_ms: 600,
        }
    }
}

/// Label text shown on the theme toggle for each theme.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeLabels {
    /// Shown while the dark theme is active.
    pub to_light: String,
    /// Shown while the light theme is active.
    pub to_dark: String,
}

impl Default for ThemeLabels {
    fn default() -> Self {
        Self {
            to_light: "\u{2600}\u{FE0F} Light Mode".into(),
            to_dark: "\u{1F319} Dark Mode".into(),
        }
    }
}

/// Full page configuration.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PortfolioConfig {
    pub selectors: Selectors,
    pub timings: Timings,
    pub theme_labels: ThemeLabels,
    /// Used when the navbar reports a zero height.
    pub header_fallback_height: f64,
    /// Added below the header when deciding which section is current.
    pub tracker_margin: f64,
    /// Gap left above a section after a smooth scroll.
    pub scroll_margin: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    /// Section id the "Contact Me" hero buttons scroll to.
    pub contact_section: String,
    /// Text a hero button must contain to act as a contact shortcut.
    pub contact_button_text: String,
    /// `data-project` key to display name for projects without a link yet.
    pub projects: BTreeMap<String, String>,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        let mut projects = BTreeMap::new();
        projects.insert("gps".to_owned(), "Real-Time GPS Tracking System".to_owned());
        Self {
            selectors: Selectors::default(),
            timings: Timings::default(),
            theme_labels: ThemeLabels::default(),
            header_fallback_height: 80.0,
            tracker_margin: 50.0,
            scroll_margin: 20.0,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".into(),
            contact_section: "contact".into(),
            contact_button_text: "Contact Me".into(),
            projects,
        }
    }
}

impl PortfolioConfig {
    /// Parse a (possibly partial) JSON config; absent fields keep defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] when the input is not valid JSON or a
    /// field has the wrong type.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Display name for a `data-project` key, or the key itself when unmapped.
    #[must_use]
    pub fn project_name<'a>(&'a self, key: &'a str) -> &'a str {
        self.projects.get(key).map_or(key, String::as_str)
    }
}
