use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn defaults_match_stock_markup() {
    let config = PortfolioConfig::default();
    assert_eq!(config.selectors.navbar_id, "navbar");
    assert_eq!(config.selectors.nav_toggle_id, "nav-toggle");
    assert_eq!(config.selectors.mobile_menu_id, "mobile-menu");
    assert_eq!(config.selectors.theme_toggle_id, "dark-toggle");
    assert_eq!(config.selectors.sections, "section[id]");
    assert_eq!(config.tracker_margin, 50.0);
    assert_eq!(config.scroll_margin, 20.0);
    assert_eq!(config.header_fallback_height, 80.0);
}

#[test]
fn default_timings() {
    let timings = Timings::default();
    assert_eq!(timings.scroll_throttle_ms, 100);
    assert_eq!(timings.notification_ms, 5_000);
    assert_eq!(timings.ripple_ms, 600);
    assert_eq!(timings.menu_stagger_ms, 50);
}

#[test]
fn default_theme_labels_differ() {
    let labels = ThemeLabels::default();
    assert!(labels.to_light.ends_with("Light Mode"));
    assert!(labels.to_dark.ends_with("Dark Mode"));
}

// =============================================================
// JSON overrides
// =============================================================

#[test]
fn empty_input_yields_defaults() {
    let config = PortfolioConfig::from_json("  ").unwrap();
    assert_eq!(config, PortfolioConfig::default());
}

#[test]
fn partial_json_keeps_other_defaults() {
    let config = PortfolioConfig::from_json(r#"{"trackerMargin": 20, "timings": {"notificationMs": 3000}}"#).unwrap();
    assert_eq!(config.tracker_margin, 20.0);
    assert_eq!(config.timings.notification_ms, 3_000);
    assert_eq!(config.timings.scroll_throttle_ms, 100);
    assert_eq!(config.selectors.navbar_id, "navbar");
}

#[test]
fn nested_selector_override() {
    let config = PortfolioConfig::from_json(r#"{"selectors": {"navbarId": "top-bar"}}"#).unwrap();
    assert_eq!(config.selectors.navbar_id, "top-bar");
    assert_eq!(config.selectors.nav_links, ".nav-link");
}

#[test]
fn wrong_type_is_an_error() {
    assert!(PortfolioConfig::from_json(r#"{"trackerMargin": "wide"}"#).is_err());
}

#[test]
fn malformed_json_is_an_error() {
    assert!(PortfolioConfig::from_json("{not json").is_err());
}

// =============================================================
// Project names
// =============================================================

#[test]
fn project_name_uses_mapping() {
    let config = PortfolioConfig::default();
    assert_eq!(config.project_name("gps"), "Real-Time GPS Tracking System");
}

#[test]
fn project_name_falls_back_to_key() {
    let config = PortfolioConfig::default();
    assert_eq!(config.project_name("chat-app"), "chat-app");
}

#[test]
fn projects_override_replaces_map() {
    let config = PortfolioConfig::from_json(r#"{"projects": {"blog": "Static Blog Engine"}}"#).unwrap();
    assert_eq!(config.project_name("blog"), "Static Blog Engine");
    assert_eq!(config.project_name("gps"), "gps");
}
