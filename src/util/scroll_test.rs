use super::*;

// =============================================================
// anchor_id
// =============================================================

#[test]
fn anchor_id_strips_hash() {
    assert_eq!(anchor_id("#about"), Some("about"));
}

#[test]
fn anchor_id_rejects_other_hrefs() {
    assert_eq!(anchor_id("#"), None);
    assert_eq!(anchor_id(""), None);
    assert_eq!(anchor_id("about"), None);
    assert_eq!(anchor_id("https://github.com/#readme"), None);
}

// =============================================================
// scroll_target
// =============================================================

#[test]
fn scroll_target_subtracts_navbar_and_margin() {
    assert_eq!(scroll_target(1000.0, 64.0, 20.0), 916.0);
}

#[test]
fn scroll_target_with_unmeasured_navbar() {
    let navbar = effective_navbar_height(0.0, 80.0);
    assert_eq!(scroll_target(1000.0, navbar, 20.0), 900.0);
}

#[test]
fn scroll_target_never_negative() {
    assert_eq!(scroll_target(50.0, 80.0, 20.0), 0.0);
}

#[test]
fn effective_height_prefers_measurement() {
    assert_eq!(effective_navbar_height(72.0, 80.0), 72.0);
    assert_eq!(effective_navbar_height(0.0, 80.0), 80.0);
}

// =============================================================
// Navbar fade
// =============================================================

#[test]
fn navbar_opacity_starts_at_base() {
    assert!((navbar_opacity(0.0) - 0.8).abs() < 1e-9);
}

#[test]
fn navbar_opacity_halfway() {
    assert!((navbar_opacity(100.0) - 0.875).abs() < 1e-9);
}

#[test]
fn navbar_opacity_caps() {
    assert!((navbar_opacity(200.0) - 0.95).abs() < 1e-9);
    assert!((navbar_opacity(10_000.0) - 0.95).abs() < 1e-9);
}

#[test]
fn navbar_opacity_ignores_overscroll() {
    assert!((navbar_opacity(-40.0) - 0.8).abs() < 1e-9);
}

#[test]
fn navbar_background_by_theme() {
    assert_eq!(navbar_background(0.8, false), "rgba(255, 255, 255, 0.800)");
    assert_eq!(navbar_background(0.95, true), "rgba(31, 33, 33, 0.950)");
}

// =============================================================
// scrollToSection argument
// =============================================================

#[test]
fn section_arg_accepts_bare_id() {
    assert_eq!(section_arg("projects"), Some("projects"));
}

#[test]
fn section_arg_strips_hash_and_whitespace() {
    assert_eq!(section_arg(" #contact "), Some("contact"));
}

#[test]
fn section_arg_rejects_empty() {
    assert_eq!(section_arg(""), None);
    assert_eq!(section_arg("#"), None);
    assert_eq!(section_arg("   "), None);
}

#[test]
fn global_name_matches_inline_handlers() {
    assert_eq!(SCROLL_TO_SECTION_GLOBAL, "scrollToSection");
}
