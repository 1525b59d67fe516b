use super::*;

fn classify(tag: &str, href: Option<&str>, data_project: Option<&str>) -> ProjectAction {
    ProjectAction::classify(ProjectButton { tag, href, data_project }, &PortfolioConfig::default())
}

#[test]
fn anchor_with_href_opens_link() {
    assert_eq!(
        classify("A", Some("https://github.com/someone/zomato"), None),
        ProjectAction::OpenLink("https://github.com/someone/zomato".into())
    );
}

#[test]
fn anchor_without_href_is_ignored() {
    assert_eq!(classify("A", None, None), ProjectAction::Ignore);
    assert_eq!(classify("A", Some("  "), None), ProjectAction::Ignore);
}

#[test]
fn button_with_known_key_uses_display_name() {
    assert_eq!(
        classify("BUTTON", None, Some("gps")),
        ProjectAction::ComingSoon("Real-Time GPS Tracking System".into())
    );
}

#[test]
fn button_with_unknown_key_uses_key() {
    assert_eq!(classify("BUTTON", None, Some("weather")), ProjectAction::ComingSoon("weather".into()));
}

#[test]
fn button_without_key_uses_generic_name() {
    assert_eq!(classify("BUTTON", None, None), ProjectAction::ComingSoon(UNNAMED_PROJECT.into()));
    assert_eq!(classify("BUTTON", None, Some(" ")), ProjectAction::ComingSoon(UNNAMED_PROJECT.into()));
}

#[test]
fn tag_match_is_case_insensitive() {
    assert_eq!(classify("button", None, Some("gps")), classify("BUTTON", None, Some("gps")));
}

#[test]
fn other_elements_are_ignored() {
    assert_eq!(classify("DIV", Some("https://example.com"), Some("gps")), ProjectAction::Ignore);
}
