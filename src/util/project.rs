//! Project button click handling.

#[cfg(test)]
#[path = "project_test.rs"]
mod project_test;

use crate::config::PortfolioConfig;

/// Name used for a placeholder button with no `data-project` key.
pub const UNNAMED_PROJECT: &str = "This project";

/// Window features for external project links.
pub const NEW_TAB_FEATURES: &str = "noopener,noreferrer";

/// What a project button should do when clicked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProjectAction {
    /// Open the link in a new tab.
    OpenLink(String),
    /// Show the "coming soon" notification for this project.
    ComingSoon(String),
    Ignore,
}

/// The parts of a clicked project button that decide its action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProjectButton<'a> {
    /// Upper-case tag name as reported by the DOM (`"A"`, `"BUTTON"`).
    pub tag: &'a str,
    pub href: Option<&'a str>,
    pub data_project: Option<&'a str>,
}

impl ProjectAction {
    #[must_use]
    pub fn classify(button: ProjectButton<'_>, config: &PortfolioConfig) -> Self {
        match button.tag.to_ascii_uppercase().as_str() {
            "A" => match button.href.map(str::trim) {
                Some(href) if !href.is_empty() => Self::OpenLink(href.to_owned()),
                _ => Self::Ignore,
            },
            "BUTTON" => {
                let name = button
                    .data_project
                    .map(str::trim)
                    .filter(|key| !key.is_empty())
                    .map_or(UNNAMED_PROJECT, |key| config.project_name(key));
                Self::ComingSoon(name.to_owned())
            }
            _ => Self::Ignore,
        }
    }
}
