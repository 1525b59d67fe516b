//! Dark/light theme toggle.
//!
//! The theme lives only in the body class; reloading the page starts over
//! from whatever the markup ships with.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::config::ThemeLabels;

/// Class toggled on `<body>` while the dark theme is active.
pub const DARK_CLASS: &str = "dark-mode";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn from_body_class(has_dark_class: bool) -> Self {
        if has_dark_class { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Toggle label, naming the theme a click switches to.
    #[must_use]
    pub fn label(self, labels: &ThemeLabels) -> &str {
        match self {
            Self::Light => &labels.to_dark,
            Self::Dark => &labels.to_light,
        }
    }
}
