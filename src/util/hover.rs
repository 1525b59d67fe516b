//! Pointer-enter/leave styles for badges, cards and contact icons.

#[cfg(test)]
#[path = "hover_test.rs"]
mod hover_test;

/// Elements that get a hover micro-interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverKind {
    SkillBadge,
    Card,
    ProjectCard,
    /// Applied to the icon inside a contact card, not the card itself.
    ContactIcon,
}

/// Inline style values for one hover state. `None` clears the property.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoverStyle {
    pub transform: &'static str,
    pub box_shadow: Option<&'static str>,
    pub transition: Option<&'static str>,
}

impl HoverKind {
    #[must_use]
    pub fn enter(self) -> HoverStyle {
        match self {
            Self::SkillBadge => HoverStyle {
                transform: "translateY(-2px) scale(1.05)",
                box_shadow: Some("0 4px 12px rgba(0, 0, 0, 0.15)"),
                transition: None,
            },
            Self::Card => HoverStyle {
                transform: "translateY(-4px)",
                box_shadow: Some("0 12px 24px rgba(0, 0, 0, 0.15)"),
                transition: None,
            },
            Self::ProjectCard => HoverStyle {
                transform: "translateY(-6px) scale(1.02)",
                box_shadow: Some("0 16px 32px rgba(0, 0, 0, 0.15)"),
                transition: None,
            },
            Self::ContactIcon => HoverStyle {
                transform: "rotate(360deg) scale(1.1)",
                box_shadow: None,
                transition: Some("transform 0.5s ease"),
            },
        }
    }

    #[must_use]
    pub fn leave(self) -> HoverStyle {
        let transform = match self {
            Self::SkillBadge | Self::ProjectCard => "translateY(0) scale(1)",
            Self::Card => "translateY(0)",
            Self::ContactIcon => "rotate(0deg) scale(1)",
        };
        HoverStyle { transform, box_shadow: None, transition: None }
    }

    /// Whether leaving should clear the inline shadow set on enter.
    #[must_use]
    pub fn clears_shadow(self) -> bool {
        self.enter().box_shadow.is_some()
    }
}
