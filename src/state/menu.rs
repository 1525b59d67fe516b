//! Mobile menu open/closed state.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Which of the two toggle glyphs should be shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuIcons {
    pub menu_icon_visible: bool,
    pub close_icon_visible: bool,
}

/// Collapsible menu panel behind the navbar toggle. Starts hidden.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Flip the panel; returns the new open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Returns `true` if the panel was closed before.
    #[cfg(test)]
    pub fn open(&mut self) -> bool {
        let changed = !self.open;
        self.open = true;
        changed
    }

    /// Returns `true` if the panel was open before.
    pub fn close(&mut self) -> bool {
        let changed = self.open;
        self.open = false;
        changed
    }

    #[must_use]
    pub fn icons(self) -> MenuIcons {
        MenuIcons { menu_icon_visible: !self.open, close_icon_visible: self.open }
    }

    /// An open menu closes when a click lands outside both the panel and
    /// its toggle button.
    #[must_use]
    pub fn closes_on_outside_click(self, in_toggle: bool, in_panel: bool) -> bool {
        self.open && !in_toggle && !in_panel
    }
}

/// Delay before the `index`th menu link fades in after opening.
#[must_use]
pub fn stagger_delay_ms(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(step_ms)
}
