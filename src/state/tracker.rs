//! Active-section tracking.
//!
//! Maps the current scroll offset to the single section the reader is in and
//! reflects that onto the navigation links. Extents are passed in fresh on
//! every evaluation since layout shifts (resize, late images) move sections.

#[cfg(test)]
#[path = "tracker_test.rs"]
mod tracker_test;

use crate::util::scroll::anchor_id;

/// A tracked section of the document, `[top, top + height)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Region {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl Region {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self { id: id.into(), top, height }
    }

    #[must_use]
    pub fn contains(&self, point: f64) -> bool {
        point >= self.top && point < self.top + self.height
    }
}

/// Scroll offset plus the fixed header allowance, recomputed on every tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollState {
    pub offset: f64,
    pub anchor_offset: f64,
}

impl ScrollState {
    /// Negative offsets (overscroll bounce) clamp to the top of the page.
    #[must_use]
    pub fn new(offset: f64, header_height: f64, margin: f64) -> Self {
        Self { offset: offset.max(0.0), anchor_offset: header_height + margin }
    }

    #[must_use]
    pub fn comparison_point(&self) -> f64 {
        self.offset + self.anchor_offset
    }
}

/// Id of the region containing `point`, if any.
///
/// Regions are scanned in document order and the last match wins, so a
/// section nested inside another reports the inner one.
#[must_use]
pub fn current_region(regions: &[Region], point: f64) -> Option<&str> {
    regions
        .iter()
        .rev()
        .find(|region| region.contains(point))
        .map(|region| region.id.as_str())
}

/// A navigation link and whether it is highlighted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavControl {
    /// Region id from the link's `#anchor`; `None` for links elsewhere.
    pub id: Option<String>,
    pub active: bool,
}

/// State change for one control, by index into [`ActiveNav::controls`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlChange {
    pub index: usize,
    pub active: bool,
}

/// Highlight state for the navigation links, at most one active.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActiveNav {
    controls: Vec<NavControl>,
}

impl ActiveNav {
    /// Build from each link's `href` attribute, in document order.
    pub fn from_hrefs<'a, I>(hrefs: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let controls = hrefs
            .into_iter()
            .map(|href| NavControl {
                id: href.and_then(anchor_id).map(str::to_owned),
                active: false,
            })
            .collect();
        Self { controls }
    }

    #[cfg(test)]
    #[must_use]
    pub fn controls(&self) -> &[NavControl] {
        &self.controls
    }

    #[cfg(test)]
    #[must_use]
    pub fn active_id(&self) -> Option<&str> {
        self.controls
            .iter()
            .find(|control| control.active)
            .and_then(|control| control.id.as_deref())
    }

    /// Make `current` the highlighted region and return only the controls
    /// whose state actually changed.
    ///
    /// The first control pointing at `current` becomes active; every other
    /// control is cleared. `None` (or an id no control points at) leaves
    /// nothing active.
    pub fn set_current(&mut self, current: Option<&str>) -> Vec<ControlChange> {
        let target = current.and_then(|id| {
            self.controls
                .iter()
                .position(|control| control.id.as_deref() == Some(id))
        });

        let mut changes = Vec::new();
        for (index, control) in self.controls.iter_mut().enumerate() {
            let active = Some(index) == target;
            if control.active != active {
                control.active = active;
                changes.push(ControlChange { index, active });
            }
        }
        changes
    }
}
