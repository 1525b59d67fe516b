//! Per-feature page state.
//!
//! DESIGN
//! ======
//! Each interactive feature keeps its state in a small plain struct here and
//! the `dom` layer only mirrors that state onto elements. Keeping the rules
//! out of event handlers lets them run under native `cargo test`.

pub mod menu;
pub mod notification;
pub mod reveal;
pub mod theme;
pub mod tracker;
