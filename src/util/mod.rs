//! Utility helpers shared across the page bindings.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate timing, geometry and style tables from the
//! browser bindings so they can be reused and tested without a DOM.

pub mod hover;
pub mod project;
pub mod ripple;
pub mod schedule;
pub mod scroll;
pub mod styles;
pub mod throttle;
