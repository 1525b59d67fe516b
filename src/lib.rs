//! # portfolio-ui
//!
//! WASM behavior layer for a static personal portfolio page. The page ships
//! as plain HTML that works without scripting; this crate attaches navigation
//! highlighting, smooth scrolling, the mobile menu, reveal-on-scroll, hover
//! micro-interactions, ripple feedback, the "coming soon" notification and
//! the theme toggle on top of it.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | Pure per-feature state (active section, menu, notification, theme, reveal) |
//! | [`util`] | Pure helpers (throttle, scheduled tasks, scroll math, hover/ripple styles, project buttons) |
//! | [`config`] | Page configuration with serde defaults |
//! | [`error`] | Error types surfaced at setup |
//! | [`components`] | Leptos view for the notification overlay |
//! | `dom` | Browser bindings (`csr` feature only) |
//!
//! Everything outside `dom` compiles natively and is unit tested without a
//! browser.

pub mod components;
pub mod config;
#[cfg(feature = "csr")]
pub mod dom;
pub mod error;
pub mod state;
pub mod util;
