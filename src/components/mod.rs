//! Leptos views mounted into the static page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page markup is static HTML; only transient UI that does not exist in
//! the markup (the project notification) is rendered as a component and
//! mounted on demand by the `dom` bindings.

pub mod notification;
