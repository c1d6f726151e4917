//! Material List UI Components
//!
//! Dioxus components rendering Material Design lists on top of
//! `mdclist-core`.
//!
//! ## Structure
//!
//! - [`List`]: the `<ul class="mdc-list">` container
//! - [`ListItem`]: one row with graphic, text and meta regions
//! - [`ItemHandle`]: the imperative handle a list controller keeps per item
//!
//! Components only emit structural classes; the stylesheet is the
//! application's business.

pub mod components;

pub use components::*;
