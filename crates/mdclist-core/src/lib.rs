//! Material List Core Library
//!
//! Framework-agnostic model of a Material Design list item.
//!
//! ## Overview
//!
//! A list item is a row with an optional leading graphic, a text region
//! (one or two lines) and optional trailing meta content. This crate holds
//! everything about that row that does not need a renderer:
//!
//! - **Classes**: the structural class vocabulary stylesheets bind to
//! - **Elements**: immutable descriptions of caller-supplied graphic/meta
//!   children and the pure tab-index/class derivation applied to them
//! - **Layout**: props in, three regions out
//! - **Tree**: a declarative node tree with HTML serialization
//! - **Handle**: the imperative `focus` / `follow_href` capability set a
//!   list controller holds for each item
//!
//! ## Quick Start
//!
//! ```
//! use mdclist_core::{ItemContent, ItemLayout, Meta};
//!
//! let content = ItemContent::new("Inbox")
//!     .with_secondary_text("3 unread")
//!     .with_meta(Meta::text("3"));
//!
//! let html = ItemLayout::compute(&content).to_node().to_html();
//! assert!(html.starts_with(r#"<li class="mdc-list-item">"#));
//! ```

pub mod classes;
pub mod element;
pub mod error;
pub mod fixture;
pub mod handle;
pub mod layout;
pub mod tree;
pub mod update;

// Re-exports
pub use classes::{list_item_classes, merge_classes, ClassList};
pub use element::{derive_child, rewrite_tab_index, ChildElement, ChildOverrides, ChildTag, Meta};
pub use error::{ListError, Result};
pub use fixture::ListFixture;
pub use handle::{ItemNode, ListItemHandle};
pub use layout::{ContractWarning, ItemContent, ItemLayout, MetaRegion, TextRegion};
pub use tree::{render_list, Node};
pub use update::ClassNameTracker;
