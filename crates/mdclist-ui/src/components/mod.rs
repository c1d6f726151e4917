//! List components.
//!
//! Structure comes from `mdclist_core::ItemLayout`; these files only map it
//! onto Dioxus elements.

mod child;
mod dom_node;
mod intern;
mod list;
mod list_item;

pub use dom_node::{DomNode, ItemHandle};
pub use list::*;
pub use list_item::*;
