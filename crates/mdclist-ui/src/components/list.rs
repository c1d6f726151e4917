//! List Container Component

use dioxus::dioxus_core::Attribute;
use dioxus::prelude::*;
use mdclist_core::classes::{self, merge_classes};

/// Properties for the List component
#[derive(Clone, PartialEq, Props)]
pub struct ListProps {
    /// Extra classes, e.g. `mdc-list--two-line`
    #[props(default, into)]
    pub class_name: String,
    /// The `ListItem`s
    pub children: Element,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
}

/// `<ul class="mdc-list">` around a set of list items
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     List { class_name: "mdc-list--two-line",
///         for item in items {
///             ListItem {
///                 primary_text: item.primary_text.clone(),
///                 secondary_text: item.secondary_text.clone(),
///             }
///         }
///     }
/// }
/// ```
#[component]
pub fn List(props: ListProps) -> Element {
    let class = merge_classes([classes::LIST, props.class_name.as_str()]);

    rsx! {
        ul {
            class: "{class}",
            ..props.attributes,
            {props.children}
        }
    }
}
