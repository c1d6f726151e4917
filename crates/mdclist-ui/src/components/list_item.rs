//! List Item Component
//!
//! One row of a Material list: optional leading graphic, one or two lines
//! of text, optional trailing meta. The owning list controller keeps an
//! [`ItemHandle`] to focus or activate the row and is told through
//! `update_class_list` whenever the row's `class_name` changes.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use dioxus::dioxus_core::{Attribute, AttributeValue};
use dioxus::prelude::*;
use mdclist_core::classes;
use mdclist_core::{
    ChildElement, ClassNameTracker, ItemContent, ItemLayout, Meta, MetaRegion, TextRegion,
};

use super::child::render_child;
use super::dom_node::{next_dom_id, DomNode, ItemHandle};
use super::intern::intern;

/// Properties for the ListItem component
#[derive(Clone, PartialEq, Props)]
pub struct ListItemProps {
    /// Extra classes merged after `mdc-list-item`
    #[props(default, into)]
    pub class_name: String,
    /// Tab-index for graphic/meta children that declare one
    #[props(default = -1)]
    pub children_tab_index: i32,
    #[props(default, into)]
    pub primary_text: String,
    /// When empty the text region is a single span
    #[props(default, into)]
    pub secondary_text: String,
    /// Leading icon or avatar
    #[props(default)]
    pub graphic: Option<ChildElement>,
    /// Trailing string or element
    #[props(default)]
    pub meta: Option<Meta>,
    /// Called after a re-render that changed `class_name`
    #[props(default)]
    pub update_class_list: Option<EventHandler<ItemHandle>>,
    /// Controller-owned handle; the item creates its own when absent
    #[props(default)]
    pub handle: Option<ItemHandle>,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    pub onkeydown: Option<EventHandler<KeyboardEvent>>,
    /// Runtime-named attributes for the `<li>`, e.g. from fixtures
    #[props(default)]
    pub extra_attributes: BTreeMap<String, String>,
    /// Everything else lands on the `<li>` unchanged
    #[props(extends = GlobalAttributes, extends = a)]
    pub attributes: Vec<Attribute>,
}

/// Split pass-through attributes into what the `<li>` receives and the
/// text-valued view the layout inspects. `class` is owned by the item.
fn pass_through(
    attributes: &[Attribute],
    extra: &BTreeMap<String, String>,
) -> (Vec<Attribute>, BTreeMap<String, String>) {
    let mut forwarded = Vec::with_capacity(attributes.len() + extra.len());
    let mut text = BTreeMap::new();
    let extra = extra
        .iter()
        .map(|(name, value)| Attribute::new(intern(name), value.clone(), None, false));
    for attribute in attributes.iter().cloned().chain(extra) {
        if let AttributeValue::Text(value) = &attribute.value {
            text.insert(attribute.name.to_string(), value.clone());
        }
        if attribute.name != "class" {
            forwarded.push(attribute);
        }
    }
    (forwarded, text)
}

/// Displays a single Material list item
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ListItem {
///         primary_text: "Inbox",
///         secondary_text: "3 unread",
///         graphic: ChildElement::icon("inbox"),
///         meta: Meta::text("3"),
///         handle: handles[0].clone(),
///         update_class_list: move |handle: ItemHandle| {
///             tracing::info!("now {}", handle.class_list());
///         },
///     }
/// }
/// ```
#[component]
pub fn ListItem(props: ListItemProps) -> Element {
    let own_handle = use_hook(ItemHandle::new);
    let handle = props.handle.clone().unwrap_or(own_handle);
    let generated_id = use_hook(next_dom_id);
    let tracker = use_hook(|| Rc::new(RefCell::new(ClassNameTracker::new())));

    let (mut root_attributes, text_attributes) =
        pass_through(&props.attributes, &props.extra_attributes);
    let dom_id = match text_attributes.get("id") {
        Some(id) => id.clone(),
        None => {
            root_attributes.push(Attribute::new("id", generated_id.clone(), None, false));
            generated_id
        }
    };

    let content = ItemContent {
        class_name: props.class_name.clone(),
        children_tab_index: props.children_tab_index,
        primary_text: props.primary_text.clone(),
        secondary_text: props.secondary_text.clone(),
        graphic: props.graphic.clone(),
        meta: props.meta.clone(),
        attributes: text_attributes,
    };
    if cfg!(debug_assertions) {
        for warning in content.warnings() {
            tracing::warn!(item = %dom_id, "{}", warning);
        }
    }

    let layout = ItemLayout::compute(&content);
    handle.commit(&layout);

    {
        let handle = handle.clone();
        use_drop(move || handle.detach());
    }

    let update_class_list = props.update_class_list;
    let effect_handle = handle.clone();
    use_effect(use_reactive((&props.class_name,), move |(class_name,)| {
        if tracker.borrow_mut().observe(&class_name) {
            tracing::debug!(class_name = %class_name, "list item class name changed");
            if let Some(callback) = &update_class_list {
                callback.call(effect_handle.clone());
            }
        }
    }));

    let text = match &layout.text {
        TextRegion::Single(primary) => rsx! {
            span { class: classes::TEXT, "{primary}" }
        },
        TextRegion::TwoLine { primary, secondary } => rsx! {
            span { class: classes::TEXT,
                span { class: classes::PRIMARY_TEXT, "{primary}" }
                span { class: classes::SECONDARY_TEXT, "{secondary}" }
            }
        },
    };

    let meta = match &layout.meta {
        Some(MetaRegion::Text(meta)) => rsx! {
            span { class: classes::META, "{meta}" }
        },
        Some(MetaRegion::Element(element)) => render_child(element),
        None => rsx! {},
    };

    let mount_handle = handle.clone();
    let onclick = props.onclick;
    let onkeydown = props.onkeydown;

    rsx! {
        li {
            class: "{layout.class}",
            onmounted: move |evt: MountedEvent| {
                mount_handle.attach(DomNode::new(evt.data(), dom_id.clone()));
            },
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            onkeydown: move |evt| {
                if let Some(handler) = &onkeydown {
                    handler.call(evt);
                }
            },
            ..root_attributes,
            if let Some(graphic) = &layout.graphic {
                span { class: classes::GRAPHIC, role: "presentation",
                    {render_child(graphic)}
                }
            }
            {text}
            {meta}
        }
    }
}
