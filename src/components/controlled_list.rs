//! List controller for the demo.
//!
//! Owns one [`ItemHandle`] per row and drives the rows through them:
//!
//! - clicking a row toggles `mdc-list-item--activated` on its `class_name`
//! - `update_class_list` keeps the set of rows that currently render the
//!   activated class, read back from the handle
//! - "focus next" and "open link" call `focus` / `follow_href`

use std::collections::BTreeSet;

use dioxus::prelude::*;
use mdclist_core::classes::{self, merge_classes};
use mdclist_core::ListFixture;
use mdclist_ui::{ItemHandle, List, ListItem};

/// Indices as "1, 3" for the status line.
fn describe(indices: &BTreeSet<usize>) -> String {
    if indices.is_empty() {
        return "none".to_string();
    }
    indices.iter().map(|i| i.to_string()).collect::<Vec<_>>().join(", ")
}

fn link_target(handles: &[ItemHandle], index: usize) -> Option<String> {
    handles.get(index).and_then(ItemHandle::href)
}

/// Demo list with controller-side bookkeeping.
///
/// # Props
///
/// * `fixture` - The list and its items
#[component]
pub fn ControlledList(fixture: ListFixture) -> Element {
    let count = fixture.items.len();
    let handles = use_signal(|| (0..count).map(|_| ItemHandle::new()).collect::<Vec<_>>());

    // Rows the user toggled on; drives each row's class_name
    let mut requested = use_signal(BTreeSet::<usize>::new);
    // Rows whose rendered class list carries the activated class
    let mut activated = use_signal(BTreeSet::<usize>::new);
    let mut focused = use_signal(|| None::<usize>);

    let focus_next = move |_: MouseEvent| {
        if count == 0 {
            return;
        }
        let next = focused().map_or(0, |i| (i + 1) % count);
        focused.set(Some(next));
        handles.read()[next].focus();
    };

    let open_link = move |_: MouseEvent| match focused() {
        Some(index) => handles.read()[index].follow_href(),
        None => tracing::info!("No focused item to open"),
    };

    let activated_text = describe(&activated.read());
    let focused_text = focused().map_or_else(|| "none".to_string(), |i| i.to_string());

    rsx! {
        div { class: "demo-controls",
            button { onclick: focus_next, "Focus next" }
            button { onclick: open_link, "Open link" }
        }
        List { class_name: fixture.class_name.clone(),
            for (index, item) in fixture.items.iter().enumerate() {
                ListItem {
                    key: "{index}",
                    class_name: merge_classes([
                        item.class_name.as_str(),
                        if requested.read().contains(&index) { classes::ACTIVATED } else { "" },
                    ]),
                    children_tab_index: item.children_tab_index,
                    primary_text: item.primary_text.clone(),
                    secondary_text: item.secondary_text.clone(),
                    graphic: item.graphic.clone(),
                    meta: item.meta.clone(),
                    extra_attributes: item.attributes.clone(),
                    handle: handles.read()[index].clone(),
                    tabindex: if index == 0 { "0" } else { "-1" },
                    onclick: move |_| {
                        let mut requested = requested.write();
                        if !requested.remove(&index) {
                            requested.insert(index);
                        }
                        focused.set(Some(index));
                        if let Some(href) = link_target(&handles.read(), index) {
                            tracing::info!("Followed link of item {}: {}", index, href);
                        }
                    },
                    update_class_list: move |handle: ItemHandle| {
                        let class_list = handle.class_list();
                        tracing::debug!("item {} now renders `{}`", index, class_list);
                        if class_list.contains(classes::ACTIVATED) {
                            activated.write().insert(index);
                        } else {
                            activated.write().remove(&index);
                        }
                    },
                }
            }
        }
        p { class: "demo-status", "activated: {activated_text} · focused: {focused_text}" }
    }
}
