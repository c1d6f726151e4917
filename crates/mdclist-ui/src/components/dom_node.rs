//! Mounted list item roots.

use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use mdclist_core::{ItemNode, ListItemHandle};

/// Handle type list controllers keep for each rendered [`ListItem`](super::ListItem).
pub type ItemHandle = ListItemHandle<DomNode>;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Generated `id` for items the caller did not give one.
pub(crate) fn next_dom_id() -> String {
    format!("mdc-list-item-{}", NEXT_ID.fetch_add(1, Ordering::Relaxed))
}

/// A list item's `<li>` as seen from `onmounted`.
#[derive(Clone)]
pub struct DomNode {
    mounted: Rc<MountedData>,
    dom_id: String,
}

impl DomNode {
    pub fn new(mounted: Rc<MountedData>, dom_id: impl Into<String>) -> Self {
        Self { mounted, dom_id: dom_id.into() }
    }

    pub fn dom_id(&self) -> &str {
        &self.dom_id
    }
}

impl ItemNode for DomNode {
    fn focus(&self) {
        let mounted = self.mounted.clone();
        spawn(async move {
            if let Err(e) = mounted.set_focus(true).await {
                tracing::warn!("Failed to focus list item: {:?}", e);
            }
        });
    }

    // MountedData has no click; dispatch it from the page.
    fn click(&self) {
        let js = format!("document.getElementById({:?})?.click();", self.dom_id);
        spawn(async move {
            if let Err(e) = document::eval(&js).await {
                tracing::warn!("Failed to activate list item: {:?}", e);
            }
        });
    }
}
