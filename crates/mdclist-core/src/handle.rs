//! Imperative handle a list controller holds for each item.
//!
//! The handle owns a single-slot cell for the item's root node. The renderer
//! fills it on mount and clears it on unmount; `focus` and `follow_href`
//! read it and quietly do nothing while it is empty. Rendering is single
//! threaded, so the cell is an `Rc<RefCell<_>>`.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::classes::ClassList;
use crate::layout::ItemLayout;

/// What a mounted root node can be asked to do.
pub trait ItemNode: Clone {
    /// Move input focus to the node.
    fn focus(&self);
    /// Dispatch one primary activation (click) on the node.
    fn click(&self);
}

struct HandleState<N> {
    node: Option<N>,
    classes: ClassList,
    href: Option<String>,
}

/// Shared, identity-compared handle to one list item instance.
pub struct ListItemHandle<N> {
    state: Rc<RefCell<HandleState<N>>>,
}

impl<N> Clone for ListItemHandle<N> {
    fn clone(&self) -> Self {
        Self { state: Rc::clone(&self.state) }
    }
}

impl<N> PartialEq for ListItemHandle<N> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl<N> fmt::Debug for ListItemHandle<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ListItemHandle")
            .field("attached", &state.node.is_some())
            .field("classes", &state.classes.to_string())
            .field("href", &state.href)
            .finish()
    }
}

impl<N: ItemNode> Default for ListItemHandle<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: ItemNode> ListItemHandle<N> {
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(HandleState {
                node: None,
                classes: ClassList::default(),
                href: None,
            })),
        }
    }

    /// Called by the renderer once the root node exists.
    pub fn attach(&self, node: N) {
        tracing::debug!("list item node attached");
        self.state.borrow_mut().node = Some(node);
    }

    /// Called by the renderer when the root node goes away.
    pub fn detach(&self) {
        if self.state.borrow_mut().node.take().is_some() {
            tracing::debug!("list item node detached");
        }
    }

    pub fn is_attached(&self) -> bool {
        self.state.borrow().node.is_some()
    }

    /// Record what the root node carries after a render.
    pub fn commit(&self, layout: &ItemLayout) {
        let mut state = self.state.borrow_mut();
        state.classes = ClassList::parse(&layout.class);
        state.href = layout.href().map(String::from);
    }

    /// Classes of the most recent render.
    pub fn class_list(&self) -> ClassList {
        self.state.borrow().classes.clone()
    }

    pub fn href(&self) -> Option<String> {
        self.state.borrow().href.clone()
    }

    fn node(&self) -> Option<N> {
        self.state.borrow().node.clone()
    }

    pub fn focus(&self) {
        match self.node() {
            Some(node) => node.focus(),
            None => tracing::trace!("focus() on unmounted list item ignored"),
        }
    }

    /// Activate the item when its root carries a link target.
    pub fn follow_href(&self) {
        let Some(node) = self.node() else {
            tracing::trace!("follow_href() on unmounted list item ignored");
            return;
        };
        if self.state.borrow().href.is_none() {
            tracing::trace!("follow_href() on list item without href ignored");
            return;
        }
        node.click();
    }

    /// Reserved for checkbox selection. No list controller defines its
    /// semantics yet, so this does nothing.
    pub fn toggle_checkbox(&self) {
        tracing::trace!("toggle_checkbox() is not supported");
    }
}
