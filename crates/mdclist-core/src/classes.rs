//! Structural class vocabulary and classnames-style merging.
//!
//! Components never embed visual styling; they only emit these tokens and
//! an external stylesheet binds to them.

use std::fmt;

/// Class of the `<ul>` container.
pub const LIST: &str = "mdc-list";
/// Base class every list item root carries.
pub const LIST_ITEM: &str = "mdc-list-item";
pub const GRAPHIC: &str = "mdc-list-item__graphic";
pub const TEXT: &str = "mdc-list-item__text";
pub const PRIMARY_TEXT: &str = "mdc-list-item__primary-text";
pub const SECONDARY_TEXT: &str = "mdc-list-item__secondary-text";
pub const META: &str = "mdc-list-item__meta";

// Modifiers owned by list controllers, not by the item itself.
pub const ACTIVATED: &str = "mdc-list-item--activated";
pub const SELECTED: &str = "mdc-list-item--selected";
pub const DISABLED: &str = "mdc-list-item--disabled";

/// Join class parts into a single class attribute value.
///
/// Every part is split on whitespace, empty tokens are dropped and repeated
/// tokens keep only their first occurrence.
pub fn merge_classes<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    let mut tokens: Vec<&str> = Vec::new();
    for token in parts.into_iter().flat_map(str::split_whitespace) {
        if !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    tokens.join(" ")
}

/// Root class of a list item: the base class followed by `class_name`.
pub fn list_item_classes(class_name: &str) -> String {
    merge_classes([LIST_ITEM, class_name])
}

/// A parsed class attribute, as last rendered on a node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassList(Vec<String>);

impl ClassList {
    pub fn parse(value: &str) -> Self {
        Self(merge_classes([value]).split(' ').filter(|t| !t.is_empty()).map(String::from).collect())
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|t| t == token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}
