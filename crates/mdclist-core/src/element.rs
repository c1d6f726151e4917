//! Caller-supplied child elements and their derivation.
//!
//! The graphic and meta slots accept an element description owned by the
//! caller. Before rendering, the item derives a new description with its
//! tab-index (and for meta, its class) rewritten. The original value is
//! never touched.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::classes::merge_classes;

/// Element kinds a graphic or meta child may render as.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChildTag {
    #[default]
    Span,
    /// Icon font glyph, e.g. `<i class="material-icons">star</i>`
    I,
    Img,
    A,
    Button,
    Input,
    Div,
}

impl ChildTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChildTag::Span => "span",
            ChildTag::I => "i",
            ChildTag::Img => "img",
            ChildTag::A => "a",
            ChildTag::Button => "button",
            ChildTag::Input => "input",
            ChildTag::Div => "div",
        }
    }

    /// Void elements take no children or text.
    pub fn is_void(&self) -> bool {
        matches!(self, ChildTag::Img | ChildTag::Input)
    }
}

/// Immutable description of a graphic or meta element.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildElement {
    #[serde(default)]
    pub tag: ChildTag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    /// Explicit tab-index, if the caller declared one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_index: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Everything else, forwarded unchanged.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

impl ChildElement {
    pub fn new(tag: ChildTag) -> Self {
        Self { tag, ..Default::default() }
    }

    /// Material icon glyph: `<i class="material-icons">{name}</i>`.
    pub fn icon(name: impl Into<String>) -> Self {
        Self::new(ChildTag::I).with_class("material-icons").with_text(name)
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_tab_index(mut self, tab_index: i32) -> Self {
        self.tab_index = Some(tab_index);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }
}

/// Rewrites applied when deriving a child from the caller's element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChildOverrides {
    /// Class appended after the element's own classes.
    pub append_class: Option<&'static str>,
    /// Controller-supplied tab-index for children that declare one.
    pub children_tab_index: i32,
}

/// Tab-index rewrite rule: an explicit value becomes the controller's
/// value, an absent one becomes -1.
pub fn rewrite_tab_index(explicit: Option<i32>, children_tab_index: i32) -> i32 {
    match explicit {
        Some(_) => children_tab_index,
        None => -1,
    }
}

/// Derive the element that is actually rendered. `original` is left as is.
pub fn derive_child(original: &ChildElement, overrides: &ChildOverrides) -> ChildElement {
    let class = match overrides.append_class {
        Some(extra) => Some(merge_classes([original.class.as_deref().unwrap_or_default(), extra])),
        None => original.class.clone(),
    };

    ChildElement {
        tag: original.tag,
        class,
        tab_index: Some(rewrite_tab_index(original.tab_index, overrides.children_tab_index)),
        text: original.text.clone(),
        attributes: original.attributes.clone(),
    }
}

/// Trailing content: a plain string or an element.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Meta {
    Text(String),
    Element(ChildElement),
}

impl Meta {
    pub fn text(text: impl Into<String>) -> Self {
        Meta::Text(text.into())
    }

    /// An empty string counts as no meta at all.
    pub fn is_present(&self) -> bool {
        match self {
            Meta::Text(text) => !text.is_empty(),
            Meta::Element(_) => true,
        }
    }
}

impl From<ChildElement> for Meta {
    fn from(element: ChildElement) -> Self {
        Meta::Element(element)
    }
}

impl From<&str> for Meta {
    fn from(text: &str) -> Self {
        Meta::Text(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graphic_overrides(children_tab_index: i32) -> ChildOverrides {
        ChildOverrides { append_class: None, children_tab_index }
    }

    #[test]
    fn tab_index_rule() {
        assert_eq!(rewrite_tab_index(None, 3), -1);
        assert_eq!(rewrite_tab_index(Some(0), 3), 3);
        assert_eq!(rewrite_tab_index(Some(7), -1), -1);
    }

    #[test]
    fn explicit_tab_index_replaced_by_children_tab_index() {
        let icon = ChildElement::icon("star").with_tab_index(0);
        let derived = derive_child(&icon, &graphic_overrides(3));
        assert_eq!(derived.tab_index, Some(3));
        assert_eq!(derived.class.as_deref(), Some("material-icons"));
        assert_eq!(derived.text.as_deref(), Some("star"));
    }

    #[test]
    fn missing_tab_index_forced_to_minus_one() {
        let icon = ChildElement::icon("star");
        let derived = derive_child(&icon, &graphic_overrides(3));
        assert_eq!(derived.tab_index, Some(-1));
    }

    #[test]
    fn derive_leaves_original_untouched() {
        let original = ChildElement::new(ChildTag::Button)
            .with_class("x")
            .with_attribute("aria-label", "More");
        let snapshot = original.clone();
        let _ = derive_child(
            &original,
            &ChildOverrides { append_class: Some("mdc-list-item__meta"), children_tab_index: 0 },
        );
        assert_eq!(original, snapshot);
    }

    #[test]
    fn meta_class_appended_after_existing() {
        let original = ChildElement::new(ChildTag::Span).with_class("x y");
        let derived = derive_child(
            &original,
            &ChildOverrides { append_class: Some("mdc-list-item__meta"), children_tab_index: 0 },
        );
        assert_eq!(derived.class.as_deref(), Some("x y mdc-list-item__meta"));
    }

    #[test]
    fn other_attributes_pass_through() {
        let original = ChildElement::new(ChildTag::Img)
            .with_attribute("src", "avatar.png")
            .with_attribute("alt", "Avatar");
        let derived = derive_child(&original, &graphic_overrides(-1));
        assert_eq!(derived.attributes, original.attributes);
        assert_eq!(derived.tag, ChildTag::Img);
    }

    #[test]
    fn meta_from_json() {
        let text: Meta = serde_json::from_str(r#""3""#).unwrap();
        assert_eq!(text, Meta::text("3"));

        let element: Meta =
            serde_json::from_str(r#"{"tag": "i", "class": "material-icons", "text": "info"}"#)
                .unwrap();
        assert_eq!(element, Meta::Element(ChildElement::icon("info")));
    }

    #[test]
    fn empty_meta_text_is_absent() {
        assert!(!Meta::text("").is_present());
        assert!(Meta::text("0").is_present());
        assert!(Meta::from(ChildElement::default()).is_present());
    }
}
