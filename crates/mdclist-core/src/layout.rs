//! List item layout: props in, three regions out.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::classes::{self, list_item_classes};
use crate::element::{derive_child, ChildElement, ChildOverrides, ChildTag, Meta};

/// Pass-through keys the item consumes itself and never forwards.
const CONSUMED_ATTRIBUTES: &[&str] = &["class"];

/// Renderer-independent inputs of a list item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemContent {
    /// Extra classes merged after the base class
    pub class_name: String,
    /// Tab-index for graphic/meta children that declare one explicitly
    pub children_tab_index: i32,
    pub primary_text: String,
    pub secondary_text: String,
    pub graphic: Option<ChildElement>,
    pub meta: Option<Meta>,
    /// Forwarded verbatim to the root node
    pub attributes: BTreeMap<String, String>,
}

impl Default for ItemContent {
    fn default() -> Self {
        Self {
            class_name: String::new(),
            children_tab_index: -1,
            primary_text: String::new(),
            secondary_text: String::new(),
            graphic: None,
            meta: None,
            attributes: BTreeMap::new(),
        }
    }
}

impl ItemContent {
    pub fn new(primary_text: impl Into<String>) -> Self {
        Self { primary_text: primary_text.into(), ..Default::default() }
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn with_children_tab_index(mut self, children_tab_index: i32) -> Self {
        self.children_tab_index = children_tab_index;
        self
    }

    pub fn with_secondary_text(mut self, secondary_text: impl Into<String>) -> Self {
        self.secondary_text = secondary_text.into();
        self
    }

    pub fn with_graphic(mut self, graphic: ChildElement) -> Self {
        self.graphic = Some(graphic);
        self
    }

    pub fn with_meta(mut self, meta: impl Into<Meta>) -> Self {
        self.meta = Some(meta.into());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Developer-time contract warnings. Rendering ignores them.
    pub fn warnings(&self) -> Vec<ContractWarning> {
        let mut warnings = Vec::new();

        for key in self.attributes.keys() {
            if CONSUMED_ATTRIBUTES.contains(&key.as_str()) {
                warnings.push(ContractWarning::ConsumedAttribute(key.clone()));
            }
        }
        if self.primary_text.is_empty() && !self.secondary_text.is_empty() {
            warnings.push(ContractWarning::SecondaryWithoutPrimary);
        }
        if let Some(graphic) = &self.graphic {
            if graphic.tag == ChildTag::Img && !graphic.attributes.contains_key("alt") {
                warnings.push(ContractWarning::ImageWithoutAlt("graphic"));
            }
        }
        if let Some(Meta::Element(meta)) = &self.meta {
            if meta.tag == ChildTag::Img && !meta.attributes.contains_key("alt") {
                warnings.push(ContractWarning::ImageWithoutAlt("meta"));
            }
        }

        warnings
    }
}

/// A caller contract violation worth telling a developer about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContractWarning {
    /// A pass-through attribute collides with a key the item owns
    ConsumedAttribute(String),
    SecondaryWithoutPrimary,
    /// Image child without alternative text, by slot name
    ImageWithoutAlt(&'static str),
}

impl fmt::Display for ContractWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractWarning::ConsumedAttribute(key) => {
                write!(f, "pass-through attribute `{key}` is owned by the list item and was dropped; use class_name")
            }
            ContractWarning::SecondaryWithoutPrimary => {
                write!(f, "secondary text is set but primary text is empty")
            }
            ContractWarning::ImageWithoutAlt(slot) => {
                write!(f, "{slot} image has no alt attribute")
            }
        }
    }
}

/// The text region: a single span, or primary and secondary lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextRegion {
    Single(String),
    TwoLine { primary: String, secondary: String },
}

/// The meta region after derivation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MetaRegion {
    /// Wrapped in `<span class="mdc-list-item__meta">`
    Text(String),
    /// Rendered as-is; already carries the meta class
    Element(ChildElement),
}

/// Everything a renderer needs to draw one list item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemLayout {
    pub class: String,
    pub graphic: Option<ChildElement>,
    pub text: TextRegion,
    pub meta: Option<MetaRegion>,
    pub attributes: BTreeMap<String, String>,
}

impl ItemLayout {
    pub fn compute(content: &ItemContent) -> Self {
        let graphic = content.graphic.as_ref().map(|graphic| {
            derive_child(
                graphic,
                &ChildOverrides { append_class: None, children_tab_index: content.children_tab_index },
            )
        });

        let text = if content.secondary_text.is_empty() {
            TextRegion::Single(content.primary_text.clone())
        } else {
            TextRegion::TwoLine {
                primary: content.primary_text.clone(),
                secondary: content.secondary_text.clone(),
            }
        };

        let meta = match &content.meta {
            Some(meta) if !meta.is_present() => None,
            Some(Meta::Text(text)) => Some(MetaRegion::Text(text.clone())),
            Some(Meta::Element(element)) => Some(MetaRegion::Element(derive_child(
                element,
                &ChildOverrides {
                    append_class: Some(classes::META),
                    children_tab_index: content.children_tab_index,
                },
            ))),
            None => None,
        };

        let attributes = content
            .attributes
            .iter()
            .filter(|(key, _)| !CONSUMED_ATTRIBUTES.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Self { class: list_item_classes(&content.class_name), graphic, text, meta, attributes }
    }

    /// Link target the root carries, if any.
    pub fn href(&self) -> Option<&str> {
        self.attributes.get("href").map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let content = ItemContent::default();
        assert_eq!(content.children_tab_index, -1);
        assert!(content.graphic.is_none());
        assert!(content.meta.is_none());

        let layout = ItemLayout::compute(&content);
        assert_eq!(layout.class, "mdc-list-item");
        assert_eq!(layout.text, TextRegion::Single(String::new()));
    }

    #[test]
    fn empty_secondary_collapses_to_single() {
        let layout = ItemLayout::compute(&ItemContent::new("Inbox"));
        assert_eq!(layout.text, TextRegion::Single("Inbox".to_string()));
    }

    #[test]
    fn secondary_gives_two_lines_even_with_empty_primary() {
        let layout = ItemLayout::compute(&ItemContent::new("").with_secondary_text("later"));
        assert_eq!(
            layout.text,
            TextRegion::TwoLine { primary: String::new(), secondary: "later".to_string() }
        );
    }

    #[test]
    fn graphic_tab_index_uses_children_tab_index() {
        let content = ItemContent::new("Starred")
            .with_children_tab_index(3)
            .with_graphic(ChildElement::icon("star").with_tab_index(0));
        let layout = ItemLayout::compute(&content);
        assert_eq!(layout.graphic.unwrap().tab_index, Some(3));
    }

    #[test]
    fn meta_text_and_element() {
        let layout = ItemLayout::compute(&ItemContent::new("a").with_meta("3"));
        assert_eq!(layout.meta, Some(MetaRegion::Text("3".to_string())));

        let layout = ItemLayout::compute(
            &ItemContent::new("a").with_meta(ChildElement::icon("info").with_class("x")),
        );
        match layout.meta {
            Some(MetaRegion::Element(element)) => {
                assert_eq!(element.class.as_deref(), Some("x mdc-list-item__meta"));
                assert_eq!(element.tab_index, Some(-1));
            }
            other => panic!("expected meta element, got {other:?}"),
        }
    }

    #[test]
    fn empty_meta_text_renders_nothing() {
        let layout = ItemLayout::compute(&ItemContent::new("a").with_meta(""));
        assert_eq!(layout.meta, None);
    }

    #[test]
    fn class_attribute_is_consumed() {
        let content = ItemContent::new("a")
            .with_attribute("class", "ignored")
            .with_attribute("id", "item-1")
            .with_attribute("aria-selected", "true");
        let layout = ItemLayout::compute(&content);
        assert!(!layout.attributes.contains_key("class"));
        assert_eq!(layout.attributes.get("id").map(String::as_str), Some("item-1"));
        assert_eq!(layout.attributes.len(), 2);
        assert_eq!(content.warnings(), vec![ContractWarning::ConsumedAttribute("class".to_string())]);
    }

    #[test]
    fn href_comes_from_pass_through() {
        let layout = ItemLayout::compute(&ItemContent::new("Docs").with_attribute("href", "/docs"));
        assert_eq!(layout.href(), Some("/docs"));
        assert_eq!(ItemLayout::compute(&ItemContent::new("x")).href(), None);
    }

    #[test]
    fn warnings_for_images_and_text() {
        let content = ItemContent::new("")
            .with_secondary_text("orphan")
            .with_graphic(ChildElement::new(ChildTag::Img).with_attribute("src", "a.png"))
            .with_meta(ChildElement::new(ChildTag::Img).with_attribute("alt", "ok"));
        let warnings = content.warnings();
        assert_eq!(
            warnings,
            vec![ContractWarning::SecondaryWithoutPrimary, ContractWarning::ImageWithoutAlt("graphic")]
        );
        assert!(warnings[1].to_string().contains("graphic image"));
    }

    #[test]
    fn content_from_json_uses_defaults() {
        let content: ItemContent =
            serde_json::from_str(r#"{"primary_text": "Inbox", "meta": "3"}"#).unwrap();
        assert_eq!(content.children_tab_index, -1);
        assert_eq!(content.meta, Some(Meta::text("3")));
        assert!(content.class_name.is_empty());
    }
}
