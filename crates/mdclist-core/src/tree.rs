//! Declarative node tree and HTML serialization.
//!
//! Static rendering goes through here; the Dioxus components build the same
//! structure from the same [`ItemLayout`].

use crate::classes::{self, merge_classes};
use crate::element::ChildElement;
use crate::layout::{ItemContent, ItemLayout, MetaRegion, TextRegion};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Element {
        tag: &'static str,
        attributes: Vec<(String, String)>,
        children: Vec<Node>,
    },
    Text(String),
}

impl Node {
    fn element(tag: &'static str, attributes: Vec<(String, String)>, children: Vec<Node>) -> Self {
        Node::Element { tag, attributes, children }
    }

    fn span(class: &str, children: Vec<Node>) -> Self {
        Node::element("span", vec![("class".to_string(), class.to_string())], children)
    }

    pub fn tag(&self) -> Option<&'static str> {
        match self {
            Node::Element { tag, .. } => Some(*tag),
            Node::Text(_) => None,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        match self {
            Node::Element { attributes, .. } => {
                attributes.iter().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
            }
            Node::Text(_) => None,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element { children, .. } => children,
            Node::Text(_) => &[],
        }
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Element { children, .. } => children.iter().map(Node::text_content).collect(),
        }
    }

    /// First node (depth-first, self included) whose class list has `class`.
    pub fn find_by_class(&self, class: &str) -> Option<&Node> {
        let has_class = self
            .attribute("class")
            .is_some_and(|value| value.split_whitespace().any(|token| token == class));
        if has_class {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find_by_class(class))
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(text) => escape_into(text, false, out),
            Node::Element { tag, attributes, children } => {
                out.push('<');
                out.push_str(tag);
                for (key, value) in attributes {
                    out.push(' ');
                    out.push_str(key);
                    out.push_str("=\"");
                    escape_into(value, true, out);
                    out.push('"');
                }
                out.push('>');
                if is_void(tag) {
                    return;
                }
                for child in children {
                    child.write_html(out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }
}

fn is_void(tag: &str) -> bool {
    matches!(tag, "img" | "input" | "br" | "hr")
}

fn escape_into(raw: &str, attribute: bool, out: &mut String) {
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
}

fn child_node(element: &ChildElement) -> Node {
    let mut attributes = Vec::with_capacity(element.attributes.len() + 2);
    if let Some(class) = &element.class {
        attributes.push(("class".to_string(), class.clone()));
    }
    if let Some(tab_index) = element.tab_index {
        attributes.push(("tabindex".to_string(), tab_index.to_string()));
    }
    attributes.extend(element.attributes.iter().map(|(k, v)| (k.clone(), v.clone())));

    let children = match &element.text {
        Some(text) if !element.tag.is_void() => vec![Node::Text(text.clone())],
        _ => Vec::new(),
    };
    Node::element(element.tag.as_str(), attributes, children)
}

impl ItemLayout {
    /// The `<li>` tree for this layout.
    pub fn to_node(&self) -> Node {
        let mut attributes = vec![("class".to_string(), self.class.clone())];
        attributes.extend(self.attributes.iter().map(|(k, v)| (k.clone(), v.clone())));

        let mut children = Vec::with_capacity(3);

        if let Some(graphic) = &self.graphic {
            children.push(Node::element(
                "span",
                vec![
                    ("class".to_string(), classes::GRAPHIC.to_string()),
                    ("role".to_string(), "presentation".to_string()),
                ],
                vec![child_node(graphic)],
            ));
        }

        children.push(match &self.text {
            TextRegion::Single(primary) => Node::span(classes::TEXT, vec![Node::Text(primary.clone())]),
            TextRegion::TwoLine { primary, secondary } => Node::span(
                classes::TEXT,
                vec![
                    Node::span(classes::PRIMARY_TEXT, vec![Node::Text(primary.clone())]),
                    Node::span(classes::SECONDARY_TEXT, vec![Node::Text(secondary.clone())]),
                ],
            ),
        });

        match &self.meta {
            Some(MetaRegion::Text(text)) => {
                children.push(Node::span(classes::META, vec![Node::Text(text.clone())]));
            }
            Some(MetaRegion::Element(element)) => children.push(child_node(element)),
            None => {}
        }

        Node::element("li", attributes, children)
    }
}

/// `<ul class="mdc-list …">` holding one `<li>` per item.
pub fn render_list(class_name: &str, items: &[ItemContent]) -> Node {
    Node::element(
        "ul",
        vec![("class".to_string(), merge_classes([classes::LIST, class_name]))],
        items.iter().map(|item| ItemLayout::compute(item).to_node()).collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ChildTag, Meta};

    fn render(content: &ItemContent) -> Node {
        ItemLayout::compute(content).to_node()
    }

    #[test]
    fn single_line_html() {
        let html = render(&ItemContent::new("Inbox")).to_html();
        assert_eq!(html, r#"<li class="mdc-list-item"><span class="mdc-list-item__text">Inbox</span></li>"#);
    }

    #[test]
    fn two_line_text_region() {
        let node = render(&ItemContent::new("Inbox").with_secondary_text("3 unread"));
        let text = node.find_by_class(classes::TEXT).unwrap();
        assert_eq!(text.children().len(), 2);
        assert_eq!(text.find_by_class(classes::PRIMARY_TEXT).unwrap().text_content(), "Inbox");
        assert_eq!(text.find_by_class(classes::SECONDARY_TEXT).unwrap().text_content(), "3 unread");
    }

    #[test]
    fn graphic_wrapped_in_presentation_span() {
        let node = render(
            &ItemContent::new("Starred")
                .with_children_tab_index(3)
                .with_graphic(ChildElement::icon("star").with_tab_index(0)),
        );
        let wrapper = &node.children()[0];
        assert_eq!(wrapper.attribute("class"), Some(classes::GRAPHIC));
        assert_eq!(wrapper.attribute("role"), Some("presentation"));
        let icon = &wrapper.children()[0];
        assert_eq!(icon.tag(), Some("i"));
        assert_eq!(icon.attribute("tabindex"), Some("3"));
        assert_eq!(icon.text_content(), "star");
    }

    #[test]
    fn meta_regions() {
        let node = render(&ItemContent::new("a").with_meta("3"));
        let meta = node.find_by_class(classes::META).unwrap();
        assert_eq!(meta.tag(), Some("span"));
        assert_eq!(meta.text_content(), "3");

        let node = render(&ItemContent::new("a"));
        assert!(node.find_by_class(classes::META).is_none());
        assert_eq!(node.children().len(), 1);
    }

    #[test]
    fn meta_element_rendered_without_wrapper() {
        let node = render(
            &ItemContent::new("a")
                .with_meta(Meta::Element(ChildElement::new(ChildTag::Button).with_class("x").with_text("more"))),
        );
        let meta = &node.children()[1];
        assert_eq!(meta.tag(), Some("button"));
        assert_eq!(meta.attribute("class"), Some("x mdc-list-item__meta"));
        assert_eq!(meta.attribute("tabindex"), Some("-1"));
    }

    #[test]
    fn void_child_and_escaping() {
        let node = render(
            &ItemContent::new("Tom & \"Jerry\" <3")
                .with_attribute("title", "a \"b\"")
                .with_graphic(ChildElement::new(ChildTag::Img).with_attribute("alt", "x").with_text("ignored")),
        );
        let html = node.to_html();
        assert!(html.contains(r#"title="a &quot;b&quot;""#));
        assert!(html.contains(r#"<img tabindex="-1" alt="x">"#));
        assert!(html.contains("Tom &amp; \"Jerry\" &lt;3"));
        assert!(!html.contains("ignored"));
    }

    #[test]
    fn list_wraps_items() {
        let list = render_list("dense", &[ItemContent::new("a"), ItemContent::new("b")]);
        assert_eq!(list.tag(), Some("ul"));
        assert_eq!(list.attribute("class"), Some("mdc-list dense"));
        assert_eq!(list.children().len(), 2);
        assert_eq!(list.text_content(), "ab");
    }
}
