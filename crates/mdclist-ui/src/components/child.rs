//! Rendering of derived graphic/meta children.

use dioxus::dioxus_core::Attribute;
use dioxus::prelude::*;
use mdclist_core::{ChildElement, ChildTag};

use super::intern::intern;

pub(crate) fn child_attributes(element: &ChildElement) -> Vec<Attribute> {
    let mut attributes = Vec::with_capacity(element.attributes.len() + 2);
    if let Some(class) = &element.class {
        attributes.push(Attribute::new("class", class.clone(), None, false));
    }
    if let Some(tab_index) = element.tab_index {
        attributes.push(Attribute::new("tabindex", tab_index.to_string(), None, false));
    }
    for (name, value) in &element.attributes {
        attributes.push(Attribute::new(intern(name), value.clone(), None, false));
    }
    attributes
}

/// Render a child element exactly as described.
pub(crate) fn render_child(element: &ChildElement) -> Element {
    let attributes = child_attributes(element);
    let text = element.text.clone().unwrap_or_default();

    match element.tag {
        ChildTag::Span => rsx! { span { ..attributes, "{text}" } },
        ChildTag::I => rsx! { i { ..attributes, "{text}" } },
        ChildTag::A => rsx! { a { ..attributes, "{text}" } },
        ChildTag::Button => rsx! { button { ..attributes, "{text}" } },
        ChildTag::Div => rsx! { div { ..attributes, "{text}" } },
        ChildTag::Img => rsx! { img { ..attributes } },
        ChildTag::Input => rsx! { input { ..attributes } },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_and_tab_index_lead() {
        let element = ChildElement::icon("star")
            .with_tab_index(2)
            .with_attribute("aria-hidden", "true");
        let names: Vec<&str> = child_attributes(&element).iter().map(|a| a.name).collect();
        assert_eq!(names, vec!["class", "tabindex", "aria-hidden"]);
    }

    #[test]
    fn no_class_no_tab_index() {
        let element = ChildElement::new(ChildTag::Img).with_attribute("src", "a.png");
        let names: Vec<&str> = child_attributes(&element).iter().map(|a| a.name).collect();
        assert_eq!(names, vec!["src"]);
    }
}
