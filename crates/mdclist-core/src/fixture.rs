//! JSON list fixtures.
//!
//! ```json
//! {
//!   "class_name": "mdc-list--two-line",
//!   "items": [
//!     { "primary_text": "Inbox", "secondary_text": "3 unread", "meta": "3" },
//!     { "primary_text": "Docs", "attributes": { "href": "https://example.com" } }
//!   ]
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ListError, Result};
use crate::layout::ItemContent;
use crate::tree::{render_list, Node};

/// A list and its items, as stored on disk.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFixture {
    /// Extra classes for the `<ul>`
    #[serde(default)]
    pub class_name: String,
    pub items: Vec<ItemContent>,
}

impl ListFixture {
    pub fn from_json(json: &str) -> Result<Self> {
        let fixture: Self = serde_json::from_str(json)?;
        fixture.validate()?;
        Ok(fixture)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading list fixture");
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Item ids end up in one document and must be unique.
    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for item in &self.items {
            if let Some(id) = item.attributes.get("id") {
                if !seen.insert(id.as_str()) {
                    return Err(ListError::InvalidFixture(format!("duplicate item id `{id}`")));
                }
            }
        }
        Ok(())
    }

    pub fn to_node(&self) -> Node {
        render_list(&self.class_name, &self.items)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::element::Meta;

    #[test]
    fn parses_documented_example() {
        let fixture = ListFixture::from_json(
            r#"{
                "class_name": "mdc-list--two-line",
                "items": [
                    { "primary_text": "Inbox", "secondary_text": "3 unread", "meta": "3" },
                    { "primary_text": "Docs", "attributes": { "href": "https://example.com" } }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(fixture.items.len(), 2);
        assert_eq!(fixture.items[0].meta, Some(Meta::text("3")));
        assert_eq!(fixture.to_node().children().len(), 2);
    }

    #[test]
    fn duplicate_ids_rejected() {
        let err = ListFixture::from_json(
            r#"{ "items": [
                { "primary_text": "a", "attributes": { "id": "x" } },
                { "primary_text": "b", "attributes": { "id": "x" } }
            ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ListError::InvalidFixture(_)));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = ListFixture::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ListError::Json(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "items": [ {{ "primary_text": "Only" }} ] }}"#).unwrap();
        let fixture = ListFixture::load(file.path()).unwrap();
        assert_eq!(fixture.items[0].primary_text, "Only");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = ListFixture::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ListError::Io(_)));
    }
}
