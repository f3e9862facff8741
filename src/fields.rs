//! The field set: ordered label/value pairs extracted from an authority's
//! machine-readable representation.
//!
//! An entry exists only if its source path resolved to a non-null leaf;
//! resolvers probe optional data and simply skip absent fields. Inserting
//! under an existing label overwrites the earlier value in place (map
//! semantics) rather than appending a second row.

use crate::config::VALUE_SEPARATOR;

/// An image reference for display inside a field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    /// Image source URL.
    pub src: String,
    /// Tooltip/title text.
    pub title: String,
}

/// A single extracted value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Plain text.
    Text(String),
    /// Hyperlink; URI-valued fields are wrapped rather than shown raw.
    Link { href: String, text: String },
    /// One or more inline images.
    Images(Vec<Image>),
    /// Unordered list of nested values.
    List(Vec<FieldValue>),
}

impl FieldValue {
    /// Link whose display text is the target itself.
    #[must_use]
    pub fn link(href: impl Into<String>) -> Self {
        let href = href.into();
        let text = href.clone();
        FieldValue::Link { href, text }
    }
}

/// Ordered mapping from display label to extracted value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldSet {
    entries: Vec<(String, FieldValue)>,
}

impl FieldSet {
    /// Create an empty field set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value under a label.
    ///
    /// If the label already exists, its value is overwritten in place and
    /// the entry keeps its original position.
    pub fn insert(&mut self, label: impl Into<String>, value: FieldValue) {
        let label = label.into();
        if let Some(entry) = self.entries.iter_mut().find(|(l, _)| *l == label) {
            entry.1 = value;
        } else {
            self.entries.push((label, value));
        }
    }

    /// Insert a plain text value.
    pub fn insert_text(&mut self, label: impl Into<String>, text: impl Into<String>) {
        self.insert(label, FieldValue::Text(text.into()));
    }

    /// Insert a text value if present; an absent value omits the row.
    pub fn insert_opt(&mut self, label: impl Into<String>, text: Option<String>) {
        if let Some(text) = text {
            self.insert_text(label, text);
        }
    }

    /// Insert a hyperlink whose display text is the target URL.
    pub fn insert_link(&mut self, label: impl Into<String>, href: impl Into<String>) {
        self.insert(label, FieldValue::link(href));
    }

    /// Join multiple values into one row, preserving source order.
    ///
    /// An empty collection omits the row entirely.
    pub fn insert_joined(&mut self, label: impl Into<String>, values: &[String]) {
        if !values.is_empty() {
            self.insert_text(label, values.join(VALUE_SEPARATOR));
        }
    }

    /// Look up a value by label.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, (String, FieldValue)> {
        self.entries.iter()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the field set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a FieldSet {
    type Item = &'a (String, FieldValue);
    type IntoIter = std::slice::Iter<'a, (String, FieldValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_preserves_order() {
        let mut fields = FieldSet::new();
        fields.insert_text("Label", "a");
        fields.insert_text("Description", "b");
        fields.insert_text("Note", "c");

        let labels: Vec<&str> = fields.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels, ["Label", "Description", "Note"]);
    }

    #[test]
    fn test_insert_overwrites_in_place() {
        let mut fields = FieldSet::new();
        fields.insert_text("Label", "first");
        fields.insert_text("Note", "n");
        fields.insert_text("Label", "second");

        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("Label"), Some(&FieldValue::Text("second".to_string())));
        // Overwriting keeps the original position
        let labels: Vec<&str> = fields.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels, ["Label", "Note"]);
    }

    #[test]
    fn test_insert_opt_absent_omits_row() {
        let mut fields = FieldSet::new();
        fields.insert_opt("Label", Some("x".to_string()));
        fields.insert_opt("Description", None);

        assert_eq!(fields.len(), 1);
        assert!(fields.get("Description").is_none());
    }

    #[test]
    fn test_insert_joined() {
        let mut fields = FieldSet::new();
        fields.insert_joined("Alt Label", &["a".to_string(), "b".to_string()]);
        fields.insert_joined("Empty", &[]);

        assert_eq!(fields.get("Alt Label"), Some(&FieldValue::Text("a; b".to_string())));
        assert!(fields.get("Empty").is_none());
    }

    #[test]
    fn test_link_value() {
        let value = FieldValue::link("https://example.org/");
        assert_eq!(
            value,
            FieldValue::Link {
                href: "https://example.org/".to_string(),
                text: "https://example.org/".to_string(),
            }
        );
    }
}
