//! SVG element tree model

use indexmap::IndexMap;

/// Attribute map keyed by local name, kept in document order
pub type Attributes = IndexMap<String, String>;

/// One parsed tag plus its attributes, text and children
///
/// Children are owned by their parent. The upward relation is answered by
/// [`Element::parent_of`] instead of a stored back-pointer.
#[derive(Clone, Debug, Default)]
pub struct Element {
    /// Local tag name, empty only for the "no root element" result
    pub name: String,
    pub attributes: Attributes,
    /// Child elements in document order
    pub children: Vec<Element>,
    /// Last non-blank text chunk seen directly under this element
    pub content: String,
}

impl Element {
    /// Create an element with no attributes, children or content
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder-style attribute insertion
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Look up an attribute value by local name
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Value of the `id` attribute
    pub fn id(&self) -> Option<&str> {
        self.attribute("id")
    }

    /// True for the empty element returned when a document has no root
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.attributes.is_empty()
            && self.children.is_empty()
            && self.content.is_empty()
    }

    /// Record a character-data chunk seen directly under this element.
    ///
    /// Blank chunks are ignored. A non-blank chunk replaces any previous
    /// content verbatim, surrounding whitespace included.
    pub fn record_text(&mut self, chunk: &str) {
        if !chunk.trim().is_empty() {
            self.content = chunk.to_owned();
        }
    }
}
