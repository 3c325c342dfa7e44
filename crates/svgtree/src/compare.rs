//! Structural equality for element trees

use crate::element::Element;

impl Element {
    /// Deep structural comparison.
    ///
    /// Names, content, attribute maps and children (pairwise, in document
    /// order) must all match. Attribute order is not significant.
    pub fn compare(&self, other: &Self) -> bool {
        if self.name != other.name
            || self.content != other.content
            || self.attributes.len() != other.attributes.len()
            || self.children.len() != other.children.len()
        {
            return false;
        }

        let attributes_match = self
            .attributes
            .iter()
            .all(|(k, v)| other.attributes.get(k).is_some_and(|o_v| v == o_v));

        attributes_match
            && self
                .children
                .iter()
                .zip(other.children.iter())
                .all(|(l, r)| l.compare(r))
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other)
    }
}

impl Eq for Element {}
