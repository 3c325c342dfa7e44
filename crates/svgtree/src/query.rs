//! Read-only searches over an element tree
//!
//! Every query walks the descendants of the element it is called on in
//! depth-first pre-order, which is document order. The element itself is
//! never part of the result.

use std::iter::FusedIterator;
use std::slice;

use crate::element::Element;

/// Pre-order iterator over the descendants of an element
#[derive(Debug, Clone)]
pub struct Descendants<'a> {
    stack: Vec<slice::Iter<'a, Element>>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let siblings = self.stack.last_mut()?;
            match siblings.next() {
                Some(element) => {
                    self.stack.push(element.children.iter());
                    return Some(element);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

impl FusedIterator for Descendants<'_> {}

impl Element {
    /// All descendants in document order
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: vec![self.children.iter()],
        }
    }

    /// First descendant whose `id` attribute equals `id`
    pub fn find_by_id(&self, id: &str) -> Option<&Self> {
        self.descendants().find(|e| e.id() == Some(id))
    }

    /// Every descendant named `name`
    pub fn find_all(&self, name: &str) -> Vec<&Self> {
        self.descendants().filter(|e| e.name == name).collect()
    }

    /// Every descendant whose content contains `text`, ignoring case
    pub fn find_by_content(&self, text: &str) -> Vec<&Self> {
        find_by_content(Some(self), text)
    }

    /// The element that directly contains `node`.
    ///
    /// `node` is matched by identity, so it must be a reference into this
    /// tree. Returns `None` for the root itself and for foreign elements.
    pub fn parent_of(&self, node: &Self) -> Option<&Self> {
        std::iter::once(self)
            .chain(self.descendants())
            .find(|candidate| candidate.children.iter().any(|c| std::ptr::eq(c, node)))
    }
}

/// Content search that tolerates a missing subtree
pub fn find_by_content<'a>(root: Option<&'a Element>, text: &str) -> Vec<&'a Element> {
    let Some(root) = root else {
        return Vec::new();
    };
    let needle = text.to_lowercase();
    root.descendants()
        .filter(|e| e.content.to_lowercase().contains(&needle))
        .collect()
}
