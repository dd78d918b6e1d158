use std::iter::FusedIterator;

use crate::part::{Part, PartDescriptor};

/// An ordered collection of parts.
///
/// Insertion order is preserved and duplicates are allowed. The collection is read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Parts<P: PartDescriptor = Part> {
    items: Vec<P>,
}

impl<P: PartDescriptor> Parts<P> {
    pub fn new(items: Vec<P>) -> Self {
        Self {
            items,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&P> {
        self.items.get(index)
    }

    pub fn first(&self) -> Option<&P> {
        self.items.first()
    }

    pub fn iter(&self) -> Iter<'_, P> {
        Iter {
            inner: self.items.iter(),
        }
    }

    /// The parts that need a spare, in collection order.
    pub fn spares(&self) -> Vec<&P> {
        self.iter()
            .filter(|part| part.needs_spare())
            .collect()
    }
}

impl<P: PartDescriptor> Default for Parts<P> {
    fn default() -> Self {
        Self {
            items: vec![],
        }
    }
}

impl<P: PartDescriptor> From<Vec<P>> for Parts<P> {
    fn from(items: Vec<P>) -> Self {
        Self::new(items)
    }
}

impl<P: PartDescriptor> FromIterator<P> for Parts<P> {
    fn from_iter<T: IntoIterator<Item = P>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'parts, P: PartDescriptor> IntoIterator for &'parts Parts<P> {
    type Item = &'parts P;
    type IntoIter = Iter<'parts, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the parts of a [`Parts`] collection.
#[derive(Debug, Clone)]
pub struct Iter<'parts, P> {
    inner: std::slice::Iter<'parts, P>,
}

impl<'parts, P> Iterator for Iter<'parts, P> {
    type Item = &'parts P;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<P> DoubleEndedIterator for Iter<'_, P> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<P> ExactSizeIterator for Iter<'_, P> {}

impl<P> FusedIterator for Iter<'_, P> {}
