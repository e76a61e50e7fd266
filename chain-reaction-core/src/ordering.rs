//! Processing order for the reduction pass
//!
//! Elements are visited by decreasing target, then decreasing value, then
//! decreasing source index. Visiting high targets first means every element
//! further from its root is seen before the element it merges into, and the
//! larger of two siblings is seen before the smaller one.
//!
//! The index tie-break is what a stable ascending sort followed by a full
//! reversal would produce, fixed here so equal `(target, value)` pairs never
//! depend on the sort implementation.

use crate::element::Element;
use crate::error::Result;
use std::cmp::Ordering;

/// A permutation of element indices in processing order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderedSequence {
    indices: Vec<usize>,
}

impl OrderedSequence {
    /// Number of elements in the sequence
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether the sequence is empty
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Indices in processing order
    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    /// Iterate over indices in processing order
    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.indices.iter()
    }

    /// Iterate over `(current, next)` pairs; the last element has no successor
    pub fn pairs(&self) -> impl Iterator<Item = (usize, Option<usize>)> + '_ {
        self.indices
            .iter()
            .enumerate()
            .map(move |(pos, &curr)| (curr, self.indices.get(pos + 1).copied()))
    }

    /// Consume the sequence, returning the raw indices
    pub fn into_vec(self) -> Vec<usize> {
        self.indices
    }
}

impl<'a> IntoIterator for &'a OrderedSequence {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Composite key comparison: target desc, value desc, index desc
pub fn processing_order(lhs: &Element, rhs: &Element) -> Ordering {
    rhs.target
        .cmp(&lhs.target)
        .then_with(|| rhs.value.cmp(&lhs.value))
        .then_with(|| rhs.index.cmp(&lhs.index))
}

/// Build the processing order for a `(values, targets)` pair
///
/// Fails with `ShapeMismatch` when the arrays differ in length. An empty input
/// yields an empty sequence.
pub fn build_order(values: &[i64], targets: &[i64]) -> Result<OrderedSequence> {
    let mut elements = Element::collect(values, targets)?;
    // The key is total over distinct indices, so an unstable sort is exact.
    elements.sort_unstable_by(processing_order);

    Ok(OrderedSequence {
        indices: elements.into_iter().map(|e| e.index).collect(),
    })
}
