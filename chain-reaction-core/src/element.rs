//! Element model shared by ordering and validation

use crate::error::{ReactionError, Result};

/// One entry of the input forest
///
/// `target` is `0` for a root, otherwise the 1-based index of the parent the
/// element merges into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element {
    /// Position in the input arrays
    pub index: usize,
    /// Input value
    pub value: i64,
    /// Raw merge target
    pub target: i64,
}

impl Element {
    /// Create a new element
    pub fn new(index: usize, value: i64, target: i64) -> Self {
        Self {
            index,
            value,
            target,
        }
    }

    /// Whether this element contributes directly to the total
    pub fn is_root(&self) -> bool {
        self.target == 0
    }

    /// Decoded parent index, if any
    ///
    /// Returns `None` for roots and for negative targets. Range is not
    /// checked here; see [`crate::validation`].
    pub fn parent(&self) -> Option<usize> {
        if self.target > 0 {
            usize::try_from(self.target - 1).ok()
        } else {
            None
        }
    }

    /// Zip value and target arrays into elements
    pub fn collect(values: &[i64], targets: &[i64]) -> Result<Vec<Element>> {
        check_shape(values, targets)?;
        Ok(values
            .iter()
            .zip(targets)
            .enumerate()
            .map(|(index, (&value, &target))| Element::new(index, value, target))
            .collect())
    }
}

/// Fail with `ShapeMismatch` unless both arrays have the same length
pub fn check_shape(values: &[i64], targets: &[i64]) -> Result<()> {
    if values.len() != targets.len() {
        return Err(ReactionError::ShapeMismatch {
            values: values.len(),
            targets: targets.len(),
        });
    }
    Ok(())
}
