//! Error types for chain reaction reduction
//!
//! Every error is a precondition violation of the caller's input. None of
//! them are retryable and no partial total is ever returned.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Why a target pointer was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetDefect {
    /// Target is negative or points past the last element
    OutOfRange {
        /// Number of elements in the input
        len: usize,
    },
    /// Target points at the element itself
    SelfMerge,
    /// Following targets from this element returns to it
    Cycle,
    /// Parent would be processed before this element
    Unordered {
        /// Target of the parent element
        parent_target: i64,
    },
}

impl fmt::Display for TargetDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetDefect::OutOfRange { len } => {
                write!(f, "out of range for {len} elements (expected 0..={len})")
            }
            TargetDefect::SelfMerge => write!(f, "element merges into itself"),
            TargetDefect::Cycle => write!(f, "merge chain forms a cycle"),
            TargetDefect::Unordered { parent_target } => write!(
                f,
                "parent has target {parent_target}, which is not smaller than the child's"
            ),
        }
    }
}

/// Reduction errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReactionError {
    /// Value and target arrays differ in length
    #[error("shape mismatch: {values} values but {targets} targets")]
    ShapeMismatch {
        /// Length of the value array
        values: usize,
        /// Length of the target array
        targets: usize,
    },

    /// No elements to reduce
    #[error("empty input: at least one element is required")]
    EmptyInput,

    /// Malformed target pointer
    #[error("invalid target {target} at index {index}: {defect}")]
    InvalidTarget {
        /// Index of the offending element
        index: usize,
        /// The raw target value
        target: i64,
        /// What is wrong with it
        defect: TargetDefect,
    },

    /// Final total does not fit in 64 bits
    #[error("total {total} does not fit in a 64-bit integer")]
    Overflow {
        /// Exact total of all finalized values
        total: i128,
    },
}

/// Result type for reduction operations
pub type Result<T> = std::result::Result<T, ReactionError>;
