//! Chain reaction reduction over functional forests
//!
//! Every element either is a root (target `0`) that contributes its value to
//! the total, or merges into the element at `target - 1`. The reduction visits
//! elements in a fixed processing order (target descending, value descending,
//! index descending) and resolves each element in a single linear pass:
//! roots finalize, siblings drop or swap, everything else merges its value
//! into its parent as a maximum.
//!
//! # Example
//!
//! ```rust
//! use chain_reaction_core::{reduce, ForestReducer, ValidationPolicy};
//!
//! // Element 1 and 2 both merge into element 0
//! let total = reduce(&[30, 40, 50], &[0, 1, 1]).unwrap();
//! assert_eq!(total, 90);
//!
//! let reducer = ForestReducer::builder()
//!     .validation(ValidationPolicy::Acyclic)
//!     .record_steps(true)
//!     .build();
//! let reduction = reducer.reduce_detailed(&[30, 40, 50, 60], &[0, 1, 1, 2]).unwrap();
//! assert_eq!(reduction.total, 110);
//! assert_eq!(reduction.steps.len(), 4);
//! ```

#![warn(missing_docs)]

pub mod batch;
pub mod config;
pub mod element;
pub mod error;
pub mod ordering;
pub mod reducer;
pub mod synthetic;
pub mod validation;

// Re-export key types
pub use batch::Workload;
pub use config::ReducerConfig;
pub use element::Element;
pub use error::{ReactionError, Result, TargetDefect};
pub use ordering::{build_order, OrderedSequence};
pub use reducer::{
    reduce, ForestReducer, ForestReducerBuilder, Reduction, ReductionStats, ReductionStep,
};
pub use synthetic::SyntheticForest;
pub use validation::{validate_targets, ValidationPolicy};
