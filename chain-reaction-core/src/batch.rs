//! Batch reduction over independent workloads
//!
//! Workloads share nothing, so with the `parallel` feature they are reduced on
//! the rayon pool without coordination. Results keep the input order.

use crate::error::Result;
use crate::reducer::{ForestReducer, Reduction};
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// An owned `(values, targets)` pair
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Workload {
    /// Element values
    pub values: Vec<i64>,
    /// Element targets (`0` for roots, 1-based parent otherwise)
    pub targets: Vec<i64>,
}

impl Workload {
    /// Create a workload from its two arrays
    pub fn new(values: Vec<i64>, targets: Vec<i64>) -> Self {
        Self { values, targets }
    }

    /// Number of elements (of the value array)
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the workload has no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Append one element
    pub fn push(&mut self, value: i64, target: i64) {
        self.values.push(value);
        self.targets.push(target);
    }
}

impl FromIterator<(i64, i64)> for Workload {
    fn from_iter<I: IntoIterator<Item = (i64, i64)>>(iter: I) -> Self {
        let (values, targets) = iter.into_iter().unzip();
        Self { values, targets }
    }
}

impl ForestReducer {
    /// Reduce a single workload
    pub fn reduce_workload(&self, workload: &Workload) -> Result<Reduction> {
        self.reduce_detailed(&workload.values, &workload.targets)
    }

    /// Reduce many workloads, in parallel when the `parallel` feature is enabled
    pub fn reduce_batch(&self, workloads: &[Workload]) -> Vec<Result<Reduction>> {
        #[cfg(feature = "parallel")]
        {
            workloads
                .par_iter()
                .map(|workload| self.reduce_workload(workload))
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            workloads
                .iter()
                .map(|workload| self.reduce_workload(workload))
                .collect()
        }
    }
}
