//! Deterministic synthetic workloads for benchmarks and the bench command
//!
//! Generated forests always point children at a smaller index, so they pass
//! strict validation.

use crate::batch::Workload;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Parameters of a generated forest
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyntheticForest {
    /// Number of elements
    pub size: usize,
    /// Probability that an element (other than the first) is a root
    pub root_ratio: f64,
    /// Largest generated value (values are drawn from `1..=max_value`)
    pub max_value: i64,
    /// Generator seed
    pub seed: u64,
}

impl Default for SyntheticForest {
    fn default() -> Self {
        Self {
            size: 1000,
            root_ratio: 0.1,
            max_value: 1_000_000_000,
            seed: 0x5eed,
        }
    }
}

impl SyntheticForest {
    /// Forest of `size` elements with default shape
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Generate the workload
    pub fn generate(&self) -> Workload {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let max_value = self.max_value.max(1);
        let root_ratio = if self.root_ratio.is_nan() {
            0.0
        } else {
            self.root_ratio.clamp(0.0, 1.0)
        };
        let mut workload = Workload {
            values: Vec::with_capacity(self.size),
            targets: Vec::with_capacity(self.size),
        };

        for index in 0..self.size {
            let value = rng.gen_range(1..=max_value);
            let target = if index == 0 || rng.gen_bool(root_ratio) {
                0
            } else {
                // Parent in 0..index, encoded 1-based
                rng.gen_range(0..index) as i64 + 1
            };
            workload.push(value, target);
        }

        workload
    }
}
