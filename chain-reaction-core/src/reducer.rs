//! Forest reducer: the single linear pass over the processing order
//!
//! Each element is compared with the element that follows it in the order:
//!
//! - the last element, and every root, is added to the total;
//! - two siblings sharing a target resolve with a drop (the current value
//!   dominates and is added) or a swap (the sibling's larger value is added
//!   and the current value is carried forward in the sibling's slot);
//! - otherwise the current value is merged into its parent as a maximum.
//!
//! The caller's arrays are never written; the pass owns a working copy.

use crate::config::ReducerConfig;
use crate::element::check_shape;
use crate::error::{ReactionError, Result};
use crate::ordering::build_order;
use crate::validation::{validate_targets, ValidationPolicy};
use serde::Serialize;
use tracing::{debug, trace};

/// One decision made during the pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ReductionStep {
    /// A root finalized its current value
    Root {
        /// Finalized element
        index: usize,
        /// Value added to the total
        value: i64,
    },
    /// The last element in the order was not a root but was finalized anyway
    Tail {
        /// Finalized element
        index: usize,
        /// Value added to the total
        value: i64,
    },
    /// The current element dominated its sibling and was finalized
    Drop {
        /// Finalized element
        index: usize,
        /// Following sibling with the same target
        sibling: usize,
        /// Value added to the total
        value: i64,
    },
    /// The sibling's larger value was finalized; the current value moves into its slot
    Swap {
        /// Current element
        index: usize,
        /// Following sibling with the same target
        sibling: usize,
        /// Sibling value added to the total
        value: i64,
        /// Value written into the sibling's slot
        carried: i64,
    },
    /// The current value was folded into its parent
    Merge {
        /// Merging element
        index: usize,
        /// Parent index
        parent: usize,
        /// Value of the merging element
        value: i64,
        /// Parent value after the merge
        parent_value: i64,
    },
}

/// Decision counts for one reduction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ReductionStats {
    /// Elements processed
    pub elements: usize,
    /// Roots finalized
    pub roots: usize,
    /// Drop decisions
    pub drops: usize,
    /// Swap decisions
    pub swaps: usize,
    /// Merges into a parent
    pub merges: usize,
    /// Non-root elements finalized because they came last
    pub tails: usize,
}

/// Result of a detailed reduction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reduction {
    /// Sum of all finalized values
    pub total: i64,
    /// Decision counts
    pub stats: ReductionStats,
    /// Decision log, empty unless step recording is enabled
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<ReductionStep>,
}

/// Configurable reducer
#[derive(Debug, Clone, Copy, Default)]
pub struct ForestReducer {
    config: ReducerConfig,
}

impl ForestReducer {
    /// Create a reducer with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reducer with custom configuration
    pub fn with_config(config: ReducerConfig) -> Self {
        Self { config }
    }

    /// Create a builder
    pub fn builder() -> ForestReducerBuilder {
        ForestReducerBuilder::default()
    }

    /// Active configuration
    pub fn config(&self) -> &ReducerConfig {
        &self.config
    }

    /// Reduce and return the total only
    pub fn reduce(&self, values: &[i64], targets: &[i64]) -> Result<i64> {
        self.reduce_detailed(values, targets).map(|r| r.total)
    }

    /// Reduce and return the total with statistics and, if enabled, the step log
    pub fn reduce_detailed(&self, values: &[i64], targets: &[i64]) -> Result<Reduction> {
        self.check(values, targets)?;
        let order = build_order(values, targets)?;

        let mut pass = Pass::new(values, self.config.record_steps);
        for (curr, next) in order.pairs() {
            pass.step(curr, next, targets);
        }
        let reduction = pass.finish()?;

        debug!(
            total = reduction.total,
            elements = reduction.stats.elements,
            roots = reduction.stats.roots,
            drops = reduction.stats.drops,
            swaps = reduction.stats.swaps,
            merges = reduction.stats.merges,
            "reduction complete"
        );

        Ok(reduction)
    }

    /// Run every precondition check without reducing
    pub fn check(&self, values: &[i64], targets: &[i64]) -> Result<()> {
        check_shape(values, targets)?;
        if values.is_empty() {
            return Err(ReactionError::EmptyInput);
        }
        validate_targets(targets, self.config.validation)
    }
}

/// Builder for [`ForestReducer`]
#[derive(Debug, Default)]
pub struct ForestReducerBuilder {
    config: ReducerConfig,
}

impl ForestReducerBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the validation policy
    pub fn validation(mut self, policy: ValidationPolicy) -> Self {
        self.config.validation = policy;
        self
    }

    /// Enable or disable the step log
    pub fn record_steps(mut self, record: bool) -> Self {
        self.config.record_steps = record;
        self
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: ReducerConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the reducer
    pub fn build(self) -> ForestReducer {
        ForestReducer::with_config(self.config)
    }
}

/// Reduce with the default configuration
///
/// The default policy is [`ValidationPolicy::Strict`], so chains that point
/// forward to an element with a larger target (e.g. `targets = [2, 3, 0]`)
/// are rejected even though they are acyclic. Build a [`ForestReducer`] with
/// [`ValidationPolicy::Acyclic`] to reduce them anyway.
pub fn reduce(values: &[i64], targets: &[i64]) -> Result<i64> {
    ForestReducer::default().reduce(values, targets)
}

struct Pass {
    working: Vec<i64>,
    total: i128,
    stats: ReductionStats,
    steps: Option<Vec<ReductionStep>>,
}

impl Pass {
    fn new(values: &[i64], record_steps: bool) -> Self {
        Self {
            working: values.to_vec(),
            total: 0,
            stats: ReductionStats {
                elements: values.len(),
                ..ReductionStats::default()
            },
            steps: record_steps.then(|| Vec::with_capacity(values.len())),
        }
    }

    fn finalize(&mut self, value: i64) {
        self.total += i128::from(value);
    }

    fn step(&mut self, curr: usize, next: Option<usize>, targets: &[i64]) {
        let value = self.working[curr];
        let target = targets[curr];

        let step = match next {
            None => {
                self.finalize(value);
                if target == 0 {
                    self.stats.roots += 1;
                    ReductionStep::Root { index: curr, value }
                } else {
                    self.stats.tails += 1;
                    ReductionStep::Tail { index: curr, value }
                }
            }
            Some(_) if target == 0 => {
                self.finalize(value);
                self.stats.roots += 1;
                ReductionStep::Root { index: curr, value }
            }
            Some(next) if target == targets[next] => {
                let sibling_value = self.working[next];
                if value >= sibling_value {
                    self.finalize(value);
                    self.stats.drops += 1;
                    ReductionStep::Drop {
                        index: curr,
                        sibling: next,
                        value,
                    }
                } else {
                    self.finalize(sibling_value);
                    self.working[next] = value;
                    self.stats.swaps += 1;
                    ReductionStep::Swap {
                        index: curr,
                        sibling: next,
                        value: sibling_value,
                        carried: value,
                    }
                }
            }
            Some(_) => {
                // Validated: 1 <= target <= len
                let parent = (target - 1) as usize;
                let parent_value = self.working[parent].max(value);
                self.working[parent] = parent_value;
                self.stats.merges += 1;
                ReductionStep::Merge {
                    index: curr,
                    parent,
                    value,
                    parent_value,
                }
            }
        };

        trace!(?step, "reduction step");
        if let Some(steps) = self.steps.as_mut() {
            steps.push(step);
        }
    }

    /// Only the final sum has to fit in `i64`; partial sums may not
    fn finish(self) -> Result<Reduction> {
        let total = i64::try_from(self.total)
            .map_err(|_| ReactionError::Overflow { total: self.total })?;
        Ok(Reduction {
            total,
            stats: self.stats,
            steps: self.steps.unwrap_or_default(),
        })
    }
}
