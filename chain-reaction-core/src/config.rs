//! Configuration types for the reducer

use crate::validation::ValidationPolicy;
use serde::{Deserialize, Serialize};

/// Reducer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReducerConfig {
    /// Target checks run before the pass
    #[serde(default)]
    pub validation: ValidationPolicy,
    /// Keep a log of every decision made during the pass
    #[serde(default)]
    pub record_steps: bool,
}

impl ReducerConfig {
    /// Strict validation with step recording, for inspecting a single input
    pub fn explain() -> Self {
        Self {
            validation: ValidationPolicy::Strict,
            record_steps: true,
        }
    }

    /// Only range and self-merge checks
    pub fn permissive() -> Self {
        Self {
            validation: ValidationPolicy::Bounds,
            record_steps: false,
        }
    }
}
