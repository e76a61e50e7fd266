//! Output formatting module

use anyhow::Result;
use chain_reaction_core::{Reduction, ReductionStep};

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the reduction of one workload
    fn format_result(&mut self, source: &str, reduction: &Reduction) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// One-line human readable description of a reduction step
pub fn describe_step(step: &ReductionStep) -> String {
    match *step {
        ReductionStep::Root { index, value } => format!("root   #{index} adds {value}"),
        ReductionStep::Tail { index, value } => format!("tail   #{index} adds {value}"),
        ReductionStep::Drop {
            index,
            sibling,
            value,
        } => format!("drop   #{index} adds {value}, sibling #{sibling} kept"),
        ReductionStep::Swap {
            index,
            sibling,
            value,
            carried,
        } => format!("swap   #{index} adds {value} from #{sibling}, carries {carried}"),
        ReductionStep::Merge {
            index,
            parent,
            value,
            parent_value,
        } => format!("merge  #{index} ({value}) into #{parent}, now {parent_value}"),
    }
}
