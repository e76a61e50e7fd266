//! Bench command implementation
//!
//! Times repeated reductions of one generated forest and prints the timings
//! in `[RUN    ]` / `[EVAL   ]` report lines.

use super::{init_logging, Validation};
use crate::progress::ProgressReporter;
use anyhow::Result;
use chain_reaction_core::{ForestReducer, SyntheticForest};
use clap::Args;
use std::time::{Duration, Instant};

/// Arguments for the bench command
#[derive(Debug, Args)]
pub struct BenchArgs {
    /// Number of elements in the generated forest
    #[arg(short = 'n', long, default_value_t = 1_000_000)]
    pub size: usize,

    /// Number of timed reductions
    #[arg(short, long, default_value_t = 10)]
    pub runs: usize,

    /// Generator seed
    #[arg(short, long, default_value_t = 0x5eed)]
    pub seed: u64,

    /// Probability that an element is a root
    #[arg(long, default_value_t = 0.1)]
    pub root_ratio: f64,

    /// Target validation policy
    #[arg(long, value_enum, default_value = "strict")]
    pub validation: Validation,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Timings of a bench run
#[derive(Debug, Clone, PartialEq)]
pub struct BenchReport {
    /// Total computed by every run
    pub total: i64,
    /// Fastest run
    pub min: Duration,
    /// Mean run time
    pub mean: Duration,
    /// Slowest run
    pub max: Duration,
}

impl BenchArgs {
    /// Execute the bench command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        println!("[#######]");
        println!(
            "[RUN    ] Reduce random forest: n={}, runs={}, seed={}, root ratio={}",
            self.size, self.runs, self.seed, self.root_ratio
        );

        let report = self.run()?;

        println!("[SUCCESS] Reduce random forest with '{}'", report.total);
        for (label, duration) in [("min", report.min), ("mean", report.mean), ("max", report.max)]
        {
            println!(
                "[EVAL   ] {:<4} {} || {:>12} us",
                label,
                format_duration(duration),
                duration.as_micros()
            );
        }
        Ok(())
    }

    /// Generate the forest and time the reductions
    pub fn run(&self) -> Result<BenchReport> {
        if self.runs == 0 {
            anyhow::bail!("Number of runs must be greater than 0");
        }
        if !(0.0..=1.0).contains(&self.root_ratio) {
            anyhow::bail!("Root ratio must be between 0 and 1");
        }

        let workload = SyntheticForest {
            size: self.size,
            root_ratio: self.root_ratio,
            seed: self.seed,
            ..SyntheticForest::default()
        }
        .generate();
        log::debug!("Generated forest with {} elements", workload.len());

        let reducer = ForestReducer::builder()
            .validation(self.validation.into())
            .build();

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init(self.runs as u64, "runs");

        let mut timings = Vec::with_capacity(self.runs);
        let mut total = 0;
        for run in 0..self.runs {
            let start = Instant::now();
            total = reducer.reduce(&workload.values, &workload.targets)?;
            timings.push(start.elapsed());
            progress.completed(&format!("run {}", run + 1));
        }
        progress.finish();

        let sum: Duration = timings.iter().sum();
        Ok(BenchReport {
            total,
            min: timings.iter().copied().min().unwrap_or_default(),
            mean: sum / self.runs as u32,
            max: timings.iter().copied().max().unwrap_or_default(),
        })
    }
}

/// Format a duration as `HH:MM:SS.micros`
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    format!(
        "{:02}:{:02}:{:02}.{:06}",
        secs / 3600,
        (secs / 60) % 60,
        secs % 60,
        duration.subsec_micros()
    )
}
