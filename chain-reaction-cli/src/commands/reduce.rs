//! Reduce command implementation

use super::{init_logging, Validation};
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, CsvReader};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use chain_reaction_core::{ForestReducer, ReducerConfig};
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the reduce command
#[derive(Debug, Args)]
pub struct ReduceArgs {
    /// Input CSV files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Target validation policy (default: from config, else strict)
    #[arg(long, value_enum)]
    pub validation: Option<Validation>,

    /// Print every reduction step
    #[arg(short, long)]
    pub explain: bool,

    /// Number of worker threads for reducing several files
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `source: total` line per file
    Text,
    /// JSON array of results with statistics
    Json,
    /// Markdown summary table
    Markdown,
}

impl ReduceArgs {
    /// Execute the reduce command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting reduction");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;
        let reducer = ForestReducer::with_config(self.reducer_config(&config));
        let format = self.output_format(&config)?;
        let threads = self.thread_count(&config)?;

        let files = resolve_patterns(&self.input)?;
        log::info!("Reducing {} file(s) on {} thread(s)", files.len(), threads);

        let reader = CsvReader::new(&config.input);
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init(files.len() as u64, "files");

        let mut workloads = Vec::with_capacity(files.len());
        for path in &files {
            workloads.push(reader.read_file(path)?);
            progress.completed(&path.display().to_string());
        }
        progress.finish();

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to build worker pool")?;
        let results = pool.install(|| reducer.reduce_batch(&workloads));

        let mut formatter = self.create_formatter(format, config.output.pretty_json)?;
        let mut failures = Vec::new();
        for (path, result) in files.iter().zip(results) {
            let source = path.display().to_string();
            match result {
                Ok(reduction) => formatter.format_result(&source, &reduction)?,
                Err(e) => {
                    log::error!("{source}: {e}");
                    failures.push(format!("{source}: {e}"));
                }
            }
        }
        formatter.finish()?;

        if !failures.is_empty() {
            return Err(CliError::ReductionError(failures.join("; ")).into());
        }

        log::info!("Reduction complete");
        Ok(())
    }

    /// Command-line flags override the configuration file
    fn reducer_config(&self, config: &CliConfig) -> ReducerConfig {
        let mut reducer_config = config.reduction;
        if let Some(validation) = self.validation {
            reducer_config.validation = validation.into();
        }
        if self.explain {
            reducer_config.record_steps = true;
        }
        reducer_config
    }

    fn output_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        OutputFormat::from_str(&config.output.default_format, true).map_err(|_| {
            CliError::ConfigError(format!(
                "unknown output format: {}",
                config.output.default_format
            ))
            .into()
        })
    }

    fn thread_count(&self, config: &CliConfig) -> Result<usize> {
        match self.threads {
            Some(0) => anyhow::bail!("Thread count must be greater than 0"),
            Some(n) => Ok(n),
            None if config.performance.worker_threads > 0 => Ok(config.performance.worker_threads),
            None => Ok(num_cpus::get()),
        }
    }

    fn create_formatter(
        &self,
        format: OutputFormat,
        pretty_json: bool,
    ) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        Ok(match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        })
    }
}
