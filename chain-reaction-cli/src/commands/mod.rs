//! CLI command implementations

use chain_reaction_core::ValidationPolicy;
use clap::Subcommand;

pub mod bench;
pub mod generate_config;
pub mod reduce;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Reduce CSV workloads and print their totals
    Reduce(reduce::ReduceArgs),

    /// Check CSV workloads without reducing them
    Validate(validate::ValidateArgs),

    /// Time reductions of a random forest
    Bench(bench::BenchArgs),

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Reduce(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::Bench(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// Target validation policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Validation {
    /// Range and self-merge checks only
    Bounds,
    /// Also reject merge cycles
    Acyclic,
    /// Also require every parent to have a smaller target
    Strict,
}

impl From<Validation> for ValidationPolicy {
    fn from(value: Validation) -> Self {
        match value {
            Validation::Bounds => ValidationPolicy::Bounds,
            Validation::Acyclic => ValidationPolicy::Acyclic,
            Validation::Strict => ValidationPolicy::Strict,
        }
    }
}

/// Initialize logging based on verbosity level
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // A second initialization (e.g. from tests) keeps the first logger
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_conversion() {
        assert_eq!(
            ValidationPolicy::from(Validation::Bounds),
            ValidationPolicy::Bounds
        );
        assert_eq!(
            ValidationPolicy::from(Validation::Acyclic),
            ValidationPolicy::Acyclic
        );
        assert_eq!(
            ValidationPolicy::from(Validation::Strict),
            ValidationPolicy::Strict
        );
    }

    #[test]
    fn test_commands_debug_format() {
        let cmd = Commands::GenerateConfig(generate_config::GenerateConfigArgs {
            output: "chain.toml".into(),
        });

        let debug_str = format!("{:?}", cmd);
        assert!(debug_str.contains("GenerateConfig"));
        assert!(debug_str.contains("chain.toml"));
    }

    #[test]
    fn test_init_logging_twice_does_not_panic() {
        init_logging(2, false);
        init_logging(0, false);
        init_logging(0, true);
    }
}
