//! Validate command implementation

use super::{init_logging, Validation};
use crate::config::CliConfig;
use crate::input::{resolve_patterns, CsvReader};
use anyhow::Result;
use chain_reaction_core::ForestReducer;
use clap::Args;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Input CSV files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Target validation policy (default: from config, else strict)
    #[arg(long, value_enum)]
    pub validation: Option<Validation>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, false);

        let config = CliConfig::load(self.config.as_deref())?;
        let mut reducer_config = config.reduction;
        if let Some(validation) = self.validation {
            reducer_config.validation = validation.into();
        }
        let reducer = ForestReducer::with_config(reducer_config);
        let reader = CsvReader::new(&config.input);

        let files = resolve_patterns(&self.input)?;
        let mut stdout = io::stdout().lock();
        writeln!(
            stdout,
            "Validating {} file(s) with {} policy",
            files.len(),
            reducer_config.validation.as_str()
        )?;

        let mut invalid = 0;
        for path in &files {
            match check_file(&reader, &reducer, path) {
                Ok(elements) => writeln!(stdout, "✓ {} ({elements} elements)", path.display())?,
                Err(e) => {
                    invalid += 1;
                    writeln!(stdout, "✗ {}", path.display())?;
                    writeln!(stdout, "  Error: {e}")?;
                }
            }
        }

        if invalid > 0 {
            anyhow::bail!("Validation failed for {invalid} of {} file(s)", files.len());
        }
        Ok(())
    }
}

fn check_file(reader: &CsvReader<'_>, reducer: &ForestReducer, path: &Path) -> Result<usize> {
    let workload = reader.read_file(path)?;
    reducer.check(&workload.values, &workload.targets)?;
    Ok(workload.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn validate(dir: &TempDir, name: &str, content: &str, policy: Option<Validation>) -> Result<()> {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();

        ValidateArgs {
            input: vec![path.display().to_string()],
            config: None,
            validation: policy,
            verbose: 0,
        }
        .execute()
    }

    #[test]
    fn test_validate_args_debug() {
        let args = ValidateArgs {
            input: vec!["forest.csv".to_string()],
            config: None,
            validation: Some(Validation::Acyclic),
            verbose: 0,
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("ValidateArgs"));
        assert!(debug_str.contains("Acyclic"));
    }

    #[test]
    fn test_valid_workload() {
        let dir = TempDir::new().unwrap();
        assert!(validate(&dir, "ok.csv", "value,target\n50,0\n40,1\n", None).is_ok());
    }

    #[test]
    fn test_empty_workload_is_invalid() {
        let dir = TempDir::new().unwrap();
        assert!(validate(&dir, "empty.csv", "value,target\n", None).is_err());
    }

    #[test]
    fn test_policy_changes_outcome() {
        let dir = TempDir::new().unwrap();
        // 0 -> 1 -> 2 (root) points forward
        let content = "value,target\n1,2\n2,3\n3,0\n";
        assert!(validate(&dir, "forward.csv", content, Some(Validation::Acyclic)).is_ok());
        assert!(validate(&dir, "forward.csv", content, Some(Validation::Strict)).is_err());
    }

    #[test]
    fn test_malformed_csv_is_invalid() {
        let dir = TempDir::new().unwrap();
        let err = validate(&dir, "bad.csv", "value,target\nx,0\n", None).unwrap_err();
        assert!(err.to_string().contains("Validation failed for 1 of 1"));
    }
}
