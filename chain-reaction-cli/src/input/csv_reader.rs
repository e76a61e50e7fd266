//! CSV workload reader
//!
//! One element per row: `value,target`. Surrounding whitespace is trimmed and
//! blank lines are skipped. The first row is skipped when the input has a
//! header.

use crate::config::InputConfig;
use crate::error::CliError;
use anyhow::{Context, Result};
use chain_reaction_core::Workload;
use std::fs;
use std::path::Path;

/// Reads `(value, target)` rows into a [`Workload`]
pub struct CsvReader<'a> {
    config: &'a InputConfig,
}

impl<'a> CsvReader<'a> {
    /// Create a reader for the given input settings
    pub fn new(config: &'a InputConfig) -> Self {
        Self { config }
    }

    /// Read and parse a file
    pub fn read_file(&self, path: &Path) -> Result<Workload> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        let workload = self.parse(&content, &path.display().to_string())?;
        log::debug!("Read {} elements from {}", workload.len(), path.display());
        Ok(workload)
    }

    /// Parse CSV text; `source` names the input in error messages
    pub fn parse(&self, content: &str, source: &str) -> Result<Workload, CliError> {
        let mut workload = Workload::default();
        let skip = usize::from(self.config.has_header);

        for (line_idx, line) in content.lines().enumerate().skip(skip) {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let malformed = |reason: String| CliError::MalformedCsv {
                path: source.to_string(),
                line: line_idx + 1,
                reason,
            };

            let fields: Vec<&str> = line.split(self.config.delimiter).map(str::trim).collect();
            let [value, target] = fields.as_slice() else {
                return Err(malformed(format!(
                    "expected 2 columns, found {}",
                    fields.len()
                )));
            };

            let value = value
                .parse::<i64>()
                .map_err(|e| malformed(format!("value '{value}' is not a number: {e}")))?;
            let target = target
                .parse::<i64>()
                .map_err(|e| malformed(format!("target '{target}' is not a number: {e}")))?;

            workload.push(value, target);
        }

        Ok(workload)
    }
}
