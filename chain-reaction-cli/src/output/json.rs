//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use chain_reaction_core::{Reduction, ReductionStats, ReductionStep};
use serde::Serialize;
use std::io::Write;

/// JSON formatter - outputs results as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    results: Vec<ResultData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct ResultData {
    /// Input the workload was read from
    pub source: String,
    /// Reduced total
    pub total: i64,
    /// Decision counts
    pub stats: ReductionStats,
    /// Decision log, omitted unless recorded
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<ReductionStep>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            results: Vec::new(),
        }
    }

    /// Consume the formatter, returning the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_result(&mut self, source: &str, reduction: &Reduction) -> Result<()> {
        self.results.push(ResultData {
            source: source.to_string(),
            total: reduction.total,
            stats: reduction.stats,
            steps: reduction.steps.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.results)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.results)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chain_reaction_core::ForestReducer;

    #[test]
    fn test_json_output() {
        let reduction = ForestReducer::new()
            .reduce_detailed(&[30, 40, 50, 60], &[0, 1, 1, 2])
            .unwrap();
        let mut formatter = JsonFormatter::new(Vec::new(), false);
        formatter.format_result("merge.csv", &reduction).unwrap();
        formatter.finish().unwrap();

        let output = String::from_utf8(formatter.into_inner()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["source"], "merge.csv");
        assert_eq!(parsed[0]["total"], 110);
        assert_eq!(parsed[0]["stats"]["swaps"], 1);
        assert!(parsed[0].get("steps").is_none());
    }

    #[test]
    fn test_empty_json_array() {
        let mut formatter = JsonFormatter::new(Vec::new(), true);
        formatter.finish().unwrap();
        let output = String::from_utf8(formatter.into_inner()).unwrap();
        assert_eq!(output.trim(), "[]");
    }
}
