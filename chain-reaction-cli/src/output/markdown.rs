//! Markdown output formatter

use super::{describe_step, OutputFormatter};
use anyhow::Result;
use chain_reaction_core::Reduction;
use std::io::Write;

/// Markdown formatter - outputs a summary table, then step logs if recorded
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    results: Vec<(String, Reduction)>,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            results: Vec::new(),
        }
    }

    /// Consume the formatter, returning the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_result(&mut self, source: &str, reduction: &Reduction) -> Result<()> {
        self.results.push((source.to_string(), reduction.clone()));
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(
            self.writer,
            "| Source | Total | Elements | Roots | Drops | Swaps | Merges |"
        )?;
        writeln!(self.writer, "|---|---:|---:|---:|---:|---:|---:|")?;
        for (source, reduction) in &self.results {
            let s = &reduction.stats;
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} | {} | {} |",
                source, reduction.total, s.elements, s.roots, s.drops, s.swaps, s.merges
            )?;
        }

        for (source, reduction) in self.results.iter().filter(|(_, r)| !r.steps.is_empty()) {
            writeln!(self.writer)?;
            writeln!(self.writer, "### {source}")?;
            writeln!(self.writer)?;
            for (n, step) in reduction.steps.iter().enumerate() {
                writeln!(self.writer, "{}. `{}`", n + 1, describe_step(step))?;
            }
        }

        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total workloads: {}*", self.results.len())?;
        self.writer.flush()?;
        Ok(())
    }
}
