//! Plain text output formatter

use super::{describe_step, OutputFormatter};
use anyhow::Result;
use chain_reaction_core::Reduction;
use std::io::{self, Write};

/// Plain text formatter - outputs one `source: total` line per workload
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the formatter, returning the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_result(&mut self, source: &str, reduction: &Reduction) -> Result<()> {
        writeln!(self.writer, "{}: {}", source, reduction.total)?;
        for step in &reduction.steps {
            writeln!(self.writer, "  {}", describe_step(step))?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
