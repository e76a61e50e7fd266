//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, Self::template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to match your CSV files");
        println!("2. Check your workloads:");
        println!(
            "   chain-reaction validate -i 'data/*.csv' -c {}",
            self.output.display()
        );
        println!("3. Reduce them:");
        println!(
            "   chain-reaction reduce -i 'data/*.csv' -c {}",
            self.output.display()
        );

        Ok(())
    }

    /// Template configuration content
    pub fn template() -> &'static str {
        r#"# chain-reaction configuration

[input]
# Skip the first row of every CSV file
has_header = true
# Column separator between value and target
delimiter = ","

[reduction]
# Target checks run before reducing:
#   "bounds"  - targets in 0..=n, no element merging into itself
#   "acyclic" - bounds, and no merge cycles
#   "strict"  - bounds, and every parent has a smaller target than its child
validation = "strict"
# Record every drop/swap/merge decision (same as --explain)
record_steps = false

[output]
# "text", "json" or "markdown"
default_format = "text"
pretty_json = true

[performance]
# Worker threads for reducing several files (0 = one per CPU)
worker_threads = 0
"#
    }
}
