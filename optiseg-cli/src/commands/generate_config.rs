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

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, TEMPLATE)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Use it for encoding:");
        println!(
            "   optiseg encode -c bpe.codes -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }
}

/// Commented configuration template; every value is the built-in default
pub const TEMPLATE: &str = r#"# optiseg configuration
# Command-line flags override the values below.

[encoding]
# Marker appended to every piece of a word except the last
separator = "@@"

# Dropout rate in [0, 1]. Any positive value disables the segmentation cache.
dropout = 0.0

# Words that cannot be segmented: "fail", "skip" or "passthrough"
on_error = "fail"

# Replacement for the </w> marker when building a vocabulary from merge codes
end_of_word = " "

[output]
# "text" or "json"
format = "text"
pretty_json = true

[performance]
# Encode lines on a worker pool
parallel = false

# Number of worker threads (0 = one per logical CPU)
threads = 0
"#;
