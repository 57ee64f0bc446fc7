use std::path::PathBuf;
use clap::Parser;
use crate::core::config::EmbedConfig;
use crate::core::constants::DEFAULT_POPULATION_THRESHOLD;

/// Convert a binary file into a C byte array source file
#[derive(Parser, Debug)]
#[command(name = "embed", author, version)]
pub struct EmbedCli {
    /// File whose bytes are embedded
    pub input_file: PathBuf,

    /// Generated source file; its base name becomes the array name
    pub output_file: PathBuf,

    /// Wrap the array initializer after this many bytes (0 keeps one line)
    #[arg(long, default_value_t = 0)]
    pub bytes_per_line: usize,

    /// Fail instead of rewriting an output name that is not a valid C identifier
    #[arg(long)]
    pub strict_name: bool,
}

impl EmbedCli {
    pub fn embed_config(&self) -> EmbedConfig {
        EmbedConfig::builder()
            .bytes_per_line(self.bytes_per_line)
            .sanitize_identifiers(!self.strict_name)
            .build()
    }
}

/// Process and filter cities from a GeoNames cities table
#[derive(Parser, Debug)]
#[command(name = "filter_cities", author, version)]
pub struct FilterCitiesCli {
    /// Path to the tab-separated input file (e.g. cities15000.txt)
    pub input_txt: PathBuf,

    /// Path to the output CSV file
    pub output_csv: PathBuf,

    /// Minimum population to include in the output
    #[arg(default_value_t = DEFAULT_POPULATION_THRESHOLD, allow_negative_numbers = true)]
    pub population_threshold: i64,
}
