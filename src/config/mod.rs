pub mod cli;
pub mod status;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "dedup")]
#[command(about = "Remove rows with duplicate ids from a JSON table")]
pub struct CliConfig {
    /// Path to a JSON file containing an array of row objects
    pub input: String,

    /// Directory the deduplicated table is written to
    #[arg(long, default_value = ".")]
    pub output_dir: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        validate_path("output_dir", &self.output_dir)?;
        Ok(())
    }
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_dir(&self) -> &str {
        &self.output_dir
    }
}
