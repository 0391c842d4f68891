pub mod toml_config;

pub use toml_config::EngineConfig;

#[cfg(feature = "cli")]
use crate::domain::model::NumberKind;
#[cfg(feature = "cli")]
use crate::utils::error::{EngineError, Result};
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

/// Analyze a single phone number or national ID and print the report as JSON.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "batcuc")]
#[command(about = "Bát Cục Linh Số analysis for Vietnamese phone numbers and national IDs")]
pub struct CliConfig {
    /// The number to analyze; spaces, dashes and a leading +84 are accepted.
    pub number: String,

    #[arg(long, default_value = "phone", help = "phone or national_id")]
    pub kind: NumberKind,

    #[arg(long, help = "business, personal, wealth, relationship or career")]
    pub purpose: Option<String>,

    #[arg(long, help = "TOML file with analysis defaults and response factors")]
    pub config: Option<String>,

    #[arg(long, help = "Reference date (YYYY-MM-DD) for the age of a national ID holder")]
    pub as_of: Option<chrono::NaiveDate>,

    #[arg(long, help = "Pretty-print the JSON report")]
    pub pretty: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("number", &self.number)?;
        if let Some(path) = &self.config {
            validation::validate_path("config", path)?;
        }
        if let Some(purpose) = &self.purpose {
            validation::validate_non_empty_string("purpose", purpose)?;
        }
        Ok(())
    }
}

/// Analyze every row of a CSV file and write a CSV summary.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "batch_analyze")]
#[command(about = "Batch Bát Cục Linh Số analysis over a CSV file")]
pub struct BatchCliConfig {
    #[arg(long, help = "TOML configuration file; its [batch] section supplies the paths")]
    pub config: Option<String>,

    #[arg(long, help = "Input CSV, overrides batch.input_path")]
    pub input: Option<String>,

    #[arg(long, help = "Output CSV, overrides batch.output_path")]
    pub output: Option<String>,

    #[arg(long, help = "Number kind, overrides analysis.default_kind")]
    pub kind: Option<NumberKind>,

    #[arg(long, help = "Emit JSON log lines")]
    pub json_logs: bool,

    #[arg(long, help = "Show the resolved settings without analyzing anything")]
    pub dry_run: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for BatchCliConfig {
    fn validate(&self) -> Result<()> {
        if self.config.is_none() && (self.input.is_none() || self.output.is_none()) {
            return Err(EngineError::MissingConfigError {
                field: "--config or both --input and --output".to_string(),
            });
        }
        for (field, path) in [
            ("config", &self.config),
            ("input", &self.input),
            ("output", &self.output),
        ] {
            if let Some(path) = path {
                validation::validate_path(field, path)?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "cli")]
impl BatchCliConfig {
    /// Input and output paths, each taken from its flag or else from the
    /// loaded `[batch]` section.
    pub fn resolve_paths(&self, config: &EngineConfig) -> Result<(String, String)> {
        let input = self
            .input
            .clone()
            .or_else(|| config.batch.as_ref().map(|b| b.input_path.clone()))
            .ok_or_else(|| EngineError::MissingConfigError {
                field: "batch.input_path".to_string(),
            })?;
        let output = self
            .output
            .clone()
            .or_else(|| config.batch.as_ref().map(|b| b.output_path.clone()))
            .ok_or_else(|| EngineError::MissingConfigError {
                field: "batch.output_path".to_string(),
            })?;
        Ok((input, output))
    }
}
