pub mod config;
pub mod core;
pub mod domain;
pub mod tables;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{BatchCliConfig, CliConfig};

pub use config::EngineConfig;
pub use core::{batch::BatchOptions, engine::AnalysisEngine};
pub use domain::model::{NumberKind, Purpose, StarKey};
pub use domain::report::AnalysisReport;
pub use utils::error::{EngineError, Result};
