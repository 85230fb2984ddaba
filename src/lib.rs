pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, status::StatusConfig, CliConfig};
pub use core::{engine::DedupEngine, pipeline::DedupPipeline, status::StatusClient};
pub use domain::model::{DedupReport, DedupResult, Record};
pub use utils::error::{Result, ToolError};
