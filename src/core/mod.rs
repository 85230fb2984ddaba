pub mod dedup;
pub mod engine;
pub mod pipeline;
pub mod status;

pub use crate::domain::model::{DedupReport, DedupResult, Record};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
