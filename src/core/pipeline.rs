use crate::core::dedup::deduplicate;
use crate::core::{ConfigProvider, DedupResult, Pipeline, Record, Storage};
use crate::utils::error::{Result, ToolError};
use std::path::Path;

pub struct DedupPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> DedupPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    /// Output lands next to the working directory as `nodup_<input-file-name>`,
    /// regardless of which directory the input came from.
    fn output_filename(&self) -> String {
        let name = Path::new(self.config.input_path())
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("output.json");
        format!("nodup_{}", name)
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for DedupPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Record>> {
        let input = self.config.input_path();
        tracing::debug!("Reading input table from: {}", input);

        let bytes = self.storage.read_file(input).await.map_err(|e| match e {
            ToolError::IoError(ref io) if io.kind() == std::io::ErrorKind::NotFound => {
                ToolError::InputNotFound {
                    path: input.to_string(),
                }
            }
            other => other,
        })?;

        let rows: Vec<Record> =
            serde_json::from_slice(&bytes).map_err(|e| ToolError::MalformedInput {
                message: format!("expected a JSON array of row objects: {}", e),
            })?;

        tracing::debug!("Loaded {} rows", rows.len());
        Ok(rows)
    }

    async fn transform(&self, rows: Vec<Record>) -> Result<DedupResult> {
        let (kept, removed) = deduplicate(rows);
        tracing::debug!("Dropped {} duplicate rows, {} remain", removed, kept.len());
        Ok(DedupResult {
            rows: kept,
            removed,
        })
    }

    async fn load(&self, result: DedupResult) -> Result<String> {
        let output_path = Path::new(self.config.output_dir())
            .join(self.output_filename())
            .to_string_lossy()
            .into_owned();

        let bytes = serde_json::to_vec(&result.rows)?;
        self.storage.write_file(&output_path, &bytes).await?;

        tracing::debug!("Wrote {} rows to {}", result.rows.len(), output_path);
        Ok(output_path)
    }
}
