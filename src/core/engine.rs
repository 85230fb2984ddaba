use crate::core::Pipeline;
use crate::domain::model::DedupReport;
use crate::utils::error::Result;

pub struct DedupEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> DedupEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Single-shot run: load the table, drop duplicate rows, write the result.
    /// Any failure aborts the whole invocation; no partial output is produced.
    pub async fn run(&self) -> Result<DedupReport> {
        let rows = self.pipeline.extract().await?;
        tracing::info!("Extracted {} rows", rows.len());

        let result = self.pipeline.transform(rows).await?;
        let kept = result.rows.len();
        let removed = result.removed;

        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(DedupReport {
            kept,
            removed,
            output_path,
        })
    }
}
