use serde::{Deserialize, Serialize};

/// One row of the table: an ordered mapping from field name to JSON value.
/// Serializes as the bare object, so a JSON array of objects decodes straight
/// into `Vec<Record>` and re-encodes with the original key order intact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    pub data: serde_json::Map<String, serde_json::Value>,
}

impl Record {
    /// The deduplication key, if the row carries one.
    pub fn id(&self) -> Option<&serde_json::Value> {
        self.data.get("id")
    }
}

#[derive(Debug, Clone)]
pub struct DedupResult {
    pub rows: Vec<Record>,
    pub removed: usize,
}

/// Summary returned by a full engine run.
#[derive(Debug, Clone)]
pub struct DedupReport {
    pub kept: usize,
    pub removed: usize,
    pub output_path: String,
}
