//! Calculation history storage API.
//!
//! One pretty-printed JSON file per record, named by its id.

use crate::types::CalculationRecord;
use crate::{ResultsError, ResultsResult};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_LIST_LIMIT: usize = 10;

#[derive(Debug, Clone)]
pub struct CalculationStore {
    root_dir: PathBuf,
}

impl CalculationStore {
    pub fn new(root_dir: PathBuf) -> ResultsResult<Self> {
        if !root_dir.exists() {
            fs::create_dir_all(&root_dir)?;
        }
        Ok(Self { root_dir })
    }

    /// Store under `.transfocalc/history` next to an input file.
    pub fn for_inputs(input_path: &Path) -> ResultsResult<Self> {
        let input_dir = input_path
            .parent()
            .ok_or_else(|| ResultsError::InvalidPath {
                message: "input path has no parent directory".to_string(),
            })?;
        let history_dir = input_dir.join(".transfocalc").join("history");
        Self::new(history_dir)
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    fn record_path(&self, id: &str) -> PathBuf {
        self.root_dir.join(format!("{id}.json"))
    }

    pub fn has_calculation(&self, id: &str) -> bool {
        self.record_path(id).exists()
    }

    /// Write a record, replacing any record with the same id.
    pub fn save(&self, record: &CalculationRecord) -> ResultsResult<()> {
        if record.id.is_empty() || record.id.contains(['/', '\\', '.']) {
            return Err(ResultsError::InvalidPath {
                message: format!("invalid calculation id '{}'", record.id),
            });
        }
        fs::create_dir_all(&self.root_dir)?;
        let json = serde_json::to_string_pretty(record)?;
        fs::write(self.record_path(&record.id), json)?;
        Ok(())
    }

    pub fn load(&self, id: &str) -> ResultsResult<CalculationRecord> {
        let path = self.record_path(id);

        if !path.exists() {
            return Err(ResultsError::CalculationNotFound { id: id.to_string() });
        }

        let content = fs::read_to_string(path)?;
        let record = serde_json::from_str(&content)?;
        Ok(record)
    }

    /// Up to `limit` records, newest first. Unreadable files are skipped.
    pub fn list(&self, limit: usize) -> ResultsResult<Vec<CalculationRecord>> {
        let mut records = Vec::new();

        if !self.root_dir.exists() {
            return Ok(records);
        }

        for entry in fs::read_dir(&self.root_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if let Ok(record) = self.load(id) {
                records.push(record);
            }
        }

        records.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        records.truncate(limit);
        Ok(records)
    }

    pub fn delete(&self, id: &str) -> ResultsResult<()> {
        let path = self.record_path(id);
        if !path.exists() {
            return Err(ResultsError::CalculationNotFound { id: id.to_string() });
        }
        fs::remove_file(path)?;
        Ok(())
    }
}
