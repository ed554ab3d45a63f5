//! JSON file storage for daily usage records.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde_json::Value;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::models::{UsageRecord, WeekRange};


/// Owns the usage log file for the duration of one run.
#[derive(Debug, Clone)]
pub struct EntryStore {
    path: PathBuf,
}


impl EntryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the log as an empty array if it doesn't exist yet.
    pub fn ensure_exists(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }

        if let Some(parent) = self.parent_dir() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&self.path, "[]")
            .with_context(|| format!("Failed to create data file: {}", self.path.display()))?;
        info!(path = %self.path.display(), "created empty usage log");

        Ok(())
    }

    /// Load every stored record.
    ///
    /// A missing or corrupt file reads as an empty log. Elements without a
    /// usable date are skipped.
    pub fn load(&self) -> Vec<UsageRecord> {
        let rows = self.load_rows();

        let mut records = Vec::with_capacity(rows.len());
        for (index, row) in rows.into_iter().enumerate() {
            match serde_json::from_value::<UsageRecord>(row) {
                Ok(record) => records.push(record),
                Err(e) => warn!(index, error = %e, "skipping malformed usage record"),
            }
        }

        debug!(count = records.len(), "loaded usage records");
        records
    }

    /// Insert or replace the record for `day` and rewrite the log.
    ///
    /// Works on the raw array so rows that don't decode, and fields this
    /// tool doesn't know about, are written back untouched. The row whose
    /// `"date"` string matches keeps its position in the file.
    pub fn upsert(&self, day: NaiveDate, amount: f64) -> Result<UsageRecord> {
        let mut rows = self.load_rows();
        let record = UsageRecord::new(day, amount);
        let key = record.date_key();
        let row = serde_json::to_value(&record).context("Failed to serialize usage record")?;

        match rows
            .iter_mut()
            .find(|r| r.get("date").and_then(Value::as_str) == Some(key.as_str()))
        {
            Some(existing) => {
                debug!(date = %key, "replacing existing record");
                *existing = row;
            }
            None => rows.push(row),
        }

        self.write_rows(&rows)?;
        info!(date = %key, amount = record.amount, "saved usage record");

        Ok(record)
    }

    /// Read the file as an untyped JSON array.
    fn load_rows(&self) -> Vec<Value> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "usage log not readable");
                return Vec::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(rows) => rows,
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "usage log is not a JSON array, treating as empty"
                );
                Vec::new()
            }
        }
    }

    /// Replace the file contents through a sibling temp file and rename.
    fn write_rows(&self, rows: &[Value]) -> Result<()> {
        let dir = self.parent_dir().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

        let json = serde_json::to_string_pretty(rows)
            .context("Failed to serialize usage records")?;

        let mut tmp = NamedTempFile::new_in(dir)
            .with_context(|| format!("Failed to create temp file in: {}", dir.display()))?;
        tmp.write_all(json.as_bytes())
            .and_then(|_| tmp.flush())
            .with_context(|| format!("Failed to write temp file for: {}", self.path.display()))?;
        tmp.persist(&self.path)
            .with_context(|| format!("Failed to write data file: {}", self.path.display()))?;

        Ok(())
    }

    fn parent_dir(&self) -> Option<&Path> {
        self.path.parent().filter(|p| !p.as_os_str().is_empty())
    }
}


/// Sum litres over the records that fall inside `range`.
pub fn sum_in_range(records: &[UsageRecord], range: &WeekRange) -> f64 {
    records
        .iter()
        .filter(|r| range.contains(r.date))
        .map(|r| r.amount)
        .sum()
}
