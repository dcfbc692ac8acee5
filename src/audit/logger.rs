//! Append-only audit log writer
//!
//! Each record is written as a single JSON line and flushed immediately.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{PennyError, PennyResult};

use super::entry::AuditRecord;

/// Handles writing audit records to the audit log file
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append a record to the log
    pub fn log(&self, record: &AuditRecord) -> PennyResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| PennyError::Io(format!("Failed to open audit log: {}", e)))?;

        let json = serde_json::to_string(record)
            .map_err(|e| PennyError::Json(format!("Failed to serialize audit record: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| PennyError::Io(format!("Failed to write audit record: {}", e)))?;

        file.flush()
            .map_err(|e| PennyError::Io(format!("Failed to flush audit log: {}", e)))?;

        tracing::debug!(operation = %record.operation, "audit record written");
        Ok(())
    }

    /// Read all records, oldest first
    pub fn read_all(&self) -> PennyResult<Vec<AuditRecord>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| PennyError::Io(format!("Failed to open audit log: {}", e)))?;

        let mut records = Vec::new();
        for (line_num, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| {
                PennyError::Io(format!("Failed to read audit log line {}: {}", line_num + 1, e))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let record: AuditRecord = serde_json::from_str(&line).map_err(|e| {
                PennyError::Json(format!(
                    "Failed to parse audit record at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;
            records.push(record);
        }

        Ok(records)
    }
}
