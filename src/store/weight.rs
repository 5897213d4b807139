use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::LogError;

const WEIGHT_FILE: &str = "weight_log.csv";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightEntry {
    pub date: NaiveDate,
    pub weight_kg: f64,
}

/// Append-only body-weight log, one `YYYY-MM-DD,<kg>` line per entry.
/// Reading returns entries in file order; malformed lines are skipped with a
/// warning rather than failing the read.
#[derive(Debug, Clone)]
pub struct WeightLog {
    path: PathBuf,
}

impl WeightLog {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(WEIGHT_FILE),
        }
    }

    pub fn append(&self, date: NaiveDate, weight_kg: f64) -> Result<(), LogError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{},{}", date.format("%Y-%m-%d"), weight_kg)?;
        Ok(())
    }

    pub fn read_all(&self) -> Result<Vec<WeightEntry>, LogError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        let mut entries = Vec::new();
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match parse_entry(line) {
                Some(entry) => entries.push(entry),
                None => tracing::warn!("Skipping malformed weight entry: {:?}", line),
            }
        }
        Ok(entries)
    }
}

fn parse_entry(line: &str) -> Option<WeightEntry> {
    let (date, weight) = line.split_once(',')?;
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()?;
    let weight_kg: f64 = weight.trim().parse().ok()?;
    if !weight_kg.is_finite() {
        return None;
    }
    Some(WeightEntry { date, weight_kg })
}
