use std::fs;
use std::path::{Path, PathBuf};

use crate::error::LogError;

const GOALS_FILE: &str = "goals.txt";

/// Plain-text goal list, one goal per line, order preserved. The contents
/// are an opaque passthrough; nothing in the pipeline interprets them.
#[derive(Debug, Clone)]
pub struct GoalLog {
    path: PathBuf,
}

impl GoalLog {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(GOALS_FILE),
        }
    }

    pub fn read(&self) -> Result<Vec<String>, LogError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        Ok(contents.lines().map(|line| line.to_string()).collect())
    }

    pub fn write(&self, goals: &[String]) -> Result<(), LogError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut contents = goals.join("\n");
        if !contents.is_empty() {
            contents.push('\n');
        }
        fs::write(&self.path, contents)?;
        Ok(())
    }
}
