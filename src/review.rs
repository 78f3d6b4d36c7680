use chrono::Local;
use serde::Serialize;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use crate::session::Mistake;

#[derive(Debug, Serialize)]
struct ReviewRow<'a> {
    recorded_at: String,
    stage: usize,
    prompt: &'a str,
    expected: &'a str,
    given: &'a str,
    timed_out: bool,
}

/// Appends each finished stage's mistakes to a CSV file for later review
#[derive(Debug, Clone)]
pub struct ReviewLog {
    path: PathBuf,
}

impl ReviewLog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, stage: usize, mistakes: &[Mistake]) -> Result<(), csv::Error> {
        if mistakes.is_empty() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        // If the file doesn't exist yet, we need to emit a header
        let needs_header = !self.path.exists();

        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(file);

        let recorded_at = Local::now().to_rfc3339();
        for mistake in mistakes {
            writer.serialize(ReviewRow {
                recorded_at: recorded_at.clone(),
                stage,
                prompt: &mistake.prompt,
                expected: &mistake.expected,
                given: mistake.given.as_deref().unwrap_or(""),
                timed_out: mistake.timed_out,
            })?;
        }
        writer.flush()?;

        tracing::debug!(
            "exported {} mistakes to {}",
            mistakes.len(),
            self.path.display()
        );
        Ok(())
    }
}
