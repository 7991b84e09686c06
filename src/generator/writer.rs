//! Serialization of the document to `karabiner.json`.

use crate::models::KarabinerConfig;
use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Result of a successful write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    /// File that was written
    pub path: PathBuf,
    /// Bytes written
    pub bytes: usize,
    /// Wall-clock time spent serializing and writing
    pub elapsed: Duration,
}

impl WriteReport {
    /// Elapsed time in fractional milliseconds.
    pub fn millis(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

impl fmt::Display for WriteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wrote {} - Process took {:.2} milliseconds 🚀",
            self.path.display(),
            self.millis()
        )
    }
}

/// Outcome of comparing the rendered document with a file on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// File exists and matches byte for byte
    UpToDate,
    /// File does not exist
    Missing,
    /// File exists with different content
    Differs,
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UpToDate => write!(f, "up to date"),
            Self::Missing => write!(f, "missing"),
            Self::Differs => write!(f, "out of date"),
        }
    }
}

/// Renders `document` as pretty JSON with 2-space indentation.
///
/// Key order follows struct field order, so output is stable across runs.
pub fn render(document: &KarabinerConfig) -> Result<String> {
    serde_json::to_string_pretty(document).context("Failed to serialize configuration")
}

/// Writes `document` to `path`, replacing any existing file.
pub fn write_config(document: &KarabinerConfig, path: &Path) -> Result<WriteReport> {
    let started = Instant::now();
    let content = render(document)?;

    if let Some(parent) = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create output directory: {}", parent.display())
        })?;
    }

    fs::write(path, &content)
        .with_context(|| format!("Failed to write configuration: {}", path.display()))?;

    let report = WriteReport {
        path: path.to_path_buf(),
        bytes: content.len(),
        elapsed: started.elapsed(),
    };
    info!(path = %path.display(), bytes = report.bytes, "wrote configuration");
    Ok(report)
}

/// Compares the rendered `document` with the file at `path` without writing.
pub fn check_config(document: &KarabinerConfig, path: &Path) -> Result<CheckOutcome> {
    if !path.exists() {
        return Ok(CheckOutcome::Missing);
    }

    let expected = render(document)?;
    let actual = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration: {}", path.display()))?;

    let outcome = if actual == expected {
        CheckOutcome::UpToDate
    } else {
        CheckOutcome::Differs
    };
    debug!(path = %path.display(), %outcome, "checked configuration");
    Ok(outcome)
}
