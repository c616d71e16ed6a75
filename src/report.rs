use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use crate::models::LevelsReport;

/// Writes level reports as JSON files that downstream dashboards can read.
pub struct ReportFileManager {
    output_dir: String,
}

impl ReportFileManager {
    pub fn new(output_dir: &str) -> Self {
        Self {
            output_dir: output_dir.to_string(),
        }
    }

    /// Write a report to `{symbol}_{timestamp_millis}.json` under the
    /// output directory, creating the directory if needed. Returns the
    /// path of the written file.
    pub fn write_report(&self, report: &LevelsReport) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)
            .context("Failed to create report output directory")?;

        let filename = format!(
            "{}_{}.json",
            report.symbol,
            report.generated_at.timestamp_millis()
        );
        let file_path = Path::new(&self.output_dir).join(&filename);

        let json = serde_json::to_string_pretty(report)
            .context("Failed to serialize levels report")?;
        fs::write(&file_path, json)
            .with_context(|| format!("Failed to write report file {}", file_path.display()))?;

        info!("Wrote levels report for {} to {}", report.symbol, file_path.display());

        Ok(file_path)
    }
}
