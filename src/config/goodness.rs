use crate::detector::{DetectionOptions, DEFAULT_GAP_TOLERANCE, DEFAULT_MIN_RUN};
use crate::error::Result;
use crate::runs::RunExtent;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct GoodnessToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub detection: DetectionConfig,
    #[serde(default)]
    pub output: GoodnessOutputConfig,
}

/// Raw detection tunables as written in the config file.
///
/// Values are read as signed integers so that out-of-range settings surface
/// as configuration errors from [`DetectionConfig::resolve`] instead of
/// parse failures.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct DetectionConfig {
    pub gap_tolerance: Option<i64>,
    pub min_run: Option<i64>,
    pub extent: Option<RunExtent>,
}

impl DetectionConfig {
    pub fn resolve(&self) -> Result<DetectionOptions> {
        let gap = self.gap_tolerance.unwrap_or(DEFAULT_GAP_TOLERANCE as i64);
        let min_run = self.min_run.unwrap_or(DEFAULT_MIN_RUN as i64);
        let mut options = DetectionOptions::new(gap, min_run)?;
        if let Some(extent) = self.extent {
            options = options.with_extent(extent);
        }
        Ok(options)
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct GoodnessOutputConfig {
    /// Where to write the JSON report; printed to stdout when absent.
    pub report_json: Option<PathBuf>,
    /// Optional PNG dump of the union mask.
    pub mask_image: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> std::result::Result<GoodnessToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
