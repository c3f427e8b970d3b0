//! Engine settings.
//!
//! Settings are plain JSON. Every field has a default, so a partial document
//! (or no document at all) yields a working configuration.

use crate::constants::MAX_UPLOAD_BYTES;
use crate::data::{ChartLimits, DataError, DataResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Tunable limits for uploads and chart projections
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Largest accepted upload, in bytes
    pub max_upload_bytes: u64,
    /// Caps on emitted chart points
    pub limits: ChartLimits,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            max_upload_bytes: MAX_UPLOAD_BYTES,
            limits: ChartLimits::default(),
        }
    }
}

impl EngineSettings {
    /// Parse settings from a JSON document
    pub fn from_json_str(json: &str) -> DataResult<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file, falling back to defaults if it does not exist
    pub fn load(path: &Path) -> DataResult<Self> {
        if !path.exists() {
            debug!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let settings = Self::from_json_str(&content)?;
        info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject values that would make every upload or chart empty
    pub fn validate(&self) -> DataResult<()> {
        if self.max_upload_bytes == 0 {
            return Err(DataError::InvalidSettings(
                "max_upload_bytes must be greater than zero".to_string(),
            ));
        }

        let caps = [
            ("pie_max_slices", self.limits.pie_max_slices),
            ("bar_max_groups", self.limits.bar_max_groups),
            ("sequence_max_points", self.limits.sequence_max_points),
        ];
        if let Some((name, _)) = caps.iter().find(|(_, value)| *value == 0) {
            return Err(DataError::InvalidSettings(format!(
                "{} must be greater than zero",
                name
            )));
        }

        Ok(())
    }
}
