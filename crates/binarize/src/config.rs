//! JSON run configuration.

use crate::BinarizeError;
use binarize_core::{Parameters, TrSinghParams};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// A single binarization job.
///
/// ```json
/// { "input_path": "page.png", "output_path": "page_bin.png", "params": { "window": 31, "k": 0.3 } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BinarizeConfig {
    #[serde(default)]
    pub input_path: Option<String>,
    #[serde(default)]
    pub output_path: Option<String>,
    #[serde(default)]
    pub params: Parameters,
}

impl BinarizeConfig {
    /// Load a JSON config from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, BinarizeError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), BinarizeError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Resolve the output path, defaulting to `binarized.png`.
    pub fn output_path(&self) -> PathBuf {
        self.output_path
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("binarized.png"))
    }

    /// Effective thresholding options after defaults are applied.
    pub fn trsingh_params(&self) -> TrSinghParams {
        TrSinghParams::from_parameters(&self.params)
    }
}
