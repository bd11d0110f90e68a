// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Run configuration for the fixture generator.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{RasterwerkError, Result};
use crate::types::{FixtureFormat, FrameResolution};

/// Settings for one fixture generation run.
///
/// The defaults reproduce the historical hard-coded behaviour of the
/// generator: read `space_invaders.png`, write `output.png`, threshold 80,
/// cabinet resolution. A note on the threshold: the commentary that shipped
/// with the original tool described "10 points of brightness", but the value
/// it actually compared against was 80. Downstream fixtures were produced
/// with 80, so 80 is the contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameConfig {
    /// Source image to binarize.
    pub input_path: PathBuf,
    /// Where the generated frame is written. Overwritten without confirmation.
    pub output_path: PathBuf,
    /// Brightness threshold on the 0-255 scale. A pixel is rendered white
    /// when any of its channels is at or above this value.
    pub threshold: u8,
    /// Target frame resolution.
    pub resolution: FrameResolution,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("space_invaders.png"),
            output_path: PathBuf::from("output.png"),
            threshold: 80,
            resolution: FrameResolution::Invaders,
        }
    }
}

impl FrameConfig {
    /// Load and validate a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that cannot produce a usable frame.
    ///
    /// Threshold 0 would classify every pixel "on" and emit an all-white
    /// frame no matter the input; 255 is still meaningful (only saturated
    /// channels survive).
    pub fn validate(&self) -> Result<()> {
        if self.threshold == 0 {
            return Err(RasterwerkError::Config(
                "threshold 0 marks every pixel white regardless of input".into(),
            ));
        }

        let (width, height) = self.resolution.dimensions();
        if width == 0 || height == 0 {
            return Err(RasterwerkError::Config(format!(
                "target resolution {}x{} has a zero dimension",
                width, height
            )));
        }

        let ext = self
            .output_path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");
        if FixtureFormat::from_extension(ext).is_none() {
            return Err(RasterwerkError::Config(format!(
                "unsupported output extension {:?} (expected png or bmp)",
                ext
            )));
        }

        Ok(())
    }
}
