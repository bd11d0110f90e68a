// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Rasterwerk fixture generator.

use serde::{Deserialize, Serialize};

/// Target resolutions for generated fixture frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameResolution {
    /// Native resolution of the original Space Invaders cabinet (244x256).
    Invaders,
    Custom { width: u32, height: u32 },
}

impl FrameResolution {
    /// Dimensions in pixels (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Self::Invaders => (244, 256),
            Self::Custom { width, height } => (*width, *height),
        }
    }
}

impl Default for FrameResolution {
    fn default() -> Self {
        Self::Invaders
    }
}

/// Supported output encodings for fixture frames. Both are lossless;
/// a binarized frame is stored bit-for-bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FixtureFormat {
    Png,
    Bmp,
}

impl FixtureFormat {
    /// Infer the format from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "bmp" => Some(Self::Bmp),
            _ => None,
        }
    }
}

/// Classification of a pixel after thresholding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryPixel {
    /// At least one channel reached the brightness threshold — rendered white.
    On,
    /// Every channel below the threshold — rendered black.
    Off,
}

impl BinaryPixel {
    /// The RGB channel values this classification renders to.
    pub fn channels(self) -> [u8; 3] {
        match self {
            Self::On => [255, 255, 255],
            Self::Off => [0, 0, 0],
        }
    }
}
