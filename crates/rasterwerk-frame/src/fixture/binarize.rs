// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Frame binarization — per-pixel brightness thresholding to pure black and
// white.

use image::{DynamicImage, Rgb};
use imageproc::map::map_colors;
use rasterwerk_core::types::BinaryPixel;
use tracing::{debug, info, instrument};

/// Binarizes a frame to strictly black-and-white pixels.
///
/// A pixel is "on" (rendered white) when at least one of its channels is at
/// or above the brightness threshold; otherwise it is "off" (rendered black).
/// The output carries no intermediate values and no alpha.
pub struct FrameBinarizer {
    /// The working image.
    image: DynamicImage,
    /// Brightness threshold on the 0-255 scale.
    threshold: u8,
}

impl FrameBinarizer {
    /// Wrap an already-decoded image with the threshold to apply.
    pub fn from_dynamic(image: DynamicImage, threshold: u8) -> Self {
        Self { image, threshold }
    }

    /// Borrow the current working image.
    pub fn as_dynamic(&self) -> &DynamicImage {
        &self.image
    }

    /// Consume the binarizer and return the underlying image.
    pub fn into_dynamic(self) -> DynamicImage {
        self.image
    }

    /// Apply the threshold to every pixel.
    ///
    /// The image is forced to RGB first, so any alpha channel is discarded
    /// before classification. The result is always `Rgb8`.
    #[instrument(skip(self), fields(threshold = self.threshold))]
    pub fn binarize(self) -> Self {
        info!(
            threshold = self.threshold,
            width = self.image.width(),
            height = self.image.height(),
            "Applying brightness threshold"
        );

        let rgb = self.image.to_rgb8();
        let threshold = self.threshold;
        let output = map_colors(&rgb, |pixel| Rgb(classify(pixel, threshold).channels()));

        debug!("Binarization complete");
        Self {
            image: DynamicImage::ImageRgb8(output),
            threshold,
        }
    }
}

/// Classify a single pixel against the brightness threshold.
///
/// "On" means the maximum channel value across (R, G, B) is at or above the
/// threshold. At the default threshold of 80, (79, 0, 0) is off and
/// (80, 0, 0) is on.
pub fn classify(pixel: Rgb<u8>, threshold: u8) -> BinaryPixel {
    let Rgb([r, g, b]) = pixel;
    if r.max(g).max(b) >= threshold {
        BinaryPixel::On
    } else {
        BinaryPixel::Off
    }
}
