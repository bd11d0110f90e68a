// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Frame processor — decode, RGB conversion, exact resampling, and encoding
// for fixture frames. Operates on in-memory images using the `image` crate.

use image::{DynamicImage, ImageFormat};
use rasterwerk_core::error::{RasterwerkError, Result};
use rasterwerk_core::types::FrameResolution;
use tracing::{debug, info, instrument};

/// Image pipeline stage operating on a single in-memory image.
///
/// All operations are non-destructive: each method consumes `self` and returns
/// a new `FrameProcessor` wrapping the transformed image, enabling method
/// chaining. The source file is never mutated.
///
/// ```ignore
/// let frame = FrameProcessor::open("space_invaders.png")?
///     .to_rgb()
///     .resample(FrameResolution::Invaders)
///     .into_dynamic();
/// ```
#[derive(Debug)]
pub struct FrameProcessor {
    /// The current working image.
    image: DynamicImage,
}

impl FrameProcessor {
    // -- Construction ---------------------------------------------------------

    /// Load an image from a file path.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let img = image::open(path.as_ref()).map_err(|err| {
            RasterwerkError::Decode(format!(
                "failed to open {}: {}",
                path.as_ref().display(),
                err
            ))
        })?;
        info!(
            width = img.width(),
            height = img.height(),
            "Source image loaded"
        );
        Ok(Self { image: img })
    }

    /// Create a processor from raw encoded bytes (PNG, JPEG, etc.).
    #[instrument(skip(data), fields(data_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(data).map_err(|err| {
            RasterwerkError::Decode(format!("failed to decode image: {}", err))
        })?;
        debug!(
            width = img.width(),
            height = img.height(),
            "Image decoded from bytes"
        );
        Ok(Self { image: img })
    }

    /// Wrap an already-decoded `DynamicImage`.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self { image }
    }

    // -- Accessors ------------------------------------------------------------

    /// Current image width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Current image height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Borrow the underlying `DynamicImage`.
    pub fn as_dynamic(&self) -> &DynamicImage {
        &self.image
    }

    /// Consume the processor and return the underlying `DynamicImage`.
    pub fn into_dynamic(self) -> DynamicImage {
        self.image
    }

    // -- Transformations (consume self, return new Self) -----------------------

    /// Force the image into three-channel RGB, discarding any alpha channel.
    ///
    /// Alpha is dropped, not composited: a fully transparent white pixel
    /// stays white.
    #[instrument(skip(self))]
    pub fn to_rgb(self) -> Self {
        debug!("Converting to RGB, dropping alpha");
        Self {
            image: DynamicImage::ImageRgb8(self.image.to_rgb8()),
        }
    }

    /// Resample the image to exactly the target resolution, ignoring aspect
    /// ratio. Uses Lanczos3 filtering.
    #[instrument(skip(self), fields(resolution = ?resolution))]
    pub fn resample(self, resolution: FrameResolution) -> Self {
        let (width, height) = resolution.dimensions();
        info!(
            from_w = self.image.width(),
            from_h = self.image.height(),
            width,
            height,
            "Resampling frame"
        );
        let resized =
            self.image
                .resize_exact(width, height, image::imageops::FilterType::Lanczos3);
        Self { image: resized }
    }

    // -- Output ---------------------------------------------------------------

    /// Encode the current image as PNG bytes.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        let mut cursor = std::io::Cursor::new(&mut buffer);
        self.image.write_to(&mut cursor, ImageFormat::Png).map_err(|err| {
            RasterwerkError::Encode(format!("PNG encoding failed: {}", err))
        })?;
        Ok(buffer)
    }

    /// Write the image to a file, overwriting any existing file at that path.
    /// The format is inferred from the file extension.
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        self.image.save(path.as_ref()).map_err(|err| {
            RasterwerkError::Encode(format!(
                "failed to save frame to {}: {}",
                path.as_ref().display(),
                err
            ))
        })
    }
}
