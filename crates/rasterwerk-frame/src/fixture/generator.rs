// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Fixture generation pipeline — decode, RGB conversion, resample, threshold,
// save. A single linear pass; every failure aborts the run.

use image::DynamicImage;
use rasterwerk_core::config::FrameConfig;
use rasterwerk_core::error::Result;
use tracing::{info, instrument};

use crate::fixture::binarize::FrameBinarizer;
use crate::image::processor::FrameProcessor;

/// Generates black-and-white fixture frames at the configured resolution.
///
/// Each stage owns its buffer exclusively and hands it to the next stage by
/// value; nothing is shared and nothing survives the run but the output file.
pub struct FixtureGenerator {
    config: FrameConfig,
}

impl FixtureGenerator {
    /// Create a generator, rejecting configurations that cannot produce a
    /// usable frame.
    pub fn new(config: FrameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The validated configuration this generator runs with.
    pub fn config(&self) -> &FrameConfig {
        &self.config
    }

    /// Run the pipeline and return the generated frame in memory.
    ///
    /// 1. Decode the source image and drop any alpha channel
    /// 2. Resample to the target resolution
    /// 3. Threshold every pixel to pure black or pure white
    ///
    /// Deterministic for a given input file, threshold, and resolution. The
    /// source file is never mutated.
    #[instrument(skip(self), fields(input = %self.config.input_path.display()))]
    pub fn generate(&self) -> Result<DynamicImage> {
        let resampled = FrameProcessor::open(&self.config.input_path)?
            .to_rgb()
            .resample(self.config.resolution)
            .into_dynamic();

        let frame = FrameBinarizer::from_dynamic(resampled, self.config.threshold)
            .binarize()
            .into_dynamic();

        Ok(frame)
    }

    /// Run the pipeline and write the frame to the configured output path,
    /// overwriting any existing file there.
    #[instrument(skip(self), fields(output = %self.config.output_path.display()))]
    pub fn run(&self) -> Result<()> {
        let frame = self.generate()?;
        FrameProcessor::from_dynamic(frame).save(&self.config.output_path)?;
        info!(
            output = %self.config.output_path.display(),
            "Fixture frame written"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};
    use rasterwerk_core::error::RasterwerkError;
    use rasterwerk_core::types::FrameResolution;
    use std::path::Path;

    fn write_test_image(path: &Path, image: DynamicImage) {
        FrameProcessor::from_dynamic(image).save(path).unwrap();
    }

    fn config_for(dir: &Path, input: &str, output: &str) -> FrameConfig {
        FrameConfig {
            input_path: dir.join(input),
            output_path: dir.join(output),
            ..FrameConfig::default()
        }
    }

    #[test]
    fn invalid_config_rejected_at_construction() {
        let config = FrameConfig {
            threshold: 0,
            ..FrameConfig::default()
        };
        assert!(matches!(
            FixtureGenerator::new(config),
            Err(RasterwerkError::Config(_))
        ));
    }

    #[test]
    fn missing_input_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let generator = FixtureGenerator::new(config_for(dir.path(), "absent.png", "out.png"))
            .unwrap();
        assert!(matches!(
            generator.generate(),
            Err(RasterwerkError::Decode(_))
        ));
    }

    #[test]
    fn generate_produces_cabinet_resolution_binary_frame() {
        let dir = tempfile::tempdir().unwrap();
        let input = DynamicImage::ImageRgb8(RgbImage::from_fn(100, 100, |x, y| {
            Rgb([(x * 2) as u8, (y * 2) as u8, 128])
        }));
        write_test_image(&dir.path().join("in.png"), input);

        let generator =
            FixtureGenerator::new(config_for(dir.path(), "in.png", "out.png")).unwrap();
        let frame = generator.generate().unwrap();

        assert_eq!((frame.width(), frame.height()), (244, 256));
        for pixel in frame.to_rgb8().pixels() {
            assert!(*pixel == Rgb([0, 0, 0]) || *pixel == Rgb([255, 255, 255]));
        }
    }

    #[test]
    fn all_black_input_yields_all_black_frame() {
        let dir = tempfile::tempdir().unwrap();
        let input = DynamicImage::ImageRgb8(RgbImage::from_pixel(100, 100, Rgb([0, 0, 0])));
        write_test_image(&dir.path().join("in.png"), input);

        let generator =
            FixtureGenerator::new(config_for(dir.path(), "in.png", "out.png")).unwrap();
        let frame = generator.generate().unwrap();

        assert_eq!((frame.width(), frame.height()), (244, 256));
        for pixel in frame.to_rgb8().pixels() {
            assert_eq!(*pixel, Rgb([0, 0, 0]));
        }
    }

    #[test]
    fn all_white_input_yields_all_white_frame() {
        let dir = tempfile::tempdir().unwrap();
        let input = DynamicImage::ImageRgb8(RgbImage::from_pixel(100, 100, Rgb([255, 255, 255])));
        write_test_image(&dir.path().join("in.png"), input);

        let generator =
            FixtureGenerator::new(config_for(dir.path(), "in.png", "out.png")).unwrap();
        let frame = generator.generate().unwrap();

        for pixel in frame.to_rgb8().pixels() {
            assert_eq!(*pixel, Rgb([255, 255, 255]));
        }
    }

    #[test]
    fn rgba_input_loses_transparency() {
        let dir = tempfile::tempdir().unwrap();
        let input =
            DynamicImage::ImageRgba8(RgbaImage::from_pixel(50, 50, Rgba([200, 200, 200, 0])));
        write_test_image(&dir.path().join("in.png"), input);

        let generator =
            FixtureGenerator::new(config_for(dir.path(), "in.png", "out.png")).unwrap();
        let frame = generator.generate().unwrap();

        // Alpha discarded before thresholding: bright-but-transparent is white.
        assert_eq!(frame.color(), image::ColorType::Rgb8);
        for pixel in frame.to_rgb8().pixels() {
            assert_eq!(*pixel, Rgb([255, 255, 255]));
        }
    }

    #[test]
    fn run_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = DynamicImage::ImageRgb8(RgbImage::from_pixel(20, 20, Rgb([200, 10, 10])));
        write_test_image(&dir.path().join("in.png"), input);

        let config = config_for(dir.path(), "in.png", "out.png");
        let output_path = config.output_path.clone();
        FixtureGenerator::new(config).unwrap().run().unwrap();

        let written = FrameProcessor::open(&output_path).unwrap();
        assert_eq!((written.width(), written.height()), (244, 256));
    }

    #[test]
    fn rerun_on_own_output_is_identical() {
        // An already 244x256, strictly binary frame passes through unchanged:
        // black stays below any positive threshold, white stays above it.
        let dir = tempfile::tempdir().unwrap();
        let input = DynamicImage::ImageRgb8(RgbImage::from_pixel(100, 60, Rgb([255, 255, 255])));
        write_test_image(&dir.path().join("in.png"), input);

        let first = FixtureGenerator::new(config_for(dir.path(), "in.png", "out.png"))
            .unwrap();
        first.run().unwrap();

        let second = FixtureGenerator::new(config_for(dir.path(), "out.png", "out2.png"))
            .unwrap();
        second.run().unwrap();

        let a = FrameProcessor::open(dir.path().join("out.png"))
            .unwrap()
            .into_dynamic()
            .to_rgb8();
        let b = FrameProcessor::open(dir.path().join("out2.png"))
            .unwrap()
            .into_dynamic()
            .to_rgb8();
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn custom_resolution_respected() {
        let dir = tempfile::tempdir().unwrap();
        let input = DynamicImage::ImageRgb8(RgbImage::from_pixel(10, 10, Rgb([90, 0, 0])));
        write_test_image(&dir.path().join("in.png"), input);

        let config = FrameConfig {
            resolution: FrameResolution::Custom {
                width: 61,
                height: 33,
            },
            ..config_for(dir.path(), "in.png", "out.png")
        };
        let frame = FixtureGenerator::new(config).unwrap().generate().unwrap();
        assert_eq!((frame.width(), frame.height()), (61, 33));
    }
}
