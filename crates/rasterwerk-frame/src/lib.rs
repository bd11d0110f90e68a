// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// rasterwerk-frame — Image pipeline for the Rasterwerk fixture generator.
//
// Provides image loading and resampling (decode, RGB conversion, exact
// resize), brightness thresholding to strictly black-and-white pixels, and
// the fixture generation pipeline that ties the stages together.

pub mod fixture;
pub mod image;

// Re-export the primary structs so callers can use `rasterwerk_frame::FixtureGenerator` etc.
pub use self::fixture::binarize::FrameBinarizer;
pub use self::fixture::generator::FixtureGenerator;
pub use self::image::processor::FrameProcessor;
