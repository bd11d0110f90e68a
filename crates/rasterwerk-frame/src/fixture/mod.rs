// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Fixture module — brightness thresholding and the frame generation pipeline.

pub mod binarize;
pub mod generator;

pub use binarize::FrameBinarizer;
pub use generator::FixtureGenerator;
