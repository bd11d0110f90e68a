// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Rasterwerk.

use thiserror::Error;

/// Top-level error type for all Rasterwerk operations.
///
/// There is no recovery anywhere in the pipeline: the generator is a one-shot
/// developer utility and every failure aborts the run.
#[derive(Debug, Error)]
pub enum RasterwerkError {
    // -- Pipeline errors --
    #[error("image decode failed: {0}")]
    Decode(String),

    #[error("image encode failed: {0}")]
    Encode(String),

    // -- Configuration --
    #[error("invalid configuration: {0}")]
    Config(String),

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, RasterwerkError>;
