// Copyright (c) 2025-2026 brdigetrlol. All rights reserved.
// SPDX-License-Identifier: LicenseRef-Icarus-Proprietary
// See LICENSE in the repository root for full license terms.

//! Error types for dataset loading, configuration and scene building.

use thiserror::Error;

/// Failures of a single plot build. None of them yields partial output.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlotError {
    /// No muscles were chosen.
    #[error("no muscles selected; choose at least one muscle to display")]
    EmptySelection,
    /// A selected name is absent from the muscle catalog.
    #[error("unknown muscle `{name}`")]
    UnknownMuscle { name: String },
    /// A sample's activation list does not line up with the catalog.
    #[error("sample {sample} (step {step}) has {actual} activation values, catalog has {expected} muscles")]
    DataShape {
        sample: usize,
        step: f64,
        expected: usize,
        actual: usize,
    },
    /// The dataset has no samples, so the step axis has no bounds.
    #[error("dataset contains no trajectory samples")]
    EmptyTrajectory,
}

/// Failures while reading a dataset file.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed dataset JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("muscle `{name}` appears more than once in muscle_names")]
    DuplicateMuscle { name: String },
    #[error(transparent)]
    Shape(#[from] PlotError),
}

/// Rejected plot configuration values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("series spacing must be positive and finite, got {0}")]
    InvalidSpacing(f64),
    #[error("activation range [{min}, {max}] is empty or inverted")]
    InvalidActivationRange { min: f64, max: f64 },
    #[error("fill alpha must lie in [0, 1], got {0}")]
    InvalidAlpha(f32),
    #[error("line width must be positive, got {0}")]
    InvalidLineWidth(f32),
    #[error("palette is empty")]
    EmptyPalette,
    #[error("invalid palette color `{0}`, expected #RRGGBB")]
    InvalidColor(String),
}
