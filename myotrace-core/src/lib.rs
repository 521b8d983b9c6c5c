// Copyright (c) 2025-2026 brdigetrlol. All rights reserved.
// SPDX-License-Identifier: LicenseRef-Icarus-Proprietary
// See LICENSE in the repository root for full license terms.

pub mod error;
pub mod dataset;
pub mod selection;
pub mod palette;
pub mod config;
pub mod scene;
pub mod builder;
pub mod stats;
pub mod loader;

pub use error::{ConfigError, DatasetError, PlotError};
pub use dataset::{Dataset, MuscleCatalog, TrajectorySample};
pub use selection::{Selection, DEFAULT_SELECTION_SIZE};
pub use palette::Palette;
pub use config::{AxisDirection, PlotConfig, ViewAngle};
pub use scene::{AxisRange, AxisTick, RenderedSeries, SceneDescription};
pub use builder::{fill_polygon, TrajectoryPlotBuilder};
pub use stats::DatasetSummary;
pub use loader::{dataset_from_reader, dataset_from_str, load_dataset};
