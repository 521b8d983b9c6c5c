// Copyright (c) 2025-2026 brdigetrlol. All rights reserved.
// SPDX-License-Identifier: LicenseRef-Icarus-Proprietary
// See LICENSE in the repository root for full license terms.

//! Renderer-agnostic scene description.
//!
//! Coordinates follow the plot's data axes: x = step, y = series offset,
//! z = activation. Adapters in `myotrace-viz` map these onto their own
//! world space.

use serde::{Deserialize, Serialize};

use crate::config::{AxisDirection, ViewAngle};

/// One selected muscle's curve and fill outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedSeries {
    pub name: String,
    /// Position of the muscle in the dataset catalog
    pub catalog_index: usize,
    /// Offset-axis position: selection index × spacing
    pub offset: f64,
    pub color: (f32, f32, f32),
    /// `(step, activation)` in dataset order
    pub points: Vec<(f64, f64)>,
    /// Closed `[step, offset, activation]` outline with zero-activation ends
    pub polygon: Vec<[f64; 3]>,
}

/// Bounds and on-screen direction of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
    pub direction: AxisDirection,
}

impl AxisRange {
    pub fn ascending(min: f64, max: f64) -> Self {
        Self { min, max, direction: AxisDirection::Ascending }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Map `v` to [0, 1] along the screen direction of the axis.
    ///
    /// A zero-width range maps everything to 0.5.
    pub fn normalize(&self, v: f64) -> f64 {
        let span = self.span();
        if span.abs() < f64::EPSILON {
            return 0.5;
        }
        let t = (v - self.min) / span;
        if self.direction.is_inverted() { 1.0 - t } else { t }
    }
}

/// A labeled tick on an axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub position: f64,
    pub label: String,
}

/// Complete plot output consumed by a rendering adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub z_label: String,
    pub x_range: AxisRange,
    pub y_range: AxisRange,
    pub z_range: AxisRange,
    /// One tick per series on the offset axis, labeled with the muscle name
    pub y_ticks: Vec<AxisTick>,
    pub series: Vec<RenderedSeries>,
    pub view: ViewAngle,
    pub line_width: f32,
    pub fill_alpha: f32,
}

impl SceneDescription {
    pub fn series_names(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_ascending() {
        let r = AxisRange::ascending(0.0, 10.0);
        assert!((r.normalize(0.0) - 0.0).abs() < 1e-12);
        assert!((r.normalize(2.5) - 0.25).abs() < 1e-12);
        assert!((r.normalize(10.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_inverted() {
        let r = AxisRange { min: 0.0, max: 10.0, direction: AxisDirection::Descending };
        assert!((r.normalize(0.0) - 1.0).abs() < 1e-12);
        assert!((r.normalize(10.0) - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_degenerate_range() {
        let r = AxisRange::ascending(3.0, 3.0);
        assert_eq!(r.normalize(3.0), 0.5);
    }
}
