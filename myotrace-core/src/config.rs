// Copyright (c) 2025-2026 brdigetrlol. All rights reserved.
// SPDX-License-Identifier: LicenseRef-Icarus-Proprietary
// See LICENSE in the repository root for full license terms.

//! Plot configuration.
//!
//! Everything that is a display convention rather than a property of the
//! data lives here: series spacing, step axis direction, activation range,
//! palette, labels and camera angle.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::palette::{Palette, TABLEAU_10};

/// Direction in which an axis increases on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisDirection {
    /// Smallest value at the axis origin.
    Ascending,
    /// Axis inverted: larger values render toward the viewer's left.
    Descending,
}

impl AxisDirection {
    pub fn is_inverted(&self) -> bool {
        matches!(self, Self::Descending)
    }
}

/// Camera elevation and azimuth in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewAngle {
    pub elevation: f64,
    pub azimuth: f64,
}

impl Default for ViewAngle {
    fn default() -> Self {
        Self { elevation: 25.0, azimuth: 115.0 }
    }
}

/// Configuration for `TrajectoryPlotBuilder`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Distance between adjacent series on the offset axis
    pub series_spacing: f64,
    /// Screen direction of the step axis
    pub x_direction: AxisDirection,
    /// Activation axis bounds `[min, max]`; values outside are not clamped
    pub z_range: [f64; 2],
    /// Series colors as `#RRGGBB`, assigned by selection position
    pub palette: Vec<String>,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub z_label: String,
    pub view: ViewAngle,
    pub line_width: f32,
    /// Opacity of the area fill under each curve
    pub fill_alpha: f32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            series_spacing: 0.2,
            x_direction: AxisDirection::Descending,
            z_range: [0.0, 1.0],
            palette: TABLEAU_10.iter().map(|c| c.to_string()).collect(),
            title: "Muscle Activation Over Time".to_string(),
            x_label: "Steps".to_string(),
            y_label: "Muscles".to_string(),
            z_label: "Activation".to_string(),
            view: ViewAngle::default(),
            line_width: 2.0,
            fill_alpha: 0.3,
        }
    }
}

impl PlotConfig {
    pub fn with_x_direction(mut self, direction: AxisDirection) -> Self {
        self.x_direction = direction;
        self
    }

    /// Check ranges and parse the palette.
    pub fn validate(&self) -> Result<Palette, ConfigError> {
        if !(self.series_spacing.is_finite() && self.series_spacing > 0.0) {
            return Err(ConfigError::InvalidSpacing(self.series_spacing));
        }
        let [min, max] = self.z_range;
        if !(min.is_finite() && max.is_finite() && min < max) {
            return Err(ConfigError::InvalidActivationRange { min, max });
        }
        if !(0.0..=1.0).contains(&self.fill_alpha) {
            return Err(ConfigError::InvalidAlpha(self.fill_alpha));
        }
        if !(self.line_width > 0.0) {
            return Err(ConfigError::InvalidLineWidth(self.line_width));
        }
        Palette::from_hex(&self.palette)
    }
}
