// Copyright (c) 2025-2026 brdigetrlol. All rights reserved.
// SPDX-License-Identifier: LicenseRef-Icarus-Proprietary
// See LICENSE in the repository root for full license terms.

//! Stacked 3D trajectory geometry.
//!
//! `TrajectoryPlotBuilder` turns a dataset and a muscle selection into a
//! `SceneDescription`: one curve per selected muscle, laid out at a fixed
//! spacing along the offset axis, each with a closed outline whose baseline
//! sits on the zero-activation plane.
//!
//! Usage:
//! ```ignore
//! let builder = TrajectoryPlotBuilder::default();
//! let selection = Selection::new(["vasti_r", "soleus_r"])?;
//! let scene = builder.build(&dataset, &selection)?;
//! ```

use tracing::{debug, warn};

use crate::config::{AxisDirection, PlotConfig};
use crate::dataset::Dataset;
use crate::error::{ConfigError, PlotError};
use crate::palette::Palette;
use crate::scene::{AxisRange, AxisTick, RenderedSeries, SceneDescription};
use crate::selection::Selection;

/// Builds scene descriptions under a fixed `PlotConfig`.
#[derive(Debug, Clone)]
pub struct TrajectoryPlotBuilder {
    config: PlotConfig,
    palette: Palette,
}

impl Default for TrajectoryPlotBuilder {
    fn default() -> Self {
        Self {
            config: PlotConfig::default(),
            palette: Palette::tableau10(),
        }
    }
}

impl TrajectoryPlotBuilder {
    pub fn new(config: PlotConfig) -> Result<Self, ConfigError> {
        let palette = config.validate()?;
        Ok(Self { config, palette })
    }

    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    /// Build the scene for `selection`.
    ///
    /// Pure: the same inputs always give the same scene. Activations outside
    /// the configured range pass through unchanged.
    pub fn build(
        &self,
        dataset: &Dataset,
        selection: &Selection,
    ) -> Result<SceneDescription, PlotError> {
        if selection.is_empty() {
            return Err(PlotError::EmptySelection);
        }
        dataset.validate()?;
        let (step_min, step_max) = dataset.step_range().ok_or(PlotError::EmptyTrajectory)?;
        let indices = selection.resolve(&dataset.catalog)?;

        let spacing = self.config.series_spacing;
        let [z_min, z_max] = self.config.z_range;
        let mut out_of_range = 0usize;

        let series: Vec<RenderedSeries> = selection
            .names()
            .iter()
            .zip(&indices)
            .enumerate()
            .map(|(i, (name, &muscle_idx))| {
                let offset = i as f64 * spacing;
                let points: Vec<(f64, f64)> = dataset
                    .samples
                    .iter()
                    .map(|s| (s.step, s.activations[muscle_idx]))
                    .collect();
                out_of_range += points
                    .iter()
                    .filter(|(_, a)| !(z_min..=z_max).contains(a))
                    .count();

                RenderedSeries {
                    name: name.clone(),
                    catalog_index: muscle_idx,
                    offset,
                    color: self.palette.color(i),
                    polygon: fill_polygon(&points, offset),
                    points,
                }
            })
            .collect();

        if out_of_range > 0 {
            warn!(
                count = out_of_range,
                min = z_min,
                max = z_max,
                "activation values outside the plotted range were passed through"
            );
        }

        let n = series.len() as f64;
        let y_ticks = series
            .iter()
            .map(|s| AxisTick { position: s.offset, label: s.name.clone() })
            .collect();

        debug!(
            series = series.len(),
            steps = dataset.num_steps(),
            "built trajectory scene"
        );

        Ok(SceneDescription {
            title: self.config.title.clone(),
            x_label: self.config.x_label.clone(),
            y_label: self.config.y_label.clone(),
            z_label: self.config.z_label.clone(),
            x_range: AxisRange {
                min: step_min,
                max: step_max,
                direction: self.config.x_direction,
            },
            y_range: AxisRange {
                min: -spacing,
                max: (n - 1.0) * spacing + spacing,
                direction: AxisDirection::Ascending,
            },
            z_range: AxisRange::ascending(z_min, z_max),
            y_ticks,
            series,
            view: self.config.view,
            line_width: self.config.line_width,
            fill_alpha: self.config.fill_alpha,
        })
    }
}

/// Close a trajectory into a fill outline on the plane `y = offset`.
///
/// The first and last vertices drop to zero activation at the first and
/// last step, whatever the end values are. Empty input gives an empty
/// outline.
pub fn fill_polygon(points: &[(f64, f64)], offset: f64) -> Vec<[f64; 3]> {
    let (Some(&(first, _)), Some(&(last, _))) = (points.first(), points.last()) else {
        return Vec::new();
    };
    let mut verts = Vec::with_capacity(points.len() + 2);
    verts.push([first, offset, 0.0]);
    verts.extend(points.iter().map(|&(step, a)| [step, offset, a]));
    verts.push([last, offset, 0.0]);
    verts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{MuscleCatalog, TrajectorySample};

    fn dataset() -> Dataset {
        let catalog = MuscleCatalog::new(vec!["A".into(), "B".into(), "C".into()]).unwrap();
        Dataset::new(
            catalog,
            vec![
                TrajectorySample::new(0.0, vec![0.1, 0.0, 0.3]),
                TrajectorySample::new(1.0, vec![0.5, 0.2, 0.6]),
                TrajectorySample::new(2.0, vec![0.9, 0.4, 0.2]),
            ],
        )
    }

    #[test]
    fn test_single_series_geometry() {
        let scene = TrajectoryPlotBuilder::default()
            .build(&dataset(), &Selection::new(["A"]).unwrap())
            .unwrap();
        assert_eq!(scene.series.len(), 1);
        let s = &scene.series[0];
        assert_eq!(s.offset, 0.0);
        assert_eq!(s.points, vec![(0.0, 0.1), (1.0, 0.5), (2.0, 0.9)]);
        assert_eq!(
            s.polygon,
            vec![
                [0.0, 0.0, 0.0],
                [0.0, 0.0, 0.1],
                [1.0, 0.0, 0.5],
                [2.0, 0.0, 0.9],
                [2.0, 0.0, 0.0],
            ]
        );
    }

    #[test]
    fn test_offsets_follow_selection_not_catalog() {
        let scene = TrajectoryPlotBuilder::default()
            .build(&dataset(), &Selection::new(["C", "A"]).unwrap())
            .unwrap();
        assert_eq!(scene.series[0].name, "C");
        assert_eq!(scene.series[0].catalog_index, 2);
        assert_eq!(scene.series[0].offset, 0.0);
        assert!((scene.series[1].offset - 0.2).abs() < 1e-12);
        assert_eq!(scene.y_ticks[1].label, "A");
    }

    #[test]
    fn test_axis_bounds() {
        let scene = TrajectoryPlotBuilder::default()
            .build(&dataset(), &Selection::new(["A", "B", "C"]).unwrap())
            .unwrap();
        assert_eq!((scene.x_range.min, scene.x_range.max), (0.0, 2.0));
        assert_eq!(scene.x_range.direction, AxisDirection::Descending);
        assert!((scene.y_range.min + 0.2).abs() < 1e-12);
        assert!((scene.y_range.max - 0.6).abs() < 1e-12);
        assert_eq!((scene.z_range.min, scene.z_range.max), (0.0, 1.0));
    }

    #[test]
    fn test_x_direction_is_configurable() {
        let builder =
            TrajectoryPlotBuilder::new(PlotConfig::default().with_x_direction(AxisDirection::Ascending))
                .unwrap();
        let scene = builder.build(&dataset(), &Selection::new(["B"]).unwrap()).unwrap();
        assert_eq!(scene.x_range.direction, AxisDirection::Ascending);
    }

    #[test]
    fn test_out_of_range_passes_through() {
        let mut ds = dataset();
        ds.samples[1].activations[0] = 1.7;
        ds.samples[2].activations[0] = -0.4;
        let scene = TrajectoryPlotBuilder::default()
            .build(&ds, &Selection::new(["A"]).unwrap())
            .unwrap();
        assert_eq!(scene.series[0].points[1].1, 1.7);
        assert_eq!(scene.series[0].points[2].1, -0.4);
        assert_eq!(scene.z_range.max, 1.0);
    }

    #[test]
    fn test_empty_dataset() {
        let ds = Dataset::new(MuscleCatalog::new(vec!["A".into()]).unwrap(), Vec::new());
        let err = TrajectoryPlotBuilder::default()
            .build(&ds, &Selection::new(["A"]).unwrap())
            .unwrap_err();
        assert_eq!(err, PlotError::EmptyTrajectory);
    }

    #[test]
    fn test_colors_by_selection_position() {
        let builder = TrajectoryPlotBuilder::default();
        let ab = builder.build(&dataset(), &Selection::new(["A", "B"]).unwrap()).unwrap();
        let ba = builder.build(&dataset(), &Selection::new(["B", "A"]).unwrap()).unwrap();
        assert_eq!(ab.series[0].color, ba.series[0].color);
        assert_ne!(ab.series[0].color, ab.series[1].color);
    }

    #[test]
    fn test_fill_polygon_empty() {
        assert!(fill_polygon(&[], 0.4).is_empty());
    }
}
