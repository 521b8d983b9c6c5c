// Copyright (c) 2025-2026 brdigetrlol. All rights reserved.
// SPDX-License-Identifier: LicenseRef-Icarus-Proprietary
// See LICENSE in the repository root for full license terms.

//! End-to-end properties of the trajectory scene builder.
//!
//! Each test loads a dataset through the JSON loader, builds scenes for one
//! or more selections and checks the geometry contract:
//! 1. One series per selected muscle, in selection order, at 0.2 spacing
//! 2. Fill outlines have `samples + 2` vertices
//! 3. Validation failures surface before any geometry is produced
//! 4. Builds are deterministic and selection order never alters point data
//!
//! Run with: `cargo test -p myotrace-core --test scene_properties`

use myotrace_core::{
    dataset_from_str, Dataset, MuscleCatalog, PlotError, Selection, TrajectoryPlotBuilder,
    TrajectorySample,
};

const GAIT_JSON: &str = r#"{
    "muscle_names": ["glut_max_r", "hamstrings_r", "vasti_r", "gastroc_r", "soleus_r", "tib_ant_r"],
    "trajectories": [
        { "step": 0, "muscle_activation": [0.10, 0.30, 0.05, 0.02, 0.04, 0.60] },
        { "step": 1, "muscle_activation": [0.35, 0.42, 0.22, 0.08, 0.10, 0.41] },
        { "step": 2, "muscle_activation": [0.52, 0.38, 0.47, 0.19, 0.25, 0.18] },
        { "step": 3, "muscle_activation": [0.41, 0.20, 0.55, 0.44, 0.52, 0.09] },
        { "step": 4, "muscle_activation": [0.18, 0.11, 0.31, 0.71, 0.80, 0.12] },
        { "step": 5, "muscle_activation": [0.07, 0.09, 0.12, 0.36, 0.47, 0.33] }
    ]
}"#;

fn gait() -> Dataset {
    dataset_from_str(GAIT_JSON).unwrap()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn series_follow_selection_order_and_spacing() {
    let names = ["soleus_r", "glut_max_r", "tib_ant_r", "vasti_r"];
    let scene = TrajectoryPlotBuilder::default()
        .build(&gait(), &Selection::new(names).unwrap())
        .unwrap();

    assert_eq!(scene.series_names(), names);
    for (i, s) in scene.series.iter().enumerate() {
        assert!(approx(s.offset, i as f64 * 0.2), "offset of {} was {}", s.name, s.offset);
        assert!(approx(scene.y_ticks[i].position, s.offset));
        assert_eq!(scene.y_ticks[i].label, s.name);
    }
    assert!(approx(scene.y_range.min, -0.2));
    assert!(approx(scene.y_range.max, 0.8));
}

#[test]
fn polygon_has_two_extra_vertices() {
    let ds = gait();
    let scene = TrajectoryPlotBuilder::default()
        .build(&ds, &Selection::new(["hamstrings_r", "gastroc_r"]).unwrap())
        .unwrap();
    for s in &scene.series {
        assert_eq!(s.polygon.len(), ds.samples.len() + 2);
        let first = s.polygon.first().unwrap();
        let last = s.polygon.last().unwrap();
        assert_eq!(*first, [0.0, s.offset, 0.0]);
        assert_eq!(*last, [5.0, s.offset, 0.0]);
        assert!(s.polygon.iter().all(|v| v[1] == s.offset));
    }
}

#[test]
fn worked_example() {
    let catalog = MuscleCatalog::new(vec!["A".into(), "B".into()]).unwrap();
    let ds = Dataset::new(
        catalog,
        vec![
            TrajectorySample::new(0.0, vec![0.1, 0.7]),
            TrajectorySample::new(1.0, vec![0.5, 0.7]),
            TrajectorySample::new(2.0, vec![0.9, 0.7]),
        ],
    );
    let scene = TrajectoryPlotBuilder::default()
        .build(&ds, &Selection::new(["A"]).unwrap())
        .unwrap();

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
fn unknown_muscle_fails() {
    let catalog = MuscleCatalog::new(vec!["A".into(), "B".into()]).unwrap();
    let ds = Dataset::new(catalog, vec![TrajectorySample::new(0.0, vec![0.0, 0.0])]);
    let err = TrajectoryPlotBuilder::default()
        .build(&ds, &Selection::new(["A", "Z"]).unwrap())
        .unwrap_err();
    assert_eq!(err, PlotError::UnknownMuscle { name: "Z".into() });
}

#[test]
fn empty_selection_fails_before_building() {
    assert_eq!(
        Selection::new(Vec::<&str>::new()).unwrap_err(),
        PlotError::EmptySelection
    );
}

#[test]
fn shape_mismatch_fails_build() {
    let mut ds = gait();
    ds.samples[3].activations.pop();
    let err = TrajectoryPlotBuilder::default()
        .build(&ds, &Selection::new(["glut_max_r"]).unwrap())
        .unwrap_err();
    assert_eq!(
        err,
        PlotError::DataShape { sample: 3, step: 3.0, expected: 6, actual: 5 }
    );
}

#[test]
fn build_is_idempotent() {
    let ds = gait();
    let sel = Selection::new(["vasti_r", "gastroc_r", "tib_ant_r"]).unwrap();
    let builder = TrajectoryPlotBuilder::default();
    assert_eq!(builder.build(&ds, &sel).unwrap(), builder.build(&ds, &sel).unwrap());
}

#[test]
fn reordering_changes_layout_only() {
    let ds = gait();
    let builder = TrajectoryPlotBuilder::default();
    let forward = builder
        .build(&ds, &Selection::new(["glut_max_r", "soleus_r", "vasti_r"]).unwrap())
        .unwrap();
    let reversed = builder
        .build(&ds, &Selection::new(["vasti_r", "soleus_r", "glut_max_r"]).unwrap())
        .unwrap();

    for s in &forward.series {
        let twin = reversed.series.iter().find(|r| r.name == s.name).unwrap();
        assert_eq!(s.points, twin.points);
        assert_eq!(s.catalog_index, twin.catalog_index);
        let strip = |poly: &[[f64; 3]]| poly.iter().map(|v| (v[0], v[2])).collect::<Vec<_>>();
        assert_eq!(strip(&s.polygon), strip(&twin.polygon));
    }
    assert_eq!(forward.x_range, reversed.x_range);
    assert_eq!(forward.y_range, reversed.y_range);
    assert_eq!(forward.y_ticks[0].label, "glut_max_r");
    assert_eq!(reversed.y_ticks[0].label, "vasti_r");
}
