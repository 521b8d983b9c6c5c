// Copyright (c) 2025-2026 brdigetrlol. All rights reserved.
// SPDX-License-Identifier: LicenseRef-Icarus-Proprietary
// See LICENSE in the repository root for full license terms.

//! Muscle activation dataset model.
//!
//! A `Dataset` pairs a `MuscleCatalog` (ordered, unique muscle names) with
//! the recorded `TrajectorySample`s. A muscle's position in the catalog is
//! the index of its value inside every sample's activation list.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{DatasetError, PlotError};

/// Ordered list of muscle names with a name → index map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MuscleCatalog {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl MuscleCatalog {
    /// Build a catalog. Fails on the first repeated name.
    pub fn new(names: Vec<String>) -> Result<Self, DatasetError> {
        let mut index = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            if index.insert(name.clone(), i).is_some() {
                return Err(DatasetError::DuplicateMuscle { name: name.clone() });
            }
        }
        Ok(Self { names, index })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Catalog index of `name`, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }
}

/// One recorded step of the trajectory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySample {
    /// Step index or timestamp; increases across samples.
    pub step: f64,
    /// One value per catalog muscle, nominally in [0, 1].
    #[serde(rename = "muscle_activation")]
    pub activations: Vec<f64>,
}

impl TrajectorySample {
    pub fn new(step: f64, activations: Vec<f64>) -> Self {
        Self { step, activations }
    }
}

/// Immutable catalog + samples. Loaded once, shared by every build.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub catalog: MuscleCatalog,
    pub samples: Vec<TrajectorySample>,
}

impl Dataset {
    pub fn new(catalog: MuscleCatalog, samples: Vec<TrajectorySample>) -> Self {
        Self { catalog, samples }
    }

    /// Check that every sample carries exactly one activation per muscle.
    pub fn validate(&self) -> Result<(), PlotError> {
        let expected = self.catalog.len();
        match self
            .samples
            .iter()
            .enumerate()
            .find(|(_, s)| s.activations.len() != expected)
        {
            Some((sample, s)) => Err(PlotError::DataShape {
                sample,
                step: s.step,
                expected,
                actual: s.activations.len(),
            }),
            None => Ok(()),
        }
    }

    pub fn num_steps(&self) -> usize {
        self.samples.len()
    }

    /// `(min, max)` step over all samples, or `None` for an empty dataset.
    pub fn step_range(&self) -> Option<(f64, f64)> {
        let mut iter = self.samples.iter().map(|s| s.step);
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), s| (lo.min(s), hi.max(s))))
    }
}
