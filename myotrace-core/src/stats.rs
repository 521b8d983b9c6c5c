// Copyright (c) 2025-2026 brdigetrlol. All rights reserved.
// SPDX-License-Identifier: LicenseRef-Icarus-Proprietary
// See LICENSE in the repository root for full license terms.

use std::fmt;

use serde::Serialize;

use crate::dataset::Dataset;
use crate::error::PlotError;
use crate::selection::Selection;

/// Headline counts shown next to the plot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub total_muscles: usize,
    pub selected_muscles: usize,
    pub total_steps: usize,
    pub step_range: Option<(f64, f64)>,
}

impl DatasetSummary {
    /// Count the dataset and `selection`. Every selected name must be in
    /// the catalog.
    pub fn new(dataset: &Dataset, selection: &Selection) -> Result<Self, PlotError> {
        let selected = selection.resolve(&dataset.catalog)?;
        Ok(Self {
            total_muscles: dataset.catalog.len(),
            selected_muscles: selected.len(),
            total_steps: dataset.num_steps(),
            step_range: dataset.step_range(),
        })
    }
}

impl fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total number of muscles: {}", self.total_muscles)?;
        writeln!(f, "Currently selected muscles: {}", self.selected_muscles)?;
        write!(f, "Total number of steps: {}", self.total_steps)?;
        if let Some((lo, hi)) = self.step_range {
            write!(f, "\nStep range: {} .. {}", lo, hi)?;
        }
        Ok(())
    }
}
