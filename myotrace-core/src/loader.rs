// Copyright (c) 2025-2026 brdigetrlol. All rights reserved.
// SPDX-License-Identifier: LicenseRef-Icarus-Proprietary
// See LICENSE in the repository root for full license terms.

//! JSON dataset loader.
//!
//! Expected layout:
//! ```json
//! {
//!   "muscle_names": ["glut_max_r", "vasti_r"],
//!   "trajectories": [
//!     { "step": 0, "muscle_activation": [0.02, 0.11] },
//!     { "step": 1, "muscle_activation": [0.05, 0.19] }
//!   ]
//! }
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::dataset::{Dataset, MuscleCatalog, TrajectorySample};
use crate::error::DatasetError;

#[derive(Debug, Deserialize)]
struct RawDataset {
    muscle_names: Vec<String>,
    trajectories: Vec<TrajectorySample>,
}

impl RawDataset {
    fn into_dataset(self) -> Result<Dataset, DatasetError> {
        let catalog = MuscleCatalog::new(self.muscle_names)?;
        let dataset = Dataset::new(catalog, self.trajectories);
        dataset.validate()?;
        Ok(dataset)
    }
}

/// Parse and validate a dataset from JSON text.
pub fn dataset_from_str(json: &str) -> Result<Dataset, DatasetError> {
    let raw: RawDataset = serde_json::from_str(json)?;
    raw.into_dataset()
}

/// Parse and validate a dataset from any reader.
pub fn dataset_from_reader<R: Read>(reader: R) -> Result<Dataset, DatasetError> {
    let raw: RawDataset = serde_json::from_reader(reader)?;
    raw.into_dataset()
}

/// Load and validate a dataset file.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset, DatasetError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let dataset = dataset_from_reader(BufReader::new(file))?;
    info!(
        path = %path.display(),
        muscles = dataset.catalog.len(),
        steps = dataset.num_steps(),
        "loaded muscle activation dataset"
    );
    Ok(dataset)
}
