// Copyright (c) 2025-2026 brdigetrlol. All rights reserved.
// SPDX-License-Identifier: LicenseRef-Icarus-Proprietary
// See LICENSE in the repository root for full license terms.

//! The set of muscles a user chose to display.

use crate::dataset::MuscleCatalog;
use crate::error::PlotError;

/// Number of muscles shown when the user has not picked any.
pub const DEFAULT_SELECTION_SIZE: usize = 5;

/// Muscle names in the order the caller chose them.
///
/// Order matters: a muscle's position here (not in the catalog) decides its
/// offset, color and tick label slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    names: Vec<String>,
}

impl Selection {
    /// Build a selection. Repeated names keep their first position.
    ///
    /// Fails with `EmptySelection` so callers can stop before building.
    pub fn new<I, S>(names: I) -> Result<Self, PlotError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            if !out.contains(&name) {
                out.push(name);
            }
        }
        if out.is_empty() {
            return Err(PlotError::EmptySelection);
        }
        Ok(Self { names: out })
    }

    /// The first `count` catalog muscles.
    pub fn default_for(catalog: &MuscleCatalog, count: usize) -> Result<Self, PlotError> {
        Self::new(catalog.names().iter().take(count).cloned())
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Resolve every name to its catalog index, in selection order.
    pub fn resolve(&self, catalog: &MuscleCatalog) -> Result<Vec<usize>, PlotError> {
        self.names
            .iter()
            .map(|name| {
                catalog
                    .index_of(name)
                    .ok_or_else(|| PlotError::UnknownMuscle { name: name.clone() })
            })
            .collect()
    }
}
