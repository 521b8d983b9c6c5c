// Copyright (c) 2025-2026 brdigetrlol. All rights reserved.
// SPDX-License-Identifier: LicenseRef-Icarus-Proprietary
// See LICENSE in the repository root for full license terms.

use anyhow::Context;
use myotrace_core::SceneDescription;

use super::SceneRenderer;

/// Dumps the scene description as JSON for external plotting tools.
#[derive(Debug, Clone, Default)]
pub struct JsonRenderer {
    pub pretty: bool,
}

impl JsonRenderer {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl SceneRenderer for JsonRenderer {
    fn name(&self) -> &str {
        "json"
    }

    fn extension(&self) -> &str {
        "json"
    }

    fn render(&self, scene: &SceneDescription) -> anyhow::Result<String> {
        let out = if self.pretty {
            serde_json::to_string_pretty(scene)
        } else {
            serde_json::to_string(scene)
        };
        out.context("failed to serialize scene description")
    }
}
