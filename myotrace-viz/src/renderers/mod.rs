// Copyright (c) 2025-2026 brdigetrlol. All rights reserved.
// SPDX-License-Identifier: LicenseRef-Icarus-Proprietary
// See LICENSE in the repository root for full license terms.

//! Rendering adapters for trajectory scenes.
//!
//! Each adapter consumes a `SceneDescription` and produces a complete text
//! artifact. The geometry is fixed by the scene; adapters only decide how to
//! present it.

use myotrace_core::SceneDescription;

pub mod threejs;
pub mod json;

pub use threejs::ThreeJsRenderer;
pub use json::JsonRenderer;

/// A swappable output backend for scene descriptions.
pub trait SceneRenderer {
    /// Short name of this backend.
    fn name(&self) -> &str;

    /// File extension of the produced artifact, without the dot.
    fn extension(&self) -> &str;

    /// Render the whole scene.
    fn render(&self, scene: &SceneDescription) -> anyhow::Result<String>;
}
