// Copyright (c) 2025-2026 brdigetrlol. All rights reserved.
// SPDX-License-Identifier: LicenseRef-Icarus-Proprietary
// See LICENSE in the repository root for full license terms.

//! Stacked Activation Renderer
//!
//! Procedurally generates an interactive 3D plot from a scene description:
//! - One colored curve per muscle, stacked along the depth axis
//! - Translucent fill between each curve and the zero-activation baseline
//! - Bounding box, muscle name ticks, step and activation ticks
//! - HUD panels with legend, dataset statistics and usage notes

use std::fmt::Write;

use myotrace_core::{DatasetSummary, SceneDescription};
use tracing::debug;

use crate::color::rgb_to_hex;
use crate::projection::{camera_position, fill_triangles, project, WorldBox};
use crate::scene::SceneBuilder;
use crate::template::{html_escape, Corner, HtmlDocument, Theme};

use super::SceneRenderer;

/// Renders a scene as a self-contained Three.js HTML page.
///
/// Curves are drawn with `scene.line_width` in screen pixels.
#[derive(Debug, Clone)]
pub struct ThreeJsRenderer {
    pub theme: Theme,
    pub world: WorldBox,
    /// Shown in a statistics panel when present
    pub summary: Option<DatasetSummary>,
    pub auto_rotate: bool,
}

impl Default for ThreeJsRenderer {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            world: WorldBox::default(),
            summary: None,
            auto_rotate: false,
        }
    }
}

impl ThreeJsRenderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme, ..Self::default() }
    }

    pub fn with_summary(mut self, summary: DatasetSummary) -> Self {
        self.summary = Some(summary);
        self
    }

    fn build_scene_js(&self, scene: &SceneDescription) -> String {
        let world = &self.world;
        let colors = self.theme.colors();
        let text_rgb = colors.text;
        let mut builder = SceneBuilder::new();

        let target = world.center();
        builder.set_camera(camera_position(&scene.view, target, world.radius() * 2.4), target);

        // Bounding box over the full axis ranges
        let (x0, x1) = (scene.x_range.min, scene.x_range.max);
        let (y0, y1) = (scene.y_range.min, scene.y_range.max);
        let (z0, z1) = (scene.z_range.min, scene.z_range.max);
        let corners = [
            [x0, y0, z0], [x1, y0, z0], [x1, y1, z0], [x0, y1, z0],
            [x0, y0, z1], [x1, y0, z1], [x1, y1, z1], [x0, y1, z1],
        ];
        const BOX_EDGES: [(usize, usize); 12] = [
            (0, 1), (1, 2), (2, 3), (3, 0),
            (4, 5), (5, 6), (6, 7), (7, 4),
            (0, 4), (1, 5), (2, 6), (3, 7),
        ];
        let grid = colors.grid;
        for (a, b) in BOX_EDGES {
            builder.add_edge(project(scene, world, corners[a]), project(scene, world, corners[b]), grid);
        }
        // Baseline of every series
        for tick in &scene.y_ticks {
            builder.add_edge(
                project(scene, world, [x0, tick.position, z0]),
                project(scene, world, [x1, tick.position, z0]),
                grid,
            );
        }

        for s in &scene.series {
            let points: Vec<[f64; 3]> = s
                .points
                .iter()
                .map(|&(step, a)| project(scene, world, [step, s.offset, a]))
                .collect();
            let triangles: Vec<[[f64; 3]; 3]> = fill_triangles(&s.polygon)
                .into_iter()
                .map(|t| t.map(|v| project(scene, world, v)))
                .collect();
            builder.add_fill(&s.name, triangles, s.color, scene.fill_alpha as f64);
            builder.add_line(&s.name, points, s.color, scene.line_width);
        }

        // Muscle names sit beyond the high-step end of the box
        for tick in &scene.y_ticks {
            let mut p = project(scene, world, [x1, tick.position, z0]);
            p[0] += side_of(scene, world, x1) * 1.2;
            builder.add_label(p, &tick.label, text_rgb, 2.2);
        }

        // Step ticks along the front edge
        for step in [x0, (x0 + x1) / 2.0, x1] {
            let mut p = project(scene, world, [step, y0, z0]);
            p[1] -= 0.25;
            p[2] += 0.3;
            builder.add_label(p, &format_tick(step), text_rgb, 1.2);
        }

        // Activation ticks up the front corner at the low-step end
        for a in [z0, (z0 + z1) / 2.0, z1] {
            let mut p = project(scene, world, [x0, y0, a]);
            p[0] += side_of(scene, world, x0) * 0.5;
            builder.add_label(p, &format_tick(a), text_rgb, 1.2);
        }

        // Axis titles
        let mut p = project(scene, world, [(x0 + x1) / 2.0, y0, z0]);
        p[1] -= 0.7;
        p[2] += 0.6;
        builder.add_label(p, &scene.x_label, text_rgb, 2.0);

        let mut p = project(scene, world, [x1, (y0 + y1) / 2.0, z0]);
        p[0] += side_of(scene, world, x1) * 2.6;
        builder.add_label(p, &scene.y_label, text_rgb, 2.0);

        let mut p = project(scene, world, [x0, y0, z1]);
        p[0] += side_of(scene, world, x0) * 0.5;
        p[1] += 0.5;
        builder.add_label(p, &scene.z_label, text_rgb, 2.0);

        builder.build_js()
    }

    fn legend_html(&self, scene: &SceneDescription) -> String {
        let mut html = String::new();
        let _ = write!(html, "<h2>{}</h2>", html_escape(&scene.title));
        let _ = write!(html, "<h3>Muscles</h3>");
        for s in &scene.series {
            let _ = write!(html,
                r#"<div class="color-legend"><span class="swatch" style="background:{}"></span><span>{}</span></div>"#,
                rgb_to_hex(s.color.0, s.color.1, s.color.2),
                html_escape(&s.name),
            );
        }
        html
    }

    fn stats_html(summary: &DatasetSummary) -> String {
        let mut html = String::new();
        let _ = write!(html, "<h3>Data Statistics</h3>");
        let rows = [
            ("Total muscles", summary.total_muscles.to_string()),
            ("Selected muscles", summary.selected_muscles.to_string()),
            ("Total steps", summary.total_steps.to_string()),
        ];
        for (key, val) in rows {
            let _ = write!(html,
                r#"<div class="stat-row"><span class="key">{}</span><span class="val">{}</span></div>"#,
                key, val,
            );
        }
        if let Some((lo, hi)) = summary.step_range {
            let _ = write!(html,
                r#"<div class="stat-row"><span class="key">Step range</span><span class="val">{} – {}</span></div>"#,
                format_tick(lo), format_tick(hi),
            );
        }
        html
    }

    fn instructions_html() -> &'static str {
        r#"<h3>Instructions</h3>
<ul>
<li>Choose muscles with <code>--muscles</code> and render again</li>
<li>Several muscles are stacked along the depth axis</li>
<li>Curves show activation over time; fills drop to zero activation</li>
<li>Drag to orbit, scroll to zoom</li>
</ul>"#
    }
}

impl SceneRenderer for ThreeJsRenderer {
    fn name(&self) -> &str {
        "threejs"
    }

    fn extension(&self) -> &str {
        "html"
    }

    fn render(&self, scene: &SceneDescription) -> anyhow::Result<String> {
        let scene_js = self.build_scene_js(scene);

        let mut doc = HtmlDocument::new(&scene.title, self.theme);
        doc.add_panel("legend-panel", Corner::TopLeft, 260, &self.legend_html(scene));
        if let Some(summary) = &self.summary {
            doc.add_panel("stats-panel", Corner::TopRight, 220, &Self::stats_html(summary));
        }
        doc.add_panel("help-panel", Corner::BottomLeft, 320, Self::instructions_html());
        doc.set_scene_js(&scene_js);
        doc.set_auto_rotate(self.auto_rotate);
        doc.set_extra_css(".hud code { font-family: monospace; font-size: 12px; }");

        let html = doc.render();
        debug!(series = scene.series.len(), bytes = html.len(), "rendered three.js document");
        Ok(html)
    }
}

/// +1 or -1: which world-x side of the box the data value `x` lies on.
fn side_of(scene: &SceneDescription, world: &WorldBox, x: f64) -> f64 {
    if project(scene, world, [x, 0.0, 0.0])[0] >= 0.0 { 1.0 } else { -1.0 }
}

fn format_tick(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{:.2}", v)
    }
}
