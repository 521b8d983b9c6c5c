//! Projection from plot data coordinates to renderer world space.
//!
//! Data axes are x = step, y = series offset, z = activation. Three.js is
//! y-up, so the mapping is `(x, y, z)_data → (x, z, -y)_world`, which keeps
//! the frame right-handed. Each axis is normalized over its scene range
//! (honoring the axis direction) and scaled into a `WorldBox` centered on
//! the origin in x and depth, resting on `y = 0`.

use myotrace_core::{SceneDescription, ViewAngle};

/// World-space extent of the plot box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBox {
    /// Extent along the step axis
    pub width: f64,
    /// Extent along the offset axis
    pub depth: f64,
    /// Extent along the activation axis
    pub height: f64,
}

impl Default for WorldBox {
    fn default() -> Self {
        Self { width: 8.0, depth: 4.0, height: 3.0 }
    }
}

impl WorldBox {
    pub fn center(&self) -> [f64; 3] {
        [0.0, self.height / 2.0, 0.0]
    }

    /// Radius of the sphere enclosing the box.
    pub fn radius(&self) -> f64 {
        0.5 * (self.width * self.width + self.depth * self.depth + self.height * self.height).sqrt()
    }
}

/// Project a data-space `[step, offset, activation]` vertex into world space.
///
/// Values outside an axis range land outside the box; nothing is clamped.
pub fn project(scene: &SceneDescription, world: &WorldBox, v: [f64; 3]) -> [f64; 3] {
    let x = (scene.x_range.normalize(v[0]) - 0.5) * world.width;
    let depth = (scene.y_range.normalize(v[1]) - 0.5) * world.depth;
    let up = scene.z_range.normalize(v[2]) * world.height;
    [x, up, -depth]
}

/// Camera position for a view angle, `distance` away from `target`.
///
/// Elevation is measured from the step/offset plane, azimuth around the
/// activation axis from the +step direction.
pub fn camera_position(view: &ViewAngle, target: [f64; 3], distance: f64) -> [f64; 3] {
    let elev = view.elevation.to_radians();
    let azim = view.azimuth.to_radians();
    let dx = elev.cos() * azim.cos();
    let dy = elev.cos() * azim.sin();
    let dz = elev.sin();
    [
        target[0] + distance * dx,
        target[1] + distance * dz,
        target[2] - distance * dy,
    ]
}

/// Triangulate a fill outline into the strip between curve and baseline.
///
/// `polygon` is `[baseline_start, p_1, .., p_n, baseline_end]` as built by the
/// core builder. Each pair of adjacent curve points yields a quad down to the
/// baseline activation, split into two triangles. Outlines with fewer than
/// two curve points enclose no area.
pub fn fill_triangles(polygon: &[[f64; 3]]) -> Vec<[[f64; 3]; 3]> {
    if polygon.len() < 4 {
        return Vec::new();
    }
    let base_z = polygon[0][2];
    let curve = &polygon[1..polygon.len() - 1];
    let mut tris = Vec::with_capacity(2 * (curve.len() - 1));
    for pair in curve.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let a0 = [a[0], a[1], base_z];
        let b0 = [b[0], b[1], base_z];
        tris.push([a0, a, b]);
        tris.push([a0, b, b0]);
    }
    tris
}
