// Copyright (c) 2025-2026 brdigetrlol. All rights reserved.
// SPDX-License-Identifier: LicenseRef-Icarus-Proprietary
// See LICENSE in the repository root for full license terms.

//! Three.js scene builder for procedural 3D plots.
//!
//! `SceneBuilder` accumulates world-space objects (polylines, translucent
//! fills, edges, labels) and serializes them to JavaScript that constructs a
//! Three.js scene. All geometry is emitted procedurally.

use std::fmt::Write;

use crate::color::rgb_to_threejs_hex;

/// A polyline through world-space points.
#[derive(Debug, Clone)]
pub struct SceneLine {
    pub name: String,
    pub points: Vec<[f64; 3]>,
    pub color: (f32, f32, f32),
    pub width: f32,
}

/// A translucent triangle mesh.
#[derive(Debug, Clone)]
pub struct SceneFill {
    pub name: String,
    pub triangles: Vec<[[f64; 3]; 3]>,
    pub color: (f32, f32, f32),
    pub opacity: f64,
}

/// An edge between two 3D positions.
#[derive(Debug, Clone)]
pub struct SceneEdge {
    pub from: [f64; 3],
    pub to: [f64; 3],
    pub color: (f32, f32, f32),
}

/// A text label in 3D space (rendered as a Sprite with canvas texture).
#[derive(Debug, Clone)]
pub struct SceneLabel {
    pub position: [f64; 3],
    pub text: String,
    pub color: (f32, f32, f32),
    pub scale: f64,
}

/// Camera configuration.
#[derive(Debug, Clone)]
pub struct CameraConfig {
    pub position: [f64; 3],
    pub look_at: [f64; 3],
    pub fov: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 4.0, 10.0],
            look_at: [0.0, 0.0, 0.0],
            fov: 45.0,
        }
    }
}

/// Builder that accumulates Three.js scene objects and emits JavaScript.
pub struct SceneBuilder {
    camera: CameraConfig,
    ambient_color: u32,
    ambient_intensity: f64,
    lines: Vec<SceneLine>,
    fills: Vec<SceneFill>,
    edges: Vec<SceneEdge>,
    edge_opacity: f64,
    labels: Vec<SceneLabel>,
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self {
            camera: CameraConfig::default(),
            ambient_color: 0xffffff,
            ambient_intensity: 1.0,
            lines: Vec::new(),
            fills: Vec::new(),
            edges: Vec::new(),
            edge_opacity: 0.5,
            labels: Vec::new(),
        }
    }

    pub fn set_camera(&mut self, position: [f64; 3], look_at: [f64; 3]) {
        self.camera.position = position;
        self.camera.look_at = look_at;
    }

    pub fn add_line(&mut self, name: &str, points: Vec<[f64; 3]>, color: (f32, f32, f32), width: f32) {
        self.lines.push(SceneLine { name: name.to_string(), points, color, width });
    }

    pub fn add_fill(
        &mut self,
        name: &str,
        triangles: Vec<[[f64; 3]; 3]>,
        color: (f32, f32, f32),
        opacity: f64,
    ) {
        self.fills.push(SceneFill { name: name.to_string(), triangles, color, opacity });
    }

    pub fn add_edge(&mut self, from: [f64; 3], to: [f64; 3], color: (f32, f32, f32)) {
        self.edges.push(SceneEdge { from, to, color });
    }

    pub fn add_label(&mut self, position: [f64; 3], text: &str, color: (f32, f32, f32), scale: f64) {
        self.labels.push(SceneLabel {
            position,
            text: text.to_string(),
            color,
            scale,
        });
    }

    /// Emit the complete Three.js scene construction as a JavaScript string.
    pub fn build_js(&self) -> String {
        let mut js = String::with_capacity(16384);

        // Camera
        let _ = write!(js, r#"
camera.fov = {fov};
camera.position.set({cx}, {cy}, {cz});
camera.lookAt({lx}, {ly}, {lz});
camera.updateProjectionMatrix();
if (typeof controls !== 'undefined') {{ controls.target.set({lx}, {ly}, {lz}); }}
"#,
            fov = self.camera.fov,
            cx = self.camera.position[0], cy = self.camera.position[1], cz = self.camera.position[2],
            lx = self.camera.look_at[0], ly = self.camera.look_at[1], lz = self.camera.look_at[2],
        );

        let _ = writeln!(js, "scene.add(new THREE.AmbientLight(0x{:06x}, {}));",
            self.ambient_color, self.ambient_intensity);

        if !self.edges.is_empty() {
            self.build_edges_js(&mut js);
        }

        // Fills first so curves draw over them
        for fill in &self.fills {
            self.build_fill_js(&mut js, fill);
        }

        for line in &self.lines {
            self.build_line_js(&mut js, line);
        }

        for (i, label) in self.labels.iter().enumerate() {
            self.build_label_js(&mut js, label, i);
        }

        js
    }

    /// Curves use `Line2` so `width` (in pixels) is honored; WebGL ignores
    /// `linewidth` on basic line materials.
    fn build_line_js(&self, js: &mut String, line: &SceneLine) {
        let coords = flatten(line.points.iter());
        let _ = write!(js, r#"{{
    const geo = new THREE.LineGeometry();
    geo.setPositions([{coords}]);
    const mat = new THREE.LineMaterial({{ color: {color}, linewidth: {width} }});
    mat.resolution.set(container.clientWidth, container.clientHeight);
    lineMaterials.push(mat);
    const line = new THREE.Line2(geo, mat);
    line.computeLineDistances();
    line.name = 'line_{name}';
    scene.add(line);
}}
"#,
            coords = coords,
            color = rgb_to_threejs_hex(line.color.0, line.color.1, line.color.2),
            width = line.width,
            name = js_escape(&line.name),
        );
    }

    fn build_fill_js(&self, js: &mut String, fill: &SceneFill) {
        if fill.triangles.is_empty() {
            return;
        }
        let coords = flatten(fill.triangles.iter().flat_map(|t| t.iter()));
        let _ = write!(js, r#"{{
    const geo = new THREE.BufferGeometry();
    geo.setAttribute('position', new THREE.BufferAttribute(new Float32Array([{coords}]), 3));
    const mat = new THREE.MeshBasicMaterial({{
        color: {color}, transparent: true, opacity: {opacity:.3},
        side: THREE.DoubleSide, depthWrite: false
    }});
    const mesh = new THREE.Mesh(geo, mat);
    mesh.name = 'fill_{name}';
    scene.add(mesh);
}}
"#,
            coords = coords,
            color = rgb_to_threejs_hex(fill.color.0, fill.color.1, fill.color.2),
            opacity = fill.opacity,
            name = js_escape(&fill.name),
        );
    }

    fn build_edges_js(&self, js: &mut String) {
        let n = self.edges.len();
        let _ = write!(js, r#"{{
    const edgeGeo = new THREE.BufferGeometry();
    const edgePos = new Float32Array({n6});
    const edgeCol = new Float32Array({n6});
"#, n6 = n * 6);

        for (i, e) in self.edges.iter().enumerate() {
            let _ = write!(js, r#"    edgePos[{i0}]={fx}; edgePos[{i1}]={fy}; edgePos[{i2}]={fz};
    edgePos[{i3}]={tx}; edgePos[{i4}]={ty}; edgePos[{i5}]={tz};
    edgeCol[{i0}]={cr}; edgeCol[{i1}]={cg}; edgeCol[{i2}]={cb};
    edgeCol[{i3}]={cr}; edgeCol[{i4}]={cg}; edgeCol[{i5}]={cb};
"#,
                i0=i*6, i1=i*6+1, i2=i*6+2, i3=i*6+3, i4=i*6+4, i5=i*6+5,
                fx=e.from[0], fy=e.from[1], fz=e.from[2],
                tx=e.to[0], ty=e.to[1], tz=e.to[2],
                cr=e.color.0, cg=e.color.1, cb=e.color.2,
            );
        }

        let _ = write!(js, r#"    edgeGeo.setAttribute('position', new THREE.BufferAttribute(edgePos, 3));
    edgeGeo.setAttribute('color', new THREE.BufferAttribute(edgeCol, 3));
    const edgeMat = new THREE.LineBasicMaterial({{
        vertexColors: true, transparent: true, opacity: {opacity}
    }});
    const edges = new THREE.LineSegments(edgeGeo, edgeMat);
    edges.name = 'axes';
    scene.add(edges);
}}
"#, opacity = self.edge_opacity);
    }

    fn build_label_js(&self, js: &mut String, label: &SceneLabel, idx: usize) {
        let _ = write!(js, r#"{{
    const canvas = document.createElement('canvas');
    canvas.width = 256; canvas.height = 64;
    const ctx = canvas.getContext('2d');
    ctx.fillStyle = 'rgba({r},{g},{b},0.9)';
    ctx.font = '24px sans-serif';
    ctx.textAlign = 'center';
    ctx.fillText('{text}', 128, 40);
    const tex = new THREE.CanvasTexture(canvas);
    const mat = new THREE.SpriteMaterial({{ map: tex, transparent: true, depthWrite: false }});
    const sprite = new THREE.Sprite(mat);
    sprite.position.set({x}, {y}, {z});
    sprite.scale.set({scale}, {sh}, 1);
    sprite.name = 'label_{idx}';
    scene.add(sprite);
}}
"#,
            r = (label.color.0.clamp(0.0, 1.0) * 255.0) as u8,
            g = (label.color.1.clamp(0.0, 1.0) * 255.0) as u8,
            b = (label.color.2.clamp(0.0, 1.0) * 255.0) as u8,
            text = js_escape(&label.text),
            x = label.position[0], y = label.position[1], z = label.position[2],
            scale = label.scale, sh = label.scale * 0.25,
            idx = idx,
        );
    }
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape text for a single-quoted JavaScript string literal.
pub fn js_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '<' => out.push_str("\\x3c"),
            _ => out.push(c),
        }
    }
    out
}

fn flatten<'a>(points: impl Iterator<Item = &'a [f64; 3]>) -> String {
    let mut out = String::new();
    for (i, p) in points.enumerate() {
        if i > 0 {
            out.push(',');
        }
        let _ = write!(out, "{:.5},{:.5},{:.5}", p[0], p[1], p[2]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_scene() {
        let scene = SceneBuilder::new();
        let js = scene.build_js();
        assert!(js.contains("camera.position.set"));
        assert!(js.contains("AmbientLight"));
        assert!(!js.contains("LineSegments"));
    }

    #[test]
    fn test_camera_config() {
        let mut scene = SceneBuilder::new();
        scene.set_camera([1.0, 2.0, 3.0], [4.0, 5.0, 6.0]);
        let js = scene.build_js();
        assert!(js.contains("camera.position.set(1, 2, 3)"));
        assert!(js.contains("camera.lookAt(4, 5, 6)"));
        assert!(js.contains("controls.target.set(4, 5, 6)"));
    }

    #[test]
    fn test_line_and_fill() {
        let mut scene = SceneBuilder::new();
        scene.add_line("vasti_r", vec![[0.0, 0.0, 0.0], [1.0, 0.5, 0.0]], (1.0, 0.0, 0.0), 2.0);
        scene.add_fill(
            "vasti_r",
            vec![[[0.0, 0.0, 0.0], [1.0, 0.5, 0.0], [1.0, 0.0, 0.0]]],
            (1.0, 0.0, 0.0),
            0.3,
        );
        let js = scene.build_js();
        assert!(js.contains("new THREE.Line2(geo, mat)"));
        assert!(js.contains("new THREE.LineMaterial({ color: 0xff0000, linewidth: 2 })"));
        assert!(js.contains("lineMaterials.push(mat)"));
        assert!(js.contains("line_vasti_r"));
        assert!(js.contains("fill_vasti_r"));
        assert!(js.contains("opacity: 0.300"));
        assert!(js.contains("0xff0000"));
        // fill is emitted before its curve
        assert!(js.find("fill_vasti_r").unwrap() < js.find("line_vasti_r").unwrap());
    }

    #[test]
    fn test_empty_fill_skipped() {
        let mut scene = SceneBuilder::new();
        scene.add_fill("solo", Vec::new(), (0.0, 0.0, 1.0), 0.3);
        assert!(!scene.build_js().contains("fill_solo"));
    }

    #[test]
    fn test_edges() {
        let mut scene = SceneBuilder::new();
        scene.add_edge([0.0, 0.0, 0.0], [1.0, 1.0, 1.0], (0.5, 0.5, 0.5));
        let js = scene.build_js();
        assert!(js.contains("LineSegments"));
        assert!(js.contains("new Float32Array(6)"));
    }

    #[test]
    fn test_label_escaped() {
        let mut scene = SceneBuilder::new();
        scene.add_label([0.0, 1.0, 0.0], "rect_fem's", (1.0, 1.0, 1.0), 2.0);
        let js = scene.build_js();
        assert!(js.contains("Sprite"));
        assert!(js.contains("rect_fem\\'s"));
    }

    #[test]
    fn test_js_escape_script_close() {
        assert_eq!(js_escape("</script>"), "\\x3c/script>");
    }
}
