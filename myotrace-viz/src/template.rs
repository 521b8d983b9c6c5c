//! Page template for plot output.
//!
//! `HtmlDocument` wraps scene JavaScript into a standalone page: Three.js and
//! its example add-ons from the CDN, a full-window canvas, orbit controls,
//! and HUD panels pinned to the corners of the viewport.
//!
//! Scene JavaScript runs with `scene`, `camera`, `controls`, `container` and
//! `lineMaterials` in scope. Fat-line materials pushed onto `lineMaterials`
//! get their resolution updated on resize.

use std::fmt::Write;

use crate::color::rgb_to_hex;

const THREE_CDN: &str = "https://cdn.jsdelivr.net/npm/three@0.128.0";

/// Scripts loaded in order: core, then the non-module example add-ons.
const SCRIPTS: [&str; 7] = [
    "build/three.min.js",
    "examples/js/controls/OrbitControls.js",
    "examples/js/lines/LineSegmentsGeometry.js",
    "examples/js/lines/LineGeometry.js",
    "examples/js/lines/LineMaterial.js",
    "examples/js/lines/LineSegments2.js",
    "examples/js/lines/Line2.js",
];

/// Viewport corner a HUD panel is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
}

impl Corner {
    fn css(self) -> &'static str {
        match self {
            Self::TopLeft => "top: 12px; left: 12px;",
            Self::TopRight => "top: 12px; right: 12px;",
            Self::BottomLeft => "bottom: 12px; left: 12px;",
        }
    }
}

/// Overlay panel with pre-rendered HTML content.
#[derive(Debug, Clone)]
struct Panel {
    id: String,
    corner: Corner,
    width_px: u32,
    body: String,
}

/// Page color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Colors of one theme as (r, g, b) in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeColors {
    pub background: (f32, f32, f32),
    /// Page text, tick labels and axis titles
    pub text: (f32, f32, f32),
    /// Panel headings and statistic values
    pub accent: (f32, f32, f32),
    /// Bounding box and series baselines
    pub grid: (f32, f32, f32),
}

impl Theme {
    pub fn colors(self) -> ThemeColors {
        match self {
            Self::Dark => ThemeColors {
                background: (0.04, 0.04, 0.06),
                text: (0.88, 0.88, 0.88),
                accent: (0.0, 0.9, 1.0),
                grid: (0.45, 0.5, 0.6),
            },
            Self::Light => ThemeColors {
                background: (1.0, 1.0, 1.0),
                text: (0.1, 0.1, 0.18),
                accent: (0.0, 0.4, 0.8),
                grid: (0.6, 0.6, 0.65),
            },
        }
    }
}

/// Escape text for HTML element content or a quoted attribute.
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// A standalone Three.js page.
pub struct HtmlDocument {
    title: String,
    theme: Theme,
    panels: Vec<Panel>,
    scene_js: String,
    extra_css: String,
    auto_rotate: bool,
}

impl HtmlDocument {
    pub fn new(title: &str, theme: Theme) -> Self {
        Self {
            title: title.to_string(),
            theme,
            panels: Vec::new(),
            scene_js: String::new(),
            extra_css: String::new(),
            auto_rotate: false,
        }
    }

    pub fn add_panel(&mut self, id: &str, corner: Corner, width_px: u32, body: &str) {
        self.panels.push(Panel {
            id: id.to_string(),
            corner,
            width_px,
            body: body.to_string(),
        });
    }

    pub fn set_scene_js(&mut self, js: &str) {
        self.scene_js = js.to_string();
    }

    pub fn set_extra_css(&mut self, css: &str) {
        self.extra_css = css.to_string();
    }

    pub fn set_auto_rotate(&mut self, enabled: bool) {
        self.auto_rotate = enabled;
    }

    pub fn render(&self) -> String {
        let mut html = String::with_capacity(16384 + self.scene_js.len());
        self.write_head(&mut html);
        html.push_str("<body>\n<div id=\"plot\"></div>\n");
        for panel in &self.panels {
            let _ = writeln!(
                html,
                r#"<aside id="{}" class="hud" style="{} width: {}px;">{}</aside>"#,
                html_escape(&panel.id),
                panel.corner.css(),
                panel.width_px,
                panel.body,
            );
        }
        self.write_script(&mut html);
        html.push_str("</body>\n</html>\n");
        html
    }

    fn write_head(&self, html: &mut String) {
        let c = self.theme.colors();
        let bg = rgb_to_hex(c.background.0, c.background.1, c.background.2);
        let text = rgb_to_hex(c.text.0, c.text.1, c.text.2);
        let accent = rgb_to_hex(c.accent.0, c.accent.1, c.accent.2);

        let _ = writeln!(html, "<!DOCTYPE html>\n<html lang=\"en\">\n<head>");
        let _ = writeln!(html, "<meta charset=\"UTF-8\">");
        let _ = writeln!(html, "<title>{}</title>", html_escape(&self.title));
        for src in SCRIPTS {
            let _ = writeln!(html, "<script src=\"{}/{}\"></script>", THREE_CDN, src);
        }
        let _ = write!(html, r#"<style>
html, body {{ margin: 0; height: 100%; overflow: hidden; background: {bg}; color: {text}; font: 13px/1.5 system-ui, sans-serif; }}
#plot {{ position: fixed; inset: 0; }}
.hud {{ position: absolute; z-index: 2; padding: 10px 14px; border-radius: 6px; border: 1px solid {accent}55; background: {bg}e6; }}
.hud h2 {{ margin: 0 0 6px; font-size: 15px; }}
.hud h3 {{ margin: 8px 0 4px; font-size: 11px; letter-spacing: 1px; text-transform: uppercase; color: {accent}; }}
.hud ul {{ margin: 0; padding-left: 18px; }}
.stat-row {{ display: flex; justify-content: space-between; gap: 12px; }}
.stat-row .val {{ color: {accent}; font-variant-numeric: tabular-nums; }}
.color-legend {{ display: flex; align-items: center; gap: 6px; }}
.color-legend .swatch {{ width: 12px; height: 12px; border-radius: 2px; }}
{extra}
</style>
</head>
"#,
            bg = bg,
            text = text,
            accent = accent,
            extra = self.extra_css,
        );
    }

    fn write_script(&self, html: &mut String) {
        let c = self.theme.colors();
        let bg = rgb_to_hex(c.background.0, c.background.1, c.background.2);
        let _ = write!(html, r#"<script>
const container = document.getElementById('plot');
const scene = new THREE.Scene();
scene.background = new THREE.Color('{bg}');
const camera = new THREE.PerspectiveCamera(45, container.clientWidth / container.clientHeight, 0.1, 1000);
const renderer = new THREE.WebGLRenderer({{ antialias: true }});
renderer.setPixelRatio(window.devicePixelRatio);
renderer.setSize(container.clientWidth, container.clientHeight);
container.appendChild(renderer.domElement);
const controls = new THREE.OrbitControls(camera, renderer.domElement);
controls.enableDamping = true;
controls.autoRotate = {auto_rotate};
controls.autoRotateSpeed = 0.5;
const lineMaterials = [];

{scene_js}
function onResize() {{
    const w = container.clientWidth, h = container.clientHeight;
    camera.aspect = w / h;
    camera.updateProjectionMatrix();
    renderer.setSize(w, h);
    lineMaterials.forEach(m => m.resolution.set(w, h));
}}
window.addEventListener('resize', onResize);
(function tick() {{
    requestAnimationFrame(tick);
    controls.update();
    renderer.render(scene, camera);
}})();
</script>
"#,
            bg = bg,
            auto_rotate = self.auto_rotate,
            scene_js = self.scene_js,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_loads_three_and_addons() {
        let html = HtmlDocument::new("Gait", Theme::Dark).render();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Gait</title>"));
        assert!(html.contains("three@0.128.0/build/three.min.js"));
        assert!(html.contains("controls/OrbitControls.js"));
        assert!(html.contains("lines/Line2.js"));
        // Line2 depends on the geometry and material scripts
        assert!(html.find("lines/LineMaterial.js").unwrap() < html.find("lines/Line2.js").unwrap());
        assert!(html.contains("controls.autoRotate = false"));
    }

    #[test]
    fn test_panel_placement() {
        let mut doc = HtmlDocument::new("Gait", Theme::Light);
        doc.add_panel("stats-panel", Corner::TopRight, 220, "<h3>Stats</h3>");
        let html = doc.render();
        assert!(html.contains(r#"id="stats-panel""#));
        assert!(html.contains("top: 12px; right: 12px; width: 220px;"));
        assert!(html.contains("<h3>Stats</h3>"));
    }

    #[test]
    fn test_theme_background() {
        assert!(HtmlDocument::new("t", Theme::Light).render().contains("new THREE.Color('#ffffff')"));
        assert_eq!(Theme::Dark.colors().text, (0.88, 0.88, 0.88));
    }

    #[test]
    fn test_resize_updates_line_resolution() {
        let mut doc = HtmlDocument::new("t", Theme::Dark);
        doc.set_auto_rotate(true);
        let html = doc.render();
        assert!(html.contains("const lineMaterials = [];"));
        assert!(html.contains("m.resolution.set(w, h)"));
        assert!(html.contains("controls.autoRotate = true"));
    }

    #[test]
    fn test_title_escaped() {
        let doc = HtmlDocument::new("a < b & c", Theme::Dark);
        assert!(doc.render().contains("<title>a &lt; b &amp; c</title>"));
    }
}
