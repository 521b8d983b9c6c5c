//! Color conversion helpers for rendered output.
//!
//! Input colors are (r, g, b) tuples in [0.0, 1.0], as produced by the
//! core palette. Output is a CSS string or a Three.js hex literal.

/// Convert (r, g, b) in [0,1] to a CSS hex color string "#RRGGBB".
pub fn rgb_to_hex(r: f32, g: f32, b: f32) -> String {
    let (ri, gi, bi) = to_bytes(r, g, b);
    format!("#{:02x}{:02x}{:02x}", ri, gi, bi)
}

/// Convert (r, g, b) in [0,1] to a Three.js hex integer "0xRRGGBB".
pub fn rgb_to_threejs_hex(r: f32, g: f32, b: f32) -> String {
    let (ri, gi, bi) = to_bytes(r, g, b);
    format!("0x{:02x}{:02x}{:02x}", ri, gi, bi)
}

fn to_bytes(r: f32, g: f32, b: f32) -> (u8, u8, u8) {
    let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    (byte(r), byte(g), byte(b))
}
