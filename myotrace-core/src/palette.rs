// Copyright (c) 2025-2026 brdigetrlol. All rights reserved.
// SPDX-License-Identifier: LicenseRef-Icarus-Proprietary
// See LICENSE in the repository root for full license terms.

//! Categorical series colors.
//!
//! Colors are (r, g, b) tuples in [0.0, 1.0]. Series take colors by their
//! position in the selection, cycling when the selection is longer than the
//! palette.

use crate::error::ConfigError;

/// The ten-color Tableau cycle (matplotlib's default property cycle).
pub const TABLEAU_10: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd",
    "#8c564b", "#e377c2", "#7f7f7f", "#bcbd22", "#17becf",
];

/// Parse `#RRGGBB` (leading `#` optional) into (r, g, b) in [0, 1].
pub fn parse_hex(s: &str) -> Option<(f32, f32, f32)> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);
    Some((r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0))
}

/// Ordered list of series colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<(f32, f32, f32)>,
}

impl Palette {
    /// Parse a list of hex strings. Fails on the first bad entry.
    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> Result<Self, ConfigError> {
        if colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        let colors = colors
            .iter()
            .map(|c| {
                let c = c.as_ref();
                parse_hex(c).ok_or_else(|| ConfigError::InvalidColor(c.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { colors })
    }

    pub fn tableau10() -> Self {
        Self {
            colors: TABLEAU_10.iter().filter_map(|c| parse_hex(c)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color for the `i`-th selected series.
    pub fn color(&self, i: usize) -> (f32, f32, f32) {
        if self.colors.is_empty() {
            return (0.5, 0.5, 0.5);
        }
        self.colors[i % self.colors.len()]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::tableau10()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        let (r, g, b) = parse_hex("#ff0000").unwrap();
        assert!((r - 1.0).abs() < 1e-6 && g.abs() < 1e-6 && b.abs() < 1e-6);
        assert!(parse_hex("00ff00").is_some());
        assert!(parse_hex("#fff").is_none());
        assert!(parse_hex("#gg0000").is_none());
    }

    #[test]
    fn test_tableau_cycle_wraps() {
        let p = Palette::tableau10();
        assert_eq!(p.len(), 10);
        assert_eq!(p.color(0), p.color(10));
        assert_ne!(p.color(0), p.color(1));
    }

    #[test]
    fn test_from_hex_reports_bad_entry() {
        assert_eq!(
            Palette::from_hex(&["#000000", "nope"]),
            Err(ConfigError::InvalidColor("nope".to_string()))
        );
        assert_eq!(Palette::from_hex::<&str>(&[]), Err(ConfigError::EmptyPalette));
    }
}
