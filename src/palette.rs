//! Node and link colors.
//!
//! Nodes get tints of a fixed colorblind-friendly palette, blended toward
//! white so neighbouring nodes stay distinguishable even when many share a
//! base color. Links use exactly two literal colors chosen by the highlight
//! flag. The random source is a caller-supplied [`Rng`] so color generation
//! can be seeded.

use rand::Rng;

use crate::error::{Result, SankeyError};

/// Colorblind-friendly base palette.
pub const BASE_PALETTE: [&str; 15] = [
    "#68023F", "#008169", "#EF0096", "#00DCB5", "#FFCFE2", "#003C86", "#9400E6", "#009FFA",
    "#FF71FD", "#7CFFFA", "#6A0213", "#008607", "#F60239", "#00E307", "#FFDC3D",
];

/// Link color for rows outside the highlight.
pub const DEFAULT_LINK_COLOR: &str = "lightgray";

/// Link color for highlighted rows.
pub const HIGHLIGHT_LINK_COLOR: &str = "#003C86";

/// Tint alpha range: how far node colors are pushed toward white.
pub const TINT_RANGE: std::ops::Range<f64> = 0.3..0.7;

pub fn link_color(highlighted: bool) -> &'static str {
    if highlighted {
        HIGHLIGHT_LINK_COLOR
    } else {
        DEFAULT_LINK_COLOR
    }
}

/// Blend a `#RRGGBB` color toward white. `alpha` 0 keeps the original color,
/// 1 gives white.
pub fn blend_with_white(color: &str, alpha: f64) -> Result<String> {
    let (r, g, b) = parse_hex(color)?;
    let blend = |channel: u8| (f64::from(channel) + (255.0 - f64::from(channel)) * alpha) as u8;
    Ok(format!("#{:02X}{:02X}{:02X}", blend(r), blend(g), blend(b)))
}

fn parse_hex(color: &str) -> Result<(u8, u8, u8)> {
    let digits = color
        .strip_prefix('#')
        .filter(|d| d.len() == 6 && d.is_ascii())
        .ok_or_else(|| SankeyError::Color(color.to_owned()))?;
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| SankeyError::Color(color.to_owned()))
    };
    Ok((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Generate one tint per node from the base palette.
pub fn node_colors<R: Rng>(rng: &mut R, count: usize) -> Result<Vec<String>> {
    (0..count)
        .map(|_| {
            let base = BASE_PALETTE[rng.random_range(0..BASE_PALETTE.len())];
            blend_with_white(base, rng.random_range(TINT_RANGE))
        })
        .collect()
}
