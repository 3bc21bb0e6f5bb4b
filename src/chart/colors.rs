//! Chart palette

use prism::PerceptualColor;

pub(super) const COLOR_BACKGROUND: &str = "#0A0A0C";
pub(super) const COLOR_TEXT: &str = "#FFFFFF";
pub(super) const COLOR_GRID: &str = "#505050";

/// LCh hue per compared profile [A], [B], [C], [D]
pub(super) const PROFILE_HUES: [f64; 4] = [250.0, 350.0, 150.0, 300.0];

/// Gradient pair for one profile in comparison charts
pub(super) struct ColorSet {
    pub(super) top: String,
    pub(super) bottom: String,
}

/// Light top and vivid bottom at the profile's hue
pub(super) fn profile_color_set(index: usize) -> ColorSet {
    let h = PROFILE_HUES[index % PROFILE_HUES.len()];
    let hex = |l, c| PerceptualColor { l, c, h }.to_rgb().to_hex();
    ColorSet {
        top: hex(75.0, 45.0),
        bottom: hex(55.0, 65.0),
    }
}
