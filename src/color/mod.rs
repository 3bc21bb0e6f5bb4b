//! Facet color engine: perceptual colors, display conversion, contrast

mod contrast;
mod engine;
mod space;

pub use contrast::{
    ContrastInfo, TextColor, WCAG_AA_RATIO, contrast_info, contrast_ratio, relative_luminance,
};
pub use engine::{
    CenterBoost, ColorEngine, DEFAULT_BOOST, DEFAULT_RANGE, FACET_RANGES, GOLD_RANGE, NEUTRAL_COLOR,
    ToneRange, color_for_facet, color_for_name_or_neutral, try_color_for_name,
};

use std::fmt;
use std::str::FromStr;

/// A color in CIE LCh (D65): lightness 0-100, chroma, hue in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerceptualColor {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl PerceptualColor {
    /// Gamut-mapped 8-bit sRGB
    pub fn to_rgb(self) -> Rgb {
        let [r, g, b] = space::lch_to_srgb8(self.l, self.c, self.h);
        Rgb { r, g, b }
    }
}

impl fmt::Display for PerceptualColor {
    /// CSS color: lch(L% C H)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lch({:.1}% {:.1} {:.1})", self.l, self.c, self.h)
    }
}

/// 8-bit sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    /// Measured LCh of this color, inverse of `PerceptualColor::to_rgb`
    pub fn to_perceptual(self) -> PerceptualColor {
        let (l, c, h) = space::srgb8_to_lch([self.r, self.g, self.b]);
        PerceptualColor { l, c, h }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    /// CSS color: rgb(r, g, b)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Output notation for display colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayFormat {
    #[default]
    Hex,
    Rgb,
    Lch,
}

impl FromStr for DisplayFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hex" => Ok(DisplayFormat::Hex),
            "rgb" => Ok(DisplayFormat::Rgb),
            "lch" => Ok(DisplayFormat::Lch),
            other => Err(format!("unknown color format: {} (expected hex, rgb or lch)", other)),
        }
    }
}

/// Display color as `#rrggbb`
pub fn to_display_color(color: PerceptualColor) -> String {
    color.to_rgb().to_hex()
}

pub fn format_color(color: PerceptualColor, format: DisplayFormat) -> String {
    match format {
        DisplayFormat::Hex => to_display_color(color),
        DisplayFormat::Rgb => color.to_rgb().to_string(),
        DisplayFormat::Lch => color.to_string(),
    }
}

#[cfg(test)]
mod tests;
