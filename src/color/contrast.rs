//! WCAG contrast between facet colors and text

use super::space::decode_srgb;
use super::{PerceptualColor, Rgb};

/// WCAG AA threshold for body text
pub const WCAG_AA_RATIO: f64 = 4.5;

/// Foreground to draw over a facet fill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextColor {
    White,
    Black,
}

impl TextColor {
    pub fn rgb(self) -> Rgb {
        match self {
            TextColor::White => Rgb::WHITE,
            TextColor::Black => Rgb::BLACK,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastInfo {
    pub text_color: TextColor,
    /// Contrast ratio of `text_color` over the fill, in [1, 21]
    pub ratio: f64,
    pub is_accessible: bool,
}

/// WCAG 2.1 relative luminance in [0, 1]
pub fn relative_luminance(rgb: Rgb) -> f64 {
    0.2126 * decode_srgb(rgb.r) + 0.7152 * decode_srgb(rgb.g) + 0.0722 * decode_srgb(rgb.b)
}

/// WCAG 2.1 contrast ratio, independent of argument order
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Pick white or black text for a fill, whichever contrasts more
pub fn contrast_info(color: PerceptualColor) -> ContrastInfo {
    let fill = color.to_rgb();
    let on_white = contrast_ratio(fill, Rgb::WHITE);
    let on_black = contrast_ratio(fill, Rgb::BLACK);

    let (text_color, ratio) = if on_white >= on_black {
        (TextColor::White, on_white)
    } else {
        (TextColor::Black, on_black)
    };

    ContrastInfo {
        text_color,
        ratio,
        is_accessible: ratio >= WCAG_AA_RATIO,
    }
}
