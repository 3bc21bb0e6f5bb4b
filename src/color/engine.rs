//! Score to LCh mapping per facet

use tracing::trace;

use super::PerceptualColor;
use crate::facet::{FACET_COUNT, FacetName, InvalidFacetError};
use crate::profile::Score;

/// Lightness and chroma span a score is mapped across
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneRange {
    pub l_min: f64,
    pub l_max: f64,
    pub c_min: f64,
    pub c_max: f64,
}

impl ToneRange {
    /// Higher scores are darker
    fn lightness(&self, s: f64) -> f64 {
        self.l_max - s * (self.l_max - self.l_min)
    }

    /// Higher scores are more chromatic
    fn chroma(&self, s: f64) -> f64 {
        self.c_min + s * (self.c_max - self.c_min)
    }
}

/// Extra chroma for near-neutral scores, which otherwise read as flat.
///
/// Triangular: `peak` at `center`, falling to zero at `center ± half_width`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterBoost {
    pub center: f64,
    pub half_width: f64,
    pub peak: f64,
}

impl CenterBoost {
    pub fn amount(&self, s: f64) -> f64 {
        if self.half_width <= 0.0 {
            return 0.0;
        }
        let distance = (s - self.center).abs();
        if distance >= self.half_width {
            0.0
        } else {
            self.peak * (1.0 - distance / self.half_width)
        }
    }
}

const fn tone(l_min: f64, l_max: f64, c_min: f64, c_max: f64) -> ToneRange {
    ToneRange {
        l_min,
        l_max,
        c_min,
        c_max,
    }
}

/// Outer bounds every facet range stays within
pub const DEFAULT_RANGE: ToneRange = tone(25.0, 95.0, 20.0, 85.0);

/// Yellow turns olive when dark and leaves the gamut when light and vivid
pub const GOLD_RANGE: ToneRange = tone(60.0, 90.0, 20.0, 63.0);

/// Tone range per facet, fitted to the sRGB gamut at the facet's hue.
///
/// Every color a range produces, center boost included, is displayable with
/// at least one chroma unit to spare, so displayed chroma still rises with the
/// score after conversion.
pub const FACET_RANGES: [ToneRange; FACET_COUNT] = [
    tone(45.0, 85.0, 20.0, 80.0), // Ontology
    tone(55.0, 85.0, 20.0, 72.0), // Epistemology
    GOLD_RANGE,                   // Praxeology
    tone(65.0, 95.0, 20.0, 83.0), // Axiology
    tone(64.0, 94.0, 20.0, 35.0), // Mythology: teal has the smallest gamut
    tone(50.0, 85.0, 20.0, 51.0), // Cosmology
    tone(40.0, 90.0, 20.0, 85.0), // Teleology
];

/// Boost applied over roughly 0.4..0.7
pub const DEFAULT_BOOST: CenterBoost = CenterBoost {
    center: 0.55,
    half_width: 0.15,
    peak: 10.0,
};

/// Neutral gray used when a facet identifier cannot be resolved
pub const NEUTRAL_COLOR: PerceptualColor = PerceptualColor {
    l: 60.0,
    c: 0.0,
    h: 0.0,
};

/// Tunable facet color mapping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorEngine {
    /// Indexed by facet
    pub ranges: [ToneRange; FACET_COUNT],
    pub boost: CenterBoost,
}

impl Default for ColorEngine {
    fn default() -> Self {
        ColorEngine::DEFAULT
    }
}

impl ColorEngine {
    pub const DEFAULT: ColorEngine = ColorEngine {
        ranges: FACET_RANGES,
        boost: DEFAULT_BOOST,
    };

    pub fn range(&self, facet: FacetName) -> &ToneRange {
        &self.ranges[facet.index()]
    }

    /// Replace one facet's range
    pub fn with_range(mut self, facet: FacetName, range: ToneRange) -> ColorEngine {
        self.ranges[facet.index()] = range;
        self
    }

    /// Color of `facet` at `score`. The hue never depends on the score.
    pub fn color(&self, facet: FacetName, score: impl Into<Score>) -> PerceptualColor {
        let s = score.into().value();
        let range = self.range(facet);

        let l = range.lightness(s);
        let c = (range.chroma(s) + self.boost.amount(s)).min(range.c_max);
        let h = facet.hue();

        trace!(facet = %facet, score = s, l, c, h, "facet color");
        PerceptualColor { l, c, h }
    }
}

/// Color of `facet` at `score` with the default tuning
pub fn color_for_facet(facet: FacetName, score: impl Into<Score>) -> PerceptualColor {
    ColorEngine::DEFAULT.color(facet, score)
}

/// Resolve a facet by name, failing on unknown identifiers
pub fn try_color_for_name(name: &str, score: f64) -> Result<PerceptualColor, InvalidFacetError> {
    let facet: FacetName = name.parse()?;
    Ok(color_for_facet(facet, score))
}

/// Resolve a facet by name, falling back to neutral gray
pub fn color_for_name_or_neutral(name: &str, score: f64) -> PerceptualColor {
    try_color_for_name(name, score).unwrap_or_else(|e| {
        tracing::warn!("{}, using neutral color", e);
        NEUTRAL_COLOR
    })
}
