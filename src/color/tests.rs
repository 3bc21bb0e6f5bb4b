//! Unit tests for the facet color engine

use super::space::{in_srgb_gamut, lch_to_linear_srgb};
use super::*;
use crate::facet::FacetName;

/// Scores 0.0, 0.05, ..., 1.0
fn score_steps() -> impl Iterator<Item = f64> {
    (0..=20).map(|i| i as f64 / 20.0)
}

#[test]
fn test_color_is_deterministic() {
    for facet in FacetName::ALL {
        for s in score_steps() {
            assert_eq!(color_for_facet(facet, s), color_for_facet(facet, s));
        }
    }
}

#[test]
fn test_scores_below_zero_match_zero() {
    for facet in FacetName::ALL {
        assert_eq!(
            color_for_facet(facet, -0.5),
            color_for_facet(facet, 0.0),
            "{} should clamp negative scores",
            facet
        );
    }
}

#[test]
fn test_scores_above_one_match_one() {
    for facet in FacetName::ALL {
        assert_eq!(color_for_facet(facet, 1.4), color_for_facet(facet, 1.0));
    }
}

#[test]
fn test_chroma_grows_with_score() {
    for facet in FacetName::ALL {
        let low = color_for_facet(facet, 0.1);
        let high = color_for_facet(facet, 0.9);
        assert!(
            high.c >= low.c,
            "{}: chroma at 0.9 ({}) below chroma at 0.1 ({})",
            facet,
            high.c,
            low.c
        );
    }
}

#[test]
fn test_displayed_chroma_grows_with_score() {
    for facet in FacetName::ALL {
        let low = color_for_facet(facet, 0.1).to_rgb().to_perceptual();
        let high = color_for_facet(facet, 0.9).to_rgb().to_perceptual();
        assert!(
            high.c >= low.c,
            "{}: displayed chroma at 0.9 ({:.1}) below 0.1 ({:.1})",
            facet,
            high.c,
            low.c
        );
    }
}

#[test]
fn test_requested_colors_are_displayable() {
    for facet in FacetName::ALL {
        for s in score_steps() {
            let color = color_for_facet(facet, s);
            assert!(
                in_srgb_gamut(lch_to_linear_srgb(color.l, color.c, color.h)),
                "{} at {} leaves the sRGB gamut: {:?}",
                facet,
                s,
                color
            );
            let shown = color.to_rgb().to_perceptual();
            assert!((shown.c - color.c).abs() < 1.0, "{} at {}: {:?}", facet, s, shown);
            assert!((shown.h - color.h).abs() < 3.0, "{} at {}: {:?}", facet, s, shown);
        }
    }
}

#[test]
fn test_facet_ranges_within_default_bounds() {
    for (facet, range) in FacetName::ALL.iter().zip(FACET_RANGES) {
        assert!(range.l_min >= DEFAULT_RANGE.l_min && range.l_max <= DEFAULT_RANGE.l_max);
        assert!(range.c_min >= DEFAULT_RANGE.c_min && range.c_max <= DEFAULT_RANGE.c_max);
        assert!(range.l_min < range.l_max && range.c_min < range.c_max, "{}", facet);
        assert_eq!(range == GOLD_RANGE, facet.is_gold(), "{}", facet);
    }
}

#[test]
fn test_lightness_falls_with_score() {
    for facet in FacetName::ALL {
        let low = color_for_facet(facet, 0.1);
        let high = color_for_facet(facet, 0.9);
        assert!(high.l < low.l, "{}: {} !< {}", facet, high.l, low.l);
    }
}

#[test]
fn test_hue_locked_to_facet() {
    for facet in FacetName::ALL {
        for s in score_steps() {
            let color = color_for_facet(facet, s);
            assert!(
                (color.h - facet.hue()).abs() < 1e-9,
                "{} hue drifted at score {}",
                facet,
                s
            );
        }
    }
}

#[test]
fn test_values_stay_in_safe_range() {
    for facet in FacetName::ALL {
        for s in score_steps() {
            let color = color_for_facet(facet, s);
            assert!((25.0..=95.0).contains(&color.l), "L out of range: {:?}", color);
            assert!((20.0..=85.0).contains(&color.c), "C out of range: {:?}", color);
        }
    }
}

#[test]
fn test_center_boost_applies_near_neutral() {
    let range = ColorEngine::DEFAULT.range(FacetName::Ontology);
    let base = |s: f64| range.c_min + s * (range.c_max - range.c_min);

    let at_peak = color_for_facet(FacetName::Ontology, 0.55);
    assert!((at_peak.c - (base(0.55) + DEFAULT_BOOST.peak)).abs() < 1e-9);

    let outside = color_for_facet(FacetName::Ontology, 0.3);
    assert!((outside.c - base(0.3)).abs() < 1e-9);

    let edge = color_for_facet(FacetName::Ontology, 0.75);
    assert!((edge.c - base(0.75)).abs() < 1e-9);
}

#[test]
fn test_boost_without_width_is_zero() {
    let flat = CenterBoost {
        center: 0.5,
        half_width: 0.0,
        peak: 10.0,
    };
    assert_eq!(flat.amount(0.5), 0.0);
}

#[test]
fn test_custom_engine_without_boost_is_linear() {
    let engine = ColorEngine {
        boost: CenterBoost {
            peak: 0.0,
            ..DEFAULT_BOOST
        },
        ..ColorEngine::default()
    };
    let mid = engine.color(FacetName::Cosmology, 0.5);
    assert!((mid.c - 35.5).abs() < 1e-9);
    assert!((mid.l - 67.5).abs() < 1e-9);
}

#[test]
fn test_custom_engine_range_override() {
    let engine = ColorEngine::default().with_range(FacetName::Mythology, DEFAULT_RANGE);
    let dark = engine.color(FacetName::Mythology, 1.0);
    assert!((dark.l - DEFAULT_RANGE.l_min).abs() < 1e-9);
    assert!((dark.c - DEFAULT_RANGE.c_max).abs() < 1e-9);
    assert_eq!(
        engine.color(FacetName::Ontology, 1.0),
        color_for_facet(FacetName::Ontology, 1.0)
    );
}

#[test]
fn test_gold_facet_uses_adjusted_range() {
    let darkest = color_for_facet(FacetName::Praxeology, 1.0);
    assert!((darkest.l - GOLD_RANGE.l_min).abs() < 1e-9);
    assert!(darkest.c <= GOLD_RANGE.c_max);

    for other in [FacetName::Ontology, FacetName::Teleology] {
        let dark = color_for_facet(other, 1.0);
        assert!(darkest.l > dark.l, "Gold should not get as dark as {}", other);
    }
}

#[test]
fn test_display_color_is_hex() {
    for facet in FacetName::ALL {
        for s in score_steps() {
            let hex = to_display_color(color_for_facet(facet, s));
            assert_eq!(hex.len(), 7);
            assert!(hex.starts_with('#'));
            assert!(hex[1..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }
}

#[test]
fn test_format_variants() {
    let color = PerceptualColor {
        l: 60.0,
        c: 0.0,
        h: 0.0,
    };
    assert_eq!(format_color(color, DisplayFormat::Lch), "lch(60.0% 0.0 0.0)");
    assert!(format_color(color, DisplayFormat::Rgb).starts_with("rgb("));
    assert_eq!(
        format_color(color, DisplayFormat::Hex),
        to_display_color(color)
    );
    assert_eq!("LCH".parse::<DisplayFormat>(), Ok(DisplayFormat::Lch));
    assert!("cmyk".parse::<DisplayFormat>().is_err());
}

#[test]
fn test_red_facet_renders_reddish() {
    let rgb = color_for_facet(FacetName::Ontology, 0.9).to_rgb();
    assert!(rgb.r > rgb.g && rgb.r > rgb.b, "got {:?}", rgb);
}

#[test]
fn test_black_white_contrast_is_21() {
    let ratio = contrast_ratio(Rgb::WHITE, Rgb::BLACK);
    assert!((ratio - 21.0).abs() < 1e-9);
    assert_eq!(ratio, contrast_ratio(Rgb::BLACK, Rgb::WHITE));
}

#[test]
fn test_contrast_ratio_never_below_one() {
    for facet in FacetName::ALL {
        for s in score_steps() {
            let info = contrast_info(color_for_facet(facet, s));
            assert!(info.ratio.is_finite());
            assert!(info.ratio >= 1.0, "{} at {}: {}", facet, s, info.ratio);
        }
    }
}

#[test]
fn test_contrast_picks_better_text_color() {
    for facet in FacetName::ALL {
        let color = color_for_facet(facet, 0.5);
        let info = contrast_info(color);
        let fill = color.to_rgb();
        let other = match info.text_color {
            TextColor::White => Rgb::BLACK,
            TextColor::Black => Rgb::WHITE,
        };
        assert!(info.ratio >= contrast_ratio(fill, other));
        assert_eq!(info.is_accessible, info.ratio >= WCAG_AA_RATIO);
    }
}

#[test]
fn test_light_fill_gets_black_text_dark_fill_white() {
    let light = contrast_info(color_for_facet(FacetName::Mythology, 0.0));
    assert_eq!(light.text_color, TextColor::Black);

    let dark = contrast_info(color_for_facet(FacetName::Teleology, 1.0));
    assert_eq!(dark.text_color, TextColor::White);
}

#[test]
fn test_unknown_facet_name_fails_fast() {
    assert!(try_color_for_name("zodiac", 0.5).is_err());
    assert_eq!(
        try_color_for_name("axiology", 0.5).unwrap(),
        color_for_facet(FacetName::Axiology, 0.5)
    );
}

#[test]
fn test_unknown_facet_name_falls_back_to_neutral() {
    assert_eq!(color_for_name_or_neutral("zodiac", 0.9), NEUTRAL_COLOR);
    let gray = NEUTRAL_COLOR.to_rgb();
    assert_eq!(gray.r, gray.g);
    assert_eq!(gray.g, gray.b);
}
