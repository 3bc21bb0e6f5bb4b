//! Triangle renderer: facet bands stacked apex to base

mod geometry;
mod interaction;
mod svg;

pub use geometry::{Point, Trapezoid};
pub use interaction::{Emphasis, InputEvent, Interaction, InteractionState, Key};

use tracing::trace;

use crate::color::{PerceptualColor, Rgb, color_for_facet};
use crate::facet::{FACET_COUNT, FacetName};
use crate::profile::{Profile, Score};

/// One facet's region of the triangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub facet: FacetName,
    /// Position from the apex, 0-based
    pub index: usize,
    pub score: Score,
    pub color: PerceptualColor,
    pub fill: Rgb,
    pub shape: Trapezoid,
}

/// A rendered triangle with its own interaction state
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    width: f64,
    height: f64,
    interactive: bool,
    bands: [Band; FACET_COUNT],
    interaction: Interaction,
}

/// Render the seven bands for `profile`.
///
/// A missing profile renders every facet at the neutral score. Non-positive
/// dimensions give a zero-area triangle.
pub fn render_triangle(
    profile: Option<&Profile>,
    width: f64,
    height: f64,
    interactive: bool,
) -> Triangle {
    let neutral = Profile::neutral();
    let profile = profile.unwrap_or(&neutral);

    let (width, height) = geometry::sanitize_dimensions(width, height);
    let shapes = geometry::band_shapes(width, height);

    let bands = std::array::from_fn(|i| {
        let facet = FacetName::ALL[i];
        let score = profile.get(facet);
        let color = color_for_facet(facet, score);
        let fill = color.to_rgb();
        trace!(facet = %facet, fill = %fill.to_hex(), "band");
        Band {
            facet,
            index: i,
            score,
            color,
            fill,
            shape: shapes[i],
        }
    });

    Triangle {
        width,
        height,
        interactive,
        bands,
        interaction: Interaction::default(),
    }
}

impl Triangle {
    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Bands in facet order, apex first
    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    pub fn band(&self, facet: FacetName) -> &Band {
        &self.bands[facet.index()]
    }

    pub fn state(&self) -> InteractionState {
        self.interaction.state()
    }

    pub fn emphasis(&self, facet: FacetName) -> Emphasis {
        self.interaction.emphasis(facet)
    }

    /// Feed an input event. Ignored unless the triangle is interactive.
    pub fn handle_event<F>(&mut self, event: InputEvent, on_band_select: F) -> bool
    where
        F: FnMut(FacetName),
    {
        if !self.interactive {
            return false;
        }
        self.interaction.handle(event, on_band_select)
    }

    /// Facet whose band contains `point`, if any
    pub fn hit_test(&self, point: Point) -> Option<FacetName> {
        if !point.x.is_finite() || !point.y.is_finite() {
            return None;
        }
        if self.width <= 0.0 || self.height <= 0.0 || point.y < 0.0 || point.y > self.height {
            return None;
        }
        let half_width = (point.y / self.height) * (self.width / 2.0);
        if (point.x - self.width / 2.0).abs() > half_width {
            return None;
        }
        let index = ((point.y / self.height) * FACET_COUNT as f64) as usize;
        FacetName::from_index(index.min(FACET_COUNT - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{ColorEngine, contrast_info};

    fn extreme_profile() -> Profile {
        Profile::from_pairs([
            ("ontology", 0.9),
            ("epistemology", 0.1),
            ("praxeology", 0.5),
            ("axiology", 0.95),
            ("mythology", 0.3),
            ("cosmology", 0.7),
            ("teleology", 0.05),
        ])
    }

    #[test]
    fn test_renders_seven_bands_in_order() {
        let triangle = render_triangle(Some(&extreme_profile()), 300.0, 260.0, false);
        let facets: Vec<_> = triangle.bands().iter().map(|b| b.facet).collect();
        assert_eq!(facets, FacetName::ALL.to_vec());
        assert!(triangle.bands().iter().enumerate().all(|(i, b)| b.index == i));
    }

    #[test]
    fn test_extreme_profile_emphasis() {
        let triangle = render_triangle(Some(&extreme_profile()), 300.0, 260.0, false);
        let bands = triangle.bands();

        let max_chroma = bands.iter().map(|b| b.color.c).fold(f64::MIN, f64::max);
        assert_eq!(triangle.band(FacetName::Axiology).color.c, max_chroma);

        let shown = |b: &Band| b.fill.to_perceptual().c;
        let max_shown = bands.iter().map(shown).fold(f64::MIN, f64::max);
        assert_eq!(shown(triangle.band(FacetName::Axiology)), max_shown);

        let min_chroma = bands.iter().map(|b| b.color.c).fold(f64::MAX, f64::min);
        let teleology = triangle.band(FacetName::Teleology).color;
        assert_eq!(teleology.c, min_chroma);
        let max_lightness = bands.iter().map(|b| b.color.l).fold(f64::MIN, f64::max);
        assert_eq!(teleology.l, max_lightness, "Lowest score should be the palest band");
    }

    #[test]
    fn test_missing_profile_is_neutral_and_balanced() {
        let triangle = render_triangle(None, 300.0, 260.0, false);
        assert_eq!(triangle.bands().len(), FACET_COUNT);
        assert!(triangle.bands().iter().all(|b| b.score == Score::NEUTRAL));

        // each band sits halfway along its own gamut-fitted range
        for band in triangle.bands() {
            let range = ColorEngine::DEFAULT.range(band.facet);
            let lightness_share = (range.l_max - band.color.l) / (range.l_max - range.l_min);
            assert!((lightness_share - 0.5).abs() < 1e-9, "{}", band.facet);
            assert!((60.0..=82.0).contains(&band.color.l), "{} too light or dark", band.facet);
            assert!(contrast_info(band.color).ratio >= 1.0);
        }
    }

    #[test]
    fn test_partial_profile_defaults_missing() {
        let profile = Profile::from_pairs([("cosmology", 0.8)]);
        let triangle = render_triangle(Some(&profile), 300.0, 260.0, false);
        assert_eq!(triangle.bands().len(), FACET_COUNT);
        assert_eq!(triangle.band(FacetName::Cosmology).score.value(), 0.8);
        assert_eq!(triangle.band(FacetName::Ontology).score, Score::NEUTRAL);
    }

    #[test]
    fn test_fill_matches_color_engine() {
        let triangle = render_triangle(Some(&extreme_profile()), 300.0, 260.0, false);
        for band in triangle.bands() {
            let expected = color_for_facet(band.facet, band.score).to_rgb();
            assert_eq!(band.fill, expected);
        }
    }

    #[test]
    fn test_non_positive_dimensions_do_not_fail() {
        let triangle = render_triangle(None, -5.0, 0.0, true);
        assert_eq!(triangle.width(), 0.0);
        assert_eq!(triangle.height(), 0.0);
        assert_eq!(triangle.bands().len(), FACET_COUNT);
        assert!(triangle.bands().iter().all(|b| b.shape.area() == 0.0));
        assert_eq!(triangle.hit_test(Point { x: 0.0, y: 0.0 }), None);
    }

    #[test]
    fn test_static_triangle_ignores_events() {
        let mut triangle = render_triangle(None, 300.0, 260.0, false);
        let mut selected = None;
        let changed = triangle.handle_event(InputEvent::Click(FacetName::Ontology), |f| {
            selected = Some(f)
        });
        assert!(!changed);
        assert_eq!(selected, None);
        assert_eq!(triangle.state(), InteractionState::Idle);
    }

    #[test]
    fn test_interactive_triangle_selects() {
        let mut triangle = render_triangle(None, 300.0, 260.0, true);
        let mut selected = Vec::new();
        triangle.handle_event(InputEvent::FocusIn(FacetName::Ontology), |f| selected.push(f));
        triangle.handle_event(InputEvent::Key(Key::ArrowDown), |f| selected.push(f));
        triangle.handle_event(InputEvent::Key(Key::Enter), |f| selected.push(f));
        assert_eq!(selected, vec![FacetName::Epistemology]);
        assert_eq!(triangle.emphasis(FacetName::Epistemology), Emphasis::Focused);
    }

    #[test]
    fn test_hover_does_not_change_colors() {
        let mut triangle = render_triangle(Some(&extreme_profile()), 300.0, 260.0, true);
        let before: Vec<_> = triangle.bands().iter().map(|b| b.fill).collect();
        triangle.handle_event(InputEvent::PointerEnter(FacetName::Axiology), |_| {});
        let after: Vec<_> = triangle.bands().iter().map(|b| b.fill).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_hit_test_maps_rows_to_facets() {
        let triangle = render_triangle(None, 300.0, 260.0, true);
        assert_eq!(
            triangle.hit_test(Point { x: 150.0, y: 5.0 }),
            Some(FacetName::Ontology)
        );
        assert_eq!(
            triangle.hit_test(Point { x: 150.0, y: 255.0 }),
            Some(FacetName::Teleology)
        );
        // outside the slanted edge
        assert_eq!(triangle.hit_test(Point { x: 5.0, y: 20.0 }), None);
    }

    #[test]
    fn test_hit_test_rejects_non_finite_points() {
        let triangle = render_triangle(None, 300.0, 260.0, true);
        for point in [
            Point { x: f64::NAN, y: f64::NAN },
            Point { x: 150.0, y: f64::NAN },
            Point { x: f64::NAN, y: 200.0 },
            Point { x: f64::INFINITY, y: 200.0 },
            Point { x: 150.0, y: f64::NEG_INFINITY },
        ] {
            assert_eq!(triangle.hit_test(point), None, "{:?}", point);
        }
    }

    #[test]
    fn test_zero_width_triangle_has_no_hits() {
        let triangle = render_triangle(None, 0.0, 260.0, true);
        assert_eq!(triangle.width(), 0.0);
        assert_eq!(triangle.height(), 0.0);
        assert_eq!(triangle.hit_test(Point { x: 0.0, y: 200.0 }), None);
        assert_eq!(triangle.hit_test(Point { x: 0.0, y: 0.0 }), None);
        assert!(triangle.bands().iter().all(|b| b.shape.area() == 0.0));
    }

    #[test]
    fn test_triangles_are_send() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Triangle>();
    }
}
