//! Single profile bar chart, each facet drawn in its computed color

use charming::{element::ItemStyle, series::Bar};
use prism::{FacetName, color_for_facet, to_display_color};

use super::{ProfileChartData, bar_width, check_scores, facet_score_frame, round_score, save_png};

/// Render one profile's scores to a PNG file.
///
/// Each facet is its own series stacked on a shared key, so every bar can
/// carry the facet's color while staying in its own category.
pub fn render_profile_chart(data: &ProfileChartData, output_path: &str) -> Result<(), String> {
    check_scores(data)?;

    let mut chart = facet_score_frame(&data.name, "7%");
    for (i, facet) in FacetName::ALL.iter().enumerate() {
        let score = data.scores[i];
        let fill = to_display_color(color_for_facet(*facet, score));

        // zero everywhere except this facet's own category
        let bar_data: Vec<f64> = (0..FacetName::ALL.len())
            .map(|j| if j == i { round_score(&score) } else { 0.0 })
            .collect();

        chart = chart.series(
            Bar::new()
                .name(facet.label())
                .data(bar_data)
                .stack("facets")
                .bar_width(bar_width(1))
                .item_style(ItemStyle::new().color(fill.as_str())),
        );
    }

    save_png(&chart, output_path)
}
