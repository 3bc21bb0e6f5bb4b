//! PNG charts of facet scores

mod colors;
mod comparison;
mod profile;

pub use comparison::render_comparison_chart;
pub use profile::render_profile_chart;

use charming::{
    Chart, ImageRenderer,
    component::{Axis, Grid, Title},
    element::{AxisLabel, AxisType, Color, LineStyle, SplitLine, TextStyle},
    renderer::ImageFormat,
};
use prism::FacetName;

use colors::{COLOR_BACKGROUND, COLOR_GRID, COLOR_TEXT};

/// Data for a single profile in a chart
pub struct ProfileChartData {
    pub label: char,
    pub name: String,
    /// Scores in facet order
    pub scores: Vec<f64>,
}

/// Chart dimensions (2x for Retina quality)
const CHART_WIDTH: u32 = 2400;
const CHART_HEIGHT: u32 = 1200;

/// Share of the chart width taken by the plot area
const GRID_SHARE: f64 = 0.92;

/// Maximum number of profiles supported for chart rendering
pub fn max_chart_profiles() -> usize {
    colors::PROFILE_HUES.len()
}

/// Score axis, facets along x, dark background.
///
/// `bottom` leaves room for a legend when the caller adds one.
fn facet_score_frame(subtitle: &str, bottom: &str) -> Chart {
    let labels: Vec<String> = FacetName::ALL
        .iter()
        .map(|f| format!("{}\n{}", f.label(), f.code()))
        .collect();

    Chart::new()
        .background_color(Color::Value(COLOR_BACKGROUND.to_string()))
        .title(
            Title::new()
                .text("Facet Scores")
                .subtext(subtitle)
                .left("center")
                .top("3%")
                .text_style(TextStyle::new().color(COLOR_TEXT).font_size(36))
                .subtext_style(TextStyle::new().color(COLOR_TEXT).font_size(24)),
        )
        .grid(
            Grid::new()
                .left("4%")
                .right("4%")
                .bottom(bottom)
                .top("15%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(labels)
                .axis_label(AxisLabel::new().color(COLOR_TEXT).font_size(22)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("score")
                .min(0)
                .max(1)
                .name_text_style(TextStyle::new().color(COLOR_TEXT).font_size(24))
                .axis_label(AxisLabel::new().color(COLOR_TEXT).font_size(20))
                .split_line(
                    SplitLine::new().line_style(LineStyle::new().width(0.5).color(COLOR_GRID)),
                ),
        )
}

/// Bar width in pixels for `per_category` bars side by side in one facet slot
fn bar_width(per_category: usize) -> f64 {
    let slot = CHART_WIDTH as f64 * GRID_SHARE / FacetName::ALL.len() as f64;
    slot * 0.6 / per_category.max(1) as f64
}

fn save_png(chart: &Chart, output_path: &str) -> Result<(), String> {
    let mut renderer = ImageRenderer::new(CHART_WIDTH, CHART_HEIGHT);
    renderer
        .save_format(ImageFormat::Png, chart, output_path)
        .map_err(|e| format!("Failed to save chart: {}", e))
}

/// Round to 2 decimal places for display
fn round_score(v: &f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Check a score vector has one entry per facet
fn check_scores(data: &ProfileChartData) -> Result<(), String> {
    if data.scores.len() != FacetName::ALL.len() {
        return Err(format!(
            "[{}] {}: chart requires {} scores, got {}",
            data.label,
            data.name,
            FacetName::ALL.len(),
            data.scores.len()
        ));
    }
    Ok(())
}
