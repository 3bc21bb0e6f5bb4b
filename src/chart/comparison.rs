//! Grouped bar chart comparing facet scores across profiles

use charming::{
    component::Legend,
    element::{Color, ColorStop, ItemStyle, Label, LabelPosition, TextStyle},
    series::Bar,
};

use super::colors::{COLOR_TEXT, PROFILE_HUES, profile_color_set};
use super::{ProfileChartData, bar_width, check_scores, facet_score_frame, round_score, save_png};

fn series_name(profile: &ProfileChartData) -> String {
    format!("[{}] {}", profile.label, profile.name)
}

/// Render a comparison chart to a PNG file (supports 2-4 profiles)
pub fn render_comparison_chart(
    profiles: &[ProfileChartData],
    output_path: &str,
) -> Result<(), String> {
    if profiles.len() < 2 || profiles.len() > PROFILE_HUES.len() {
        return Err(format!("Chart requires 2-{} profiles", PROFILE_HUES.len()));
    }
    for profile in profiles {
        check_scores(profile)?;
    }

    let subtitle = profiles
        .iter()
        .map(series_name)
        .collect::<Vec<_>>()
        .join("  vs  ");
    let legend_data: Vec<(String, String)> = profiles
        .iter()
        .map(|p| (series_name(p), "rect".to_string()))
        .collect();

    let mut chart = facet_score_frame(&subtitle, "10%").legend(
        Legend::new()
            .data(legend_data)
            .bottom("3%")
            .item_gap(40)
            .text_style(TextStyle::new().color(COLOR_TEXT).font_size(24)),
    );

    for (i, profile) in profiles.iter().enumerate() {
        let colors = profile_color_set(i);
        let gradient = Color::LinearGradient {
            x: 0.0,
            y: 0.0,
            x2: 0.0,
            y2: 1.0,
            color_stops: vec![
                ColorStop::new(0.0, colors.top.as_str()),
                ColorStop::new(1.0, colors.bottom.as_str()),
            ],
        };

        chart = chart.series(
            Bar::new()
                .name(series_name(profile))
                .data(profile.scores.iter().map(round_score).collect::<Vec<f64>>())
                .bar_width(bar_width(profiles.len()))
                .item_style(ItemStyle::new().color(gradient).opacity(0.9))
                .label(
                    Label::new()
                        .show(true)
                        .position(LabelPosition::Top)
                        .color(COLOR_TEXT)
                        .font_size(16)
                        .formatter("{c}"),
                ),
        );
    }

    save_png(&chart, output_path)
}
