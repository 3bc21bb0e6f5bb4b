//! Multiple profile comparison mode

use colored::*;
use prism::store::ProfileStore;

use crate::chart;
use crate::output::{
    print_diff_row_styled, print_error, print_facets, print_header, print_row_styled,
    print_separator,
};

use super::OutputOptions;

/// Compare every profile in the store against the active one
pub fn run_compare(store: &ProfileStore, options: &OutputOptions) -> Result<(), String> {
    let base = store
        .active()
        .ok_or_else(|| "No active profile to compare against".to_string())?;

    println!("Comparison (base: [{}]):", base.id);
    for saved in store.iter() {
        let label = format!("[{}]", saved.id);
        println!("  {} {}", label.bold(), saved.name);
    }
    println!();

    if !options.quiet {
        print_facets();
    }

    println!("[Facet Scores]");
    print_header("        ");
    print_separator(8);

    let base_scores = base.profile.values();
    print_row_styled(&format!("[{}]", base.id), "     ", &base_scores);

    for saved in store.iter().filter(|s| s.id != base.id) {
        let scores = saved.profile.values();
        print_separator(8);
        print_row_styled(&format!("[{}]", saved.id), "     ", &scores);
        print_diff_row_styled(&format!("{}-{}", saved.id, base.id), "     ", &base_scores, &scores);
    }

    if !options.quiet {
        println!();
        println!("Diff: score change relative to [{}]", base.id);
    }

    if let Some(path) = &options.image_path {
        let chart_data: Vec<chart::ProfileChartData> = store
            .iter()
            .map(|s| chart::ProfileChartData {
                label: s.id.chars().next().unwrap_or('?'),
                name: s.name.clone(),
                scores: s.profile.values().to_vec(),
            })
            .collect();

        if let Err(e) = chart::render_comparison_chart(&chart_data, path) {
            print_error(&e);
        } else {
            eprintln!("Chart saved to: {}", path);
        }
    }

    Ok(())
}
