//! Single profile inspection mode

use prism::{Profile, render_triangle};

use crate::chart;
use crate::output::{print_error, print_facet_table, print_facets, print_legend};

use super::OutputOptions;

/// Print facet colors for one profile and write the requested outputs
pub fn run_inspect(name: &str, profile: &Profile, options: &OutputOptions) -> Result<(), String> {
    if !options.quiet {
        println!();
        println!("Profile: {}", name);
        println!();
        print_facets();
    }

    println!("[Facet Colors]");
    print_facet_table(profile, options.format);

    if !options.quiet {
        println!();
        print_legend();
    }

    if let Some(path) = &options.svg_path {
        let triangle = render_triangle(
            Some(profile),
            options.width,
            options.height,
            options.interactive,
        );
        std::fs::write(path, triangle.to_svg())
            .map_err(|e| format!("Failed to save SVG: {}", e))?;
        eprintln!("Triangle saved to: {}", path);
    }

    if let Some(path) = &options.image_path {
        let chart_data = chart::ProfileChartData {
            label: 'A',
            name: name.to_string(),
            scores: profile.values().to_vec(),
        };
        if let Err(e) = chart::render_profile_chart(&chart_data, path) {
            print_error(&e);
        } else {
            eprintln!("Chart saved to: {}", path);
        }
    }

    Ok(())
}
