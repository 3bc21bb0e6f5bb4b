mod chart;
mod mode;
mod output;

use std::path::Path;

use clap::Parser;
use prism::color::DisplayFormat;
use prism::Profile;
use tracing_subscriber::EnvFilter;

use mode::{OutputOptions, load_store, parse_score_args, run_compare, run_inspect};
use output::{get_display_name, print_error, print_warning};

const MAX_PROFILES: usize = 10;

#[derive(Parser)]
#[command(
    name = "prism",
    version,
    about = "Facet color engine and stacked triangle renderer for seven-facet profiles",
    after_help = "Examples:
  prism                                         Neutral profile (all facets 0.50)
  prism profile.json                            Inspect a profile
  prism -s ontology=0.9 -s tele=0.1             Ad-hoc profile from scores
  prism profile.json --svg triangle.svg         Write the triangle as SVG
  prism me.json you.json                        Compare profiles (first is base)
  prism a.json b.json --image chart.png         Output comparison chart
  prism --format lch --no-color profile.json    LCh colors, no ANSI styling"
)]
struct Args {
    /// Profile JSON files. Up to 10 files for comparison.
    profiles: Vec<String>,

    /// Facet score as FACET=VALUE (name or code, value in [0, 1])
    #[arg(short, long = "score", value_name = "FACET=VALUE")]
    scores: Vec<String>,

    /// Triangle width for SVG output
    #[arg(long, default_value = "300")]
    width: f64,

    /// Triangle height for SVG output
    #[arg(long, default_value = "260")]
    height: f64,

    /// Write the triangle as SVG (single profile only)
    #[arg(long, value_name = "PATH")]
    svg: Option<String>,

    /// Output score chart as PNG image
    #[arg(long, value_name = "PATH")]
    image: Option<String>,

    /// Color display format: hex, rgb or lch
    #[arg(long, default_value = "hex")]
    format: DisplayFormat,

    /// Make SVG bands focusable with keyboard and screen-reader attributes
    #[arg(long)]
    interactive: bool,

    /// Suppress explanations (show data only)
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "prism=debug" } else { "prism=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(msg: &str) -> ! {
    print_error(msg);
    std::process::exit(1);
}

fn check_output_dir(path: &str) {
    if let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fail(&format!("Directory does not exist: {}", parent.display()));
    }
}

fn validate(args: &Args) {
    if args.profiles.len() > MAX_PROFILES {
        fail(&format!("Too many profiles specified (max {})", MAX_PROFILES));
    }

    if !args.scores.is_empty() && !args.profiles.is_empty() {
        fail("--score cannot be used with profile files");
    }

    if !(args.width.is_finite() && args.width > 0.0)
        || !(args.height.is_finite() && args.height > 0.0)
    {
        fail("Width and height must be positive");
    }

    if args.svg.is_some() && args.profiles.len() >= 2 {
        fail("--svg can only be used with a single profile");
    }

    if args.image.is_some() && args.profiles.len() > chart::max_chart_profiles() {
        fail(&format!(
            "--image supports up to {} profiles",
            chart::max_chart_profiles()
        ));
    }

    for path in [&args.svg, &args.image].into_iter().flatten() {
        check_output_dir(path);
    }
}

fn main() {
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    init_logging(args.verbose);
    validate(&args);

    if args.interactive && args.svg.is_none() {
        print_warning("--interactive only affects --svg output");
    }

    let options = OutputOptions {
        quiet: args.quiet,
        format: args.format,
        width: args.width,
        height: args.height,
        interactive: args.interactive,
        svg_path: args.svg.clone(),
        image_path: args.image.clone(),
    };

    let result = match args.profiles.len() {
        0 => {
            let (name, profile) = if args.scores.is_empty() {
                ("neutral", Profile::neutral())
            } else {
                match parse_score_args(&args.scores) {
                    Ok(profile) => ("scores", profile),
                    Err(e) => fail(&e),
                }
            };
            run_inspect(name, &profile, &options)
        }
        1 => {
            let filename = &args.profiles[0];
            mode::load_profile(filename)
                .and_then(|profile| run_inspect(get_display_name(filename), &profile, &options))
        }
        _ => load_store(&args.profiles).and_then(|store| run_compare(&store, &options)),
    };

    if let Err(e) = result {
        fail(&e);
    }
}
