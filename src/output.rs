use colored::*;
use prism::color::{DisplayFormat, TextColor, contrast_info, format_color};
use prism::{FacetName, Profile, color_for_facet};

fn style_label(label: &str) -> ColoredString {
    label.bold()
}

pub(crate) fn print_error(msg: &str) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

pub(crate) fn print_warning(msg: &str) {
    eprintln!("{}: {}", "warning".yellow().bold(), msg);
}

pub(crate) fn get_display_name(filename: &str) -> &str {
    std::path::Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(filename)
}

pub(crate) fn print_separator(prefix_width: usize) {
    print!("{}", "-".repeat(prefix_width));
    for _ in FacetName::ALL {
        print!("------");
    }
    println!();
}

pub(crate) fn print_header(prefix: &str) {
    print!("{}", prefix);
    for facet in FacetName::ALL {
        print!(" {:>5}", facet.code());
    }
    println!();
}

pub(crate) fn print_facets() {
    println!("Facets (apex to base):");
    for facet in FacetName::ALL {
        println!("  {:>4}: {:<12} hue {:>5.1}", facet.code(), facet.label(), facet.hue());
    }
    println!();
}

/// Colored block in the facet's display color
fn swatch(facet: FacetName, score: f64) -> ColoredString {
    let rgb = color_for_facet(facet, score).to_rgb();
    "    ".on_truecolor(rgb.r, rgb.g, rgb.b)
}

pub(crate) fn print_facet_table(profile: &Profile, format: DisplayFormat) {
    println!(
        "      {:<4} {:<12} {:>5} {:>6} {:>6} {:>6}  {:<24} {:<5} {:>6}  AA",
        "CODE", "FACET", "SCORE", "L", "C", "H", "COLOR", "TEXT", "RATIO"
    );
    println!("{}", "-".repeat(98));
    for ds in profile.iter() {
        let color = color_for_facet(ds.facet, ds.score);
        let info = contrast_info(color);
        let text = match info.text_color {
            TextColor::White => "white",
            TextColor::Black => "black",
        };
        let aa = if info.is_accessible {
            "yes".green()
        } else {
            "no".red()
        };
        println!(
            "{}  {:<4} {:<12} {:>5.2} {:>6.1} {:>6.1} {:>6.1}  {:<24} {:<5} {:>6.2}  {}",
            swatch(ds.facet, ds.score.value()),
            ds.facet.code(),
            ds.facet.label(),
            ds.score.value(),
            color.l,
            color.c,
            color.h,
            format_color(color, format),
            text,
            info.ratio,
            aa
        );
    }
}

pub(crate) fn print_row_styled(label_prefix: &str, label_suffix: &str, values: &[f64]) {
    print!("{}{}", style_label(label_prefix), label_suffix);
    for v in values {
        if v.is_finite() {
            print!(" {:>5.2}", v);
        } else {
            print!("     -");
        }
    }
    println!();
}

pub(crate) fn print_diff_row_styled(label_prefix: &str, label_suffix: &str, a: &[f64], b: &[f64]) {
    print!("{}{}", style_label(label_prefix), label_suffix);
    for (va, vb) in a.iter().zip(b) {
        let diff = vb - va;
        if diff.is_finite() {
            print_colored_diff(diff);
        } else {
            print!("     -");
        }
    }
    println!();
}

fn print_colored_diff(diff: f64) {
    let rounded = (diff * 100.0).round() / 100.0;
    if rounded == 0.0 {
        print!("  0.00");
    } else {
        let formatted = format!("{:>+5.2}", diff);
        if rounded > 0.0 {
            print!(" {}", formatted.green());
        } else {
            print!(" {}", formatted.red());
        }
    }
}

pub(crate) fn print_legend() {
    println!("Score: facet position in [0, 1], missing facets read as 0.50");
    println!("L/C/H: CIE LCh lightness, chroma and hue of the facet color");
    println!("Text/Ratio: label color with the higher WCAG contrast over the fill");
    println!("AA: contrast ratio meets 4.5:1");
}
