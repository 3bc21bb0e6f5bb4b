//! SVG output for rendered triangles

use std::fmt::{self, Write};

use super::{Band, Triangle};

const STROKE_COLOR: &str = "#111827";

fn write_header<W: Write>(out: &mut W, width: f64, height: f64) -> fmt::Result {
    writeln!(
        out,
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w:.2}" height="{h:.2}" viewBox="0 0 {w:.2} {h:.2}" role="img" aria-label="Worldview signature">"##,
        w = width,
        h = height,
    )
}

fn write_band<W: Write>(out: &mut W, triangle: &Triangle, band: &Band) -> fmt::Result {
    let points = band
        .shape
        .corners()
        .iter()
        .map(|p| format!("{:.2},{:.2}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ");
    let emphasis = triangle.emphasis(band.facet);

    write!(
        out,
        r##"  <polygon data-facet="{key}" points="{points}" fill="{fill}" stroke="{STROKE_COLOR}" stroke-width="{sw}" stroke-opacity="{so}""##,
        key = band.facet.label().to_lowercase(),
        fill = band.fill.to_hex(),
        sw = emphasis.stroke_width(),
        so = emphasis.stroke_opacity(),
    )?;
    if triangle.is_interactive() {
        write!(
            out,
            r##" tabindex="0" role="button" aria-label="{} {}""##,
            band.facet, band.score
        )?;
    }
    writeln!(out, "><title>{}: {}</title></polygon>", band.facet, band.score)
}

impl Triangle {
    /// Write a standalone SVG document, one polygon per band in facet order
    pub fn write_svg<W: Write>(&self, out: &mut W) -> fmt::Result {
        write_header(out, self.width, self.height)?;
        writeln!(out, r#"<g class="prism-bands">"#)?;
        for band in self.bands() {
            write_band(out, self, band)?;
        }
        writeln!(out, "</g>")?;
        writeln!(out, "</svg>")
    }

    pub fn to_svg(&self) -> String {
        let mut svg = String::new();
        // writing into a String cannot fail
        let _ = self.write_svg(&mut svg);
        svg
    }
}
