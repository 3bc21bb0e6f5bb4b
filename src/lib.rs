//! Meta-Prism core: facet colors and the worldview triangle.
//!
//! Scores in [0, 1] for seven philosophical facets are mapped to colors in
//! CIE LCh and drawn as the seven stacked bands of an apex-up triangle.

pub mod color;
pub mod facet;
pub mod profile;
pub mod scoring;
pub mod store;
pub mod triangle;

pub use color::{
    ContrastInfo, DisplayFormat, PerceptualColor, Rgb, TextColor, color_for_facet, contrast_info,
    format_color, to_display_color,
};
pub use facet::{FACET_COUNT, FacetName, InvalidFacetError, hue_for};
pub use profile::{DomainScore, Profile, ProfileError, Score};
pub use triangle::{Band, InputEvent, Triangle, render_triangle};
