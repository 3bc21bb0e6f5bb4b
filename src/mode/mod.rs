//! CLI mode implementations

mod compare;
mod inspect;

pub use compare::run_compare;
pub use inspect::run_inspect;

use prism::color::DisplayFormat;
use prism::store::ProfileStore;
use prism::{FacetName, Profile};

use crate::output::get_display_name;

/// Output settings shared by all modes
pub struct OutputOptions {
    pub quiet: bool,
    pub format: DisplayFormat,
    pub width: f64,
    pub height: f64,
    pub interactive: bool,
    pub svg_path: Option<String>,
    pub image_path: Option<String>,
}

/// Read a profile JSON file
pub fn load_profile(filename: &str) -> Result<Profile, String> {
    let json = std::fs::read_to_string(filename)
        .map_err(|e| format!("Error opening file {}: {}", filename, e))?;
    Profile::from_json(&json).map_err(|e| format!("{}: {}", get_display_name(filename), e))
}

/// Load profile files into a store keyed [A], [B], ... with the first active
pub fn load_store(filenames: &[String]) -> Result<ProfileStore, String> {
    let mut store = ProfileStore::new();
    for (filename, label) in filenames.iter().zip('A'..='Z') {
        let profile = load_profile(filename)?;
        store
            .insert_new(&label.to_string(), get_display_name(filename), profile)
            .map_err(|e| e.to_string())?;
    }
    let first = store.ids().next().map(str::to_string);
    if let Some(first) = first {
        store.set_active(&first).map_err(|e| e.to_string())?;
    }
    Ok(store)
}

/// Parse `FACET=VALUE` pairs into a profile. Unlike profile files, unknown
/// facet names are rejected here.
pub fn parse_score_args(args: &[String]) -> Result<Profile, String> {
    let mut profile = Profile::neutral();
    for arg in args {
        let (name, value) = arg
            .split_once('=')
            .ok_or_else(|| format!("Invalid score {:?} (expected FACET=VALUE)", arg))?;
        let facet: FacetName = name.parse().map_err(|e| format!("{}", e))?;
        let value: f64 = value
            .trim()
            .parse()
            .map_err(|_| format!("Invalid score value for {}: {:?}", facet, value))?;
        profile.set(facet, value);
    }
    Ok(profile)
}
