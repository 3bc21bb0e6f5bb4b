//! Common test utilities

use std::path::{Path, PathBuf};

/// Scores used across tests: strong apex, weak base, near both extremes
pub const EXTREME_SCORES: [(&str, f64); 7] = [
    ("ontology", 0.9),
    ("epistemology", 0.1),
    ("praxeology", 0.5),
    ("axiology", 0.95),
    ("mythology", 0.3),
    ("cosmology", 0.7),
    ("teleology", 0.05),
];

/// Build a profile JSON object from (name, score) pairs
pub fn profile_json(pairs: &[(&str, f64)]) -> String {
    let entries: Vec<String> = pairs
        .iter()
        .map(|(name, score)| format!("  \"{}\": {}", name, score))
        .collect();
    format!("{{\n{}\n}}\n", entries.join(",\n"))
}

/// Write a profile JSON file into `dir` and return its path
pub fn write_profile(dir: &Path, name: &str, pairs: &[(&str, f64)]) -> PathBuf {
    let path = dir.join(format!("{}.json", name));
    std::fs::write(&path, profile_json(pairs)).unwrap();
    path
}

/// Write arbitrary text as a profile file (for malformed input)
pub fn write_raw(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}
