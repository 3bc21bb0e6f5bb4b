use std::path::Path;

use prism::scoring::{LikertScale, Question, score_answers};
use prism::{FacetName, Profile};

fn write_profile(dir: &Path, name: &str, profile: &Profile) -> Result<(), String> {
    let json = profile.to_json().map_err(|e| e.to_string())?;
    std::fs::write(dir.join(format!("{}.json", name)), json + "\n").map_err(|e| e.to_string())
}

/// Two items per facet, the second reverse-keyed
fn questionnaire() -> Vec<Question> {
    FacetName::ALL
        .iter()
        .flat_map(|&f| [Question::new(f), Question::reversed(f).with_weight(0.5)])
        .collect()
}

fn main() -> Result<(), String> {
    let dir = Path::new("sample_profiles");
    std::fs::create_dir_all(dir).map_err(|e| e.to_string())?;

    write_profile(dir, "neutral", &Profile::neutral())?;

    // High contrast between facets, including values near both ends
    write_profile(
        dir,
        "extreme",
        &Profile::from_scores([0.9, 0.1, 0.5, 0.95, 0.3, 0.7, 0.05]),
    )?;

    write_profile(
        dir,
        "pragmatist",
        &Profile::from_scores([0.35, 0.55, 0.9, 0.6, 0.2, 0.3, 0.45]),
    )?;

    write_profile(
        dir,
        "mystic",
        &Profile::from_scores([0.7, 0.25, 0.2, 0.55, 0.95, 0.85, 0.8]),
    )?;

    // Scored from Likert answers, interleaved per facet
    let answers = [5, 2, 4, 3, 3, 3, 1, 5, 2, 4, 4, 1, 5, 1];
    let surveyed = score_answers(&questionnaire(), &answers, LikertScale::default())
        .map_err(|e| e.to_string())?;
    write_profile(dir, "surveyed", &surveyed)?;

    println!("Generated: neutral.json, extreme.json, pragmatist.json, mystic.json, surveyed.json");
    Ok(())
}
