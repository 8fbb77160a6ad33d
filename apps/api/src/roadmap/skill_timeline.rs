//! Skill timeline projection: splits each stage's skills into what the user
//! already knows and what is left to learn.

use std::collections::HashSet;

use crate::models::profile::SkillRecord;
use crate::models::roadmap::TimelineStage;

/// Lower-cased identities of the user's skills.
pub fn known_skill_names(skills: &[SkillRecord]) -> HashSet<String> {
    skills.iter().map(SkillRecord::identity).collect()
}

/// Returns a projected copy of `timeline`.
///
/// Per stage, required skills the user knows move (in order) to `known_skills`, and
/// the description gains a sentence naming them. Names match ignoring case and
/// padding on both sides. Already-known skills from a previous projection are kept,
/// so projecting twice changes nothing.
pub fn project_timeline(
    timeline: &[TimelineStage],
    known_skill_names: &HashSet<String>,
) -> Vec<TimelineStage> {
    let known: HashSet<String> = known_skill_names
        .iter()
        .map(|name| name.trim().to_lowercase())
        .collect();
    timeline
        .iter()
        .map(|stage| project_stage(stage, &known))
        .collect()
}

fn project_stage(stage: &TimelineStage, known: &HashSet<String>) -> TimelineStage {
    let (newly_known, still_required): (Vec<String>, Vec<String>) = stage
        .required_skills
        .iter()
        .cloned()
        .partition(|skill| known.contains(&skill.trim().to_lowercase()));

    let mut projected = stage.clone();
    projected.required_skills = still_required;

    if !newly_known.is_empty() {
        projected.description = format!(
            "{} You already have experience with {}.",
            stage.description,
            join_with_and(&newly_known)
        );
        projected.known_skills.extend(newly_known);
    }

    projected
}

/// "A", "A and B", "A, B and C".
fn join_with_and(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [head @ .., last] => format!("{} and {}", head.join(", "), last),
    }
}
