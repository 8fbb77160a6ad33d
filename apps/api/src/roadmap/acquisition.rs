//! Skill acquisition order: merges target-role skills and skill gaps into one
//! prioritised learning queue.

use std::collections::HashSet;

use crate::models::profile::SkillRecord;
use crate::models::skills::{Importance, SkillGap, SkillPriorityEntry, SkillSource, TargetSkill};
use crate::roadmap::skill_timeline::known_skill_names;

/// Gap scores above this are labelled `Important`, the rest `Useful`.
const IMPORTANT_GAP_THRESHOLD: f64 = 70.0;

/// Priority for a target skill's importance label. Unknown labels score 1.
pub fn importance_score(importance: Option<Importance>) -> f64 {
    match importance {
        Some(Importance::Critical) => 10.0,
        Some(Importance::Important) => 7.0,
        Some(Importance::Useful) => 4.0,
        None => 1.0,
    }
}

/// Builds the learning queue, highest priority first.
///
/// Target skills the user lacks go in first, then gaps that are neither known nor
/// already queued. The sort is stable, so equal priorities keep insertion order and
/// targets win ties against gaps.
pub fn rank_skill_acquisition(
    known_skills: &[SkillRecord],
    skill_gaps: &[SkillGap],
    target_skills: &[TargetSkill],
) -> Vec<SkillPriorityEntry> {
    let known = known_skill_names(known_skills);
    let mut queued: HashSet<String> = HashSet::new();
    let mut entries = Vec::new();

    for skill in target_skills {
        let identity = skill.name.trim().to_lowercase();
        if known.contains(&identity) {
            continue;
        }
        let importance = Importance::parse(&skill.importance);
        queued.insert(identity);
        entries.push(SkillPriorityEntry {
            name: skill.name.clone(),
            priority: importance_score(importance),
            importance_label: importance.unwrap_or(Importance::Useful),
            source_tag: SkillSource::Target,
        });
    }

    for gap in skill_gaps {
        let identity = gap.name.trim().to_lowercase();
        if known.contains(&identity) || !queued.insert(identity) {
            continue;
        }
        let gap_score = if gap.gap_score.is_finite() {
            gap.gap_score.clamp(0.0, 100.0)
        } else {
            0.0
        };
        entries.push(SkillPriorityEntry {
            name: gap.name.clone(),
            priority: gap_score / 10.0,
            importance_label: if gap_score > IMPORTANT_GAP_THRESHOLD {
                Importance::Important
            } else {
                Importance::Useful
            },
            source_tag: SkillSource::Gap,
        });
    }

    // Vec::sort_by is stable
    entries.sort_by(|a, b| {
        b.priority
            .partial_cmp(&a.priority)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    entries
}
