//! Skill and career recommendations built from the same inputs as the
//! acquisition queue: the user's skills, the target role's skills and the
//! user's experience.

use std::collections::HashMap;

use crate::models::profile::{SkillLevel, SkillRecord, UserProfile};
use crate::models::roadmap::CareerRecommendation;
use crate::models::skills::{
    Importance, SkillImprovement, SkillRecommendations, SkillToLearn, TargetSkill,
};

/// Experience the "required experience" hint counts towards.
const SENIOR_MARK_YEARS: f64 = 5.0;

fn importance_weight(label: &str) -> u8 {
    Importance::parse(label).map_or(0, Importance::weight)
}

/// Skills to improve (held below the target level) and skills to learn (not held),
/// each sorted by importance. Sorting is stable, so equal importance keeps input order.
pub fn recommend_skills(
    known_skills: &[SkillRecord],
    target_skills: &[TargetSkill],
) -> SkillRecommendations {
    let mut targets: HashMap<String, &TargetSkill> = HashMap::new();
    for target in target_skills {
        targets.entry(target.name.trim().to_lowercase()).or_insert(target);
    }

    let mut skills_to_improve: Vec<SkillImprovement> = known_skills
        .iter()
        .filter_map(|skill| {
            let target = targets.get(&skill.identity())?;
            let target_level = target
                .level
                .as_deref()
                .and_then(SkillLevel::parse)
                .unwrap_or_default();
            (skill.level.rank() < target_level.rank()).then(|| SkillImprovement {
                name: skill.name.clone(),
                current_level: skill.level,
                target_level,
                importance: target.importance.clone(),
            })
        })
        .collect();

    let held: Vec<String> = known_skills.iter().map(SkillRecord::identity).collect();
    let mut skills_to_learn: Vec<SkillToLearn> = target_skills
        .iter()
        .filter(|target| !held.contains(&target.name.trim().to_lowercase()))
        .map(|target| SkillToLearn {
            name: target.name.clone(),
            level: target.level.clone(),
            importance: target.importance.clone(),
        })
        .collect();

    skills_to_improve.sort_by_key(|s| std::cmp::Reverse(importance_weight(&s.importance)));
    skills_to_learn.sort_by_key(|s| std::cmp::Reverse(importance_weight(&s.importance)));

    SkillRecommendations {
        skills_to_improve,
        skills_to_learn,
    }
}

/// Career bracket for the profile's experience: under 2 years, under 5, under 8, then 8+.
pub fn recommend_career_path(profile: &UserProfile) -> CareerRecommendation {
    let experience = profile.effective_experience();

    let (stage, next_roles, timeframe): (&str, &[&str], &str) = if experience < 2.0 {
        (
            "Early Career",
            &["Mid-level Developer", "Specialized Developer (Frontend/Backend)"],
            "1-2 years",
        )
    } else if experience < 5.0 {
        (
            "Mid Career",
            &["Senior Developer", "Team Lead", "Specialized Expert"],
            "2-3 years",
        )
    } else if experience < 8.0 {
        (
            "Senior Level",
            &["Lead Developer", "Technical Architect", "Engineering Manager"],
            "2-4 years",
        )
    } else {
        (
            "Expert Level",
            &["Technical Director", "CTO", "VP of Engineering"],
            "3-5 years",
        )
    };

    let remaining = ((SENIOR_MARK_YEARS - experience).max(0.0) * 10.0).round() / 10.0;

    CareerRecommendation {
        current_stage: stage.to_string(),
        next_roles: next_roles.iter().map(|r| r.to_string()).collect(),
        timeframe: timeframe.to_string(),
        required_experience: format!("{remaining} more years"),
    }
}
