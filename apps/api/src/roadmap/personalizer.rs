//! Roadmap Personalizer: turns a role's standard roadmap into one user's roadmap.
//!
//! Pure function of its inputs: the template is cloned, never modified, so one
//! catalog entry can serve any number of concurrent requests.
//!
//! Pipeline:
//! 1. Stage the career path by experience (and target role)
//! 2. Project the skill timeline against known skills
//! 3. Bend the salary curve toward the user's reported salary
//! 4. Mark the user's current position on the curve
//! 5. Apply the target-role salary modifier to future points

use tracing::debug;

use crate::errors::RoadmapError;
use crate::models::profile::{SkillRecord, UserProfile};
use crate::models::roadmap::{ExperienceSalary, PersonalizedRoadmap, RoadmapTemplate};
use crate::roadmap::career_path::stage_career_path;
use crate::roadmap::salary_curve::{apply_salary_differential, estimate_salary};
use crate::roadmap::skill_timeline::{known_skill_names, project_timeline};

/// Stages every career path must have.
pub const CAREER_PATH_STAGES: usize = 4;

/// Target-role keyword → salary multiplier. Checked in this order; first match wins.
pub const ROLE_MODIFIERS: &[(&str, f64)] = &[
    ("frontend", 1.00),
    ("backend", 1.05),
    ("fullstack", 1.10),
    ("devops", 1.15),
    ("data", 1.20),
    ("machine learning", 1.25),
    ("ai", 1.30),
    ("manager", 1.20),
    ("director", 1.50),
    ("architect", 1.30),
    ("lead", 1.15),
];

/// Checks the shape every template must have before it can be personalised.
pub fn validate_template(template: &RoadmapTemplate) -> Result<(), RoadmapError> {
    if template.career_path.len() != CAREER_PATH_STAGES {
        return Err(RoadmapError::InvalidTemplate(format!(
            "career path must have {CAREER_PATH_STAGES} stages, found {}",
            template.career_path.len()
        )));
    }
    if template.timeline.is_empty() {
        return Err(RoadmapError::InvalidTemplate(
            "timeline has no stages".to_string(),
        ));
    }
    if template.experience_salary.is_empty() {
        return Err(RoadmapError::InvalidTemplate(
            "experience-salary curve has no anchor points".to_string(),
        ));
    }
    Ok(())
}

/// First `ROLE_MODIFIERS` entry whose keyword appears in `target_role` (ignoring case).
pub fn role_modifier(target_role: &str) -> Option<(&'static str, f64)> {
    let role_lower = target_role.to_lowercase();
    ROLE_MODIFIERS
        .iter()
        .find(|(keyword, _)| role_lower.contains(keyword))
        .copied()
}

/// Builds a personalised roadmap from a profile, the user's skills and a role template.
///
/// Only a malformed template is an error. Missing profile fields just mean less
/// personalisation: no experience counts as 0, no salary skips the differential,
/// an unknown role skips the modifier.
pub fn personalize(
    profile: &UserProfile,
    known_skills: &[SkillRecord],
    template: &RoadmapTemplate,
) -> Result<PersonalizedRoadmap, RoadmapError> {
    validate_template(template)?;

    let experience = profile.effective_experience();
    let target_role = profile.target_role();

    let career_path = stage_career_path(&template.career_path, experience, target_role);
    let timeline = project_timeline(&template.timeline, &known_skill_names(known_skills));

    let mut points = template.experience_salary.clone();
    if let Some(actual) = profile.reported_salary() {
        apply_salary_differential(&mut points, experience, actual);
    }

    let current_salary = match profile.reported_salary() {
        Some(actual) => actual,
        // The curve is non-empty here; the clamp guards below-range extrapolation
        None => estimate_salary(&template.experience_salary, experience).max(0.0),
    };

    let mut experience_salary = ExperienceSalary {
        points,
        current_experience: experience,
        current_salary,
        target_role: None,
        target_role_modifier: None,
    };

    if let Some(role) = target_role {
        match role_modifier(role) {
            Some((keyword, modifier)) if modifier != 1.0 => {
                debug!(role, keyword, modifier, "applying target-role salary modifier");
                for point in experience_salary
                    .points
                    .iter_mut()
                    .filter(|p| p.years_experience > experience)
                {
                    point.salary = (point.salary * modifier).round();
                }
                experience_salary.target_role = Some(role.to_string());
                experience_salary.target_role_modifier = Some(modifier);
            }
            _ => debug!(role, "no salary modifier for target role"),
        }
    }

    Ok(PersonalizedRoadmap {
        career_path,
        timeline,
        experience_salary,
    })
}
