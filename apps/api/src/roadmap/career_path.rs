//! Career path staging: marks where a user sits on the 4-step ladder and
//! offers their target role as an alternative next step.

use tracing::debug;

use crate::models::roadmap::CareerStage;

/// Experience (years) at which stages 2, 3 and 4 begin.
const STAGE_THRESHOLDS: [f64; 3] = [3.0, 5.0, 8.0];

/// Index of the current stage for a given amount of experience.
///
/// `<3 → 0`, `[3,5) → 1`, `[5,8) → 2`, `≥8 → 3`. NaN counts as no experience.
pub fn stage_index(experience_years: f64) -> usize {
    if experience_years.is_nan() {
        return 0;
    }
    STAGE_THRESHOLDS
        .iter()
        .take_while(|&&threshold| experience_years >= threshold)
        .count()
}

/// Returns an annotated copy of `path` with exactly one stage marked current.
///
/// When `target_role` is given and no stage title contains it (ignoring case), the
/// stage after the current one (or the last stage) gets it as an alternative title.
pub fn stage_career_path(
    path: &[CareerStage],
    experience_years: f64,
    target_role: Option<&str>,
) -> Vec<CareerStage> {
    let mut staged: Vec<CareerStage> = path.to_vec();
    let Some(last_index) = staged.len().checked_sub(1) else {
        return staged;
    };

    let current_index = stage_index(experience_years).min(last_index);
    for (index, stage) in staged.iter_mut().enumerate() {
        stage.is_current = index == current_index;
        stage.alternative_title = None;
        stage.alternative_description = None;
    }

    let target_role = target_role.map(str::trim).filter(|r| !r.is_empty());
    if let Some(role) = target_role {
        let role_lower = role.to_lowercase();
        let already_on_path = staged
            .iter()
            .any(|stage| stage.title.to_lowercase().contains(&role_lower));

        if !already_on_path {
            let annotated = (current_index + 1).min(last_index);
            let stage = &mut staged[annotated];
            stage.alternative_title = Some(role.to_string());
            stage.alternative_description = Some(format!("Alternative path: {role}"));
        }
        debug!(
            role,
            current_index, already_on_path, "target role checked against career path"
        );
    }

    staged
}
