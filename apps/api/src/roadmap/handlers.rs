//! Axum route handlers for the Roadmap and Skills APIs.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::profile::{find_duplicate_skill, SkillRecord, UserProfile};
use crate::models::roadmap::{CareerRecommendation, PersonalizedRoadmap, RoadmapTemplate};
use crate::models::skills::{SkillGap, SkillPriorityEntry, SkillRecommendations, TargetSkill};
use crate::roadmap::acquisition::rank_skill_acquisition;
use crate::roadmap::horizon::limit_timeline;
use crate::roadmap::personalizer::personalize;
use crate::roadmap::recommendations::{recommend_career_path, recommend_skills};
use crate::roadmap::salary_curve::estimate_salary;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct RolesResponse {
    pub roles: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct HorizonQuery {
    pub months: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct RoadmapResponse {
    pub role: String,
    pub roadmap: RoadmapTemplate,
}

#[derive(Debug, Deserialize)]
pub struct PersonalizeRequest {
    #[serde(default)]
    pub profile: UserProfile,
    #[serde(default)]
    pub skills: Vec<SkillRecord>,
    /// Catalog key of the template to start from. Defaults to "default".
    pub role: Option<String>,
    pub timeline_months: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct SalaryEstimateRequest {
    pub years_experience: f64,
    pub role: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SalaryEstimateResponse {
    pub role: String,
    pub years_experience: f64,
    pub salary: f64,
}

#[derive(Debug, Deserialize)]
pub struct AcquisitionOrderRequest {
    #[serde(default)]
    pub known_skills: Vec<SkillRecord>,
    #[serde(default)]
    pub skill_gaps: Vec<SkillGap>,
    #[serde(default)]
    pub target_skills: Vec<TargetSkill>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationsRequest {
    #[serde(default)]
    pub profile: UserProfile,
    #[serde(default)]
    pub known_skills: Vec<SkillRecord>,
    #[serde(default)]
    pub target_skills: Vec<TargetSkill>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub skills: SkillRecommendations,
    pub career_path: CareerRecommendation,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/roadmaps
pub async fn handle_list_roles(State(state): State<AppState>) -> Json<RolesResponse> {
    Json(RolesResponse {
        roles: state.roadmaps.roles().await,
    })
}

/// GET /api/v1/roadmaps/:role
///
/// Returns the standard (unpersonalised) roadmap for a role, timeline trimmed to
/// `months` (or the configured default).
pub async fn handle_get_roadmap(
    State(state): State<AppState>,
    Path(role): Path<String>,
    Query(query): Query<HorizonQuery>,
) -> Result<Json<RoadmapResponse>, AppError> {
    let resolved = state.roadmaps.template(Some(role.as_str())).await?;
    let months = query.months.unwrap_or(state.config.default_timeline_months);

    let mut roadmap = resolved.template;
    roadmap.timeline = limit_timeline(&roadmap.timeline, months);

    Ok(Json(RoadmapResponse {
        role: resolved.role,
        roadmap,
    }))
}

/// POST /api/v1/roadmaps/personalize
///
/// Full pipeline: resolve template → stage path → project timeline → adjust salary curve.
pub async fn handle_personalize(
    State(state): State<AppState>,
    Json(request): Json<PersonalizeRequest>,
) -> Result<Json<PersonalizedRoadmap>, AppError> {
    if let Some(duplicate) = find_duplicate_skill(&request.skills) {
        return Err(AppError::Validation(format!(
            "skill '{duplicate}' is listed more than once"
        )));
    }

    let resolved = state.roadmaps.template(request.role.as_deref()).await?;
    let mut roadmap = personalize(&request.profile, &request.skills, &resolved.template)?;

    let months = request
        .timeline_months
        .unwrap_or(state.config.default_timeline_months);
    roadmap.timeline = limit_timeline(&roadmap.timeline, months);

    info!(
        role = %resolved.role,
        experience = roadmap.experience_salary.current_experience,
        "personalised roadmap generated"
    );

    Ok(Json(roadmap))
}

/// POST /api/v1/roadmaps/salary-estimate
pub async fn handle_salary_estimate(
    State(state): State<AppState>,
    Json(request): Json<SalaryEstimateRequest>,
) -> Result<Json<SalaryEstimateResponse>, AppError> {
    let years = request.years_experience;
    if !years.is_finite() || years < 0.0 {
        return Err(AppError::Validation(
            "years_experience must be a non-negative number".to_string(),
        ));
    }

    let resolved = state.roadmaps.template(request.role.as_deref()).await?;
    let salary = estimate_salary(&resolved.template.experience_salary, years);

    Ok(Json(SalaryEstimateResponse {
        role: resolved.role,
        years_experience: years,
        salary,
    }))
}

/// POST /api/v1/skills/acquisition-order
///
/// Merges target-role skills and skill gaps into one learning queue.
pub async fn handle_acquisition_order(
    Json(request): Json<AcquisitionOrderRequest>,
) -> Json<Vec<SkillPriorityEntry>> {
    Json(rank_skill_acquisition(
        &request.known_skills,
        &request.skill_gaps,
        &request.target_skills,
    ))
}

/// POST /api/v1/skills/recommendations
pub async fn handle_recommendations(
    Json(request): Json<RecommendationsRequest>,
) -> Json<RecommendationsResponse> {
    Json(RecommendationsResponse {
        skills: recommend_skills(&request.known_skills, &request.target_skills),
        career_path: recommend_career_path(&request.profile),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
