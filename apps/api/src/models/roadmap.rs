use serde::{Deserialize, Serialize};

/// One step of the 4-step career ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerStage {
    pub order: u32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_description: Option<String>,
}

/// One time-boxed period of a skill-acquisition timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineStage {
    pub period_label: String,
    pub title: String,
    pub description: String,
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub known_skills: Vec<String>,
}

/// A known (experience-years, salary) sample on a salary curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryAnchorPoint {
    pub years_experience: f64,
    pub salary: f64,
}

/// Static, per-role roadmap. Shared read-only across requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapTemplate {
    pub career_path: Vec<CareerStage>,
    pub timeline: Vec<TimelineStage>,
    pub experience_salary: Vec<SalaryAnchorPoint>,
}

/// Salary curve adjusted for one user, plus the markers the chart needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceSalary {
    pub points: Vec<SalaryAnchorPoint>,
    pub current_experience: f64,
    pub current_salary: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_role_modifier: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalizedRoadmap {
    pub career_path: Vec<CareerStage>,
    pub timeline: Vec<TimelineStage>,
    pub experience_salary: ExperienceSalary,
}

/// Broad career bracket with the roles that usually come next.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerRecommendation {
    pub current_stage: String,
    pub next_roles: Vec<String>,
    pub timeframe: String,
    /// Years still missing to reach the five-year senior mark, e.g. "2.5 more years".
    pub required_experience: String,
}
