use serde::{Deserialize, Serialize};

/// Self-assessed proficiency for a skill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    /// Parses a level label; unrecognised labels are `None`.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "beginner" => Some(SkillLevel::Beginner),
            "intermediate" => Some(SkillLevel::Intermediate),
            "advanced" => Some(SkillLevel::Advanced),
            "expert" => Some(SkillLevel::Expert),
            _ => None,
        }
    }

    /// 1 (Beginner) through 4 (Expert).
    pub fn rank(self) -> u8 {
        match self {
            SkillLevel::Beginner => 1,
            SkillLevel::Intermediate => 2,
            SkillLevel::Advanced => 3,
            SkillLevel::Expert => 4,
        }
    }
}

/// A skill held by the user. Identity is the lower-cased name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillRecord {
    pub name: String,
    #[serde(default)]
    pub level: SkillLevel,
    #[serde(default)]
    pub years_experience: f64,
}

impl SkillRecord {
    pub fn identity(&self) -> String {
        self.name.trim().to_lowercase()
    }
}

/// The slice of the user profile the roadmap engine reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub experience_years: Option<f64>,
    #[serde(default)]
    pub current_salary: Option<f64>,
    #[serde(default)]
    pub target_role: Option<String>,
}

impl UserProfile {
    /// Experience in years; absent, negative or non-finite values count as 0.
    pub fn effective_experience(&self) -> f64 {
        match self.experience_years {
            Some(years) if years.is_finite() && years > 0.0 => years,
            _ => 0.0,
        }
    }

    /// The reported salary, only when it is a usable positive number.
    pub fn reported_salary(&self) -> Option<f64> {
        self.current_salary
            .filter(|salary| salary.is_finite() && *salary > 0.0)
    }

    /// The target role with surrounding whitespace removed; blank counts as absent.
    pub fn target_role(&self) -> Option<&str> {
        self.target_role
            .as_deref()
            .map(str::trim)
            .filter(|role| !role.is_empty())
    }
}

/// Finds the first skill name that appears more than once, ignoring case.
pub fn find_duplicate_skill(skills: &[SkillRecord]) -> Option<&str> {
    let mut seen = std::collections::HashSet::new();
    skills
        .iter()
        .find(|skill| !seen.insert(skill.identity()))
        .map(|skill| skill.name.as_str())
}
