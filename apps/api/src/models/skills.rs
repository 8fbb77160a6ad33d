use serde::{Deserialize, Serialize};

use crate::models::profile::SkillLevel;

/// How much a skill matters for the target role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Importance {
    Critical,
    Important,
    Useful,
}

impl Importance {
    /// Parses the labels used by the skill analysis; anything else is `None`.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim() {
            "Critical" => Some(Importance::Critical),
            "Important" => Some(Importance::Important),
            "Useful" => Some(Importance::Useful),
            _ => None,
        }
    }
}

impl Importance {
    /// Ordering weight used when sorting recommendations; higher comes first.
    pub fn weight(self) -> u8 {
        match self {
            Importance::Critical => 3,
            Importance::Important => 2,
            Importance::Useful => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillSource {
    Target,
    Gap,
}

/// A skill the market wants more of than the user has (0–100).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGap {
    pub name: String,
    pub gap_score: f64,
}

/// A skill expected for the target role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetSkill {
    pub name: String,
    #[serde(default)]
    pub level: Option<String>,
    /// Free-form label; "Critical" | "Important" | "Useful" are recognised.
    #[serde(default)]
    pub importance: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillPriorityEntry {
    pub name: String,
    pub priority: f64,
    pub importance_label: Importance,
    pub source_tag: SkillSource,
}

/// A skill the user has, but below the level the target role expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillImprovement {
    pub name: String,
    pub current_level: SkillLevel,
    pub target_level: SkillLevel,
    pub importance: String,
}

/// A target-role skill the user does not have yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillToLearn {
    pub name: String,
    pub level: Option<String>,
    pub importance: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillRecommendations {
    pub skills_to_improve: Vec<SkillImprovement>,
    pub skills_to_learn: Vec<SkillToLearn>,
}
