//! Role roadmap catalog: where personalisation gets its standard templates.
//!
//! Default: `StaticRoadmapCatalog` built from the JSON embedded at compile time,
//! or from `ROADMAP_CATALOG_PATH` when configured.
//!
//! `AppState` holds an `Arc<dyn RoadmapSource>`, chosen once at startup.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::{AppError, RoadmapError};
use crate::models::roadmap::RoadmapTemplate;
use crate::roadmap::personalizer::validate_template;

/// Catalog key used when a role is missing or unknown.
pub const DEFAULT_ROLE_KEY: &str = "default";

const EMBEDDED_CATALOG: &str = include_str!("../../data/role_roadmaps.json");

/// A template together with the catalog key it was found under.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedTemplate {
    pub role: String,
    pub template: RoadmapTemplate,
}

/// Source of role roadmap templates. Implement this to serve templates from
/// somewhere other than the static catalog without touching the handlers.
#[async_trait]
pub trait RoadmapSource: Send + Sync {
    /// Known role keys, sorted.
    async fn roles(&self) -> Vec<String>;

    /// Template for `role`, falling back to the default template.
    async fn template(&self, role: Option<&str>) -> Result<ResolvedTemplate, AppError>;
}

/// In-memory, immutable catalog keyed by lower-cased role.
#[derive(Debug, Clone)]
pub struct StaticRoadmapCatalog {
    templates: BTreeMap<String, RoadmapTemplate>,
}

impl StaticRoadmapCatalog {
    /// The catalog compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_CATALOG).context("embedded role catalog is invalid")
    }

    /// Loads a catalog from a JSON file shaped like `data/role_roadmaps.json`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read role catalog {}", path.display()))?;
        Self::from_json(&raw)
            .with_context(|| format!("role catalog {} is invalid", path.display()))
    }

    /// Parses and validates a catalog.
    ///
    /// Keys are trimmed and lower-cased, anchor points sorted by years. Rejects
    /// duplicate keys, duplicate anchor years, anchors with negative years or a
    /// non-positive salary, malformed templates and a missing `default` entry.
    pub fn from_json(raw: &str) -> Result<Self> {
        let parsed: BTreeMap<String, RoadmapTemplate> =
            serde_json::from_str(raw).context("role catalog is not valid JSON")?;

        let mut templates = BTreeMap::new();
        for (key, mut template) in parsed {
            let normalized = key.trim().to_lowercase();

            template.experience_salary.sort_by(|a, b| {
                a.years_experience
                    .partial_cmp(&b.years_experience)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            if template
                .experience_salary
                .windows(2)
                .any(|w| w[0].years_experience == w[1].years_experience)
            {
                return Err(RoadmapError::InvalidTemplate(format!(
                    "role '{key}' repeats an experience level in its salary curve"
                ))
                .into());
            }
            if let Some(point) = template.experience_salary.iter().find(|p| {
                !(p.years_experience.is_finite() && p.years_experience >= 0.0)
                    || !(p.salary.is_finite() && p.salary > 0.0)
            }) {
                return Err(RoadmapError::InvalidTemplate(format!(
                    "role '{key}' has an out-of-range salary anchor ({} years, {})",
                    point.years_experience, point.salary
                ))
                .into());
            }
            validate_template(&template).with_context(|| format!("role '{key}'"))?;

            if templates.insert(normalized.clone(), template).is_some() {
                bail!("role '{normalized}' appears more than once");
            }
        }

        if !templates.contains_key(DEFAULT_ROLE_KEY) {
            bail!("role catalog has no '{DEFAULT_ROLE_KEY}' entry");
        }

        info!("Role catalog loaded with {} roles", templates.len());
        Ok(StaticRoadmapCatalog { templates })
    }

    /// Catalog key for `role`: exact match ignoring case and padding, else `default`.
    pub fn resolve_key(&self, role: Option<&str>) -> &str {
        let requested = role.map(|r| r.trim().to_lowercase()).filter(|r| !r.is_empty());
        match requested {
            Some(key) => match self.templates.get_key_value(&key) {
                Some((found, _)) => found.as_str(),
                None => {
                    warn!(role = %key, "unknown role, using default roadmap");
                    DEFAULT_ROLE_KEY
                }
            },
            None => DEFAULT_ROLE_KEY,
        }
    }

    pub fn get(&self, role: Option<&str>) -> ResolvedTemplate {
        let key = self.resolve_key(role).to_string();
        let template = self.templates[&key].clone();
        ResolvedTemplate {
            role: key,
            template,
        }
    }
}

#[async_trait]
impl RoadmapSource for StaticRoadmapCatalog {
    async fn roles(&self) -> Vec<String> {
        self.templates.keys().cloned().collect()
    }

    async fn template(&self, role: Option<&str>) -> Result<ResolvedTemplate, AppError> {
        Ok(self.get(role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn embedded() -> StaticRoadmapCatalog {
        StaticRoadmapCatalog::embedded().unwrap()
    }

    fn minimal_template_json(first_salary: u32) -> String {
        format!(
            r#"{{
                "career_path": [
                    {{"order": 1, "title": "Junior", "description": "a"}},
                    {{"order": 2, "title": "Mid", "description": "b"}},
                    {{"order": 3, "title": "Senior", "description": "c"}},
                    {{"order": 4, "title": "Staff", "description": "d"}}
                ],
                "timeline": [
                    {{"period_label": "First 3 months", "title": "Start", "description": "Go.", "required_skills": ["Git"]}}
                ],
                "experience_salary": [
                    {{"years_experience": 5, "salary": 110000}},
                    {{"years_experience": 0, "salary": {first_salary}}}
                ]
            }}"#
        )
    }

    #[test]
    fn test_embedded_catalog_has_all_roles() {
        let roles: Vec<String> = embedded().templates.keys().cloned().collect();
        for role in ["default", "frontend", "backend", "fullstack", "devops", "data", "mobile", "ui/ux"] {
            assert!(roles.iter().any(|r| r == role), "missing {role}");
        }
    }

    #[test]
    fn test_embedded_templates_have_expected_shape() {
        for (role, template) in &embedded().templates {
            assert_eq!(template.career_path.len(), 4, "{role}");
            assert_eq!(template.timeline.len(), 3, "{role}");
            assert_eq!(template.experience_salary.len(), 7, "{role}");
            assert!(template.career_path.iter().all(|s| !s.is_current));
        }
    }

    #[test]
    fn test_lookup_ignores_case_and_padding() {
        let catalog = embedded();
        assert_eq!(catalog.resolve_key(Some("  DevOps ")), "devops");
        assert_eq!(catalog.resolve_key(Some("UI/UX")), "ui/ux");
    }

    #[test]
    fn test_unknown_or_missing_role_falls_back_to_default() {
        let catalog = embedded();
        assert_eq!(catalog.resolve_key(Some("Astronaut")), DEFAULT_ROLE_KEY);
        assert_eq!(catalog.resolve_key(None), DEFAULT_ROLE_KEY);
        assert_eq!(catalog.resolve_key(Some("")), DEFAULT_ROLE_KEY);
        assert_eq!(catalog.get(Some("Astronaut")).template.career_path[0].title, "Junior Developer");
    }

    #[test]
    fn test_frontend_template_contents() {
        let resolved = embedded().get(Some("frontend"));
        assert_eq!(resolved.role, "frontend");
        assert_eq!(
            resolved.template.timeline[0].required_skills,
            vec!["HTML5", "CSS3", "JavaScript", "React Basics", "Responsive Design"]
        );
        assert_eq!(resolved.template.experience_salary[0].salary, 65_000.0);
    }

    #[test]
    fn test_anchor_points_sorted_on_load() {
        let raw = format!(r#"{{"default": {}}}"#, minimal_template_json(60_000));
        let catalog = StaticRoadmapCatalog::from_json(&raw).unwrap();
        let years: Vec<f64> = catalog
            .get(None)
            .template
            .experience_salary
            .iter()
            .map(|p| p.years_experience)
            .collect();
        assert_eq!(years, vec![0.0, 5.0]);
    }

    #[test]
    fn test_missing_default_rejected() {
        let raw = format!(r#"{{"backend": {}}}"#, minimal_template_json(60_000));
        let err = StaticRoadmapCatalog::from_json(&raw).unwrap_err();
        assert!(err.to_string().contains("default"));
    }

    #[test]
    fn test_duplicate_keys_after_normalising_rejected() {
        let t = minimal_template_json(60_000);
        let raw = format!(r#"{{"default": {t}, "Backend": {t}, "backend": {t}}}"#);
        assert!(StaticRoadmapCatalog::from_json(&raw).is_err());
    }

    #[test]
    fn test_duplicate_anchor_years_rejected() {
        let raw = minimal_template_json(60_000).replace(
            r#""years_experience": 0,"#,
            r#""years_experience": 5,"#,
        );
        let raw = format!(r#"{{"default": {raw}}}"#);
        assert!(StaticRoadmapCatalog::from_json(&raw).is_err());
    }

    #[test]
    fn test_non_positive_salary_anchor_rejected() {
        let raw = format!(r#"{{"default": {}}}"#, minimal_template_json(0));
        let err = StaticRoadmapCatalog::from_json(&raw).unwrap_err();
        assert!(err.to_string().contains("out-of-range"));
    }

    #[test]
    fn test_negative_years_anchor_rejected() {
        let raw = minimal_template_json(60_000).replace(
            r#""years_experience": 0,"#,
            r#""years_experience": -1,"#,
        );
        let raw = format!(r#"{{"default": {raw}}}"#);
        assert!(StaticRoadmapCatalog::from_json(&raw).is_err());
    }

    #[test]
    fn test_three_stage_template_rejected() {
        let raw = minimal_template_json(60_000).replace(
            r#"{"order": 4, "title": "Staff", "description": "d"}"#,
            "",
        );
        let raw = raw.replace(r#""c"},"#, r#""c"}"#);
        let raw = format!(r#"{{"default": {raw}}}"#);
        let err = StaticRoadmapCatalog::from_json(&raw).unwrap_err();
        assert!(format!("{err:#}").contains("4 stages"));
    }

    #[test]
    fn test_loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"default": {}}}"#, minimal_template_json(61_000)).unwrap();

        let catalog = StaticRoadmapCatalog::from_path(file.path()).unwrap();
        assert_eq!(catalog.get(None).template.experience_salary[0].salary, 61_000.0);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = StaticRoadmapCatalog::from_path(&path).unwrap_err();
        assert!(err.to_string().contains("absent.json"));
    }

    #[tokio::test]
    async fn test_source_trait_lists_sorted_roles() {
        let catalog = embedded();
        let roles = RoadmapSource::roles(&catalog).await;
        let mut sorted = roles.clone();
        sorted.sort();
        assert_eq!(roles, sorted);
        let resolved = RoadmapSource::template(&catalog, Some("Data")).await.unwrap();
        assert_eq!(resolved.role, "data");
    }
}
