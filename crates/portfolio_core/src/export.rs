//! `portfolio.json`: the document the terminal app exports and the browser
//! dashboard loads.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Project};
use crate::error::ExportError;
use crate::skills::{enrich_groups, SkillGroup};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioExport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skill_groups: Vec<SkillGroup>,
}

/// A validated catalog plus skill groups enriched against it.
#[derive(Debug, Clone, Default)]
pub struct Portfolio {
    pub catalog: Catalog,
    pub skill_groups: Vec<SkillGroup>,
}

impl PortfolioExport {
    pub fn new(catalog: &Catalog, skill_groups: &[SkillGroup], generated_at: Option<String>) -> Self {
        Self {
            generated_at,
            projects: catalog.projects().to_vec(),
            skill_groups: enrich_groups(skill_groups, catalog),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ExportError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validates ids and skill references, then merges tool-derived ids into each skill.
    pub fn into_portfolio(self) -> Result<Portfolio, ExportError> {
        let catalog = Catalog::new(self.projects)?;
        for skill in self.skill_groups.iter().flat_map(|group| &group.skills) {
            skill.validate_against(&catalog)?;
        }

        let skill_groups = enrich_groups(&self.skill_groups, &catalog);
        Ok(Portfolio {
            catalog,
            skill_groups,
        })
    }
}
