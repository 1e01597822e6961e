//! Skill records and the skill → project index.
//!
//! All index functions are pure: they borrow the catalog, never mutate their
//! inputs, and report "no match" as an empty result.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Project, ProjectId};
use crate::error::SkillError;
use crate::icons::SkillIcon;

pub const MAX_PROFICIENCY: u8 = 100;

/// A named competency with a proficiency value and the projects that show it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSkillStat", rename_all = "camelCase")]
pub struct SkillStat {
    name: String,
    value: u8,
    project_ids: Vec<ProjectId>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSkillStat {
    name: String,
    value: i64,
    #[serde(default)]
    project_ids: Vec<ProjectId>,
}

impl TryFrom<RawSkillStat> for SkillStat {
    type Error = SkillError;

    fn try_from(raw: RawSkillStat) -> Result<Self, Self::Error> {
        let mut skill = Self::new(raw.name, raw.value)?;
        skill.project_ids = raw.project_ids;
        Ok(skill)
    }
}

impl SkillStat {
    /// Builds a skill with no associated projects.
    ///
    /// Out-of-range proficiency is rejected, never clamped.
    pub fn new(name: impl Into<String>, value: i64) -> Result<Self, SkillError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SkillError::EmptyName);
        }

        let value = u8::try_from(value)
            .ok()
            .filter(|value| *value <= MAX_PROFICIENCY)
            .ok_or_else(|| SkillError::ProficiencyOutOfRange {
                name: name.clone(),
                value,
            })?;

        Ok(Self {
            name,
            value,
            project_ids: Vec::new(),
        })
    }

    /// Attaches author-supplied project ids, each of which must exist in `catalog`.
    pub fn with_project_ids(
        mut self,
        project_ids: Vec<ProjectId>,
        catalog: &Catalog,
    ) -> Result<Self, SkillError> {
        self.project_ids = project_ids;
        self.validate_against(catalog)?;
        Ok(self)
    }

    pub fn validate_against(&self, catalog: &Catalog) -> Result<(), SkillError> {
        match self.project_ids.iter().find(|id| !catalog.contains(id)) {
            Some(missing) => Err(SkillError::UnknownProject {
                skill: self.name.clone(),
                project: missing.clone(),
            }),
            None => Ok(()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn value(&self) -> u8 {
        self.value
    }

    pub fn project_ids(&self) -> &[ProjectId] {
        &self.project_ids
    }

    pub fn has_projects(&self) -> bool {
        !self.project_ids.is_empty()
    }

    pub const fn tier(&self) -> ProficiencyTier {
        ProficiencyTier::from_value(self.value)
    }

    pub fn icon(&self) -> SkillIcon {
        SkillIcon::for_skill(&self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProficiencyTier {
    Intermediate,
    Proficient,
    Advanced,
    Expert,
}

impl ProficiencyTier {
    pub const fn from_value(value: u8) -> Self {
        match value {
            90.. => Self::Expert,
            80..=89 => Self::Advanced,
            70..=79 => Self::Proficient,
            _ => Self::Intermediate,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Intermediate => "Intermediate",
            Self::Proficient => "Proficient",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
        }
    }
}

/// A titled set of skills drawn as one radar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    pub skills: Vec<SkillStat>,
}

pub fn projects_for_skill<'c>(skill: &str, catalog: &'c Catalog) -> Vec<&'c Project> {
    catalog
        .iter()
        .filter(|project| project.uses_tool(skill))
        .collect()
}

/// Ids of [`projects_for_skill`], in catalog order.
pub fn project_ids_for_skill(skill: &str, catalog: &Catalog) -> Vec<ProjectId> {
    projects_for_skill(skill, catalog)
        .into_iter()
        .map(|project| project.id.clone())
        .collect()
}

/// Every tool tag used anywhere in the catalog, deduplicated.
pub fn distinct_skills(catalog: &Catalog) -> BTreeSet<String> {
    catalog
        .iter()
        .flat_map(|project| project.tools.iter().cloned())
        .collect()
}

/// Author-supplied ids merged with the ids derived from tools, in catalog order.
///
/// Ids the catalog does not contain are dropped.
pub fn enrich_skills(skills: &[SkillStat], catalog: &Catalog) -> Vec<SkillStat> {
    skills
        .iter()
        .map(|skill| SkillStat {
            project_ids: catalog
                .iter()
                .filter(|project| {
                    project.uses_tool(&skill.name) || skill.project_ids.contains(&project.id)
                })
                .map(|project| project.id.clone())
                .collect(),
            ..skill.clone()
        })
        .collect()
}

pub fn enrich_groups(groups: &[SkillGroup], catalog: &Catalog) -> Vec<SkillGroup> {
    groups
        .iter()
        .map(|group| SkillGroup {
            title: group.title.clone(),
            skills: enrich_skills(&group.skills, catalog),
        })
        .collect()
}
