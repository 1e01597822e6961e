//! Project catalog.
//!
//! # Invariants
//! - Project ids are unique and non-empty across a [`Catalog`].
//! - A catalog is immutable once built; views share it read-only.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Stable identifier of a portfolio project, as carried by deep links.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProjectId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ProjectId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A portfolio entry: narrative fields, technology tags and screenshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub thumbnail: String,
    pub role: String,
    pub problem: String,
    pub solution: String,
    /// Technology tags; skills are matched against these ignoring case.
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub challenges: Vec<String>,
    #[serde(default)]
    pub results: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_link: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Project {
    /// Headline result shown on gallery cards.
    pub fn impact_metric(&self) -> Option<&str> {
        self.results.first().map(String::as_str)
    }

    pub fn uses_tool(&self, skill: &str) -> bool {
        let skill = skill.to_lowercase();
        self.tools.iter().any(|tool| tool.to_lowercase() == skill)
    }
}

/// Ordered, id-unique set of projects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    pub fn new(projects: Vec<Project>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(projects.len());
        for project in &projects {
            if project.id.as_str().trim().is_empty() {
                return Err(CatalogError::EmptyProjectId {
                    title: project.title.clone(),
                });
            }
            if !seen.insert(project.id.as_str()) {
                return Err(CatalogError::DuplicateProjectId(project.id.clone()));
            }
        }

        Ok(Self { projects })
    }

    pub fn get(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| &project.id == id)
    }

    /// Lookup by raw id string, as read from a location.
    pub fn find(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.id.as_str() == id)
    }

    pub fn contains(&self, id: &ProjectId) -> bool {
        self.get(id).is_some()
    }

    pub fn position(&self, id: &ProjectId) -> Option<usize> {
        self.projects.iter().position(|project| &project.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Project> {
        self.projects.iter()
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Project;
    type IntoIter = std::slice::Iter<'a, Project>;

    fn into_iter(self) -> Self::IntoIter {
        self.projects.iter()
    }
}
