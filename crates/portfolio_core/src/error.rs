//! Error types raised while building catalog, skill and chart values.
//!
//! Interaction misses (unknown deep-link id, a skill without projects) are
//! not errors; they resolve to `Idle` or an empty result.

use thiserror::Error;

use crate::catalog::ProjectId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("duplicate project id `{0}` in catalog")]
    DuplicateProjectId(ProjectId),
    #[error("project id must not be empty (title: `{title}`)")]
    EmptyProjectId { title: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkillError {
    #[error("skill name must not be empty")]
    EmptyName,
    #[error("proficiency {value} for skill `{name}` is outside 0..=100")]
    ProficiencyOutOfRange { name: String, value: i64 },
    #[error("skill `{skill}` references unknown project `{project}`")]
    UnknownProject { skill: String, project: ProjectId },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RadarError {
    #[error("radar chart `{0}` needs at least one skill")]
    NoSkills(String),
    #[error("radar max value must be positive and finite, got {0}")]
    InvalidMaxValue(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("image index {index} is out of range for {len} image(s)")]
    IndexOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Skill(#[from] SkillError),
    #[error("invalid portfolio document: {0}")]
    Json(#[from] serde_json::Error),
}
