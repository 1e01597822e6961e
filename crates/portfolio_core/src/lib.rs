//! Skill ↔ project relationships and the selection/navigation state behind
//! the portfolio's radar, gallery and detail views.
//!
//! This crate has no terminal or browser dependencies; the front ends in
//! `apps/` draw it and feed it events.

pub mod carousel;
pub mod catalog;
pub mod error;
pub mod export;
pub mod icons;
pub mod navigation;
pub mod radar;
pub mod sample;
pub mod selection;
pub mod skills;

pub use carousel::{CarouselFrame, DetailCarousel};
pub use catalog::{Catalog, Project, ProjectId};
pub use error::{CarouselError, CatalogError, ExportError, RadarError, SkillError};
pub use export::{Portfolio, PortfolioExport};
pub use icons::SkillIcon;
pub use navigation::{
    gallery_link, Location, MemoryNavigator, Navigator, Route, GALLERY_PATH, HIGHLIGHT_PARAM,
    SKILLS_PATH,
};
pub use radar::{BadgeVariant, RadarAxis, RadarChart, RadarClick};
pub use selection::{GallerySelectionController, SelectionState, Transition};
pub use skills::{
    distinct_skills, enrich_groups, enrich_skills, project_ids_for_skill, projects_for_skill,
    ProficiencyTier, SkillGroup, SkillStat,
};
