//! Which project the gallery highlights, and its detail carousel.
//!
//! # Invariants
//! - At most one project is highlighted; `Idle` means no detail view.
//! - `Detail` always names a project present in the catalog.
//! - The carousel lives inside `Detail`, so changing the highlighted project
//!   replaces id and carousel in one assignment.
//! - Every transition into, between or out of `Detail` is mirrored in the
//!   navigator's location (`/projects?highlight=<id>` or `/projects`).

use std::sync::Arc;

use crate::carousel::DetailCarousel;
use crate::catalog::{Catalog, Project, ProjectId};
use crate::navigation::{gallery_link, Navigator, GALLERY_PATH, HIGHLIGHT_PARAM};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionState {
    Idle,
    Detail {
        project: ProjectId,
        carousel: DetailCarousel,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Opened,
    Switched,
    Closed,
    Unchanged,
    /// Unknown id; state and location untouched.
    Rejected,
}

#[derive(Debug, Clone)]
pub struct GallerySelectionController {
    catalog: Arc<Catalog>,
    state: SelectionState,
}

impl GallerySelectionController {
    /// Enters the gallery view, reading the `highlight` parameter once.
    pub fn mount(catalog: Arc<Catalog>, navigator: &mut dyn Navigator) -> Self {
        let mut controller = Self {
            catalog,
            state: SelectionState::Idle,
        };

        let Some(requested) = navigator.query_param(HIGHLIGHT_PARAM) else {
            return controller;
        };

        match controller.catalog.find(&requested).map(|project| project.id.clone()) {
            Some(id) => {
                log::info!("gallery mounted with deep link to project {id}");
                controller.state = controller.detail_for(id);
            }
            None => {
                log::warn!("ignoring deep link to unknown project `{requested}`");
                let location = navigator.current().without_param(HIGHLIGHT_PARAM);
                navigator.navigate(&location.to_string());
            }
        }

        controller
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub const fn state(&self) -> &SelectionState {
        &self.state
    }

    pub const fn highlighted(&self) -> Option<&ProjectId> {
        match &self.state {
            SelectionState::Idle => None,
            SelectionState::Detail { project, .. } => Some(project),
        }
    }

    pub fn highlighted_project(&self) -> Option<&Project> {
        self.highlighted().and_then(|id| self.catalog.get(id))
    }

    pub const fn is_detail_open(&self) -> bool {
        matches!(self.state, SelectionState::Detail { .. })
    }

    pub const fn carousel(&self) -> Option<&DetailCarousel> {
        match &self.state {
            SelectionState::Idle => None,
            SelectionState::Detail { carousel, .. } => Some(carousel),
        }
    }

    pub fn carousel_mut(&mut self) -> Option<&mut DetailCarousel> {
        match &mut self.state {
            SelectionState::Idle => None,
            SelectionState::Detail { carousel, .. } => Some(carousel),
        }
    }

    /// Card click or visualization selection.
    pub fn select(&mut self, id: &ProjectId, navigator: &mut dyn Navigator) -> Transition {
        if !self.catalog.contains(id) {
            log::warn!("selection of unknown project `{id}` rejected");
            return Transition::Rejected;
        }

        let transition = match self.highlighted() {
            Some(current) if current == id => return Transition::Unchanged,
            Some(_) => Transition::Switched,
            None => Transition::Opened,
        };

        self.state = self.detail_for(id.clone());
        navigator.navigate(&gallery_link(id));
        log::debug!("selection {transition:?} -> {id}");
        transition
    }

    /// Selection event from a skill: the first id wins.
    pub fn select_skill(
        &mut self,
        skill: &str,
        project_ids: &[ProjectId],
        navigator: &mut dyn Navigator,
    ) -> Transition {
        match project_ids.first() {
            Some(id) => self.select(id, navigator),
            None => {
                log::debug!("skill `{skill}` has no projects to select");
                Transition::Rejected
            }
        }
    }

    pub fn close(&mut self, navigator: &mut dyn Navigator) -> Transition {
        if !self.is_detail_open() {
            return Transition::Unchanged;
        }

        self.state = SelectionState::Idle;
        navigator.navigate(GALLERY_PATH);
        Transition::Closed
    }

    pub fn select_next(&mut self, navigator: &mut dyn Navigator) -> Transition {
        self.step(navigator, true)
    }

    pub fn select_previous(&mut self, navigator: &mut dyn Navigator) -> Transition {
        self.step(navigator, false)
    }

    fn step(&mut self, navigator: &mut dyn Navigator, forward: bool) -> Transition {
        let len = self.catalog.len();
        let Some(position) = self.highlighted().and_then(|id| self.catalog.position(id)) else {
            return Transition::Unchanged;
        };

        let target = if forward {
            (position + 1) % len
        } else {
            (position + len - 1) % len
        };

        let id = self.catalog.projects()[target].id.clone();
        self.select(&id, navigator)
    }

    fn detail_for(&self, project: ProjectId) -> SelectionState {
        let images = self.catalog.get(&project).map_or(0, |p| p.images.len());
        SelectionState::Detail {
            project,
            carousel: DetailCarousel::new(images),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::project;
    use crate::error::CatalogError;
    use crate::navigation::{MemoryNavigator, Route};

    fn catalog() -> Result<Arc<Catalog>, CatalogError> {
        Ok(Arc::new(Catalog::new(vec![
            project("1", &["Unity3D", "C#"], 3),
            project("2", &["React"], 1),
            project("3", &["Solidity"], 0),
        ])?))
    }

    #[test]
    fn deep_link_to_known_project_opens_detail() -> Result<(), CatalogError> {
        let mut navigator = MemoryNavigator::new("/projects?highlight=2");
        let controller = GallerySelectionController::mount(catalog()?, &mut navigator);

        assert!(controller.is_detail_open());
        assert_eq!(controller.highlighted(), Some(&ProjectId::new("2")));
        assert_eq!(controller.highlighted_project().map(|p| p.title.as_str()), Some("Project 2"));
        assert_eq!(navigator.history().len(), 1);
        Ok(())
    }

    #[test]
    fn deep_link_to_unknown_project_stays_idle() -> Result<(), CatalogError> {
        let mut navigator = MemoryNavigator::new("/projects?highlight=99");
        let controller = GallerySelectionController::mount(catalog()?, &mut navigator);

        assert_eq!(controller.state(), &SelectionState::Idle);
        assert!(controller.carousel().is_none());
        assert_eq!(navigator.current().to_string(), GALLERY_PATH);
        Ok(())
    }

    #[test]
    fn mount_without_parameter_is_idle() -> Result<(), CatalogError> {
        let mut navigator = MemoryNavigator::new(GALLERY_PATH);
        let controller = GallerySelectionController::mount(catalog()?, &mut navigator);

        assert!(!controller.is_detail_open());
        assert_eq!(navigator.history().len(), 1);
        Ok(())
    }

    #[test]
    fn click_selection_is_reflected_in_location() -> Result<(), CatalogError> {
        let mut navigator = MemoryNavigator::new(GALLERY_PATH);
        let mut controller = GallerySelectionController::mount(catalog()?, &mut navigator);

        assert_eq!(controller.select(&ProjectId::new("1"), &mut navigator), Transition::Opened);
        assert_eq!(navigator.current().to_string(), "/projects?highlight=1");

        assert_eq!(controller.close(&mut navigator), Transition::Closed);
        assert_eq!(navigator.current().to_string(), GALLERY_PATH);
        assert_eq!(navigator.current().route(), Some(Route::Gallery));
        assert_eq!(controller.close(&mut navigator), Transition::Unchanged);
        Ok(())
    }

    #[test]
    fn switching_projects_resets_the_carousel() -> Result<(), Box<dyn std::error::Error>> {
        let mut navigator = MemoryNavigator::new("/projects?highlight=1");
        let mut controller = GallerySelectionController::mount(catalog()?, &mut navigator);

        let carousel = controller.carousel_mut().ok_or("detail not open")?;
        carousel.next();
        carousel.next();
        assert_eq!(controller.carousel().and_then(DetailCarousel::current), Some(2));

        let transition = controller.select(&ProjectId::new("2"), &mut navigator);

        assert_eq!(transition, Transition::Switched);
        let carousel = controller.carousel().ok_or("detail not open")?;
        assert_eq!(carousel.current(), Some(0));
        assert_eq!(carousel.len(), 1);
        Ok(())
    }

    #[test]
    fn switching_to_a_project_without_images_disables_carousel() -> Result<(), CatalogError> {
        let mut navigator = MemoryNavigator::new("/projects?highlight=1");
        let mut controller = GallerySelectionController::mount(catalog()?, &mut navigator);

        controller.select(&ProjectId::new("3"), &mut navigator);

        assert_eq!(controller.carousel().and_then(DetailCarousel::current), None);
        Ok(())
    }

    #[test]
    fn unknown_selection_is_rejected_without_side_effects() -> Result<(), CatalogError> {
        let mut navigator = MemoryNavigator::new("/projects?highlight=2");
        let mut controller = GallerySelectionController::mount(catalog()?, &mut navigator);

        assert_eq!(controller.select(&ProjectId::new("404"), &mut navigator), Transition::Rejected);
        assert_eq!(controller.highlighted(), Some(&ProjectId::new("2")));
        assert_eq!(navigator.history().len(), 1);
        Ok(())
    }

    #[test]
    fn reselecting_same_project_keeps_carousel_position() -> Result<(), CatalogError> {
        let mut navigator = MemoryNavigator::new("/projects?highlight=1");
        let mut controller = GallerySelectionController::mount(catalog()?, &mut navigator);
        if let Some(carousel) = controller.carousel_mut() {
            carousel.next();
        }

        assert_eq!(controller.select(&ProjectId::new("1"), &mut navigator), Transition::Unchanged);
        assert_eq!(controller.carousel().and_then(DetailCarousel::current), Some(1));
        Ok(())
    }

    #[test]
    fn skill_selection_uses_first_id() -> Result<(), CatalogError> {
        let mut navigator = MemoryNavigator::new(GALLERY_PATH);
        let mut controller = GallerySelectionController::mount(catalog()?, &mut navigator);
        let ids = [ProjectId::new("2"), ProjectId::new("1")];

        assert_eq!(controller.select_skill("React", &ids, &mut navigator), Transition::Opened);
        assert_eq!(controller.highlighted(), Some(&ProjectId::new("2")));
        assert_eq!(controller.select_skill("Go", &[], &mut navigator), Transition::Rejected);
        Ok(())
    }

    #[test]
    fn next_and_previous_cycle_in_catalog_order() -> Result<(), CatalogError> {
        let mut navigator = MemoryNavigator::new("/projects?highlight=3");
        let mut controller = GallerySelectionController::mount(catalog()?, &mut navigator);

        assert_eq!(controller.select_next(&mut navigator), Transition::Switched);
        assert_eq!(controller.highlighted(), Some(&ProjectId::new("1")));

        controller.select_previous(&mut navigator);
        assert_eq!(controller.highlighted(), Some(&ProjectId::new("3")));
        assert_eq!(navigator.query_param(HIGHLIGHT_PARAM).as_deref(), Some("3"));

        controller.close(&mut navigator);
        assert_eq!(controller.select_next(&mut navigator), Transition::Unchanged);
        Ok(())
    }
}
