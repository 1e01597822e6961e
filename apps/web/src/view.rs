//! Page state for the web view: one radar wired straight into the gallery
//! selection, both on the same page.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use portfolio_core::{
    GallerySelectionController, Navigator, Portfolio, Project, ProjectId, RadarChart, RadarClick,
    Transition,
};

type PendingSelection = Rc<RefCell<Option<(String, Vec<ProjectId>)>>>;

#[cfg(target_arch = "wasm32")]
fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
fn warn(message: &str) {
    eprintln!("{message}");
}

pub struct WebApp<N: Navigator> {
    charts: Vec<RadarChart>,
    active_chart: usize,
    focused_axis: usize,
    gallery: GallerySelectionController,
    navigator: N,
    pending: PendingSelection,
    pub status: String,
}

impl<N: Navigator> WebApp<N> {
    /// Radar clicks are routed to the gallery controller instead of navigating.
    pub fn new(portfolio: Portfolio, mut navigator: N) -> Self {
        let pending: PendingSelection = Rc::new(RefCell::new(None));

        let charts = portfolio
            .skill_groups
            .into_iter()
            .filter_map(|group| {
                let pending = Rc::clone(&pending);
                match RadarChart::new(group.title.clone(), group.skills, None) {
                    Ok(chart) => Some(chart.with_on_select(move |skill, ids| {
                        *pending.borrow_mut() = Some((skill.name().to_string(), ids.to_vec()));
                    })),
                    Err(e) => {
                        warn(&format!("Skipping skill chart {}: {e}", group.title));
                        None
                    }
                }
            })
            .collect();

        let gallery = GallerySelectionController::mount(Arc::new(portfolio.catalog), &mut navigator);

        Self {
            charts,
            active_chart: 0,
            focused_axis: 0,
            gallery,
            navigator,
            pending,
            status: String::new(),
        }
    }

    pub fn chart(&self) -> Option<&RadarChart> {
        self.charts.get(self.active_chart)
    }

    pub const fn focused_axis(&self) -> usize {
        self.focused_axis
    }

    pub const fn gallery(&self) -> &GallerySelectionController {
        &self.gallery
    }

    pub fn highlighted_project(&self) -> Option<&Project> {
        self.gallery.highlighted_project()
    }

    pub fn location(&self) -> String {
        self.navigator.current().to_string()
    }

    pub fn next_chart(&mut self) {
        if self.charts.is_empty() {
            return;
        }
        if let Some(chart) = self.charts.get_mut(self.active_chart) {
            chart.hover(None);
        }
        self.active_chart = (self.active_chart + 1) % self.charts.len();
        self.focused_axis = 0;
    }

    pub fn focus_axis(&mut self, forward: bool) {
        let Some(chart) = self.charts.get_mut(self.active_chart) else {
            return;
        };
        let len = chart.len();
        self.focused_axis = if forward {
            (self.focused_axis + 1) % len
        } else {
            (self.focused_axis + len - 1) % len
        };
        chart.hover(Some(self.focused_axis));
    }

    /// Click on the focused axis.
    pub fn activate_focused(&mut self) -> Transition {
        let Some(chart) = self.charts.get_mut(self.active_chart) else {
            return Transition::Unchanged;
        };

        match chart.click(self.focused_axis, &mut self.navigator) {
            RadarClick::Selected { .. } => {
                let pending = self.pending.borrow_mut().take();
                let Some((skill, ids)) = pending else {
                    return Transition::Unchanged;
                };
                self.status.clear();
                self.gallery.select_skill(&skill, &ids, &mut self.navigator)
            }
            RadarClick::Ignored => {
                if let Some(skill) = chart.skill(self.focused_axis) {
                    self.status = format!("No projects use {}", skill.name());
                }
                Transition::Unchanged
            }
            RadarClick::Navigated(_) => Transition::Unchanged,
        }
    }

    pub fn step_project(&mut self, forward: bool) -> Transition {
        if forward {
            self.gallery.select_next(&mut self.navigator)
        } else {
            self.gallery.select_previous(&mut self.navigator)
        }
    }

    pub fn close(&mut self) -> Transition {
        self.gallery.close(&mut self.navigator)
    }

    pub fn step_image(&mut self, forward: bool) {
        if let Some(carousel) = self.gallery.carousel_mut() {
            if forward {
                carousel.next();
            } else {
                carousel.prev();
            }
        }
    }

    pub fn jump_image(&mut self, index: usize) {
        if let Some(carousel) = self.gallery.carousel_mut() {
            if let Err(e) = carousel.jump_to(index) {
                self.status = e.to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::sample::{sample_catalog, sample_skill_groups};
    use portfolio_core::{enrich_groups, MemoryNavigator, SkillGroup};
    use std::error::Error;

    fn web_app(location: &str) -> Result<WebApp<MemoryNavigator>, Box<dyn Error>> {
        let catalog = sample_catalog()?;
        let skill_groups = enrich_groups(&sample_skill_groups()?, &catalog);
        Ok(WebApp::new(
            Portfolio {
                catalog,
                skill_groups,
            },
            MemoryNavigator::new(location),
        ))
    }

    #[test]
    fn radar_click_opens_first_project_in_place() -> Result<(), Box<dyn Error>> {
        let mut app = web_app("/")?;
        for _ in 0..3 {
            app.focus_axis(true);
        }

        assert_eq!(app.activate_focused(), Transition::Opened);
        assert_eq!(app.highlighted_project().map(|p| p.id.as_str()), Some("2"));
        assert_eq!(app.location(), "/projects?highlight=2");

        assert_eq!(app.activate_focused(), Transition::Unchanged);
        Ok(())
    }

    #[test]
    fn skill_without_projects_sets_status() -> Result<(), Box<dyn Error>> {
        let catalog = sample_catalog()?;
        let mut app = WebApp::new(
            Portfolio {
                skill_groups: sample_skill_groups()?,
                catalog,
            },
            MemoryNavigator::new("/"),
        );

        assert_eq!(app.activate_focused(), Transition::Unchanged);
        assert!(app.status.starts_with("No projects use"));
        assert!(!app.gallery().is_detail_open());
        Ok(())
    }

    #[test]
    fn chart_that_cannot_render_is_skipped() -> Result<(), Box<dyn Error>> {
        let catalog = sample_catalog()?;
        let mut skill_groups = enrich_groups(&sample_skill_groups()?, &catalog);
        skill_groups.insert(
            0,
            SkillGroup {
                title: "Empty".to_string(),
                skills: Vec::new(),
            },
        );

        let app = WebApp::new(
            Portfolio {
                catalog,
                skill_groups,
            },
            MemoryNavigator::new("/"),
        );

        assert_eq!(app.charts.len(), 2);
        assert_eq!(app.chart().map(RadarChart::title), Some("Development Skills"));
        Ok(())
    }

    #[test]
    fn deep_link_and_carousel() -> Result<(), Box<dyn Error>> {
        let mut app = web_app("/projects?highlight=1")?;
        assert_eq!(app.highlighted_project().map(|p| p.id.as_str()), Some("1"));

        app.step_image(false);
        assert_eq!(app.gallery().carousel().and_then(|c| c.current()), Some(2));

        app.jump_image(7);
        assert!(!app.status.is_empty());

        assert_eq!(app.step_project(true), Transition::Switched);
        assert_eq!(app.gallery().carousel().and_then(|c| c.current()), Some(0));

        assert_eq!(app.close(), Transition::Closed);
        assert_eq!(app.location(), "/projects");
        Ok(())
    }
}
