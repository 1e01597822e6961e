use std::sync::Arc;

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use portfolio_core::{
    Catalog, GallerySelectionController, MemoryNavigator, Navigator, Portfolio, Project,
    ProjectId, RadarChart, RadarClick, Route, Transition, SKILLS_PATH,
};

use crate::app::input::helpers::{wrap_decrement, wrap_increment};

/// Screens map one-to-one onto routes; the detail view is an overlay of the gallery.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AppScreen {
    Skills,
    Gallery,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum DetailTab {
    #[default]
    Overview,
    Problem,
    Solution,
    Challenges,
    Results,
}

impl DetailTab {
    pub const ALL: [Self; 5] = [
        Self::Overview,
        Self::Problem,
        Self::Solution,
        Self::Challenges,
        Self::Results,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Problem => "Problem",
            Self::Solution => "Solution",
            Self::Challenges => "Challenges",
            Self::Results => "Results",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Overview => 0,
            Self::Problem => 1,
            Self::Solution => 2,
            Self::Challenges => 3,
            Self::Results => 4,
        }
    }

    pub const fn next(self) -> Self {
        Self::ALL[wrap_increment(self.index(), Self::ALL.len())]
    }

    pub const fn prev(self) -> Self {
        Self::ALL[wrap_decrement(self.index(), Self::ALL.len())]
    }
}

/// Gallery text filter
#[derive(Debug, Default)]
pub struct SearchState {
    pub query: String,
    pub active: bool,
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub screen: AppScreen,
    pub catalog: Arc<Catalog>,
    pub charts: Vec<RadarChart>,
    pub active_chart: usize,
    pub focused_axis: usize,
    pub gallery: Option<GallerySelectionController>,
    pub navigator: MemoryNavigator,
    pub focused_card: usize,
    pub detail_tab: DetailTab,
    pub search: SearchState,
    pub status_message: String,
    pub show_help: bool,
}

impl App {
    pub fn new(portfolio: Portfolio, initial_location: &str) -> Self {
        let charts = portfolio
            .skill_groups
            .into_iter()
            .filter_map(|group| match RadarChart::new(group.title, group.skills, None) {
                Ok(chart) => Some(chart),
                Err(e) => {
                    log::warn!("skipping skill chart: {e}");
                    None
                }
            })
            .collect();

        let mut app = Self {
            running: true,
            screen: AppScreen::Skills,
            catalog: Arc::new(portfolio.catalog),
            charts,
            active_chart: 0,
            focused_axis: 0,
            gallery: None,
            navigator: MemoryNavigator::new(initial_location),
            focused_card: 0,
            detail_tab: DetailTab::default(),
            search: SearchState::default(),
            status_message: String::new(),
            show_help: false,
        };
        app.sync_route();
        app
    }

    /// Brings the screen in line with the navigator's location.
    ///
    /// Entering the gallery mounts a fresh controller, which reads the
    /// `highlight` parameter once.
    pub fn sync_route(&mut self) {
        let location = self.navigator.current();
        match location.route() {
            Some(Route::Skills) => {
                if self.gallery.take().is_some() {
                    log::debug!("left gallery for {location}");
                }
                self.screen = AppScreen::Skills;
            }
            Some(Route::Gallery) => {
                if self.screen == AppScreen::Gallery && self.gallery.is_some() {
                    return;
                }
                let controller =
                    GallerySelectionController::mount(Arc::clone(&self.catalog), &mut self.navigator);
                self.search = SearchState::default();
                self.detail_tab = DetailTab::default();
                self.focused_card = controller
                    .highlighted()
                    .and_then(|id| self.catalog.position(id))
                    .unwrap_or(0);
                self.gallery = Some(controller);
                self.screen = AppScreen::Gallery;
            }
            None => {
                log::warn!("no screen for {location}, returning to skills");
                self.navigator.navigate(SKILLS_PATH);
                self.gallery = None;
                self.screen = AppScreen::Skills;
            }
        }
    }

    pub fn go_to(&mut self, route: Route) {
        self.navigator.navigate(route.path());
        self.sync_route();
    }

    /// Returns to the previous location, remounting the gallery from it.
    pub fn go_back(&mut self) {
        if !self.navigator.back() {
            self.status_message = "Nothing to go back to".to_string();
            return;
        }
        self.gallery = None;
        self.status_message.clear();
        self.sync_route();
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn active_chart(&self) -> Option<&RadarChart> {
        self.charts.get(self.active_chart)
    }

    pub fn next_chart(&mut self) {
        self.switch_chart(wrap_increment(self.active_chart, self.charts.len()));
    }

    pub fn prev_chart(&mut self) {
        self.switch_chart(wrap_decrement(self.active_chart, self.charts.len()));
    }

    fn switch_chart(&mut self, index: usize) {
        if let Some(chart) = self.charts.get_mut(self.active_chart) {
            chart.hover(None);
        }
        self.active_chart = index;
        self.focused_axis = 0;
    }

    /// Keyboard focus or mouse hover over an axis; `None` clears emphasis.
    pub fn hover_axis(&mut self, index: Option<usize>) {
        let Some(chart) = self.charts.get_mut(self.active_chart) else {
            return;
        };
        chart.hover(index);
        if let Some(index) = index.filter(|index| *index < chart.len()) {
            self.focused_axis = index;
        }
    }

    pub fn focus_next_axis(&mut self) {
        let len = self.active_chart().map_or(0, RadarChart::len);
        self.hover_axis(Some(wrap_increment(self.focused_axis, len)));
    }

    pub fn focus_prev_axis(&mut self) {
        let len = self.active_chart().map_or(0, RadarChart::len);
        self.hover_axis(Some(wrap_decrement(self.focused_axis, len)));
    }

    /// Click on an axis point or label of the active chart.
    pub fn activate_axis(&mut self, index: usize) {
        let Some(chart) = self.charts.get_mut(self.active_chart) else {
            return;
        };
        self.focused_axis = index;

        match chart.click(index, &mut self.navigator) {
            RadarClick::Ignored => {
                if let Some(skill) = chart.skill(index) {
                    self.status_message = format!("No projects use {}", skill.name());
                }
            }
            RadarClick::Navigated(link) => {
                log::info!("radar navigated to {link}");
                self.status_message.clear();
            }
            RadarClick::Selected { index } => {
                log::debug!("radar selection handler ran for axis {index}");
            }
        }
        self.sync_route();
    }

    pub fn is_detail_open(&self) -> bool {
        self.gallery
            .as_ref()
            .is_some_and(GallerySelectionController::is_detail_open)
    }

    pub fn highlighted_project(&self) -> Option<&Project> {
        self.gallery
            .as_ref()
            .and_then(GallerySelectionController::highlighted_project)
    }

    /// Projects shown as gallery cards, in catalog order, narrowed by the search query.
    pub fn visible_projects(&self) -> Vec<&Project> {
        let query = self.search.query.trim();
        if query.is_empty() {
            return self.catalog.iter().collect();
        }

        let matcher = SkimMatcherV2::default();
        self.catalog
            .iter()
            .filter(|project| {
                let haystack = format!("{} {}", project.title, project.tools.join(" "));
                matcher.fuzzy_match(&haystack, query).is_some()
            })
            .collect()
    }

    pub fn focus_next_card(&mut self) {
        self.focused_card = wrap_increment(self.focused_card, self.visible_projects().len());
    }

    pub fn focus_prev_card(&mut self) {
        self.focused_card = wrap_decrement(self.focused_card, self.visible_projects().len());
    }

    pub fn open_focused_card(&mut self) {
        let id = self
            .visible_projects()
            .get(self.focused_card)
            .map(|project| project.id.clone());
        if let Some(id) = id {
            self.select_project(&id);
        }
    }

    pub fn select_project(&mut self, id: &ProjectId) {
        let Some(gallery) = self.gallery.as_mut() else {
            return;
        };
        let transition = gallery.select(id, &mut self.navigator);
        self.after_selection(transition);
    }

    pub fn select_adjacent_project(&mut self, forward: bool) {
        let Some(gallery) = self.gallery.as_mut() else {
            return;
        };
        let transition = if forward {
            gallery.select_next(&mut self.navigator)
        } else {
            gallery.select_previous(&mut self.navigator)
        };
        self.after_selection(transition);
    }

    fn after_selection(&mut self, transition: Transition) {
        match transition {
            Transition::Opened | Transition::Switched => {
                self.detail_tab = DetailTab::default();
                let highlighted = self
                    .highlighted_project()
                    .map(|project| project.id.clone());
                if let Some(position) = highlighted.and_then(|id| {
                    self.visible_projects()
                        .iter()
                        .position(|project| project.id == id)
                }) {
                    self.focused_card = position;
                }
            }
            Transition::Rejected => {
                self.status_message = "That project no longer exists".to_string();
            }
            Transition::Closed | Transition::Unchanged => {}
        }
    }

    pub fn close_detail(&mut self) {
        if let Some(gallery) = self.gallery.as_mut() {
            gallery.close(&mut self.navigator);
        }
    }

    pub fn carousel_next(&mut self) {
        if let Some(carousel) = self.gallery.as_mut().and_then(|g| g.carousel_mut()) {
            carousel.next();
        }
    }

    pub fn carousel_prev(&mut self) {
        if let Some(carousel) = self.gallery.as_mut().and_then(|g| g.carousel_mut()) {
            carousel.prev();
        }
    }

    pub fn carousel_jump(&mut self, index: usize) {
        let Some(carousel) = self.gallery.as_mut().and_then(|g| g.carousel_mut()) else {
            return;
        };
        if let Err(e) = carousel.jump_to(index) {
            self.status_message = e.to_string();
        }
    }

    pub fn start_search(&mut self) {
        self.search.active = true;
        self.status_message.clear();
    }

    pub fn update_search(&mut self, query: String) {
        self.search.query = query;
        self.focused_card = 0;
    }

    pub fn finish_search(&mut self) {
        self.search.active = false;
    }

    pub fn clear_search(&mut self) {
        self.search = SearchState::default();
        self.focused_card = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::sample::{sample_catalog, sample_skill_groups};
    use portfolio_core::{enrich_groups, DetailCarousel, HIGHLIGHT_PARAM};
    use std::error::Error;

    fn sample_portfolio() -> Result<Portfolio, Box<dyn Error>> {
        let catalog = sample_catalog()?;
        let skill_groups = enrich_groups(&sample_skill_groups()?, &catalog);
        Ok(Portfolio {
            catalog,
            skill_groups,
        })
    }

    #[test]
    fn radar_enter_lands_in_gallery_with_detail_open() -> Result<(), Box<dyn Error>> {
        let mut app = App::new(sample_portfolio()?, SKILLS_PATH);
        assert_eq!(app.screen, AppScreen::Skills);

        // Axis 3 of "Development Skills" is React.
        app.activate_axis(3);

        assert_eq!(app.screen, AppScreen::Gallery);
        assert!(app.is_detail_open());
        assert_eq!(app.highlighted_project().map(|p| p.id.as_str()), Some("2"));
        assert_eq!(app.focused_card, 1);
        assert_eq!(app.navigator.current().to_string(), "/projects?highlight=2");
        Ok(())
    }

    #[test]
    fn skill_without_projects_stays_on_skills() -> Result<(), Box<dyn Error>> {
        let mut app = App::new(sample_portfolio()?, SKILLS_PATH);

        // Axis 1 is Unreal Engine, which no sample project uses.
        app.activate_axis(1);

        assert_eq!(app.screen, AppScreen::Skills);
        assert_eq!(app.navigator.history().len(), 1);
        assert_eq!(app.status_message, "No projects use Unreal Engine");
        Ok(())
    }

    #[test]
    fn initial_deep_link_opens_detail() -> Result<(), Box<dyn Error>> {
        let app = App::new(sample_portfolio()?, "/projects?highlight=3");

        assert_eq!(app.screen, AppScreen::Gallery);
        assert_eq!(app.highlighted_project().map(|p| p.id.as_str()), Some("3"));
        assert_eq!(app.focused_card, 2);
        Ok(())
    }

    #[test]
    fn unknown_deep_link_shows_idle_gallery() -> Result<(), Box<dyn Error>> {
        let app = App::new(sample_portfolio()?, "/projects?highlight=99");

        assert_eq!(app.screen, AppScreen::Gallery);
        assert!(!app.is_detail_open());
        assert_eq!(app.navigator.query_param(HIGHLIGHT_PARAM), None);
        Ok(())
    }

    #[test]
    fn unknown_route_falls_back_to_skills() -> Result<(), Box<dyn Error>> {
        let app = App::new(sample_portfolio()?, "/settings");
        assert_eq!(app.screen, AppScreen::Skills);
        assert_eq!(app.navigator.current().path(), SKILLS_PATH);
        Ok(())
    }

    #[test]
    fn leaving_gallery_drops_controller() -> Result<(), Box<dyn Error>> {
        let mut app = App::new(sample_portfolio()?, "/projects?highlight=1");
        app.close_detail();
        assert!(!app.is_detail_open());

        app.go_to(Route::Skills);
        assert!(app.gallery.is_none());

        // Re-entering reads the (now absent) highlight again.
        app.go_to(Route::Gallery);
        assert!(!app.is_detail_open());
        Ok(())
    }

    #[test]
    fn back_restores_previous_location() -> Result<(), Box<dyn Error>> {
        let mut app = App::new(sample_portfolio()?, SKILLS_PATH);
        app.activate_axis(3);
        app.close_detail();
        assert!(!app.is_detail_open());

        app.go_back();
        assert_eq!(app.screen, AppScreen::Gallery);
        assert_eq!(app.highlighted_project().map(|p| p.id.as_str()), Some("2"));

        app.go_back();
        assert_eq!(app.screen, AppScreen::Skills);
        assert!(app.gallery.is_none());

        app.go_back();
        assert_eq!(app.screen, AppScreen::Skills);
        assert_eq!(app.status_message, "Nothing to go back to");
        Ok(())
    }

    #[test]
    fn switching_project_resets_tab_and_carousel() -> Result<(), Box<dyn Error>> {
        let mut app = App::new(sample_portfolio()?, "/projects?highlight=1");
        app.carousel_next();
        app.carousel_next();
        app.detail_tab = DetailTab::Results;

        app.select_adjacent_project(true);

        assert_eq!(app.highlighted_project().map(|p| p.id.as_str()), Some("2"));
        assert_eq!(app.detail_tab, DetailTab::Overview);
        let carousel = app.gallery.as_ref().and_then(|g| g.carousel());
        assert_eq!(carousel.and_then(DetailCarousel::current), Some(0));
        Ok(())
    }

    #[test]
    fn carousel_jump_out_of_range_reports_status() -> Result<(), Box<dyn Error>> {
        let mut app = App::new(sample_portfolio()?, "/projects?highlight=2");
        app.carousel_jump(5);
        assert!(!app.status_message.is_empty());

        app.carousel_jump(1);
        let carousel = app.gallery.as_ref().and_then(|g| g.carousel());
        assert_eq!(carousel.and_then(DetailCarousel::current), Some(1));
        Ok(())
    }

    #[test]
    fn search_narrows_cards_and_enter_opens_match() -> Result<(), Box<dyn Error>> {
        let mut app = App::new(sample_portfolio()?, "/projects");
        app.start_search();
        app.update_search("solidity".to_string());
        app.finish_search();

        let titles: Vec<&str> = app
            .visible_projects()
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(titles, ["Blockchain Supply Chain Tracker"]);

        app.open_focused_card();
        assert_eq!(app.highlighted_project().map(|p| p.id.as_str()), Some("3"));
        Ok(())
    }

    #[test]
    fn tab_cycles_charts_and_clears_hover() -> Result<(), Box<dyn Error>> {
        let mut app = App::new(sample_portfolio()?, SKILLS_PATH);
        app.focus_next_axis();
        assert_eq!(app.active_chart().and_then(RadarChart::emphasized), Some(1));

        app.next_chart();
        assert_eq!(app.active_chart().map(RadarChart::title), Some("Tooling"));
        assert_eq!(app.charts[0].emphasized(), None);

        app.next_chart();
        assert_eq!(app.active_chart, 0);
        Ok(())
    }

    #[test]
    fn detail_tabs_wrap() {
        assert_eq!(DetailTab::Results.next(), DetailTab::Overview);
        assert_eq!(DetailTab::Overview.prev(), DetailTab::Results);
    }
}
