//! Addressable locations, deep links and the navigator seam.
//!
//! Front ends supply a [`Navigator`]: the terminal app keeps an in-memory
//! history ([`MemoryNavigator`]), the browser app wraps `window.location`.

use std::fmt;

use url::form_urlencoded;

use crate::catalog::ProjectId;

pub const SKILLS_PATH: &str = "/skills";
pub const GALLERY_PATH: &str = "/projects";
/// Query parameter carrying the project to open in the gallery.
pub const HIGHLIGHT_PARAM: &str = "highlight";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Skills,
    Gallery,
}

impl Route {
    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim_end_matches('/') {
            "" | SKILLS_PATH => Some(Self::Skills),
            GALLERY_PATH => Some(Self::Gallery),
            _ => None,
        }
    }

    pub const fn path(self) -> &'static str {
        match self {
            Self::Skills => SKILLS_PATH,
            Self::Gallery => GALLERY_PATH,
        }
    }
}

/// Path to the gallery view with `highlight=<id>` appended.
pub fn gallery_link(id: &ProjectId) -> String {
    Location::new(GALLERY_PATH)
        .with_param(HIGHLIGHT_PARAM, id.as_str())
        .to_string()
}

/// A path plus its ordered query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    path: String,
    query: Vec<(String, String)>,
}

impl Location {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            path: if path.is_empty() { "/".to_string() } else { path },
            query: Vec::new(),
        }
    }

    /// Parses `path?query#fragment`; the fragment is dropped.
    pub fn parse(target: &str) -> Self {
        let target = target.split('#').next().unwrap_or_default();
        let (path, query) = target.split_once('?').unwrap_or((target, ""));

        let mut location = Self::new(path);
        location.query = form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();
        location
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn route(&self) -> Option<Route> {
        Route::from_path(&self.path)
    }

    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    #[must_use]
    pub fn with_param(mut self, name: &str, value: &str) -> Self {
        self.query.retain(|(key, _)| key != name);
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    #[must_use]
    pub fn without_param(mut self, name: &str) -> Self {
        self.query.retain(|(key, _)| key != name);
        self
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if !self.query.is_empty() {
            let query = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(&self.query)
                .finish();
            write!(f, "?{query}")?;
        }
        Ok(())
    }
}

/// Location parsing plus an imperative "go to" primitive.
pub trait Navigator {
    fn current(&self) -> Location;

    fn navigate(&mut self, target: &str);

    fn query_param(&self, name: &str) -> Option<String> {
        self.current().query_param(name).map(str::to_string)
    }
}

/// Navigator backed by an in-memory history stack.
#[derive(Debug, Clone)]
pub struct MemoryNavigator {
    history: Vec<Location>,
}

impl MemoryNavigator {
    pub fn new(initial: &str) -> Self {
        Self {
            history: vec![Location::parse(initial)],
        }
    }

    pub fn history(&self) -> &[Location] {
        &self.history
    }

    /// Pops the current entry; the first entry is never removed.
    pub fn back(&mut self) -> bool {
        if self.history.len() > 1 {
            self.history.pop();
            true
        } else {
            false
        }
    }
}

impl Default for MemoryNavigator {
    fn default() -> Self {
        Self::new(SKILLS_PATH)
    }
}

impl Navigator for MemoryNavigator {
    fn current(&self) -> Location {
        self.history
            .last()
            .cloned()
            .unwrap_or_else(|| Location::new(SKILLS_PATH))
    }

    fn navigate(&mut self, target: &str) {
        log::debug!("navigate: {target}");
        self.history.push(Location::parse(target));
    }
}
