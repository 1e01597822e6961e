use portfolio_core::{Location, MemoryNavigator, Navigator};
use wasm_bindgen::JsValue;

/// Reads and pushes the page URL through the History API.
///
/// Outside a browser window every call falls through to an in-memory stack.
#[derive(Debug, Clone)]
pub struct BrowserNavigator {
    fallback: MemoryNavigator,
}

impl BrowserNavigator {
    pub fn new() -> Self {
        let fallback = MemoryNavigator::new(&page_location().unwrap_or_default());
        Self { fallback }
    }
}

impl Default for BrowserNavigator {
    fn default() -> Self {
        Self::new()
    }
}

fn page_location() -> Option<String> {
    let location = web_sys::window()?.location();
    let path = location.pathname().ok()?;
    let search = location.search().unwrap_or_default();
    Some(format!("{path}{search}"))
}

impl Navigator for BrowserNavigator {
    fn current(&self) -> Location {
        page_location().map_or_else(|| self.fallback.current(), |href| Location::parse(&href))
    }

    fn navigate(&mut self, target: &str) {
        self.fallback.navigate(target);

        let pushed = web_sys::window()
            .and_then(|window| window.history().ok())
            .map(|history| history.push_state_with_url(&JsValue::NULL, "", Some(target)));
        if !matches!(pushed, Some(Ok(()))) {
            web_sys::console::warn_1(&format!("Could not push {target} to history").into());
        }
    }
}
