//! Hash-based routing between the index page and project detail pages.

/// Application routes for hash-based navigation.
///
/// URL format: `#/` for the index, `#/project/{id}` for a detail page.
/// Unrecognized hashes fall back to [`Route::Home`] so a stray anchor can
/// never strand the user on a blank page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// Index page: navbar, skills, projects, contact.
    Home,
    /// Project detail page for one project id.
    Project { id: u32 },
}

impl Route {
    /// Parse a URL hash into a route.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_start_matches('/');

        if path.is_empty() {
            return Self::Home;
        }

        match path.strip_prefix("project/") {
            Some(id) => id
                .trim_end_matches('/')
                .parse()
                .map(|id| Self::Project { id })
                .unwrap_or(Self::Home),
            None => Self::Home,
        }
    }

    /// Convert this route to a URL hash.
    pub fn to_hash(&self) -> String {
        match self {
            Self::Home => "#/".to_string(),
            Self::Project { id } => format!("#/project/{}", id),
        }
    }

    /// Get the current route from the browser URL.
    pub fn current() -> Self {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        Self::from_hash(&hash)
    }

    /// Update the browser URL to this route (adds a history entry).
    ///
    /// Goes through `location` rather than the history API so the router's
    /// hashchange listener fires.
    pub fn push(&self) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(&self.to_hash());
        }
    }

    /// Replace the current URL with this route (no history entry).
    ///
    /// Used for redirects that should not appear in back-button history,
    /// e.g. a detail page for an unknown project id. A same-document hash
    /// replacement still fires hashchange without reloading.
    pub fn replace(&self) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().replace(&self.to_hash());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(Route::from_hash(""), Route::Home);
        assert_eq!(Route::from_hash("#"), Route::Home);
        assert_eq!(Route::from_hash("#/"), Route::Home);
        assert_eq!(Route::from_hash("#/project/3"), Route::Project { id: 3 });
        assert_eq!(Route::from_hash("#/project/3/"), Route::Project { id: 3 });
    }

    #[test]
    fn malformed_hashes_fall_back_to_home() {
        assert_eq!(Route::from_hash("#/project/"), Route::Home);
        assert_eq!(Route::from_hash("#/project/abc"), Route::Home);
        assert_eq!(Route::from_hash("#/unknown"), Route::Home);
        assert_eq!(Route::from_hash("#skills"), Route::Home);
    }

    #[test]
    fn test_route_to_hash() {
        assert_eq!(Route::Home.to_hash(), "#/");
        assert_eq!(Route::Project { id: 12 }.to_hash(), "#/project/12");
    }

    #[test]
    fn parse_and_print_round_trip() {
        for route in [Route::Home, Route::Project { id: 7 }] {
            assert_eq!(Route::from_hash(&route.to_hash()), route);
        }
    }
}
