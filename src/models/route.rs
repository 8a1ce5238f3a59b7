//! Hash-based routing.
//!
//! URL format: `#/` for the explorer, `#/admin` for the resume editor.
//! Hash routing keeps the app servable from any static host.

use crate::utils::dom;

/// Application routes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppRoute {
    /// Explorer window: #/ or empty hash
    #[default]
    Explorer,
    /// Admin editor: #/admin
    Admin,
}

impl AppRoute {
    /// Parse a URL hash into a route. Unknown hashes fall back to the explorer.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash
            .trim_start_matches('#')
            .trim_start_matches('/')
            .trim_end_matches('/');

        match path {
            "admin" => Self::Admin,
            _ => Self::Explorer,
        }
    }

    /// Convert the route to a URL hash.
    pub fn to_hash(self) -> &'static str {
        match self {
            Self::Explorer => "#/",
            Self::Admin => "#/admin",
        }
    }

    /// Get the current route from the browser URL.
    pub fn current() -> Self {
        Self::from_hash(&dom::get_hash())
    }

    /// Navigate to this route (fires `hashchange`).
    pub fn push(self) {
        dom::set_hash(self.to_hash());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(AppRoute::from_hash(""), AppRoute::Explorer);
        assert_eq!(AppRoute::from_hash("#"), AppRoute::Explorer);
        assert_eq!(AppRoute::from_hash("#/"), AppRoute::Explorer);
        assert_eq!(AppRoute::from_hash("#/admin"), AppRoute::Admin);
        assert_eq!(AppRoute::from_hash("#/admin/"), AppRoute::Admin);
        assert_eq!(AppRoute::from_hash("admin"), AppRoute::Admin);
        // Unknown paths fall back to the explorer
        assert_eq!(AppRoute::from_hash("#/settings"), AppRoute::Explorer);
        assert_eq!(AppRoute::from_hash("#/admin/extra"), AppRoute::Explorer);
    }

    #[test]
    fn test_route_to_hash() {
        assert_eq!(AppRoute::Explorer.to_hash(), "#/");
        assert_eq!(AppRoute::Admin.to_hash(), "#/admin");
        assert_eq!(AppRoute::from_hash(AppRoute::Admin.to_hash()), AppRoute::Admin);
    }
}
