//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Text assets are loaded at compile time using `include_str!`.

use serde::Deserialize;

use crate::core::error::ConfigError;

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Site metadata (title, owner, tagline).
pub const SITE_TOML: &str = include_str!("../assets/site.toml");

/// Default admin data, used until the user saves their own.
pub mod default_data {
    pub const EXPERIENCE: &str = include_str!("../assets/data/experience.json");
    pub const PROJECTS: &str = include_str!("../assets/data/projects.json");
    pub const CERTIFICATIONS: &str = include_str!("../assets/data/certifications.json");
}

// =============================================================================
// Site Metadata
// =============================================================================

/// Fallback window title when the site config cannot be read.
pub const APP_NAME: &str = "ResumeOS";

/// Site metadata loaded from `assets/site.toml`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SiteConfig {
    /// Window title shown in the title bar
    pub title: String,
    /// Resume owner's name
    pub owner: String,
    /// Short line shown when nothing is selected
    #[serde(default)]
    pub tagline: String,
}

impl SiteConfig {
    /// Parse site metadata from TOML.
    pub fn parse(source: &str) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load the bundled site config, falling back to defaults on error.
    pub fn load() -> Self {
        Self::parse(SITE_TOML).unwrap_or_else(|_err| {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::warn_1(&_err.to_string().into());
            Self::default()
        })
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: APP_NAME.to_string(),
            owner: String::new(),
            tagline: String::new(),
        }
    }
}

// =============================================================================
// Explorer Tree
// =============================================================================

/// Recycle bin root id. Gets an "Empty Recycle Bin" action and can be neither
/// renamed nor deleted.
pub const RECYCLE_BIN_ID: &str = "recycleBin";

/// System items that can be neither renamed nor deleted.
pub const PROTECTED_ITEM_IDS: [&str; 3] = ["myComputer", "userProfile", "resumeDriveC"];

/// Folders expanded when the app starts.
pub const INITIALLY_EXPANDED: &[&str] = &["myComputer"];

/// Maximum nesting depth for tree traversal.
/// Anything deeper can only come from a parent cycle.
pub const MAX_TREE_DEPTH: usize = 32;

// =============================================================================
// Context Menu Geometry
// =============================================================================

/// Context menu layout constants (CSS pixels).
///
/// Must stay in sync with `context_menu.module.css`.
pub mod menu {
    /// Fixed menu width.
    pub const WIDTH: f64 = 180.0;
    /// Height of one action row.
    pub const ITEM_HEIGHT: f64 = 32.0;
    /// Height of a separator row (including margins).
    pub const SEPARATOR_HEIGHT: f64 = 9.0;
    /// Top + bottom padding of the menu box.
    pub const VERTICAL_PADDING: f64 = 8.0;
    /// Minimum distance kept from the viewport edges when clamping.
    pub const VIEWPORT_MARGIN: f64 = 8.0;
}

// =============================================================================
// Storage
// =============================================================================

/// localStorage key for the admin-edited resume data.
pub const RESUME_STORAGE_KEY: &str = "resumeData";

/// localStorage key for the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// File name used by "Export JSON".
pub const EXPORT_FILE_NAME: &str = "resume-data.json";

// =============================================================================
// UI Configuration
// =============================================================================

/// How long toast notices stay on screen (milliseconds).
pub const TOAST_DURATION_MS: u32 = 3000;

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_site_config_parses() {
        let config = SiteConfig::parse(SITE_TOML).expect("site.toml should parse");
        assert_eq!(config.title, "ResumeOS");
        assert!(!config.owner.is_empty());
    }

    #[test]
    fn test_site_config_tagline_optional() {
        let config = SiteConfig::parse("title = \"X\"\nowner = \"Y\"\n").unwrap();
        assert_eq!(config.tagline, "");
    }

    #[test]
    fn test_invalid_site_config() {
        assert!(matches!(
            SiteConfig::parse("title = "),
            Err(ConfigError::Parse(_))
        ));
        assert!(SiteConfig::parse("owner = \"only\"").is_err());
    }

    #[test]
    fn test_recycle_bin_kept_apart_from_protected_roots() {
        // The bin has its own menu rules and must not be listed twice
        assert!(!PROTECTED_ITEM_IDS.contains(&RECYCLE_BIN_ID));
    }
}
