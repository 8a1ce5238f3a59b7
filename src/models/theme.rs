//! Light/dark color theme.

/// Color theme applied to the document element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse the value persisted in localStorage.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Resolve the initial theme: a stored choice wins over the OS preference.
    pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Self {
        stored.and_then(Self::parse).unwrap_or(if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        })
    }
}
