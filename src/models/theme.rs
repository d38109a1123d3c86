use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ThemeError;

/// Display mode controlling the page's colour scheme.
///
/// The ambient value is carried as `Option<Theme>`: `None` means the theme
/// has not been resolved yet (before the client has hydrated). The serde
/// names match `as_str`, so hosts persisting the theme store the same
/// value that ends up in the `data-theme` attribute.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub const fn all() -> &'static [Self] {
        &[Self::Light, Self::Dark]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Theme requested when the user activates the toggle.
    ///
    /// Anything other than an explicit `Light`, including an unresolved
    /// theme, switches to `Light`.
    pub const fn toggled(current: Option<Self>) -> Self {
        match current {
            Some(Self::Light) => Self::Dark,
            _ => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|theme| theme.as_str() == s)
            .ok_or_else(|| ThemeError::InvalidTheme(s.to_string()))
    }
}
