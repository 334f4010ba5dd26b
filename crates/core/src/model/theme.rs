use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Storage key under which the theme preference is kept.
pub const THEME_PREFERENCE_KEY: &str = "theme";

/// Colour scheme applied to the root element as `data-theme`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown theme: {raw:?}")]
pub struct ThemeParseError {
    raw: String,
}

impl Theme {
    #[must_use]
    pub fn from_dark_mode(dark: bool) -> Self {
        if dark { Theme::Dark } else { Theme::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ThemeParseError {
                raw: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stored_values() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert!("Dark".parse::<Theme>().is_err());
        assert!("".parse::<Theme>().is_err());
    }

    #[test]
    fn dark_mode_flag_maps_to_theme() {
        assert_eq!(Theme::from_dark_mode(true), Theme::Dark);
        assert_eq!(Theme::from_dark_mode(false), Theme::Light);
        assert!(Theme::Dark.is_dark());
        assert_eq!(Theme::Light.to_string(), "light");
    }
}
