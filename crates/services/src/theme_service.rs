use std::sync::Arc;

use kartei_core::model::{THEME_PREFERENCE_KEY, Theme};
use storage::repository::PreferenceRepository;

use crate::error::ThemeServiceError;

/// Stored preference wins; otherwise follow the OS dark-mode hint.
#[must_use]
pub fn resolve_theme(stored: Option<Theme>, os_prefers_dark: bool) -> Theme {
    stored.unwrap_or_else(|| Theme::from_dark_mode(os_prefers_dark))
}

#[derive(Clone)]
pub struct ThemeService {
    repo: Arc<dyn PreferenceRepository>,
}

impl ThemeService {
    #[must_use]
    pub fn new(repo: Arc<dyn PreferenceRepository>) -> Self {
        Self { repo }
    }

    /// Load the stored theme. Unrecognized values count as no preference.
    ///
    /// # Errors
    ///
    /// Returns `ThemeServiceError` on storage failures.
    pub async fn stored(&self) -> Result<Option<Theme>, ThemeServiceError> {
        let Some(raw) = self.repo.get_preference(THEME_PREFERENCE_KEY).await? else {
            return Ok(None);
        };
        match raw.parse::<Theme>() {
            Ok(theme) => Ok(Some(theme)),
            Err(err) => {
                log::warn!("ignoring stored theme preference: {err}");
                Ok(None)
            }
        }
    }

    /// Resolve the theme to start with.
    ///
    /// # Errors
    ///
    /// Returns `ThemeServiceError` on storage failures.
    pub async fn resolve(&self, os_prefers_dark: bool) -> Result<Theme, ThemeServiceError> {
        let stored = self.stored().await?;
        Ok(resolve_theme(stored, os_prefers_dark))
    }

    /// Persist the theme chosen via the dark-mode toggle.
    ///
    /// # Errors
    ///
    /// Returns `ThemeServiceError` if persistence fails.
    pub async fn set_dark_mode(&self, dark: bool) -> Result<Theme, ThemeServiceError> {
        let theme = Theme::from_dark_mode(dark);
        self.repo
            .set_preference(THEME_PREFERENCE_KEY, theme.as_str())
            .await?;
        Ok(theme)
    }
}
