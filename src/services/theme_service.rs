use tracing::info;

use crate::errors::AppError;
use crate::models::GeneratedTheme;
use crate::services::color::parse_hex_strict;
use crate::services::theme_generator::{generate_theme, predefined_themes};

/// Default theme when nothing has been selected yet.
pub const DEFAULT_THEME: &str = "coffee";

/// Holds the active theme and switches between predefined and custom ones.
///
/// Persistence of the selection (e.g. the saved theme name) is the
/// caller's concern; this type only owns the in-memory state.
#[derive(Debug, Clone)]
pub struct ThemeManager {
    current_name: String,
    current_theme: GeneratedTheme,
}

impl ThemeManager {
    pub fn new() -> Self {
        Self {
            current_name: DEFAULT_THEME.to_string(),
            current_theme: predefined_themes()[DEFAULT_THEME].clone(),
        }
    }

    pub fn current(&self) -> &GeneratedTheme {
        &self.current_theme
    }

    pub fn current_name(&self) -> &str {
        &self.current_name
    }

    /// Names of all predefined themes, alphabetical.
    pub fn available_themes(&self) -> Vec<&'static str> {
        predefined_themes().keys().copied().collect()
    }

    /// Switches to a predefined theme. The active theme is untouched when
    /// the name is unknown.
    pub fn set_theme(&mut self, name: &str) -> Result<(), AppError> {
        let theme = predefined_themes()
            .get(name)
            .ok_or_else(|| AppError::UnknownTheme(name.to_string()))?;

        info!(theme = name, "switching to predefined theme");
        self.current_name = name.to_string();
        self.current_theme = theme.clone();
        Ok(())
    }

    /// Generates and activates a theme from a custom seed color.
    ///
    /// Unlike [`generate_theme`] this validates the seed up front, so a
    /// typo surfaces as an error instead of a silently black theme.
    pub fn set_custom_theme(&mut self, seed_hex: &str, name: Option<&str>) -> Result<(), AppError> {
        parse_hex_strict(seed_hex)?;

        let name = name.unwrap_or("custom");
        info!(seed = seed_hex, name, "switching to custom theme");
        self.current_theme = generate_theme(seed_hex, name);
        self.current_name = name.to_string();
        Ok(())
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}
