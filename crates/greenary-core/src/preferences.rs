use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{Error, Result};

/// Colour scheme chosen by the visitor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Anything but dark becomes dark, dark becomes light
    pub fn toggled(current: Option<Self>) -> Self {
        match current {
            Some(Self::Dark) => Self::Light,
            _ => Self::Dark,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct Preferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theme: Option<ThemePreference>,
}

/// Preferences persisted between sessions in a small TOML file
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
    prefs: Preferences,
}

impl PreferenceStore {
    /// Open the store at `path`. A missing or unreadable file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let prefs = match Self::read(&path) {
            Ok(prefs) => prefs,
            Err(e) => {
                warn!("Ignoring unreadable preferences at {}: {}", path.display(), e);
                Preferences::default()
            }
        };
        Self { path, prefs }
    }

    fn read(path: &Path) -> Result<Preferences> {
        if !path.exists() {
            return Ok(Preferences::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored theme, `None` when the visitor never chose one
    pub fn theme(&self) -> Option<ThemePreference> {
        self.prefs.theme
    }

    /// Theme to display; light unless dark was chosen
    pub fn effective_theme(&self) -> ThemePreference {
        self.prefs.theme.unwrap_or(ThemePreference::Light)
    }

    pub fn set_theme(&mut self, theme: ThemePreference) -> Result<()> {
        self.prefs.theme = Some(theme);
        self.save()
    }

    /// Flip the theme and persist it, returning the new value
    pub fn toggle_theme(&mut self) -> Result<ThemePreference> {
        let theme = ThemePreference::toggled(self.prefs.theme);
        self.set_theme(theme)?;
        debug!("Theme toggled to {}", theme.as_str());
        Ok(theme)
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(&self.prefs).map_err(|e| Error::Config(e.to_string()))?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}
