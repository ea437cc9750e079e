use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub hero: HeroConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (preferences and log file live here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Site content file (TOML or JSON). The built-in content is used when unset.
    #[serde(default)]
    pub site_file: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            site_file: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroConfig {
    /// Base that frame directories resolve against: an http(s) URL or a local directory
    #[serde(default = "default_frame_base")]
    pub frame_base: String,
    /// Scroll distance, in viewport heights, over which a sequence plays through
    #[serde(default = "default_scroll_window_viewports")]
    pub scroll_window_viewports: f64,
    /// Delay between fading out the old variant text and writing the new one
    #[serde(default = "default_switch_fade_ms")]
    pub switch_fade_ms: u64,
    /// Gap between consecutive elements fading back in
    #[serde(default = "default_fade_in_stagger_ms")]
    pub fade_in_stagger_ms: u64,
    /// How long the full-screen loader lingers after the first preload settles
    #[serde(default = "default_loader_hide_delay_ms")]
    pub loader_hide_delay_ms: u64,
    /// Minimum horizontal drag distance (in cells) that counts as a swipe
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold: f64,
    /// Upper bound on concurrent frame requests (unset = request every frame at once)
    #[serde(default)]
    pub max_concurrent_loads: Option<usize>,
    /// Per-frame request timeout in seconds (unset = no timeout)
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    /// HTTP proxy URL for frame fetching (e.g., "http://127.0.0.1:7890" or "socks5://127.0.0.1:1080")
    #[serde(default)]
    pub proxy_url: Option<String>,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            frame_base: default_frame_base(),
            scroll_window_viewports: default_scroll_window_viewports(),
            switch_fade_ms: default_switch_fade_ms(),
            fade_in_stagger_ms: default_fade_in_stagger_ms(),
            loader_hide_delay_ms: default_loader_hide_delay_ms(),
            swipe_threshold: default_swipe_threshold(),
            max_concurrent_loads: None,
            request_timeout_secs: None,
            proxy_url: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Image shown when a product image cannot be loaded
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,
    /// Delay between cards revealed in the same batch
    #[serde(default = "default_reveal_stagger_ms")]
    pub reveal_stagger_ms: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            placeholder_image: default_placeholder_image(),
            reveal_stagger_ms: default_reveal_stagger_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds while idle
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Refresh rate while scrubbing or animating
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("greenary")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_frame_base() -> String {
    ".".to_string()
}

fn default_scroll_window_viewports() -> f64 {
    2.5
}

fn default_switch_fade_ms() -> u64 {
    400
}

fn default_fade_in_stagger_ms() -> u64 {
    100
}

fn default_loader_hide_delay_ms() -> u64 {
    500
}

fn default_swipe_threshold() -> f64 {
    50.0
}

fn default_placeholder_image() -> String {
    "assets/logo.jpg".to_string()
}

fn default_reveal_stagger_ms() -> u64 {
    100
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u32 {
    60
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, falling back to defaults when it is missing
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Get the configuration file path
    /// Always uses ~/.config/greenary/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("greenary")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Path of the persisted preferences file
    pub fn preferences_path(&self) -> PathBuf {
        self.data_dir().join("preferences.toml")
    }

    /// Path of the log file used while the TUI owns the terminal
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("greenary.log")
    }

    /// Site content file with tilde expansion
    pub fn site_file(&self) -> Option<PathBuf> {
        self.general.site_file.as_deref().map(expand_tilde)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page_timings() {
        let config = AppConfig::default();
        assert!((config.hero.scroll_window_viewports - 2.5).abs() < f64::EPSILON);
        assert_eq!(config.hero.switch_fade_ms, 400);
        assert_eq!(config.hero.fade_in_stagger_ms, 100);
        assert_eq!(config.hero.loader_hide_delay_ms, 500);
        assert_eq!(config.hero.max_concurrent_loads, None);
        assert_eq!(config.catalog.placeholder_image, "assets/logo.jpg");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [hero]
            frame_base = "https://cdn.example.com/site"
            max_concurrent_loads = 16
            "#,
        )
        .unwrap();

        assert_eq!(config.hero.frame_base, "https://cdn.example.com/site");
        assert_eq!(config.hero.max_concurrent_loads, Some(16));
        assert_eq!(config.hero.switch_fade_ms, 400);
        assert_eq!(config.ui.tick_rate_ms, 100);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.general.log_level, "info");
    }

    #[test]
    fn test_preferences_path_under_data_dir() {
        let mut config = AppConfig::default();
        config.general.data_dir = PathBuf::from("/tmp/greenary-data");
        assert_eq!(
            config.preferences_path(),
            PathBuf::from("/tmp/greenary-data/preferences.toml")
        );
    }
}
