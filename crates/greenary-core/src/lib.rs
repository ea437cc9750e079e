pub mod catalog;
pub mod config;
pub mod error;
pub mod hero;
pub mod preferences;
pub mod site;

pub use config::AppConfig;
pub use error::{Error, Result};
pub use preferences::{PreferenceStore, ThemePreference};
pub use site::SiteData;
