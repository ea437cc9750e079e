pub mod catalog;
pub mod contact;
pub mod frames;
pub mod preload;
pub mod run;
pub mod theme;

use anyhow::Result;
use greenary_core::SiteData;
use greenary_core::AppConfig;

/// Site content from the configured file, or the built-in storefront
pub fn load_site(config: &AppConfig) -> Result<SiteData> {
    Ok(SiteData::load_or_builtin(config.site_file().as_deref())?)
}
