//! Static storefront content: hero slides, product list and contact block.
//!
//! Every field carries a serde default so a record with missing or
//! unexpected fields still loads and renders as empty text.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{Error, Result};

const BUILTIN_SITE: &str = include_str!("../assets/site.toml");

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteData {
    #[serde(default)]
    pub hero: HeroContent,
    #[serde(default)]
    pub products: Vec<ProductRecord>,
    #[serde(default)]
    pub contact: ContactInfo,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeroContent {
    #[serde(default)]
    pub slides: Vec<VariantRecord>,
}

/// A product shown in the catalog grid
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    pub price: String,
    pub unit: String,
    pub image: String,
    pub description: String,
    pub url: String,
    pub benefits: Vec<String>,
}

/// One animated hero slide with its own numbered frame sequence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantRecord {
    pub id: String,
    pub name: String,
    pub subtitle: String,
    pub description: String,
    #[serde(alias = "themeColor")]
    pub theme_color: String,
    #[serde(alias = "frameDir")]
    pub frame_dir: String,
    #[serde(alias = "frameCount")]
    pub frame_count: usize,
    #[serde(alias = "experienceUrl", skip_serializing_if = "Option::is_none")]
    pub experience_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub phone: String,
    #[serde(alias = "displayPhone")]
    pub display_phone: String,
    pub email: String,
    pub instagram: String,
    #[serde(alias = "whatsappMessage")]
    pub whatsapp_message: String,
}

impl SiteData {
    /// The storefront content shipped with the binary
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_SITE)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let site: Self = toml::from_str(content)?;
        Ok(site.sanitized())
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let site: Self = serde_json::from_str(content)?;
        Ok(site.sanitized())
    }

    /// Load site content from a `.toml` or `.json` file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&content),
            Some("toml") => Self::from_toml_str(&content),
            other => Err(Error::Config(format!(
                "Unsupported site file extension {:?} for {}",
                other,
                path.display()
            ))),
        }
    }

    /// Load from an optional path, falling back to the built-in content
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }

    /// Drop slides that cannot be scrubbed (no frames)
    fn sanitized(mut self) -> Self {
        self.hero.slides.retain(|slide| {
            if slide.frame_count == 0 {
                warn!("Dropping hero slide '{}': frame_count must be positive", slide.id);
                false
            } else {
                true
            }
        });
        self
    }

    /// Position of the slide with the given id
    pub fn variant_index(&self, id: &str) -> Option<usize> {
        self.hero.slides.iter().position(|s| s.id == id)
    }

    /// Slide with the given id
    pub fn variant(&self, id: &str) -> Result<&VariantRecord> {
        self.hero
            .slides
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| Error::VariantNotFound(id.to_string()))
    }
}
