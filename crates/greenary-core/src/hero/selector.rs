use tracing::{debug, warn};
use url::Url;

use crate::site::VariantRecord;
use crate::Result;

/// Relative links such as `experience.html?id=vermicompost` are resolved against this
const LINK_BASE: &str = "http://localhost/";

/// Picks the starting variant. A requested id also switches the hero into story mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantSelector {
    requested: Option<String>,
}

impl VariantSelector {
    /// No request: start on the first variant with switching enabled
    pub fn first() -> Self {
        Self::default()
    }

    pub fn from_id(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            requested: (!id.is_empty()).then_some(id),
        }
    }

    /// Read the `id` query parameter from an absolute or relative link
    pub fn from_link(link: &str) -> Result<Self> {
        let url = match Url::parse(link) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(LINK_BASE)?.join(link)?,
            Err(e) => return Err(e.into()),
        };

        let requested = url
            .query_pairs()
            .find(|(key, _)| key == "id")
            .map(|(_, value)| value.into_owned())
            .filter(|id| !id.is_empty());
        debug!("Link {} requests variant {:?}", link, requested);

        Ok(Self { requested })
    }

    pub fn requested_id(&self) -> Option<&str> {
        self.requested.as_deref()
    }

    pub fn is_story_mode(&self) -> bool {
        self.requested.is_some()
    }

    /// Index of the requested variant, or 0 when nothing (or nothing known) was requested
    pub fn resolve(&self, variants: &[VariantRecord]) -> usize {
        let Some(id) = self.requested.as_deref() else {
            return 0;
        };
        match variants.iter().position(|v| v.id == id) {
            Some(index) => index,
            None => {
                warn!("Unknown variant '{}', starting on the first one", id);
                0
            }
        }
    }
}
