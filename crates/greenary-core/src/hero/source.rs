use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use image::DynamicImage;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, Proxy};
use url::Url;

use crate::config::HeroConfig;
use crate::{Error, Result};

const USER_AGENT: &str = concat!("greenary/", env!("CARGO_PKG_VERSION"));

/// Where frame (and product) images are fetched from
#[async_trait]
pub trait FrameSource: Send + Sync {
    /// Fetch the raw bytes behind a relative address such as
    /// `frames/vermicompost/frame_007_delay-0.04s.webp`
    async fn fetch(&self, address: &str) -> Result<Bytes>;

    /// Human-readable location of an address, for logs
    fn locate(&self, address: &str) -> String;
}

/// Pick a source for a configured base: http(s) URLs go over the network,
/// anything else is a local directory
pub fn frame_source_for(config: &HeroConfig) -> Result<Arc<dyn FrameSource>> {
    let base = config.frame_base.trim();
    if base.starts_with("http://") || base.starts_with("https://") {
        Ok(Arc::new(HttpFrameSource::new(
            base,
            config.request_timeout_secs,
            config.proxy_url.as_deref(),
        )?))
    } else {
        Ok(Arc::new(FsFrameSource::new(base)))
    }
}

/// Decode a fetched frame, sniffing the format from its bytes
pub fn decode_frame(bytes: &[u8]) -> Result<DynamicImage> {
    if bytes.is_empty() {
        return Err(Error::Other("Empty image data".to_string()));
    }
    Ok(image::load_from_memory(bytes)?)
}

/// Frames served over HTTP relative to a base URL
pub struct HttpFrameSource {
    client: Client,
    base: Url,
}

impl HttpFrameSource {
    pub fn new(base: &str, timeout_secs: Option<u64>, proxy_url: Option<&str>) -> Result<Self> {
        // Url::join replaces the last segment unless the base ends with '/'
        let base = if base.ends_with('/') {
            Url::parse(base)?
        } else {
            Url::parse(&format!("{}/", base))?
        };

        Ok(Self {
            client: Self::build_client(timeout_secs, proxy_url)?,
            base,
        })
    }

    /// Build HTTP client with optional timeout and proxy
    fn build_client(timeout_secs: Option<u64>, proxy_url: Option<&str>) -> Result<Client> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("image/webp,image/png,image/jpeg,image/*;q=0.8"),
        );

        let mut builder = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .redirect(reqwest::redirect::Policy::limited(10));

        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        if let Some(proxy) = proxy_url {
            let proxy = Proxy::all(proxy)
                .map_err(|e| Error::Config(format!("Invalid proxy URL: {}", e)))?;
            builder = builder.proxy(proxy);
            tracing::info!("Using HTTP proxy for frame fetching");
        }

        Ok(builder.build()?)
    }

    fn resolve(&self, address: &str) -> Result<Url> {
        Ok(self.base.join(address.trim_start_matches('/'))?)
    }
}

#[async_trait]
impl FrameSource for HttpFrameSource {
    async fn fetch(&self, address: &str) -> Result<Bytes> {
        let url = self.resolve(address)?;
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Other(format!("HTTP {} for URL: {}", status, url)));
        }

        Ok(response.bytes().await?)
    }

    fn locate(&self, address: &str) -> String {
        self.resolve(address)
            .map(|u| u.to_string())
            .unwrap_or_else(|_| address.to_string())
    }
}

/// Frames read from a directory on disk
pub struct FsFrameSource {
    root: PathBuf,
}

impl FsFrameSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_of(&self, address: &str) -> PathBuf {
        self.root.join(address.trim_start_matches('/'))
    }
}

#[async_trait]
impl FrameSource for FsFrameSource {
    async fn fetch(&self, address: &str) -> Result<Bytes> {
        let data = tokio::fs::read(self.path_of(address)).await?;
        Ok(Bytes::from(data))
    }

    fn locate(&self, address: &str) -> String {
        self.path_of(address).display().to_string()
    }
}
