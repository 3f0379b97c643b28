use async_trait::async_trait;
use reqwest::Url;
use tracing::debug;

use crate::error::LoadError;
use crate::fetch::{HttpClient, fetch_bytes};
use crate::services::trip_source::TripSource;

/// Downloads trip logs from `<base_url>/<file>`.
pub struct HttpSource<C> {
    client: C,
    base_url: Url,
}

impl<C: HttpClient> HttpSource<C> {
    pub fn new(client: C, base_url: &str) -> Result<Self, LoadError> {
        // Url::join replaces the last segment unless the base ends with '/'
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url =
            Url::parse(&normalized).map_err(|_| LoadError::InvalidUrl(base_url.to_string()))?;
        Ok(Self { client, base_url })
    }

    pub fn url_for(&self, file_name: &str) -> Result<Url, LoadError> {
        self.base_url
            .join(file_name)
            .map_err(|_| LoadError::InvalidUrl(format!("{}{file_name}", self.base_url)))
    }
}

#[async_trait]
impl<C: HttpClient> TripSource for HttpSource<C> {
    async fn fetch(&self, file_name: &str) -> Result<Option<Vec<u8>>, LoadError> {
        let url = self.url_for(file_name)?;
        debug!(%url, "Downloading trip file");
        Ok(fetch_bytes(&self.client, url).await?)
    }

    fn describe(&self) -> String {
        self.base_url.to_string()
    }
}
