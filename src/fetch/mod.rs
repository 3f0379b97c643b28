mod basic;
mod client;

pub use basic::BasicClient;
pub use client::HttpClient;

use reqwest::{StatusCode, Url};
use tracing::debug;

/// Downloads `url`, returning `None` when the server answers 404.
pub async fn fetch_bytes<C: HttpClient>(client: &C, url: Url) -> reqwest::Result<Option<Vec<u8>>> {
    let req = reqwest::Request::new(reqwest::Method::GET, url);

    let resp = client.execute(req).await?;
    if resp.status() == StatusCode::NOT_FOUND {
        debug!(url = %resp.url(), "Remote file not found");
        return Ok(None);
    }

    let resp = resp.error_for_status()?;
    Ok(Some(resp.bytes().await?.to_vec()))
}
