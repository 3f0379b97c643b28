use async_trait::async_trait;
use reqwest::{Request, Response};

/// Sends prepared requests. Lets the remote trip source run against any
/// transport that can execute a `reqwest::Request`.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: Request) -> reqwest::Result<Response>;
}
