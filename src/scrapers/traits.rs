use crate::error::Result;
use async_trait::async_trait;
use url::Url;

/// Source of raw HTML for results pages and listing pages
/// The HTTP fetcher is the real one; tests serve pages from memory
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the page body at `url`
    async fn fetch(&self, url: &Url) -> Result<String>;
}
