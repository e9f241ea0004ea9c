use crate::error::{Result, ScrapeError};
use crate::scrapers::types::ScrapeSettings;
use crate::scrapers::PageFetcher;
use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE};
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

/// Plain HTTP GET fetcher: no retries, no cookies, bounded timeout
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(settings: &ScrapeSettings) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_str(&settings.accept_language)
                .context("Invalid Accept-Language header value")?,
        );

        let client = Client::builder()
            .timeout(settings.timeout)
            .user_agent(settings.user_agent.as_str())
            .default_headers(headers)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }
}

fn fetch_error(url: &Url, err: reqwest::Error) -> ScrapeError {
    ScrapeError::Fetch {
        url: url.to_string(),
        source: Box::new(err),
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<String> {
        debug!("Fetching URL: {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| fetch_error(url, e))?;

        if !response.status().is_success() {
            warn!("{} returned status: {}", url, response.status());
        }
        let response = response.error_for_status().map_err(|e| fetch_error(url, e))?;

        let html = response.text().await.map_err(|e| fetch_error(url, e))?;
        debug!("Downloaded {} bytes of HTML", html.len());

        Ok(html)
    }
}
