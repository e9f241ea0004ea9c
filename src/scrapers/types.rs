use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/96.0.4664.110 Safari/537.36";
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Request settings shared by the HTTP fetcher and the scraper
#[derive(Debug, Clone)]
pub struct ScrapeSettings {
    /// Browser identification sent with every request
    pub user_agent: String,
    /// Language preference sent with every request
    pub accept_language: String,
    /// Pause before every listing page request
    pub detail_delay: Duration,
    /// Upper bound for a single request
    pub timeout: Duration,
}

impl Default for ScrapeSettings {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
            detail_delay: Duration::from_secs(1),
            timeout: Duration::from_secs(30),
        }
    }
}
