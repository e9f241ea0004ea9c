use thiserror::Error;

pub type Result<T> = core::result::Result<T, ScrapeError>;

/// Errors raised while walking results pages and listing pages.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("no seed URL configured")]
    EmptySeedUrl,

    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Connection, timeout or non-2xx status
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("invalid CSS selector: {0}")]
    Selector(String),

    #[error("listing entry is missing {0}")]
    MissingElement(&'static str),

    /// Listing pages carry their feature lines in the second block.
    #[error("expected at least 2 feature blocks, found {found}")]
    MissingFeatureBlock { found: usize },
}
