pub mod features;
pub mod http;
pub mod idealista;
pub mod traits;
pub mod types;

pub use http::HttpFetcher;
pub use idealista::IdealistaScraper;
pub use traits::PageFetcher;
