use crate::error::{Result, ScrapeError};
use crate::models::{HomeRecord, ListingDetail, ListingSummary, UNKNOWN};
use crate::scrapers::features::extract_all;
use crate::scrapers::types::ScrapeSettings;
use crate::scrapers::PageFetcher;
use indicatif::{ProgressBar, ProgressStyle};
use scraper::{ElementRef, Html, Selector};
use std::time::Duration;
use tracing::{debug, error, info, warn};
use url::Url;

/// Where the walk goes after a results page
#[derive(Debug, Clone, PartialEq)]
pub enum NextPage {
    Url(Url),
    /// The "next" item exists but carries no usable link
    NoLink,
    NoButton,
}

/// Everything the walker needs from one results page
#[derive(Debug)]
pub struct ResultsPage {
    pub listings: Vec<ListingSummary>,
    pub next: NextPage,
}

fn selector(sel: &str) -> Result<Selector> {
    Selector::parse(sel).map_err(|_| ScrapeError::Selector(sel.to_string()))
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Relative links always resolve against the seed URL, never the current page
fn resolve(seed: &Url, href: &str) -> Result<Url> {
    seed.join(href).map_err(|source| ScrapeError::InvalidUrl {
        url: href.to_string(),
        source,
    })
}

/// Parse the `article.item` entries and the pagination control of a results page
pub fn parse_results_page(html: &str, seed: &Url) -> Result<ResultsPage> {
    let document = Html::parse_document(html);
    let item_selector = selector("article.item")?;
    let link_selector = selector("a.item-link")?;
    let price_selector = selector("span.item-price")?;

    let mut listings = Vec::new();
    for article in document.select(&item_selector) {
        let anchor = article
            .select(&link_selector)
            .next()
            .ok_or(ScrapeError::MissingElement("a.item-link"))?;
        let price = article
            .select(&price_selector)
            .next()
            .ok_or(ScrapeError::MissingElement("span.item-price"))?;
        let href = anchor
            .value()
            .attr("href")
            .ok_or(ScrapeError::MissingElement("a.item-link href"))?;

        listings.push(ListingSummary {
            title: element_text(anchor),
            price: element_text(price),
            link: resolve(seed, href)?,
        });
    }

    let next = next_page(&document, seed)?;
    Ok(ResultsPage { listings, next })
}

/// `li.next` holding an `a.icon-arrow-right-after` with an href
fn next_page(document: &Html, seed: &Url) -> Result<NextPage> {
    let next_selector = selector("li.next")?;
    let arrow_selector = selector("a.icon-arrow-right-after")?;

    let Some(next_item) = document.select(&next_selector).next() else {
        return Ok(NextPage::NoButton);
    };
    let href = next_item
        .select(&arrow_selector)
        .next()
        .and_then(|arrow| arrow.value().attr("href"));

    match href.map(|href| resolve(seed, href)) {
        Some(Ok(url)) => Ok(NextPage::Url(url)),
        Some(Err(e)) => {
            warn!("Ignoring unresolvable next page link: {}", e);
            Ok(NextPage::NoLink)
        }
        None => Ok(NextPage::NoLink),
    }
}

/// Parse area, floor, rooms, bathrooms and location from a listing page.
///
/// Feature lines are read from the second `div.details-property-feature-one`;
/// a page with fewer than two such blocks is a `MissingFeatureBlock` error.
/// Location is the first `li.header-map-list` under `div#headerMap`.
pub fn parse_detail_page(html: &str) -> Result<ListingDetail> {
    let document = Html::parse_document(html);
    let block_selector = selector("div.details-property-feature-one")?;
    let line_selector = selector("li")?;

    let blocks: Vec<ElementRef> = document.select(&block_selector).collect();
    let block = blocks
        .get(1)
        .ok_or(ScrapeError::MissingFeatureBlock { found: blocks.len() })?;

    let lines: Vec<String> = block.select(&line_selector).map(element_text).collect();
    let fields = extract_all(lines.iter().map(String::as_str));
    let or_unknown = |value: Option<String>| value.unwrap_or_else(|| UNKNOWN.to_string());

    Ok(ListingDetail {
        area: or_unknown(fields.area),
        floor: or_unknown(fields.floor),
        rooms: or_unknown(fields.rooms),
        bathrooms: or_unknown(fields.bathrooms),
        location: or_unknown(location(&document)?),
    })
}

fn location(document: &Html) -> Result<Option<String>> {
    let location_selector = selector("div#headerMap li.header-map-list")?;
    Ok(document.select(&location_selector).next().map(element_text))
}

/// Open-ended spinner, the page count is unknown upfront
fn collecting_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
        .template("{spinner:.green} {msg} [{elapsed}]")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.set_message("Collecting: please stand by...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Pagination-driven scraper for idealista search results
pub struct IdealistaScraper<F: PageFetcher> {
    fetcher: F,
    settings: ScrapeSettings,
}

impl<F: PageFetcher> IdealistaScraper<F> {
    pub fn new(fetcher: F, settings: ScrapeSettings) -> Self {
        Self { fetcher, settings }
    }

    /// Fetch and parse one listing page, after the fixed courtesy delay
    pub async fn fetch_detail(&self, url: &Url) -> Result<ListingDetail> {
        tokio::time::sleep(self.settings.detail_delay).await;
        let html = self.fetcher.fetch(url).await?;
        parse_detail_page(&html)
    }

    /// Walk every results page starting at `seed_url`.
    ///
    /// A failing listing page degrades that record to unknown details and the
    /// walk goes on. A failing results page ends the walk with an error.
    pub async fn walk(&self, seed_url: &str) -> Result<Vec<HomeRecord>> {
        let seed_url = seed_url.trim();
        if seed_url.is_empty() {
            return Err(ScrapeError::EmptySeedUrl);
        }
        let seed = Url::parse(seed_url).map_err(|source| ScrapeError::InvalidUrl {
            url: seed_url.to_string(),
            source,
        })?;

        info!("Starting scrape from {}", seed);

        let spinner = collecting_spinner();
        let walked = self.walk_pages(&seed, &spinner).await;
        match &walked {
            Ok(homes) => spinner.finish_with_message(format!("Collected {} homes", homes.len())),
            Err(_) => spinner.abandon_with_message("Collecting stopped"),
        }
        walked
    }

    async fn walk_pages(&self, seed: &Url, spinner: &ProgressBar) -> Result<Vec<HomeRecord>> {
        let mut homes = Vec::new();
        let mut cursor = seed.clone();
        let mut page = 0usize;

        loop {
            page += 1;
            let html = self.fetcher.fetch(&cursor).await?;
            let results = parse_results_page(&html, seed)?;
            debug!("Found {} listings on page {}", results.listings.len(), page);

            for summary in results.listings {
                let detail = match self.fetch_detail(&summary.link).await {
                    Ok(detail) => detail,
                    Err(e) => {
                        warn!("Could not fetch details for {}: {}", summary.link, e);
                        ListingDetail::unknown()
                    }
                };
                homes.push(HomeRecord::new(summary, detail));
            }

            spinner.inc(1);
            spinner.set_message(format!(
                "Collecting: please stand by... page {}, {} homes",
                page,
                homes.len()
            ));
            info!(page, collected = homes.len(), "Collecting: please stand by...");

            match results.next {
                NextPage::Url(next) => cursor = next,
                NextPage::NoLink => {
                    info!("No more pages found. Stopping pagination.");
                    break;
                }
                NextPage::NoButton => {
                    info!("No 'next' button found. Stopping pagination.");
                    break;
                }
            }
        }

        Ok(homes)
    }

    /// Like `walk`, but any failure discards everything collected so far
    pub async fn collect(&self, seed_url: &str) -> Vec<HomeRecord> {
        match self.walk(seed_url).await {
            Ok(homes) => homes,
            Err(e @ ScrapeError::Fetch { .. }) => {
                error!("Failed to fetch data: {}", e);
                Vec::new()
            }
            Err(e) => {
                error!("An error occurred: {}", e);
                Vec::new()
            }
        }
    }
}
