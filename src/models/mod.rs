use serde::{Deserialize, Serialize};
use url::Url;

/// Placeholder for any field that could not be extracted
pub const UNKNOWN: &str = "unknown";

/// One entry of a results page
#[derive(Debug, Clone, PartialEq)]
pub struct ListingSummary {
    pub title: String,
    pub price: String,
    pub link: Url,
}

/// Attributes scraped from a listing's own page
#[derive(Debug, Clone, PartialEq)]
pub struct ListingDetail {
    pub area: String,
    pub floor: String,
    pub rooms: String,
    pub bathrooms: String,
    pub location: String,
}

impl ListingDetail {
    /// Detail with every field set to the unknown sentinel
    pub fn unknown() -> Self {
        Self {
            area: UNKNOWN.to_string(),
            floor: UNKNOWN.to_string(),
            rooms: UNKNOWN.to_string(),
            bathrooms: UNKNOWN.to_string(),
            location: UNKNOWN.to_string(),
        }
    }
}

/// Final record for one listing, as rendered and persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeRecord {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Price (Euro)")]
    pub price: String,
    #[serde(rename = "Area (m²)")]
    pub area: String,
    #[serde(rename = "Floor")]
    pub floor: String,
    #[serde(rename = "Rooms")]
    pub rooms: String,
    #[serde(rename = "Bathrooms")]
    pub bathrooms: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Link")]
    pub link: String,
}

impl HomeRecord {
    pub fn new(summary: ListingSummary, detail: ListingDetail) -> Self {
        Self {
            title: summary.title,
            price: summary.price,
            area: detail.area,
            floor: detail.floor,
            rooms: detail.rooms,
            bathrooms: detail.bathrooms,
            location: detail.location,
            link: summary.link.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_keeps_summary_and_detail_fields() {
        let summary = ListingSummary {
            title: "Trilocale via Roma".to_string(),
            price: "250.000€".to_string(),
            link: Url::parse("https://www.idealista.it/immobile/1/").unwrap(),
        };
        let record = HomeRecord::new(summary, ListingDetail::unknown());

        assert_eq!(record.title, "Trilocale via Roma");
        assert_eq!(record.price, "250.000€");
        assert_eq!(record.link, "https://www.idealista.it/immobile/1/");
        assert_eq!(record.area, UNKNOWN);
        assert_eq!(record.location, UNKNOWN);
    }

    #[test]
    fn record_serializes_with_display_keys() {
        let summary = ListingSummary {
            title: "Bilocale".to_string(),
            price: "99.000€".to_string(),
            link: Url::parse("https://www.idealista.it/immobile/2/").unwrap(),
        };
        let value = serde_json::to_value(HomeRecord::new(summary, ListingDetail::unknown())).unwrap();

        assert_eq!(value["Price (Euro)"], "99.000€");
        assert_eq!(value["Area (m²)"], UNKNOWN);
        assert_eq!(value["Bathrooms"], UNKNOWN);
    }
}
