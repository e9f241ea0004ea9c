//! Field extraction from the Italian feature lines of a listing page.
//!
//! Each line ("85 m² commerciali", "3º piano", "2 bagni", ...) runs through
//! every rule; a rule that matches sets its field. Lines are merged in order
//! so a later match replaces an earlier one.
//!
//! The floor keyword is matched case-insensitively, the room and bathroom
//! keywords are not.

use regex::Regex;
use std::sync::LazyLock;

static RE_AREA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d{1,3})\s*m²").unwrap());
static RE_FLOOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)º?\s*piano").unwrap());
static RE_ROOMS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)\s*locali").unwrap());
static RE_BATHROOMS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)\s*bagni").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Area,
    Floor,
    Rooms,
    Bathrooms,
}

/// A field and the rule deriving its value from one line
struct FieldRule {
    field: Field,
    extract: fn(&str) -> Option<String>,
}

const RULES: &[FieldRule] = &[
    FieldRule { field: Field::Area, extract: area },
    FieldRule { field: Field::Floor, extract: floor },
    FieldRule { field: Field::Rooms, extract: rooms },
    FieldRule { field: Field::Bathrooms, extract: bathrooms },
];

/// Values found so far; `None` means no line matched yet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureFields {
    pub area: Option<String>,
    pub floor: Option<String>,
    pub rooms: Option<String>,
    pub bathrooms: Option<String>,
}

impl FeatureFields {
    fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Area => &mut self.area,
            Field::Floor => &mut self.floor,
            Field::Rooms => &mut self.rooms,
            Field::Bathrooms => &mut self.bathrooms,
        };
        *slot = Some(value);
    }

    /// Overwrite every field `later` has a value for
    pub fn merge(&mut self, later: FeatureFields) {
        if later.area.is_some() {
            self.area = later.area;
        }
        if later.floor.is_some() {
            self.floor = later.floor;
        }
        if later.rooms.is_some() {
            self.rooms = later.rooms;
        }
        if later.bathrooms.is_some() {
            self.bathrooms = later.bathrooms;
        }
    }
}

/// Apply every rule to a single feature line
pub fn extract_fields(line: &str) -> FeatureFields {
    let mut fields = FeatureFields::default();
    for rule in RULES {
        if let Some(value) = (rule.extract)(line) {
            fields.set(rule.field, value);
        }
    }
    fields
}

/// Merge the fields of all lines, last match wins
pub fn extract_all<'a>(lines: impl IntoIterator<Item = &'a str>) -> FeatureFields {
    lines.into_iter().fold(FeatureFields::default(), |mut acc, line| {
        acc.merge(extract_fields(line));
        acc
    })
}

fn first_capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text).map(|caps| caps[1].to_string())
}

fn area(text: &str) -> Option<String> {
    first_capture(&RE_AREA, text)
}

fn floor(text: &str) -> Option<String> {
    let lower = text.to_lowercase();
    if !lower.contains("piano") {
        return None;
    }
    if lower.contains("terra") {
        return Some("0".to_string());
    }
    first_capture(&RE_FLOOR, text)
}

/// "N <plural>" gives N; the bare singular word means one
fn count_or_single(text: &str, re: &Regex, plural: &str, singular: &str) -> Option<String> {
    if text.contains(plural) {
        first_capture(re, text)
    } else if text.contains(singular) {
        Some("1".to_string())
    } else {
        None
    }
}

fn rooms(text: &str) -> Option<String> {
    count_or_single(text, &RE_ROOMS, "locali", "locale")
}

fn bathrooms(text: &str) -> Option<String> {
    count_or_single(text, &RE_BATHROOMS, "bagni", "bagno")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_takes_number_before_square_meters() {
        assert_eq!(extract_fields("50 m²").area.as_deref(), Some("50"));
        assert_eq!(extract_fields("120m² commerciali").area.as_deref(), Some("120"));
        assert_eq!(extract_fields("50 mq").area, None);
    }

    #[test]
    fn area_keeps_only_last_three_digits() {
        // \d{1,3} is unanchored, so "1200 m²" yields its trailing digits
        assert_eq!(extract_fields("1200 m²").area.as_deref(), Some("200"));
    }

    #[test]
    fn ground_floor_is_zero() {
        assert_eq!(extract_fields("Piano terra").floor.as_deref(), Some("0"));
        assert_eq!(extract_fields("piano terra, con ascensore").floor.as_deref(), Some("0"));
    }

    #[test]
    fn numbered_floor() {
        assert_eq!(extract_fields("3º piano").floor.as_deref(), Some("3"));
        assert_eq!(extract_fields("12 piano, con ascensore").floor.as_deref(), Some("12"));
    }

    #[test]
    fn floor_number_needs_lowercase_keyword() {
        // the keyword check ignores case but the number pattern does not
        assert_eq!(extract_fields("3º Piano").floor, None);
        assert_eq!(extract_fields("Ultimo piano").floor, None);
    }

    #[test]
    fn rooms_plural_and_singular() {
        assert_eq!(extract_fields("4 locali").rooms.as_deref(), Some("4"));
        assert_eq!(extract_fields("1 locale").rooms.as_deref(), Some("1"));
        assert_eq!(extract_fields("Monolocale").rooms.as_deref(), Some("1"));
        assert_eq!(extract_fields("Locali: 4").rooms, None);
    }

    #[test]
    fn plural_without_count_sets_nothing() {
        assert_eq!(extract_fields("locali luminosi").rooms, None);
    }

    #[test]
    fn bathrooms_plural_and_singular() {
        assert_eq!(extract_fields("2 bagni").bathrooms.as_deref(), Some("2"));
        assert_eq!(extract_fields("bagno").bathrooms.as_deref(), Some("1"));
        assert_eq!(extract_fields("Bagno").bathrooms, None);
    }

    #[test]
    fn unrelated_line_yields_nothing() {
        assert_eq!(extract_fields("Costruito nel 1970"), FeatureFields::default());
    }

    #[test]
    fn later_lines_overwrite_earlier_matches() {
        let fields = extract_all(["80 m² commerciali", "3 locali", "65 m² utili", "1 bagno"]);

        assert_eq!(fields.area.as_deref(), Some("65"));
        assert_eq!(fields.rooms.as_deref(), Some("3"));
        assert_eq!(fields.bathrooms.as_deref(), Some("1"));
        assert_eq!(fields.floor, None);
    }

    #[test]
    fn merge_keeps_values_missing_from_later_line() {
        let mut fields = extract_fields("2º piano");
        fields.merge(extract_fields("Cantina"));
        assert_eq!(fields.floor.as_deref(), Some("2"));
    }
}
