use crate::models::HomeRecord;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use tracing::info;

const HEADERS: [&str; 8] = [
    "No.",
    "Title",
    "Price (Euro)",
    "Area (m²)",
    "Floor",
    "Rooms",
    "Bathrooms",
    "Location",
];

fn row(index: usize, home: &HomeRecord) -> [String; 8] {
    [
        index.to_string(),
        home.title.clone(),
        home.price.clone(),
        home.area.clone(),
        home.floor.clone(),
        home.rooms.clone(),
        home.bathrooms.clone(),
        home.location.clone(),
    ]
}

/// Render the records as a 1-indexed text table
pub fn format_table(homes: &[HomeRecord]) -> String {
    let rows: Vec<[String; 8]> = homes
        .iter()
        .enumerate()
        .map(|(i, home)| row(i + 1, home))
        .collect();

    let mut widths = HEADERS.map(|header| header.chars().count());
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: &[String]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let header = line(&HEADERS.map(String::from));
    let separator = widths
        .iter()
        .map(|width| "-".repeat(*width))
        .collect::<Vec<_>>()
        .join("-+-");

    let mut table = vec![header, separator];
    table.extend(rows.iter().map(|cells| line(cells)));
    table.join("\n")
}

pub fn print_table(homes: &[HomeRecord]) {
    println!("{}", format_table(homes));
}

/// Write the records as four-space indented JSON, replacing any existing file
pub async fn save_to_json(homes: &[HomeRecord], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(Vec::new(), formatter);
    homes
        .serialize(&mut serializer)
        .context("Failed to serialize records")?;

    tokio::fs::write(path, serializer.into_inner())
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("💾 Data saved to {}", path.display());
    Ok(())
}

#[allow(dead_code)]
pub async fn load_from_json(path: impl AsRef<Path>) -> Result<Vec<HomeRecord>> {
    let path = path.as_ref();
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&json).context("Failed to parse saved records")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UNKNOWN;

    fn home(title: &str, area: &str, location: &str) -> HomeRecord {
        HomeRecord {
            title: title.to_string(),
            price: "180.000€".to_string(),
            area: area.to_string(),
            floor: "2".to_string(),
            rooms: "3".to_string(),
            bathrooms: "1".to_string(),
            location: location.to_string(),
            link: "https://www.idealista.it/immobile/7/".to_string(),
        }
    }

    #[test]
    fn table_is_one_indexed_with_all_columns() {
        let table = format_table(&[home("Trilocale", "75", "Città Studi"), home("Bilocale", UNKNOWN, UNKNOWN)]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("No. | Title"));
        assert!(lines[0].ends_with("Location"));
        assert!(lines[2].starts_with("1   | Trilocale"));
        assert!(lines[2].ends_with("Città Studi"));
        assert!(lines[3].starts_with("2   | Bilocale"));
        assert!(lines[3].contains(UNKNOWN));
    }

    #[tokio::test]
    async fn saved_records_read_back_unchanged() {
        let path = std::env::temp_dir().join(format!("idealista-scout-{}.json", std::process::id()));
        let homes = vec![home("Attico con terrazzo", "120", "Città Studi"), home("Monolocale", UNKNOWN, UNKNOWN)];

        save_to_json(&homes, &path).await.unwrap();
        let raw = tokio::fs::read_to_string(&path).await.unwrap();
        let loaded = load_from_json(&path).await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();

        assert_eq!(loaded, homes);
        assert!(raw.contains("\n        \"Title\": \"Attico con terrazzo\""));
        assert!(raw.contains("Città Studi"));
        assert!(raw.contains("\"Area (m²)\""));
    }
}
