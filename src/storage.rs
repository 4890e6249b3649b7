use crate::errors::LoadError;
use crate::models::{Article, MeasurementRecord, NutritionRecord};
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::Path;
use tokio::fs;
use tracing::{debug, error, info};

pub const MEASUREMENTS: &str = "measurements";
pub const NUTRITION: &str = "nutrition";
pub const ARTICLES: &str = "articles";

#[derive(Debug, Deserialize)]
struct MeasurementRow {
    #[serde(rename = "Date", default)]
    date: Option<String>,
    #[serde(rename = "Weight", default)]
    weight: Option<String>,
}

pub async fn load_measurements(path: &Path) -> Result<Vec<MeasurementRecord>, LoadError> {
    let bytes = read_source(MEASUREMENTS, path).await?;
    let records = parse_measurements(&bytes).inspect_err(|err| error!("{err}"))?;
    info!(count = records.len(), path = %path.display(), "loaded measurements");
    Ok(records)
}

pub async fn load_nutrition(path: &Path) -> Result<Vec<NutritionRecord>, LoadError> {
    let bytes = read_source(NUTRITION, path).await?;
    let records = parse_nutrition(&bytes).inspect_err(|err| error!("{err}"))?;
    info!(count = records.len(), path = %path.display(), "loaded nutrition");
    Ok(records)
}

pub async fn load_articles(path: &Path) -> Result<Vec<Article>, LoadError> {
    let bytes = read_source(ARTICLES, path).await?;
    let articles: Vec<Article> = serde_json::from_slice(&bytes).map_err(|err| {
        let err = LoadError::parse(ARTICLES, err);
        error!("{err}");
        err
    })?;
    info!(count = articles.len(), path = %path.display(), "loaded articles");
    Ok(articles)
}

async fn read_source(resource: &str, path: &Path) -> Result<Vec<u8>, LoadError> {
    fs::read(path).await.map_err(|err| {
        let err = LoadError::fetch(resource, format!("{}: {err}", path.display()));
        error!("{err}");
        err
    })
}

/// Parses the measurement export, dropping rows without a date or weight,
/// and returns the rest sorted by date.
pub fn parse_measurements(bytes: &[u8]) -> Result<Vec<MeasurementRecord>, LoadError> {
    let mut reader = csv_reader(bytes);
    let mut records = Vec::new();
    let mut dropped = 0usize;

    for result in reader.deserialize::<MeasurementRow>() {
        let row = result.map_err(|err| LoadError::parse(MEASUREMENTS, err))?;
        let date = row.date.as_deref().map(str::trim).filter(|s| !s.is_empty());
        let weight = row.weight.as_deref().map(str::trim).filter(|s| !s.is_empty());
        let (Some(date), Some(weight)) = (date, weight) else {
            dropped += 1;
            continue;
        };
        let Ok(date) = NaiveDate::parse_from_str(date, "%Y-%m-%d") else {
            dropped += 1;
            continue;
        };
        records.push(MeasurementRecord {
            date,
            weight: weight.parse().unwrap_or(f64::NAN),
        });
    }

    if dropped > 0 {
        debug!(dropped, "skipped measurement rows missing date or weight");
    }
    records.sort_by_key(|record| record.date);
    Ok(records)
}

pub fn parse_nutrition(bytes: &[u8]) -> Result<Vec<NutritionRecord>, LoadError> {
    csv_reader(bytes)
        .deserialize::<NutritionRecord>()
        .map(|result| result.map_err(|err| LoadError::parse(NUTRITION, err)))
        .collect()
}

fn csv_reader(bytes: &[u8]) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measurements_drop_missing_fields_and_sort() {
        let csv = "Date,Weight\n2024-03-02,80.5\n,81\n2024-03-01,\n2024-03-01,79.9\n";
        let records = parse_measurements(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(records[0].weight, 79.9);
        assert_eq!(records[1].weight, 80.5);
    }

    #[test]
    fn non_numeric_weight_survives_as_nan() {
        let csv = "Date,Weight\n2024-03-02,heavy\n";
        let records = parse_measurements(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].weight.is_nan());
    }

    #[test]
    fn measurements_without_weight_column_are_all_dropped() {
        let csv = "Date,Body Fat\n2024-03-02,20\n";
        let records = parse_measurements(csv.as_bytes()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn invalid_utf8_is_a_parse_failure() {
        let bytes = b"Date,Weight\n2024-03-02,\xff\xfe\n";
        let err = parse_measurements(bytes).unwrap_err();
        assert!(matches!(err, LoadError::ParseFailure { .. }));
    }

    #[test]
    fn nutrition_keeps_text_and_order() {
        let csv = "Date,Meal,Calories,Fat (g),Saturated Fat,Carbohydrates (g),Protein (g)\n\
                   2024-03-02,Dinner,650.5,20,4,70,35\n\
                   2024-03-01,Breakfast,300,5,1,40,\n";
        let records = parse_nutrition(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].meal, "Dinner");
        assert_eq!(records[0].calories, "650.5");
        assert_eq!(records[0].carbohydrates, "70");
        assert_eq!(records[1].date, "2024-03-01");
        assert_eq!(records[1].protein, "");
    }

    #[tokio::test]
    async fn null_article_fields_read_as_empty() {
        let path = std::env::temp_dir().join(format!("personal_dash_null_fields_{}.json", std::process::id()));
        let json = r#"[
            {"url": "a", "author": "Ada", "title": "T", "notes": "n", "tags": ["x"]},
            {"url": "b", "author": null, "title": null, "notes": null, "tags": null}
        ]"#;
        fs::write(&path, json).await.unwrap();

        let articles = load_articles(&path).await;
        let _ = fs::remove_file(&path).await;
        let articles = articles.unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].tags, vec!["x"]);
        assert_eq!(articles[1].url, "b");
        assert_eq!(articles[1].notes, "");
        assert!(articles[1].tags.is_empty());
    }

    #[tokio::test]
    async fn missing_file_is_a_fetch_failure() {
        let path = std::env::temp_dir().join("personal_dash_missing_articles.json");
        let err = load_articles(&path).await.unwrap_err();
        assert!(matches!(err, LoadError::FetchFailure { .. }));
    }
}
