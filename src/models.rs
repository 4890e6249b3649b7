use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct MeasurementRecord {
    pub date: NaiveDate,
    pub weight: f64,
}

/// One meal row from the nutrition export. Values are kept as the text found
/// in the file.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct NutritionRecord {
    #[serde(rename(deserialize = "Date"), default)]
    pub date: String,
    #[serde(rename(deserialize = "Meal"), default)]
    pub meal: String,
    #[serde(rename(deserialize = "Calories"), default)]
    pub calories: String,
    #[serde(rename(deserialize = "Fat (g)"), default)]
    pub fat: String,
    #[serde(rename(deserialize = "Carbohydrates (g)"), default)]
    pub carbohydrates: String,
    #[serde(rename(deserialize = "Protein (g)"), default)]
    pub protein: String,
}

/// Absent and `null` fields both read as empty.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Article {
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WeightDomain {
    pub floor: f64,
    pub ceiling: f64,
}

/// The measurement subset currently on screen.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RangeView {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub domain: Option<WeightDomain>,
    pub points: Vec<MeasurementRecord>,
}

#[derive(Debug, Deserialize)]
pub struct RangeRequest {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct NutritionPage {
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub rows: Vec<NutritionRecord>,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub measurement_error: Option<String>,
    /// Set when the default window has no measurements.
    pub range_error: Option<String>,
    pub nutrition_error: Option<String>,
    pub view: Option<RangeView>,
    pub nutrition: Option<NutritionPage>,
}

/// Body of an add-row request; every field may be omitted.
#[derive(Debug, Deserialize, Default)]
pub struct ArticleDraft {
    pub url: Option<String>,
    pub author: Option<String>,
    pub title: Option<String>,
    pub notes: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RowView {
    pub id: u64,
    pub url: String,
    pub author: String,
    pub title: String,
    /// HTML with line breaks as `<br>`.
    pub notes_html: String,
    pub tags: String,
}

#[derive(Debug, Serialize)]
pub struct ArticlesResponse {
    pub load_error: Option<String>,
    pub rows: Vec<RowView>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EditText {
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct CommitResponse {
    pub row: RowView,
    pub display: String,
}
