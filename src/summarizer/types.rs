use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Treat an explicit `null` like a missing key
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Decoded success body of the summarize endpoint.
///
/// `icon`, `quotes` and `title_candidates` are kept as raw JSON; the client
/// never looks inside them and the vendor is free to change their shape.
/// Missing or `null` fields decode to empty values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizeResult {
    #[serde(deserialize_with = "null_default")]
    pub photos: Vec<String>,
    #[serde(deserialize_with = "null_default")]
    pub summary: Vec<ArticleSummary>,
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    #[serde(deserialize_with = "null_default")]
    pub title_candidates: Vec<Value>,
}

impl SummarizeResult {
    /// Every summary sentence, in response order
    pub fn sentences(&self) -> impl Iterator<Item = &str> {
        self.summary
            .iter()
            .flat_map(|s| s.sentences.iter().map(String::as_str))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleSummary {
    #[serde(deserialize_with = "null_default")]
    pub metadata: SummaryMetadata,
    #[serde(deserialize_with = "null_default")]
    pub quotes: Vec<Value>,
    #[serde(deserialize_with = "null_default")]
    pub ranks: Vec<i64>,
    #[serde(deserialize_with = "null_default")]
    pub sentences: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryMetadata {
    pub icon: Value,
    #[serde(deserialize_with = "null_default")]
    pub origin: String,
    #[serde(deserialize_with = "null_default")]
    pub source: String,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
}
