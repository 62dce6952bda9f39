use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Mapping from a category name (schema, source category, country code)
/// to the number of indexed items it covers.
///
/// The ordered map keeps iteration deterministic for a given input.
pub type StatisticSet = BTreeMap<String, u64>;

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Statistics {
    pub things: u64,
    pub collections: u64,
    pub schemata: StatisticSet,
    pub categories: StatisticSet,
    pub countries: StatisticSet,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Metadata {
    pub app: AppMetadata,
    /// Source category id -> display label.
    pub categories: BTreeMap<String, String>,
    /// ISO country code -> display name.
    pub countries: BTreeMap<String, String>,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct AppMetadata {
    pub title: String,
    /// Sample queries shown in the search box placeholder.
    pub samples: Vec<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct SearchResponse {
    pub total: u64,
    pub results: Vec<EntitySummary>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct EntitySummary {
    pub id: String,
    pub schema: String,
    pub name: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, PartialEq, Eq, thiserror::Error)
)]
#[cfg_attr(feature = "extra-derive", error("[{http_status}] {message}"))]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_statistics() {
        let json = r#"{
            "things": 2500000,
            "collections": 93,
            "schemata": { "Document": 2400000, "Person": 80000, "Company": 20000 },
            "categories": { "leak": 12, "gazette": 30 },
            "countries": { "de": 40, "us": 31 }
        }"#;
        let stats: Statistics = serde_json::from_str(json).unwrap();
        assert_eq!(stats.things, 2_500_000);
        assert_eq!(stats.schemata.get("Person"), Some(&80_000));
        assert_eq!(stats.countries.len(), 2);
    }

    #[test]
    fn deserialize_metadata() {
        let json = r#"{
            "app": { "title": "DocuSeek", "samples": ["tax havens", "registry"] },
            "categories": { "leak": "Leaks" },
            "countries": { "de": "Germany" }
        }"#;
        let meta: Metadata = serde_json::from_str(json).unwrap();
        assert_eq!(meta.app.samples.len(), 2);
        assert_eq!(meta.countries.get("de").map(String::as_str), Some("Germany"));
    }

    #[test]
    fn api_error_display() {
        let err = Error {
            http_status: 404,
            message: "not found".into(),
        };
        assert_eq!(err.to_string(), "[404] not found");
    }
}
