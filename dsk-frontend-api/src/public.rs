use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use dsk_boundary::{Metadata, SearchResponse, Statistics};

use crate::{into_json, Result};

/// Public DocuSeek API
#[derive(Debug, Clone, Copy)]
pub struct PublicApi {
    url: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: Option<String>,
    pub schema: Option<String>,
    pub category: Option<String>,
    pub country: Option<String>,
}

impl SearchQuery {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        let Self {
            text,
            schema,
            category,
            country,
        } = self;
        text.is_none() && schema.is_none() && category.is_none() && country.is_none()
    }

    /// Renders the query as URL parameters (`q`, `filter:schema`, ...)
    /// with percent-encoded values. Returns an empty string for an
    /// empty query.
    #[must_use]
    pub fn query_string(&self) -> String {
        let Self {
            text,
            schema,
            category,
            country,
        } = self;
        let mut params = vec![];
        if let Some(text) = text {
            params.push(("q", text));
        }
        if let Some(schema) = schema {
            params.push(("filter:schema", schema));
        }
        if let Some(category) = category {
            params.push(("filter:category", category));
        }
        if let Some(country) = country {
            params.push(("filter:country", country));
        }
        params
            .into_iter()
            .map(|(key, value)| {
                let encoded = utf8_percent_encode(value, NON_ALPHANUMERIC);
                format!("{key}={encoded}")
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl PublicApi {
    #[must_use]
    pub const fn new(url: &'static str) -> Self {
        Self { url }
    }

    pub async fn statistics(&self) -> Result<Statistics> {
        let url = format!("{}/statistics", self.url);
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }

    pub async fn metadata(&self) -> Result<Metadata> {
        let url = format!("{}/metadata", self.url);
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }

    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResponse> {
        let mut url = format!("{}/search", self.url);
        if !query.is_empty() {
            url = format!("{url}?{}", query.query_string());
        }
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_renders_no_params() {
        let query = SearchQuery::default();
        assert!(query.is_empty());
        assert_eq!(query.query_string(), "");
    }

    #[test]
    fn text_query_is_percent_encoded() {
        let query = SearchQuery::text("tax havens");
        assert_eq!(query.query_string(), "q=tax%20havens");
    }

    #[test]
    fn filters_are_rendered_in_stable_order() {
        let query = SearchQuery {
            text: Some("mining".into()),
            schema: Some("Company".into()),
            category: None,
            country: Some("de".into()),
        };
        assert_eq!(
            query.query_string(),
            "q=mining&filter:schema=Company&filter:country=de"
        );
    }
}
