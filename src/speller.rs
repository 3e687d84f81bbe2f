//! Spell service client trait and HTTP implementation
//!
//! The service contract is `GET <address>?query=<text>&format=json` returning
//! `{"correction": string, "rate": integer}`. Anything short of a 2xx response
//! carrying both fields degrades to the default result; the run never aborts
//! on a speller failure.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::Result;
use crate::types::CorrectionResult;

/// Trait for spell-correction backends
#[async_trait]
pub trait SpellChecker: Send + Sync {
    /// Get the backend name
    fn name(&self) -> &'static str;

    /// Submit one query; failures degrade to the default result
    async fn check(&self, query: &str) -> CorrectionResult;
}

/// Spell service client over HTTP
pub struct HttpSpeller {
    client: Client,
    address: String,
}

impl HttpSpeller {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            address: address.into(),
        }
    }

    async fn fetch(&self, query: &str) -> Result<CorrectionResult> {
        let response = self
            .client
            .get(&self.address)
            .query(&[("query", query), ("format", "json")])
            .send()
            .await?;

        if !response.status().is_success() {
            warn!("Speller returned {} for {:?}", response.status(), query);
            return Ok(CorrectionResult::default());
        }

        let body: SpellerResponse = response.json().await?;

        // both fields must be present; a partial body counts as no correction
        match (body.correction, body.rate) {
            (Some(correction), Some(rate)) => Ok(CorrectionResult { correction, rate }),
            _ => Ok(CorrectionResult::default()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SpellerResponse {
    #[serde(default)]
    correction: Option<String>,
    #[serde(default)]
    rate: Option<i64>,
}

#[async_trait]
impl SpellChecker for HttpSpeller {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn check(&self, query: &str) -> CorrectionResult {
        match self.fetch(query).await {
            Ok(result) => {
                debug!(
                    "Speller: {:?} -> {:?} (rate {})",
                    query, result.correction, result.rate
                );
                result
            }
            Err(e) => {
                warn!("Speller request failed for {:?}: {}", query, e);
                CorrectionResult::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_body_degrades() {
        let body: SpellerResponse = serde_json::from_str(r#"{"correction": "москва"}"#).unwrap();
        // rate missing: the pair match in fetch() falls through to the default
        assert_eq!(body.correction.as_deref(), Some("москва"));
        assert_eq!(body.rate, None);
    }

    #[test]
    fn test_full_body_parses() {
        let body: SpellerResponse =
            serde_json::from_str(r#"{"correction": "москва", "rate": 60000}"#).unwrap();
        assert_eq!(body.correction.as_deref(), Some("москва"));
        assert_eq!(body.rate, Some(60000));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let body: SpellerResponse =
            serde_json::from_str(r#"{"correction": "x", "rate": 1, "srcText": "y"}"#).unwrap();
        assert_eq!(body.rate, Some(1));
    }
}
