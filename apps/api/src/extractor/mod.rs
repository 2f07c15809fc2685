/// Résumé Extractor — the single point of entry for the external parsing
/// service. The matching core never calls this; extraction happens upstream
/// of it and its output lands in storage as plain résumé text.
///
/// The service is opaque by design: one HTTP call, no retries (the caller's
/// operations are idempotent reads, so client-side retry is always safe), and
/// every failure surfaces as `ExtractError`.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod handlers;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Extractor returned empty content")]
    EmptyContent,
}

/// Structured fields the external service pulls out of raw résumé text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedResume {
    pub summary: Option<String>,
    pub skills: Vec<String>,
    pub experience_years: Option<u32>,
}

/// Capability seam for résumé extraction. Carried in `AppState` as
/// `Arc<dyn ResumeExtractor>` so tests can swap in a canned implementation.
#[async_trait]
pub trait ResumeExtractor: Send + Sync {
    async fn extract(&self, text: &str) -> Result<ExtractedResume, ExtractError>;
}

/// Production implementation: POST to the parser service with a bearer key.
pub struct HttpResumeExtractor {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Serialize)]
struct ExtractRequest<'a> {
    text: &'a str,
}

impl HttpResumeExtractor {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl ResumeExtractor for HttpResumeExtractor {
    async fn extract(&self, text: &str) -> Result<ExtractedResume, ExtractError> {
        if text.trim().is_empty() {
            return Err(ExtractError::EmptyContent);
        }

        debug!(chars = text.len(), "calling resume extraction service");
        let response = self
            .client
            .post(format!("{}/v1/extract", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&ExtractRequest { text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ExtractError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<ExtractedResume>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracted_resume_deserializes() {
        let json = r#"{
            "summary": "Backend engineer, 6 years",
            "skills": ["Python", "Django", "AWS"],
            "experience_years": 6
        }"#;
        let parsed: ExtractedResume = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.skills.len(), 3);
        assert_eq!(parsed.experience_years, Some(6));
    }

    #[test]
    fn test_extracted_resume_tolerates_nulls() {
        let json = r#"{"summary": null, "skills": [], "experience_years": null}"#;
        let parsed: ExtractedResume = serde_json::from_str(json).unwrap();
        assert!(parsed.summary.is_none());
        assert!(parsed.skills.is_empty());
    }

    #[tokio::test]
    async fn test_empty_text_rejected_before_any_call() {
        let extractor =
            HttpResumeExtractor::new("http://localhost:0".to_string(), "key".to_string());
        let err = extractor.extract("   ").await.unwrap_err();
        assert!(matches!(err, ExtractError::EmptyContent));
    }
}
