use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Salary block attached to a job posting. All fields optional — scraped
/// postings frequently omit some or all of them.
///
/// Serialized as `{min, max, currency, type}` to match the tracker frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryInfo {
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub currency: Option<String>,
    #[serde(rename = "type")]
    pub salary_type: Option<String>,
}

/// A job posting as read from the catalog.
///
/// `description` is the primary free-text field; `description_text` is the
/// legacy field populated by the old seed importer. Matching always prefers
/// `description` and falls back to `description_text` when it is empty.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRow {
    pub job_id: Uuid,
    pub title: String,
    pub company: String,
    pub description: String,
    pub description_text: Option<String>,
    pub location: Option<String>,
    /// One of `remote`, `hybrid`, `onsite`, `flexible`.
    pub remote_type: Option<String>,
    /// Structured skill list, distinct from the prose description.
    pub required_skills: Vec<String>,
    pub salary: Option<Json<SalaryInfo>>,
    pub created_at: DateTime<Utc>,
}

impl JobRow {
    /// The text used for similarity matching: the description, or the legacy
    /// field when the description is empty.
    pub fn matching_text(&self) -> &str {
        if !self.description.is_empty() {
            &self.description
        } else {
            self.description_text.as_deref().unwrap_or("")
        }
    }
}
