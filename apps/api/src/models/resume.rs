use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A parsed résumé as read from storage. `text` is the extracted free text
/// and may be empty (extraction can legitimately produce nothing); every
/// consumer must tolerate that.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub resume_id: Uuid,
    pub user_id: Uuid,
    pub text: String,
    pub parsed_at: DateTime<Utc>,
}
