//! Read path to résumé and job storage. This service only ever reads — it
//! persists nothing of its own, so there are no write helpers here.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::job::JobRow;
use crate::models::resume::ResumeRow;

/// Returns the user's most recent résumé by parse time, if any.
pub async fn get_latest_resume(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Option<ResumeRow>, sqlx::Error> {
    sqlx::query_as(
        "SELECT * FROM resumes WHERE user_id = $1 ORDER BY parsed_at DESC LIMIT 1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Looks up a single job by id.
pub async fn get_job(pool: &PgPool, job_id: Uuid) -> Result<Option<JobRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM jobs WHERE job_id = $1")
        .bind(job_id)
        .fetch_optional(pool)
        .await
}

/// Returns the full job catalog, newest first. This ordering is the catalog
/// order the ranker's stable sort preserves among equal scores.
pub async fn list_jobs(pool: &PgPool) -> Result<Vec<JobRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM jobs ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
}
