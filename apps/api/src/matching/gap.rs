//! Gap analysis — which job-description keywords a résumé is missing, and
//! how much of the job's vocabulary the résumé covers.

use serde::Serialize;

use crate::matching::tokenizer::tokenize;

/// Missing keywords are capped so a sparse résumé against a long posting
/// doesn't return the posting's entire vocabulary.
pub const MAX_MISSING_KEYWORDS: usize = 50;

#[derive(Debug, Clone, Serialize)]
pub struct GapReport {
    /// Job tokens absent from the résumé, ascending, at most
    /// [`MAX_MISSING_KEYWORDS`].
    pub missing_keywords: Vec<String>,
    /// |job ∩ résumé| / |job|, rounded to 3 decimals. 0.0 when the job
    /// description has no tokens.
    pub coverage: f64,
}

/// Pure set arithmetic over the two texts: no storage, no side effects,
/// identical inputs give identical output.
pub fn analyze_gap(resume_text: &str, job_description: &str) -> GapReport {
    let user_tokens = tokenize(resume_text);
    let job_tokens = tokenize(job_description);

    // BTreeSet difference iterates in ascending order already.
    let missing_keywords: Vec<String> = job_tokens
        .difference(&user_tokens)
        .take(MAX_MISSING_KEYWORDS)
        .cloned()
        .collect();

    let overlap = job_tokens.intersection(&user_tokens).count();
    let coverage = round3(overlap as f64 / job_tokens.len().max(1) as f64);

    GapReport {
        missing_keywords,
        coverage,
    }
}

fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}
