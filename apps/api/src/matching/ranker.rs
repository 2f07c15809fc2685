//! Recommendation ranking — scores every catalog job against the caller's
//! latest résumé and reports which declared skills the résumé lacks.

use std::collections::BTreeSet;

use serde::Serialize;
use uuid::Uuid;

use crate::matching::tfidf::{self, MAX_VOCABULARY};
use crate::matching::tokenizer::tokenize;
use crate::models::job::{JobRow, SalaryInfo};

pub const MAX_RESULTS: usize = 20;
pub const MAX_MISSING_SKILLS: usize = 50;

/// One ranked catalog entry. Ephemeral — built for the response, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct RankedJob {
    pub job_id: Uuid,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub remote_type: Option<String>,
    pub salary: Option<SalaryInfo>,
    pub required_skills: Vec<String>,
    /// Declared skills (lowercased) absent from the résumé token set,
    /// ascending, at most [`MAX_MISSING_SKILLS`]. A narrower signal than gap
    /// analysis: only the structured skill list, not the prose description.
    pub missing_skills: Vec<String>,
    pub score: f64,
}

/// Ranks `jobs` by TF-IDF cosine similarity to `resume_text`.
///
/// The corpus is [résumé] + each job's matching text, vectorized fresh for
/// this call. Results are sorted descending by score — ties keep catalog
/// order — and truncated to [`MAX_RESULTS`]. An empty résumé produces a zero
/// vector, so every job scores 0.0 and the catalog order survives intact.
pub fn rank_jobs(resume_text: &str, jobs: &[JobRow]) -> Vec<RankedJob> {
    if jobs.is_empty() {
        return Vec::new();
    }

    let mut docs: Vec<Vec<String>> = Vec::with_capacity(jobs.len() + 1);
    docs.push(tfidf::analyze(resume_text));
    docs.extend(jobs.iter().map(|j| tfidf::analyze(j.matching_text())));

    let vectors = tfidf::fit_transform(&docs, MAX_VOCABULARY);
    let (resume_vec, job_vecs) = vectors.split_first().expect("corpus is non-empty");

    let mut scored: Vec<(&JobRow, f64)> = jobs
        .iter()
        .zip(job_vecs)
        .map(|(job, vec)| (job, resume_vec.cosine(vec)))
        .collect();
    // stable: equal scores keep catalog order
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(MAX_RESULTS);

    let resume_tokens = tokenize(resume_text);
    scored
        .into_iter()
        .map(|(job, score)| RankedJob {
            job_id: job.job_id,
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            remote_type: job.remote_type.clone(),
            salary: job.salary.as_ref().map(|s| s.0.clone()),
            required_skills: job.required_skills.clone(),
            missing_skills: missing_skills(&job.required_skills, &resume_tokens),
            score,
        })
        .collect()
}

/// Required-skill strings the résumé token set does not contain, lowercased
/// and ascending. Compared as whole strings, so "node.js" only matches a
/// résumé that tokenized it identically — declared skills are usually single
/// words, and a miss here is a prompt to the user, not a verdict.
fn missing_skills(required: &[String], resume_tokens: &BTreeSet<String>) -> Vec<String> {
    let skill_tokens: BTreeSet<String> = required.iter().map(|s| s.to_lowercase()).collect();
    skill_tokens
        .into_iter()
        .filter(|s| !resume_tokens.contains(s))
        .take(MAX_MISSING_SKILLS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn make_job(title: &str, description: &str, skills: &[&str]) -> JobRow {
        JobRow {
            job_id: Uuid::new_v4(),
            title: title.to_string(),
            company: "Acme".to_string(),
            description: description.to_string(),
            description_text: None,
            location: Some("Remote".to_string()),
            remote_type: Some("remote".to_string()),
            required_skills: skills.iter().map(|s| s.to_string()).collect(),
            salary: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_catalog_returns_empty() {
        assert!(rank_jobs("experienced rust engineer", &[]).is_empty());
    }

    #[test]
    fn test_empty_resume_scores_all_jobs_zero() {
        let jobs = vec![
            make_job("Backend", "rust backend services", &["Rust"]),
            make_job("Frontend", "react typescript frontend", &["React"]),
        ];
        let ranked = rank_jobs("", &jobs);
        assert_eq!(ranked.len(), 2);
        for r in &ranked {
            assert_eq!(r.score, 0.0);
        }
        // zero scores everywhere: catalog order preserved by the stable sort
        assert_eq!(ranked[0].title, "Backend");
        assert_eq!(ranked[1].title, "Frontend");
    }

    #[test]
    fn test_overlapping_job_outranks_disjoint_job() {
        let resume = "Experienced Python developer with Django and React skills";
        let jobs = vec![
            make_job("Chef", "pastry kitchen sous chef cooking", &[]),
            make_job(
                "Engineer",
                "python django react developer wanted",
                &["Python"],
            ),
        ];
        let ranked = rank_jobs(resume, &jobs);
        assert_eq!(ranked[0].title, "Engineer");
        assert!(ranked[0].score > ranked[1].score);
    }

    #[test]
    fn test_missing_skills_lowercased_and_filtered() {
        let jobs = vec![make_job(
            "Engineer",
            "python engineer",
            &["Python", "React"],
        )];
        let ranked = rank_jobs("I write python daily", &jobs);
        assert_eq!(ranked[0].missing_skills, vec!["react"]);
        // original casing still reported in required_skills
        assert_eq!(ranked[0].required_skills, vec!["Python", "React"]);
    }

    #[test]
    fn test_truncates_to_top_20() {
        let resume = "rust engineer";
        let jobs: Vec<JobRow> = (0..25)
            .map(|i| make_job(&format!("Job {i}"), "rust engineer role", &[]))
            .collect();
        let ranked = rank_jobs(resume, &jobs);
        assert_eq!(ranked.len(), MAX_RESULTS);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let jobs: Vec<JobRow> = (0..5)
            .map(|i| make_job(&format!("Job {i}"), "identical description text", &[]))
            .collect();
        let ranked = rank_jobs("something unrelated entirely", &jobs);
        let titles: Vec<&str> = ranked.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Job 0", "Job 1", "Job 2", "Job 3", "Job 4"]);
    }

    #[test]
    fn test_description_text_fallback_used_when_description_empty() {
        let mut job = make_job("Legacy", "", &[]);
        job.description_text = Some("rust systems programming".to_string());
        let ranked = rank_jobs("rust systems engineer", &[job]);
        assert!(ranked[0].score > 0.0);
    }

    #[test]
    fn test_scores_bounded_zero_to_one() {
        let resume = "python react aws docker kubernetes";
        let jobs = vec![
            make_job("A", "python react aws docker kubernetes", &[]),
            make_job("B", "python react", &[]),
            make_job("C", "haskell prolog", &[]),
        ];
        for r in rank_jobs(resume, &jobs) {
            assert!((0.0..=1.0 + 1e-9).contains(&r.score));
        }
    }
}
