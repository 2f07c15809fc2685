//! Per-request TF-IDF vectorization.
//!
//! The model is fit over exactly one corpus — the caller's résumé plus the
//! current job catalog — and discarded with the response. There is no warm
//! model and no cache, so term weights are not comparable across requests;
//! that is deliberate (the catalog is small and the rebuild is linear in it).
//!
//! The weighting matches the recommender this service replaced (scikit-learn
//! defaults): raw term counts, smoothed IDF `ln((1+n)/(1+df)) + 1`, rows
//! L2-normalized. With normalized rows, cosine similarity is a plain sparse
//! dot product.

use std::collections::HashMap;

use crate::matching::stopwords::is_stop_word;
use crate::matching::tokenizer::term_stream;

/// Vocabulary cap: keep only this many terms, highest corpus frequency first.
pub const MAX_VOCABULARY: usize = 5000;

/// A document's L2-normalized sparse TF-IDF vector, sorted by term id.
/// Empty for documents with no in-vocabulary terms; cosine against an empty
/// vector is 0.
#[derive(Debug, Clone, PartialEq)]
pub struct DocVector {
    terms: Vec<(u32, f64)>,
}

impl DocVector {
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Cosine similarity. Both vectors are unit-length (or empty), so this
    /// is a merge-join dot product over the sorted term ids.
    pub fn cosine(&self, other: &DocVector) -> f64 {
        let mut dot = 0.0;
        let (mut i, mut j) = (0, 0);
        while i < self.terms.len() && j < other.terms.len() {
            let (ta, wa) = self.terms[i];
            let (tb, wb) = other.terms[j];
            match ta.cmp(&tb) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    dot += wa * wb;
                    i += 1;
                    j += 1;
                }
            }
        }
        dot
    }
}

/// The vectorizer's analyzer: lowercase alphabetic terms with duplicates,
/// English stopwords removed. Stopword filtering lives here and only here.
pub fn analyze(text: &str) -> Vec<String> {
    term_stream(text)
        .filter(|t| !is_stop_word(t.as_str()))
        .collect()
}

/// Fits a vocabulary and IDF over `docs` and returns one vector per document,
/// in input order.
pub fn fit_transform(docs: &[Vec<String>], max_features: usize) -> Vec<DocVector> {
    // Corpus-wide term counts and document frequencies in one pass.
    let mut corpus_freq: HashMap<&str, u64> = HashMap::new();
    let mut doc_freq: HashMap<&str, u32> = HashMap::new();
    for doc in docs {
        let mut counts: HashMap<&str, u64> = HashMap::new();
        for term in doc {
            *counts.entry(term.as_str()).or_insert(0) += 1;
        }
        for (term, count) in counts {
            *corpus_freq.entry(term).or_insert(0) += count;
            *doc_freq.entry(term).or_insert(0) += 1;
        }
    }

    // Keep the top `max_features` terms by corpus frequency, ties broken
    // alphabetically, then assign ids in alphabetical order.
    let mut ranked: Vec<(&str, u64)> = corpus_freq.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(max_features);
    let mut vocab_terms: Vec<&str> = ranked.into_iter().map(|(t, _)| t).collect();
    vocab_terms.sort_unstable();

    let vocab: HashMap<&str, u32> = vocab_terms
        .iter()
        .enumerate()
        .map(|(id, &t)| (t, id as u32))
        .collect();

    // Smoothed IDF, indexed by term id.
    let n = docs.len() as f64;
    let idf: Vec<f64> = vocab_terms
        .iter()
        .map(|t| {
            let df = doc_freq[t] as f64;
            ((1.0 + n) / (1.0 + df)).ln() + 1.0
        })
        .collect();

    docs.iter()
        .map(|doc| transform_one(doc, &vocab, &idf))
        .collect()
}

fn transform_one(doc: &[String], vocab: &HashMap<&str, u32>, idf: &[f64]) -> DocVector {
    let mut counts: HashMap<u32, u64> = HashMap::new();
    for term in doc {
        if let Some(&id) = vocab.get(term.as_str()) {
            *counts.entry(id).or_insert(0) += 1;
        }
    }

    let mut terms: Vec<(u32, f64)> = counts
        .into_iter()
        .map(|(id, tf)| (id, tf as f64 * idf[id as usize]))
        .collect();
    terms.sort_unstable_by_key(|&(id, _)| id);

    let norm = terms.iter().map(|&(_, w)| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for entry in &mut terms {
            entry.1 /= norm;
        }
    }

    DocVector { terms }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(texts: &[&str]) -> Vec<Vec<String>> {
        texts.iter().map(|t| analyze(t)).collect()
    }

    #[test]
    fn test_analyze_drops_stopwords_keeps_counts() {
        let terms = analyze("the python and python for engineers");
        assert_eq!(terms, vec!["python", "python", "engineers"]);
    }

    #[test]
    fn test_identical_documents_have_cosine_one() {
        let docs = corpus(&["rust systems engineer", "rust systems engineer"]);
        let vecs = fit_transform(&docs, MAX_VOCABULARY);
        assert!((vecs[0].cosine(&vecs[1]) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_disjoint_documents_have_cosine_zero() {
        let docs = corpus(&["rust tokio axum", "python django flask"]);
        let vecs = fit_transform(&docs, MAX_VOCABULARY);
        assert_eq!(vecs[0].cosine(&vecs[1]), 0.0);
    }

    #[test]
    fn test_empty_document_yields_empty_vector() {
        let docs = corpus(&["", "rust engineer"]);
        let vecs = fit_transform(&docs, MAX_VOCABULARY);
        assert!(vecs[0].is_empty());
        assert_eq!(vecs[0].cosine(&vecs[1]), 0.0);
    }

    #[test]
    fn test_stopword_only_document_yields_empty_vector() {
        let docs = corpus(&["the and of with", "rust engineer"]);
        let vecs = fit_transform(&docs, MAX_VOCABULARY);
        assert!(vecs[0].is_empty());
    }

    #[test]
    fn test_rows_are_unit_length() {
        let docs = corpus(&[
            "rust rust engineer backend",
            "python data engineer",
            "frontend react typescript",
        ]);
        for vec in fit_transform(&docs, MAX_VOCABULARY) {
            let norm: f64 = vec.terms.iter().map(|&(_, w)| w * w).sum();
            assert!((norm - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_more_shared_terms_means_higher_cosine() {
        let docs = corpus(&[
            "rust tokio networking engineer",
            "rust tokio networking backend",
            "rust gamedev graphics shaders",
        ]);
        let vecs = fit_transform(&docs, MAX_VOCABULARY);
        let close = vecs[0].cosine(&vecs[1]);
        let far = vecs[0].cosine(&vecs[2]);
        assert!(close > far, "{close} should exceed {far}");
    }

    #[test]
    fn test_max_features_keeps_highest_frequency_terms() {
        // "alpha" appears three times, "beta" twice, "gamma" once; a cap of
        // 2 must drop "gamma", zeroing similarity along it.
        let docs = corpus(&["alpha alpha beta gamma", "alpha beta gamma"]);
        let capped = fit_transform(&docs, 2);
        for vec in &capped {
            assert!(vec.terms.len() <= 2);
        }
        let distinct_ids: std::collections::BTreeSet<u32> = capped
            .iter()
            .flat_map(|v| v.terms.iter().map(|&(id, _)| id))
            .collect();
        assert_eq!(distinct_ids.len(), 2, "gamma should have been dropped");
        // the surviving shared terms still register as similar
        assert!(capped[0].cosine(&capped[1]) > 0.0);
    }

    #[test]
    fn test_cosine_bounded_zero_to_one() {
        let docs = corpus(&[
            "rust engineer backend services",
            "rust engineer",
            "cooking recipes pasta",
        ]);
        let vecs = fit_transform(&docs, MAX_VOCABULARY);
        for a in &vecs {
            for b in &vecs {
                let s = a.cosine(b);
                assert!((0.0..=1.0 + 1e-9).contains(&s), "cosine {s} out of range");
            }
        }
    }
}
