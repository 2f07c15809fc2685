//! Text matching — the tracker's similarity subsystem.
//!
//! Three pieces, all request-scoped and stateless:
//! - `tokenizer`: free text → lowercase alphabetic token sets
//! - `gap`: missing job keywords + coverage ratio for one job
//! - `ranker`: TF-IDF + cosine ranking of the whole catalog against the
//!   caller's latest résumé
//!
//! Nothing here touches storage; the handlers fetch résumé/job rows and pass
//! plain text in. Every function is pure over its inputs.

pub mod gap;
pub mod handlers;
pub mod ranker;
pub mod stopwords;
pub mod tfidf;
pub mod tokenizer;
