//! Result types for knowledge retrieval.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use triage_types::{Article, ConfidenceLevel, TicketContext};

/// An article paired with the scores a retrieval computed for it.
///
/// Owned by the retrieval call that produced it; never cached or shared
/// across calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredArticle {
    /// The underlying article, serialized flat alongside the scores.
    #[serde(flatten)]
    pub article: Article,

    /// Lexical overlap score in [0, 1].
    pub relevance: f32,

    /// Adjusted confidence estimate in [0, 1].
    pub confidence: f32,

    /// Significant query terms found in the article (reporting only).
    pub matched_terms: Vec<String>,
}

/// Context captured alongside a retrieval outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievalMetadata {
    /// Corpus size at retrieval time.
    pub total_articles_searched: usize,

    /// How many articles made the top cut.
    pub articles_retrieved: usize,

    /// Relevance of the best-ranked article (0 when none).
    pub highest_relevance_score: f32,

    /// Mean confidence across the retrieved articles (0 when none).
    pub average_confidence: f32,

    /// When the retrieval ran.
    pub retrieved_at: DateTime<Utc>,

    /// Query length in characters.
    pub query_length: usize,

    /// Echo of the caller-supplied ticket context.
    pub ticket_context: TicketContext,
}

/// Outcome of one knowledge retrieval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievalResult {
    /// Top-ranked articles, best first. May contain zero-relevance entries
    /// when the corpus has nothing better; the confidence band accounts
    /// for that.
    pub articles: Vec<ScoredArticle>,

    /// Banded confidence in the retrieved material.
    pub confidence_level: ConfidenceLevel,

    /// Whether this request must go to a human.
    pub escalate: bool,

    /// Why the escalation decision came out the way it did.
    pub escalation_reason: String,

    /// Rendered answer skeleton. Always non-empty.
    pub response: String,

    /// Retrieval context and aggregates.
    pub metadata: RetrievalMetadata,
}

impl RetrievalResult {
    /// The best-ranked article, if any.
    pub fn top_article(&self) -> Option<&ScoredArticle> {
        self.articles.first()
    }

    /// Highest relevance among the retrieved articles.
    pub fn top_relevance(&self) -> f32 {
        self.articles
            .iter()
            .map(|a| a.relevance)
            .fold(0.0, f32::max)
    }

    /// Highest confidence among the retrieved articles.
    pub fn top_confidence(&self) -> f32 {
        self.articles
            .iter()
            .map(|a| a.confidence)
            .fold(0.0, f32::max)
    }
}
