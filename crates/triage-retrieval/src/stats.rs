//! Batch statistics over retrieval outcomes.
//!
//! A pure reduction over a caller-supplied slice; no state is kept
//! between calls and an empty batch yields the all-zero struct.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use triage_types::ConfidenceLevel;

use crate::types::RetrievalResult;

/// Aggregates over a batch of retrievals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RetrievalStatistics {
    /// Batch size.
    pub total_queries: usize,

    /// Fraction of the batch that escalated.
    pub escalation_rate: f32,

    /// Count of results per confidence level.
    pub confidence_distribution: BTreeMap<ConfidenceLevel, usize>,

    /// Mean number of articles retrieved per query.
    pub average_articles_retrieved: f32,

    /// Mean of each result's best relevance score.
    pub average_relevance_score: f32,

    /// Mean of each result's best confidence score.
    pub average_confidence_score: f32,

    /// Results answered from the knowledge base.
    pub successful_retrievals: usize,

    /// Results handed to a human.
    pub escalated_retrievals: usize,
}

/// Reduce a batch of retrieval results into summary statistics.
pub fn summarize_retrievals(results: &[RetrievalResult]) -> RetrievalStatistics {
    let mut stats = RetrievalStatistics {
        total_queries: results.len(),
        ..RetrievalStatistics::default()
    };

    if results.is_empty() {
        return stats;
    }

    let mut total_articles = 0usize;
    let mut total_relevance = 0.0f32;
    let mut total_confidence = 0.0f32;

    for result in results {
        if result.escalate {
            stats.escalated_retrievals += 1;
        } else {
            stats.successful_retrievals += 1;
        }

        *stats
            .confidence_distribution
            .entry(result.confidence_level)
            .or_insert(0) += 1;

        total_articles += result.articles.len();
        total_relevance += result.top_relevance();
        total_confidence += result.top_confidence();
    }

    let n = results.len() as f32;
    stats.escalation_rate = stats.escalated_retrievals as f32 / n;
    stats.average_articles_retrieved = total_articles as f32 / n;
    stats.average_relevance_score = total_relevance / n;
    stats.average_confidence_score = total_confidence / n;

    stats
}
