//! Knowledge retrieval over an immutable article corpus.
//!
//! The retriever scores every article against the query, ranks by
//! relevance (stable sort, so equal scores keep corpus order), bands the
//! best confidence into a discrete level, and applies the escalation
//! rules in a fixed order where the first match wins.

use std::cmp::Ordering;

use chrono::Utc;
use tracing::debug;

use triage_types::keywords::{contains_any, ESCALATION_KEYWORDS};
use triage_types::{Article, ConfidenceLevel, RetrievalConfig, TicketContext};

use crate::response;
use crate::scorer;
use crate::types::{RetrievalMetadata, RetrievalResult, ScoredArticle};

/// Scores a request against the knowledge corpus and decides whether the
/// coverage is good enough to answer without a human.
///
/// The corpus is read-only for the lifetime of the retriever; `retrieve`
/// takes `&self` and keeps no state between calls, so one instance can be
/// shared across threads freely.
pub struct KnowledgeRetriever {
    corpus: Vec<Article>,
    config: RetrievalConfig,
}

impl KnowledgeRetriever {
    /// Create a retriever with default thresholds.
    pub fn new(corpus: Vec<Article>) -> Self {
        Self::with_config(corpus, RetrievalConfig::default())
    }

    /// Create a retriever with custom thresholds.
    pub fn with_config(corpus: Vec<Article>, config: RetrievalConfig) -> Self {
        debug_assert!(config.validate().is_ok(), "invalid retrieval config");
        Self { corpus, config }
    }

    /// Number of articles in the corpus.
    pub fn corpus_size(&self) -> usize {
        self.corpus.len()
    }

    /// The active retrieval configuration.
    pub fn config(&self) -> &RetrievalConfig {
        &self.config
    }

    /// Retrieve the most relevant articles for a query and decide whether
    /// to escalate.
    ///
    /// Never fails: an empty query or corpus degrades to the `None` band
    /// and an escalation, not an error.
    pub fn retrieve(&self, query: &str, ctx: &TicketContext) -> RetrievalResult {
        let mut scored: Vec<(&Article, f32, f32)> = self
            .corpus
            .iter()
            .map(|article| {
                let relevance = scorer::relevance(article, query);
                let confidence = scorer::confidence(article, query, relevance);
                (article, relevance, confidence)
            })
            .collect();

        // Stable: equal relevance keeps corpus order.
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        let top_articles: Vec<ScoredArticle> = scored
            .iter()
            .take(self.config.top_articles)
            .map(|(article, relevance, confidence)| ScoredArticle {
                article: (*article).clone(),
                relevance: *relevance,
                confidence: *confidence,
                matched_terms: scorer::matched_terms(article, query),
            })
            .collect();

        let confidence_level = self.band(&top_articles);
        let (escalate, escalation_reason) =
            self.escalation_check(&top_articles, confidence_level, query, ctx);
        let response = response::render(&top_articles, confidence_level, escalate);

        debug!(
            query_length = query.chars().count(),
            retrieved = top_articles.len(),
            level = confidence_level.as_str(),
            escalate,
            "knowledge retrieval"
        );

        // A None band without escalation would hand the caller silence.
        debug_assert!(confidence_level != ConfidenceLevel::None || escalate);

        let average_confidence = if top_articles.is_empty() {
            0.0
        } else {
            top_articles.iter().map(|a| a.confidence).sum::<f32>() / top_articles.len() as f32
        };

        let metadata = RetrievalMetadata {
            total_articles_searched: self.corpus.len(),
            articles_retrieved: top_articles.len(),
            highest_relevance_score: top_articles.first().map_or(0.0, |a| a.relevance),
            average_confidence,
            retrieved_at: Utc::now(),
            query_length: query.chars().count(),
            ticket_context: ctx.clone(),
        };

        RetrievalResult {
            articles: top_articles,
            confidence_level,
            escalate,
            escalation_reason,
            response,
            metadata,
        }
    }

    /// Band the best confidence among the retrieved articles.
    fn band(&self, articles: &[ScoredArticle]) -> ConfidenceLevel {
        let Some(max_confidence) = articles
            .iter()
            .map(|a| a.confidence)
            .max_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
        else {
            return ConfidenceLevel::None;
        };

        if max_confidence >= self.config.high_threshold {
            ConfidenceLevel::High
        } else if max_confidence >= self.config.medium_threshold {
            ConfidenceLevel::Medium
        } else if max_confidence >= self.config.low_threshold {
            ConfidenceLevel::Low
        } else {
            ConfidenceLevel::None
        }
    }

    /// Ordered escalation rules; the first matching rule decides.
    fn escalation_check(
        &self,
        articles: &[ScoredArticle],
        level: ConfidenceLevel,
        query: &str,
        ctx: &TicketContext,
    ) -> (bool, String) {
        if level == ConfidenceLevel::None {
            return (true, "No relevant knowledge base articles found".to_string());
        }

        if let Some(top) = articles.first() {
            if top.confidence < self.config.escalation_floor {
                return (
                    true,
                    format!(
                        "Low confidence ({:.2}) below escalation threshold ({})",
                        top.confidence, self.config.escalation_floor
                    ),
                );
            }
        }

        if contains_any(&query.to_lowercase(), ESCALATION_KEYWORDS) {
            return (true, "Escalation keywords detected in query".to_string());
        }

        if ctx.user_blocked {
            return (true, "User account is blocked".to_string());
        }

        if ctx.is_premium() && level == ConfidenceLevel::Low {
            return (
                true,
                "Premium user with low confidence requires escalation".to_string(),
            );
        }

        (
            false,
            "Sufficient knowledge base coverage available".to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage_types::UserType;

    fn reserve_article() -> Article {
        Article::new(
            "kb-1",
            "How Do I Reserve an Event",
            "How do I reserve an event: open the events page, pick a date, and confirm.",
            "reserve, events",
        )
    }

    fn corpus() -> Vec<Article> {
        vec![
            reserve_article(),
            Article::new(
                "kb-2",
                "Refund Policy",
                "Refunds are processed within five business days of the request.",
                "refund, billing",
            ),
            Article::new(
                "kb-3",
                "Resetting Your Password",
                "Use the forgot password link on the login screen to reset it.",
                "password, login",
            ),
        ]
    }

    #[test]
    fn test_strong_match_does_not_escalate() {
        let retriever = KnowledgeRetriever::new(corpus());
        let result = retriever.retrieve("How do I reserve an event?", &TicketContext::new());

        assert!(matches!(
            result.confidence_level,
            ConfidenceLevel::High | ConfidenceLevel::Medium
        ));
        assert!(!result.escalate);
        assert_eq!(result.articles[0].article.id, "kb-1");
        assert_eq!(result.escalation_reason, "Sufficient knowledge base coverage available");
    }

    #[test]
    fn test_unrelated_query_escalates_with_none() {
        let retriever = KnowledgeRetriever::new(corpus());
        let result = retriever.retrieve("What is the meaning of life?", &TicketContext::new());

        assert_eq!(result.confidence_level, ConfidenceLevel::None);
        assert!(result.escalate);
        assert!(result.escalation_reason.contains("No relevant"));
        assert!(!result.response.is_empty());
    }

    #[test]
    fn test_empty_corpus_degrades_to_none() {
        let retriever = KnowledgeRetriever::new(vec![]);
        let result = retriever.retrieve("anything", &TicketContext::new());

        assert!(result.articles.is_empty());
        assert_eq!(result.confidence_level, ConfidenceLevel::None);
        assert!(result.escalate);
        assert_eq!(result.metadata.articles_retrieved, 0);
        assert_eq!(result.metadata.highest_relevance_score, 0.0);
    }

    #[test]
    fn test_empty_query_degrades_to_none() {
        let retriever = KnowledgeRetriever::new(corpus());
        let result = retriever.retrieve("", &TicketContext::new());

        assert_eq!(result.confidence_level, ConfidenceLevel::None);
        assert!(result.escalate);
    }

    #[test]
    fn test_escalation_keyword_overrides_good_coverage() {
        let retriever = KnowledgeRetriever::new(corpus());
        let result = retriever.retrieve(
            "How do I reserve an event? This is urgent",
            &TicketContext::new(),
        );

        assert!(result.escalate);
        assert_eq!(result.escalation_reason, "Escalation keywords detected in query");
    }

    #[test]
    fn test_blocked_user_always_escalates() {
        let retriever = KnowledgeRetriever::new(corpus());
        let ctx = TicketContext::new().with_blocked(true);
        let result = retriever.retrieve("How do I reserve an event?", &ctx);

        assert!(result.escalate);
        assert_eq!(result.escalation_reason, "User account is blocked");
    }

    #[test]
    fn test_premium_low_band_escalates_standard_does_not() {
        // Calibrated to land in the Low band: two of five query tokens hit
        // the title and body, one hits a tag.
        let weak_corpus = vec![Article::new(
            "kb-w",
            "password reset guide",
            "follow the password reset link from settings",
            "password",
        )];
        let retriever = KnowledgeRetriever::new(weak_corpus);
        let query = "password reset for my account";

        let standard = retriever.retrieve(query, &TicketContext::new());
        assert_eq!(standard.confidence_level, ConfidenceLevel::Low);
        assert!(!standard.escalate);

        let premium_ctx = TicketContext::new().with_user_type(UserType::Premium);
        let premium = retriever.retrieve(query, &premium_ctx);
        assert_eq!(premium.confidence_level, ConfidenceLevel::Low);
        assert!(premium.escalate);
        assert!(premium.escalation_reason.contains("Premium user"));
    }

    #[test]
    fn test_ties_keep_corpus_order() {
        let tied = vec![
            Article::new("first", "alpha topic", "", ""),
            Article::new("second", "alpha topic", "", ""),
            Article::new("third", "alpha topic", "", ""),
        ];
        let retriever = KnowledgeRetriever::new(tied);
        let result = retriever.retrieve("alpha topic overview", &TicketContext::new());

        let ids: Vec<&str> = result.articles.iter().map(|a| a.article.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_top_cut_respects_config() {
        let config = RetrievalConfig {
            top_articles: 1,
            ..RetrievalConfig::default()
        };
        let retriever = KnowledgeRetriever::with_config(corpus(), config);
        let result = retriever.retrieve("How do I reserve an event?", &TicketContext::new());
        assert_eq!(result.articles.len(), 1);
    }

    #[test]
    fn test_metadata_echoes_context() {
        let retriever = KnowledgeRetriever::new(corpus());
        let ctx: TicketContext =
            serde_json::from_str(r#"{"user_type": "premium", "channel": "chat"}"#).unwrap();
        let result = retriever.retrieve("refund please", &ctx);

        assert_eq!(result.metadata.total_articles_searched, 3);
        assert_eq!(result.metadata.ticket_context.extra["channel"], "chat");
        assert!(result.metadata.ticket_context.is_premium());
        assert_eq!(result.metadata.query_length, 13);
    }
}
