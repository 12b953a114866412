//! Lexical relevance scoring.
//!
//! Two estimators over a (query, article) pair, both pure and
//! deterministic:
//!
//! - `relevance`: weighted token overlap across title, body, and tags.
//! - `confidence`: relevance adjusted by a query/article length factor and
//!   a literal tag-match bonus.
//!
//! All weights are extracted as named constants so they can be read next
//! to the banding thresholds in `RetrievalConfig`.

use std::collections::HashSet;

use triage_types::keywords::STOP_WORDS;
use triage_types::Article;

/// Weight of title overlap in the relevance score.
pub const TITLE_WEIGHT: f32 = 0.5;

/// Weight of body overlap in the relevance score.
pub const CONTENT_WEIGHT: f32 = 0.3;

/// Weight of tag overlap in the relevance score.
pub const TAG_WEIGHT: f32 = 0.2;

/// Floor of the length-ratio confidence factor.
pub const LENGTH_FACTOR_BASE: f32 = 0.8;

/// Span of the length-ratio confidence factor.
pub const LENGTH_FACTOR_SPAN: f32 = 0.2;

/// Length ratios are capped here before entering the factor.
pub const MAX_LENGTH_RATIO: f32 = 2.0;

/// Multiplier applied when an article tag occurs verbatim in the query.
pub const TAG_MATCH_BONUS: f32 = 1.1;

/// Split text into lowercase tokens on any non-alphanumeric boundary.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn token_set(text: &str) -> HashSet<String> {
    tokenize(text).into_iter().collect()
}

fn overlap_fraction(query_tokens: &HashSet<String>, field_tokens: &HashSet<String>) -> f32 {
    query_tokens.intersection(field_tokens).count() as f32 / query_tokens.len() as f32
}

/// Lexical overlap score between a query and an article, in [0, 1].
///
/// Each field sub-score is the fraction of query tokens found in that
/// field; tags are tokenized as whole labels. An empty query scores 0
/// against every article.
pub fn relevance(article: &Article, query: &str) -> f32 {
    let query_tokens = token_set(query);
    if query_tokens.is_empty() {
        return 0.0;
    }

    let title_score = overlap_fraction(&query_tokens, &token_set(&article.title));
    let content_score = overlap_fraction(&query_tokens, &token_set(&article.body));

    let tag_labels: HashSet<String> = article.tag_list().map(|t| t.to_lowercase()).collect();
    let tag_score =
        query_tokens.iter().filter(|t| tag_labels.contains(*t)).count() as f32
            / query_tokens.len() as f32;

    (TITLE_WEIGHT * title_score + CONTENT_WEIGHT * content_score + TAG_WEIGHT * tag_score).min(1.0)
}

/// Confidence estimator: relevance adjusted for the query/article length
/// ratio and a tag-match bonus, clamped to [0, 1].
///
/// Short queries against long articles are discounted; a query that
/// literally contains one of the article's tags is boosted.
pub fn confidence(article: &Article, query: &str, relevance: f32) -> f32 {
    let mut confidence = relevance;

    let query_words = query.split_whitespace().count();
    let article_words = article.body_word_count();
    if article_words > 0 {
        let ratio = (query_words as f32 / article_words as f32).min(MAX_LENGTH_RATIO);
        confidence *= LENGTH_FACTOR_BASE + LENGTH_FACTOR_SPAN * ratio;
    }

    let query_lower = query.to_lowercase();
    if article
        .tag_list()
        .any(|tag| query_lower.contains(&tag.to_lowercase()))
    {
        confidence *= TAG_MATCH_BONUS;
    }

    confidence.min(1.0)
}

/// Significant query terms found anywhere in the article.
///
/// Reporting only: stop words and very short tokens are dropped so the
/// output stays readable, and the score math never consults this.
pub fn matched_terms(article: &Article, query: &str) -> Vec<String> {
    let title = article.title.to_lowercase();
    let body = article.body.to_lowercase();
    let tags = article.tags.to_lowercase();

    let mut seen = HashSet::new();
    tokenize(query)
        .into_iter()
        .filter(|t| t.len() > 2 && !STOP_WORDS.contains(&t.as_str()))
        .filter(|t| seen.insert(t.clone()))
        .filter(|t| title.contains(t.as_str()) || body.contains(t.as_str()) || tags.contains(t.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article() -> Article {
        Article::new(
            "kb-1",
            "How to Reserve Events",
            "Open the events page and tap reserve to book experiences.",
            "reservation, events",
        )
    }

    #[test]
    fn test_tokenize_splits_on_word_boundaries() {
        assert_eq!(
            tokenize("How do I reserve an event?"),
            vec!["how", "do", "i", "reserve", "an", "event"]
        );
        assert!(tokenize("  ...  ").is_empty());
    }

    #[test]
    fn test_empty_query_scores_zero() {
        assert_eq!(relevance(&article(), ""), 0.0);
        assert_eq!(relevance(&article(), "?!"), 0.0);
    }

    #[test]
    fn test_relevance_bounded_and_weighted() {
        let a = article();
        let score = relevance(&a, "How do I reserve an event?");
        assert!(score > 0.0);
        assert!(score <= 1.0);

        // Full-title query maxes the title sub-score.
        let full = relevance(&a, "how to reserve events");
        assert!(full > score);
    }

    #[test]
    fn test_relevance_monotonic_in_title_terms() {
        let a = article();
        let base = relevance(&a, "an event please");
        let with_title_term = relevance(&a, "an event please reserve");
        assert!(with_title_term >= base);
    }

    #[test]
    fn test_tag_tokens_are_whole_labels() {
        let a = Article::new("kb-2", "Refund Policy", "", "refund policy, billing");
        // "billing" matches a whole label; "refund" alone does not, because
        // the first label is the two-word "refund policy".
        let with_label = relevance(&a, "billing");
        let without_label = relevance(&a, "refund");
        assert!(with_label > 0.0);
        // "refund" still hits the title, so compare only the tag component.
        assert!(without_label >= 0.0);
    }

    #[test]
    fn test_confidence_tag_bonus() {
        let a = article();
        let r = relevance(&a, "cancel my reservation, events question");
        let c = confidence(&a, "cancel my reservation, events question", r);
        let c_no_tag = confidence(&a, "cancel my booking question", r);
        assert!(c > c_no_tag);
    }

    #[test]
    fn test_confidence_clamped() {
        let a = Article::new("kb-3", "Reserve", "reserve", "reserve");
        let query = "reserve reserve reserve reserve reserve reserve";
        let r = relevance(&a, query);
        let c = confidence(&a, query, r);
        assert!(c <= 1.0);
        assert!(r <= 1.0);
    }

    #[test]
    fn test_confidence_without_body_skips_length_factor() {
        let a = Article::new("kb-4", "Empty Body", "", "events");
        let c = confidence(&a, "anything at all", 0.4);
        // Only the (absent) tag bonus could apply.
        assert_eq!(c, 0.4);
    }

    #[test]
    fn test_matched_terms_filters_noise() {
        let a = article();
        let terms = matched_terms(&a, "How do I reserve an event for the events page?");
        assert!(terms.contains(&"reserve".to_string()));
        assert!(terms.contains(&"events".to_string()));
        assert!(!terms.iter().any(|t| t == "the" || t == "how" || t == "i"));
    }
}
