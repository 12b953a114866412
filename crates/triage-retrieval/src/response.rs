//! Confidence-level-specific response rendering.
//!
//! Produces the natural-language answer skeleton for a retrieval outcome.
//! Templated text only; no model calls.

use triage_types::ConfidenceLevel;

use crate::types::ScoredArticle;

/// Body lines shorter than this are skipped when extracting key points.
const KEY_POINT_MIN_CHARS: usize = 20;

/// At most this many key points are quoted from the lead article.
const KEY_POINT_LIMIT: usize = 3;

/// Preview length for medium-confidence article summaries.
const MEDIUM_PREVIEW_CHARS: usize = 150;

/// Preview length for the low-confidence single article.
const LOW_PREVIEW_CHARS: usize = 100;

/// Render the response for a retrieval outcome.
///
/// The result is never empty: even an empty corpus produces an apology
/// that names the escalation path.
pub fn render(articles: &[ScoredArticle], level: ConfidenceLevel, escalate: bool) -> String {
    if escalate {
        return render_escalation(articles);
    }

    if articles.is_empty() {
        return "I apologize, but I don't have specific information about this topic. \
                Let me escalate this to a human agent who can provide more detailed assistance."
            .to_string();
    }

    match level {
        ConfidenceLevel::High => render_high(articles),
        ConfidenceLevel::Medium => render_medium(articles),
        ConfidenceLevel::Low | ConfidenceLevel::None => render_low(articles),
    }
}

fn render_high(articles: &[ScoredArticle]) -> String {
    let primary = &articles[0];

    let mut response =
        String::from("Based on our knowledge base, here's the information you need:\n\n");
    response.push_str(&format!("**{}**\n\n", primary.article.title));

    for point in key_points(&primary.article.body) {
        response.push_str(&format!("• {point}\n"));
    }

    if articles.len() > 1 {
        response.push_str("\n*Additional relevant information may be available in our knowledge base.*");
    }

    response
}

fn render_medium(articles: &[ScoredArticle]) -> String {
    let mut response = String::from("I found some relevant information that might help:\n\n");

    for (i, scored) in articles.iter().take(2).enumerate() {
        response.push_str(&format!("**{}. {}**\n", i + 1, scored.article.title));
        response.push_str(&preview(&scored.article.body, MEDIUM_PREVIEW_CHARS));
        response.push_str("\n\n");
    }

    response.push_str(
        "If this doesn't fully address your question, please let me know and I can \
         escalate to a human agent for more specific assistance.",
    );

    response
}

fn render_low(articles: &[ScoredArticle]) -> String {
    let mut response =
        String::from("I found some general information that might be related to your question:\n\n");

    response.push_str(&format!("**{}**\n", articles[0].article.title));
    response.push_str(&preview(&articles[0].article.body, LOW_PREVIEW_CHARS));
    response.push_str("\n\n");

    response.push_str(
        "However, this may not fully address your specific question. \
         Would you like me to escalate this to a human agent who can provide \
         more targeted assistance?",
    );

    response
}

fn render_escalation(articles: &[ScoredArticle]) -> String {
    let mut response = String::from(
        "I understand your question, but I don't have sufficient information in our \
         knowledge base to provide a complete answer. ",
    );

    if let Some(closest) = articles.first() {
        response.push_str(&format!(
            "I found some potentially related information about '{}', but it may not \
             fully address your specific needs. ",
            closest.article.title
        ));
    }

    response.push_str(
        "I'm escalating this to our human support team who will be able to provide \
         you with more detailed and accurate assistance. You should receive a \
         response within the next few hours.",
    );

    response
}

/// Extract up to three substantial body lines as quotable key points.
///
/// Headings (`**`-prefixed) and short fragments are skipped.
fn key_points(body: &str) -> impl Iterator<Item = &str> {
    body.lines()
        .map(str::trim)
        .filter(|line| {
            !line.is_empty() && !line.starts_with("**") && line.chars().count() > KEY_POINT_MIN_CHARS
        })
        .take(KEY_POINT_LIMIT)
}

/// Char-boundary-safe preview with a trailing ellipsis when truncated.
fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}
