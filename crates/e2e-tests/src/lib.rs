//! Shared fixtures for the ticket-triage integration tests.

use triage_types::Article;

/// A small but realistic support corpus.
///
/// The reserve-an-event article is calibrated so the canonical query
/// "How do I reserve an event?" bands High/Medium; unrelated queries band
/// None against every entry.
pub fn sample_corpus() -> Vec<Article> {
    vec![
        Article::new(
            "kb-001",
            "How Do I Reserve an Event",
            "How do I reserve an event: open the events page, pick a date, and confirm.\n\
             You can reserve experiences for up to six guests per booking.\n\
             Reservations close two hours before an event starts.",
            "reserve, events",
        ),
        Article::new(
            "kb-002",
            "Refund Policy",
            "Refunds are processed within five business days of a cancellation request.\n\
             Subscription renewals refund at a prorated rate.",
            "refund, billing",
        ),
        Article::new(
            "kb-003",
            "Resetting Your Password",
            "Use the forgot password link on the login screen to request a reset email.\n\
             Reset links expire after thirty minutes.",
            "password, login",
        ),
        Article::new(
            "kb-004",
            "Exporting Your Personal Data",
            "Open privacy settings and choose export to download your personal data archive.",
            "privacy, export",
        ),
    ]
}

/// A single deliberately weak article: common queries about password
/// resets land in the Low confidence band against it.
pub fn weak_corpus() -> Vec<Article> {
    vec![Article::new(
        "kb-weak",
        "password reset guide",
        "follow the password reset link from settings",
        "password",
    )]
}

/// The canonical well-covered query for `sample_corpus`.
pub fn covered_query() -> &'static str {
    "How do I reserve an event?"
}

/// A query no corpus article covers.
pub fn uncovered_query() -> &'static str {
    "What is the meaning of life?"
}
