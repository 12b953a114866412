//! Fixed keyword tables.
//!
//! Process-wide read-only term lists shared by the classifier and the
//! retriever. Matching is substring containment against lowercased text,
//! so multi-word entries like "not working" are valid.

use crate::taxonomy::{TicketCategory, TicketComplexity, TicketPriority};

/// Technical-category signals.
pub const TECHNICAL_KEYWORDS: &[&str] = &[
    "login",
    "password",
    "error",
    "bug",
    "crash",
    "not working",
    "technical",
    "app",
    "mobile",
    "website",
    "connection",
    "network",
    "slow",
    "freeze",
    "qr code",
    "scan",
    "entry",
    "ticket",
    "reservation",
    "authentication",
];

/// Billing-category signals.
pub const BILLING_KEYWORDS: &[&str] = &[
    "payment",
    "subscription",
    "billing",
    "refund",
    "charge",
    "cost",
    "premium",
    "monthly",
    "renewal",
    "cancel",
    "money",
    "credit",
    "debit",
    "card",
    "pricing",
    "fee",
    "invoice",
    "receipt",
];

/// Account-category signals.
pub const ACCOUNT_KEYWORDS: &[&str] = &[
    "account",
    "profile",
    "preferences",
    "settings",
    "transfer",
    "privacy",
    "data",
    "information",
    "update",
    "change",
    "delete",
    "export",
    "security",
    "password",
    "email",
    "personal",
    "details",
];

/// Escalation signals. Any hit preempts every other category, and the
/// retriever escalates on these regardless of coverage.
pub const ESCALATION_KEYWORDS: &[&str] = &[
    "urgent",
    "emergency",
    "critical",
    "immediately",
    "human",
    "agent",
    "representative",
    "supervisor",
    "manager",
    "complaint",
    "dispute",
    "legal",
    "fraud",
    "unauthorized",
    "hacked",
    "compromised",
];

/// Urgent-priority signals.
pub const PRIORITY_URGENT_KEYWORDS: &[&str] =
    &["urgent", "emergency", "critical", "immediately", "asap", "now"];

/// High-priority signals.
pub const PRIORITY_HIGH_KEYWORDS: &[&str] = &[
    "important",
    "priority",
    "high",
    "serious",
    "broken",
    "not working",
];

/// Medium-priority signals.
pub const PRIORITY_MEDIUM_KEYWORDS: &[&str] = &["issue", "problem", "question", "help", "support"];

/// Low-priority signals.
pub const PRIORITY_LOW_KEYWORDS: &[&str] =
    &["inquiry", "information", "general", "curious", "wondering"];

/// Complex-ticket indicators.
pub const COMPLEXITY_COMPLEX_KEYWORDS: &[&str] = &[
    "multiple",
    "several",
    "various",
    "different",
    "complex",
    "complicated",
    "detailed",
    "comprehensive",
    "extensive",
    "thorough",
    "multiple issues",
    "combination",
    "related",
    "connected",
    "interdependent",
];

/// Moderate-ticket indicators.
pub const COMPLEXITY_MODERATE_KEYWORDS: &[&str] = &[
    "issue",
    "problem",
    "trouble",
    "difficulty",
    "challenge",
    "specific",
    "particular",
    "certain",
    "one",
    "single",
    "individual",
];

/// Simple-ticket indicators.
pub const COMPLEXITY_SIMPLE_KEYWORDS: &[&str] = &[
    "simple",
    "basic",
    "quick",
    "easy",
    "straightforward",
    "just",
    "only",
    "merely",
    "simple question",
    "quick question",
];

/// Words contributing to the continuous urgency score.
pub const URGENCY_KEYWORDS: &[&str] = &[
    "urgent",
    "emergency",
    "critical",
    "immediately",
    "asap",
    "now",
    "broken",
    "not working",
];

/// Explicit requests for a human.
pub const HUMAN_HANDOFF_KEYWORDS: &[&str] =
    &["human", "agent", "representative", "supervisor", "manager"];

/// Legal and security issues, always escalated.
pub const LEGAL_SECURITY_KEYWORDS: &[&str] = &[
    "legal",
    "fraud",
    "unauthorized",
    "hacked",
    "compromised",
    "dispute",
    "complaint",
];

/// Emergency wording, always escalated.
pub const EMERGENCY_KEYWORDS: &[&str] = &["urgent", "emergency", "critical", "immediately", "asap"];

/// Noise words excluded from matched-term reporting. These never affect
/// scores; they only keep explainability output readable.
pub const STOP_WORDS: &[&str] = &[
    "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is", "are",
    "was", "were", "be", "been", "have", "has", "had", "do", "does", "did", "will", "would",
    "could", "should", "may", "might", "can", "this", "that", "these", "those", "you", "he",
    "she", "it", "we", "they", "me", "him", "her", "us", "them", "my", "your", "his", "its",
    "our", "their", "mine", "yours", "hers", "ours", "theirs", "what", "when", "where", "why",
    "how", "who", "which", "whom", "whose", "if", "then", "else", "because", "since", "while",
    "before", "after", "during", "until", "unless", "although", "though", "even", "as", "so",
    "than", "such", "very", "too", "just", "only", "also", "still", "again", "once", "twice",
    "first", "second", "third", "last", "next", "previous", "current", "new", "old", "good",
    "bad", "big", "small", "high", "low", "long", "short", "fast", "slow", "easy", "hard",
    "simple", "complex", "important", "urgent", "critical", "necessary", "optional",
];

/// Keyword table for a ticket category. `General` has no signals of its
/// own; it is the all-zero fallback.
pub fn category_keywords(category: TicketCategory) -> &'static [&'static str] {
    match category {
        TicketCategory::Technical => TECHNICAL_KEYWORDS,
        TicketCategory::Billing => BILLING_KEYWORDS,
        TicketCategory::Account => ACCOUNT_KEYWORDS,
        TicketCategory::General => &[],
        TicketCategory::Escalation => ESCALATION_KEYWORDS,
    }
}

/// Keyword table for a priority bucket.
pub fn priority_keywords(priority: TicketPriority) -> &'static [&'static str] {
    match priority {
        TicketPriority::Urgent => PRIORITY_URGENT_KEYWORDS,
        TicketPriority::High => PRIORITY_HIGH_KEYWORDS,
        TicketPriority::Medium => PRIORITY_MEDIUM_KEYWORDS,
        TicketPriority::Low => PRIORITY_LOW_KEYWORDS,
    }
}

/// Keyword table for a complexity bucket.
pub fn complexity_keywords(complexity: TicketComplexity) -> &'static [&'static str] {
    match complexity {
        TicketComplexity::Complex => COMPLEXITY_COMPLEX_KEYWORDS,
        TicketComplexity::Moderate => COMPLEXITY_MODERATE_KEYWORDS,
        TicketComplexity::Simple => COMPLEXITY_SIMPLE_KEYWORDS,
    }
}

/// Count how many keywords from the table occur in `text`.
///
/// Presence count, not frequency: each keyword contributes at most one.
/// `text` must already be lowercased.
pub fn hit_count(text: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|kw| text.contains(*kw)).count()
}

/// Whether any keyword from the table occurs in `text` (lowercased).
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text.contains(kw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_count_is_presence_not_frequency() {
        let text = "payment payment payment refund";
        assert_eq!(hit_count(text, BILLING_KEYWORDS), 2);
    }

    #[test]
    fn test_contains_any_multiword() {
        assert!(contains_any("the app is not working", PRIORITY_HIGH_KEYWORDS));
        assert!(!contains_any("all good here", PRIORITY_HIGH_KEYWORDS));
    }

    #[test]
    fn test_category_tables_are_nonempty() {
        for category in [
            TicketCategory::Technical,
            TicketCategory::Billing,
            TicketCategory::Account,
            TicketCategory::Escalation,
        ] {
            assert!(!category_keywords(category).is_empty());
        }
        assert!(category_keywords(TicketCategory::General).is_empty());
    }

    #[test]
    fn test_escalation_tables_agree() {
        // The retriever's escalation list covers both the handoff and the
        // legal/security lists used by the classifier.
        for kw in HUMAN_HANDOFF_KEYWORDS
            .iter()
            .chain(LEGAL_SECURITY_KEYWORDS)
        {
            assert!(ESCALATION_KEYWORDS.contains(kw), "missing {kw}");
        }
    }
}
