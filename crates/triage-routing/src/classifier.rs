//! Keyword-heuristic ticket classification.
//!
//! Derives category, priority, complexity, and a continuous urgency score
//! from the request text plus caller metadata. Fast and deterministic:
//! keyword tables only, no model calls.
//!
//! Tie-breaking is pinned explicitly rather than left to map iteration
//! order: escalation hits preempt every category; remaining category ties
//! scan technical -> billing -> account; a genuine priority tie resolves
//! to Medium and a complexity tie to Moderate.

use std::collections::HashSet;

use chrono::Utc;
use tracing::debug;

use triage_types::keywords::{
    category_keywords, complexity_keywords, contains_any, hit_count, priority_keywords,
    EMERGENCY_KEYWORDS, ESCALATION_KEYWORDS, HUMAN_HANDOFF_KEYWORDS, LEGAL_SECURITY_KEYWORDS,
    URGENCY_KEYWORDS,
};
use triage_types::{
    AgentRoute, TicketCategory, TicketComplexity, TicketContext, TicketPriority,
};

use crate::types::ClassificationResult;

/// Urgency contribution per urgency keyword present in the text.
const URGENCY_WORD_WEIGHT: f32 = 0.1;

/// Cap on the total keyword contribution to urgency.
const URGENCY_WORD_CAP: f32 = 0.3;

/// Urgency bonus for premium users.
const PREMIUM_URGENCY_BONUS: f32 = 0.1;

/// Urgency bonus for blocked accounts.
const BLOCKED_URGENCY_BONUS: f32 = 0.2;

/// Urgency bonus for repeat requesters.
const REPEAT_URGENCY_BONUS: f32 = 0.1;

/// Prior-ticket count above which the repeat bonus applies.
const REPEAT_TICKET_THRESHOLD: u32 = 5;

/// Urgency above this always escalates.
const URGENCY_ESCALATION_BAR: f32 = 0.8;

/// Ticket age (hours) after which priority is bumped toward High.
const STALE_TICKET_HOURS: f32 = 24.0;

/// Ticket age (hours) after which priority is bumped toward Urgent.
const VERY_STALE_TICKET_HOURS: f32 = 48.0;

/// Word count above which a ticket counts as complex.
const COMPLEX_WORD_COUNT: usize = 100;

/// Word count above which a ticket counts as moderate.
const MODERATE_WORD_COUNT: usize = 50;

/// More "and"s than this signal multiple bundled issues.
const MULTI_ISSUE_AND_LIMIT: usize = 2;

/// More commas than this signal multiple bundled issues.
const MULTI_ISSUE_COMMA_LIMIT: usize = 5;

/// Classifies support requests into category, priority, and complexity,
/// and recommends handling routes.
///
/// Stateless apart from the process-wide keyword tables; `classify` takes
/// `&self` and instances are freely shareable across threads.
#[derive(Debug, Default)]
pub struct TicketClassifier;

impl TicketClassifier {
    /// Create a classifier.
    pub fn new() -> Self {
        Self
    }

    /// Classify a request from its text and metadata.
    pub fn classify(&self, text: &str, ctx: &TicketContext) -> ClassificationResult {
        let content = text.to_lowercase();

        let category = self.determine_category(&content);
        let priority = self.determine_priority(&content, ctx);
        let complexity = self.determine_complexity(&content);
        let urgency_score = self.urgency_score(&content, priority, ctx);
        let requires_escalation = self.requires_escalation(&content, priority, urgency_score);

        debug!(
            category = category.as_str(),
            priority = priority.as_str(),
            complexity = complexity.as_str(),
            urgency_score,
            requires_escalation,
            "ticket classification"
        );

        let recommended_agents = recommended_agents(category, complexity, requires_escalation);
        debug_assert!(
            category != TicketCategory::Escalation
                || recommended_agents == [AgentRoute::Escalation]
        );

        ClassificationResult {
            category,
            priority,
            complexity,
            urgency_score,
            requires_escalation,
            estimated_resolution_time: resolution_time(category, complexity, priority),
            recommended_agents,
            routing_reason: routing_reason(category, priority, complexity, requires_escalation),
            matched_keywords: matched_keywords(&content, category, priority, complexity),
        }
    }

    /// Category from keyword presence counts; escalation hits preempt.
    fn determine_category(&self, content: &str) -> TicketCategory {
        if contains_any(content, ESCALATION_KEYWORDS) {
            return TicketCategory::Escalation;
        }

        // Fixed scan order doubles as the tie-break.
        let scored = [
            TicketCategory::Technical,
            TicketCategory::Billing,
            TicketCategory::Account,
        ]
        .map(|c| (c, hit_count(content, category_keywords(c))));

        let max = scored.iter().map(|(_, n)| *n).max().unwrap_or(0);
        if max == 0 {
            return TicketCategory::General;
        }

        scored
            .iter()
            .find(|(_, n)| *n == max)
            .map(|(c, _)| *c)
            .unwrap_or(TicketCategory::General)
    }

    /// Priority from keyword counts plus metadata adjustments.
    fn determine_priority(&self, content: &str, ctx: &TicketContext) -> TicketPriority {
        let mut scored = [
            TicketPriority::Urgent,
            TicketPriority::High,
            TicketPriority::Medium,
            TicketPriority::Low,
        ]
        .map(|p| (p, hit_count(content, priority_keywords(p))));

        let mut bump = |priority: TicketPriority| {
            for entry in scored.iter_mut() {
                if entry.0 == priority {
                    entry.1 += 1;
                }
            }
        };

        if ctx.is_premium() {
            bump(TicketPriority::High);
        }
        if ctx.user_blocked {
            bump(TicketPriority::Urgent);
        }
        if let Some(age) = ctx.age_hours(Utc::now()) {
            if age > STALE_TICKET_HOURS {
                bump(TicketPriority::High);
            }
            if age > VERY_STALE_TICKET_HOURS {
                bump(TicketPriority::Urgent);
            }
        }

        resolve_max(&scored, TicketPriority::Medium)
    }

    /// Complexity from keyword counts plus structural signals.
    fn determine_complexity(&self, content: &str) -> TicketComplexity {
        let mut scored = [
            TicketComplexity::Complex,
            TicketComplexity::Moderate,
            TicketComplexity::Simple,
        ]
        .map(|c| (c, hit_count(content, complexity_keywords(c))));

        let word_count = content.split_whitespace().count();
        let structural = if word_count > COMPLEX_WORD_COUNT {
            TicketComplexity::Complex
        } else if word_count > MODERATE_WORD_COUNT {
            TicketComplexity::Moderate
        } else {
            TicketComplexity::Simple
        };
        for entry in scored.iter_mut() {
            if entry.0 == structural {
                entry.1 += 1;
            }
        }

        // Many conjunctions or clauses usually mean bundled issues.
        if content.matches("and").count() > MULTI_ISSUE_AND_LIMIT
            || content.matches(',').count() > MULTI_ISSUE_COMMA_LIMIT
        {
            for entry in scored.iter_mut() {
                if entry.0 == TicketComplexity::Complex {
                    entry.1 += 1;
                }
            }
        }

        resolve_max(&scored, TicketComplexity::Moderate)
    }

    /// Continuous urgency in [0, 1]: priority base + keyword contribution
    /// + metadata bonuses, clamped.
    fn urgency_score(&self, content: &str, priority: TicketPriority, ctx: &TicketContext) -> f32 {
        let mut score = priority.urgency_base();

        let urgency_hits = hit_count(content, URGENCY_KEYWORDS);
        score += (URGENCY_WORD_WEIGHT * urgency_hits as f32).min(URGENCY_WORD_CAP);

        if ctx.is_premium() {
            score += PREMIUM_URGENCY_BONUS;
        }
        if ctx.user_blocked {
            score += BLOCKED_URGENCY_BONUS;
        }
        if ctx.previous_tickets > REPEAT_TICKET_THRESHOLD {
            score += REPEAT_URGENCY_BONUS;
        }

        score.min(1.0)
    }

    /// Whether a human must handle this, independent of category.
    fn requires_escalation(&self, content: &str, priority: TicketPriority, urgency: f32) -> bool {
        priority == TicketPriority::Urgent
            || urgency > URGENCY_ESCALATION_BAR
            || contains_any(content, HUMAN_HANDOFF_KEYWORDS)
            || contains_any(content, LEGAL_SECURITY_KEYWORDS)
            || contains_any(content, EMERGENCY_KEYWORDS)
    }
}

/// Winner of a scored bucket list: the unique maximum, or `fallback` when
/// the maximum is shared.
fn resolve_max<T: Copy + PartialEq>(scored: &[(T, usize)], fallback: T) -> T {
    let max = scored.iter().map(|(_, n)| *n).max().unwrap_or(0);
    if max == 0 {
        return fallback;
    }
    let mut winners = scored.iter().filter(|(_, n)| *n == max);
    let first = winners.next().map(|(v, _)| *v).unwrap_or(fallback);
    if winners.next().is_some() {
        fallback
    } else {
        first
    }
}

/// Base handling window in hours for a (category, complexity) pair.
fn base_resolution_hours(category: TicketCategory, complexity: TicketComplexity) -> (u32, u32) {
    use TicketCategory::{Escalation, Technical};
    use TicketComplexity::{Complex, Moderate, Simple};

    match (category, complexity) {
        (Technical | Escalation, Simple) => (2, 4),
        (Technical | Escalation, Moderate) => (4, 8),
        (Technical | Escalation, Complex) => (8, 24),
        (_, Simple) => (1, 2),
        (_, Moderate) => (2, 4),
        (_, Complex) => (4, 8),
    }
}

/// Handling window string. Urgent overrides the table outright; High
/// halves the upper bound.
fn resolution_time(
    category: TicketCategory,
    complexity: TicketComplexity,
    priority: TicketPriority,
) -> String {
    if priority == TicketPriority::Urgent {
        return "1-2 hours".to_string();
    }

    let (low, high) = base_resolution_hours(category, complexity);
    if priority == TicketPriority::High {
        format!("{low}-{} hours", high / 2)
    } else {
        format!("{low}-{high} hours")
    }
}

/// Routes for a ticket. Escalation collapses everything to the human
/// path; complex tickets fan out to category-specific helper routes.
fn recommended_agents(
    category: TicketCategory,
    complexity: TicketComplexity,
    requires_escalation: bool,
) -> Vec<AgentRoute> {
    if requires_escalation {
        return vec![AgentRoute::Escalation];
    }

    let mut routes = vec![match category {
        TicketCategory::Technical => AgentRoute::Technical,
        TicketCategory::Billing => AgentRoute::Billing,
        TicketCategory::Account => AgentRoute::Account,
        TicketCategory::General => AgentRoute::KnowledgeBase,
        TicketCategory::Escalation => AgentRoute::Escalation,
    }];

    if complexity == TicketComplexity::Complex {
        let extras: &[AgentRoute] = match category {
            TicketCategory::Technical => &[AgentRoute::KnowledgeBase, AgentRoute::Retrieval],
            TicketCategory::Billing => &[AgentRoute::Account, AgentRoute::KnowledgeBase],
            TicketCategory::Account => &[AgentRoute::KnowledgeBase, AgentRoute::Retrieval],
            _ => &[AgentRoute::Retrieval, AgentRoute::KnowledgeBase],
        };
        routes.extend_from_slice(extras);
    }

    let mut seen = HashSet::new();
    routes.retain(|route| seen.insert(*route));
    routes
}

/// Human-readable explanation of the routing choice.
fn routing_reason(
    category: TicketCategory,
    priority: TicketPriority,
    complexity: TicketComplexity,
    requires_escalation: bool,
) -> String {
    if requires_escalation {
        return format!("Escalation required due to {priority} priority and complex nature");
    }

    let mut reasons = vec![
        format!("Classified as {category} category"),
        format!("Priority level: {priority}"),
        format!("Complexity: {complexity}"),
    ];

    if complexity == TicketComplexity::Complex {
        reasons.push("Multiple agents recommended for comprehensive resolution".to_string());
    }

    reasons.join("; ")
}

/// Keywords from the winning tables that actually occur in the text.
fn matched_keywords(
    content: &str,
    category: TicketCategory,
    priority: TicketPriority,
    complexity: TicketComplexity,
) -> Vec<String> {
    let mut seen = HashSet::new();
    category_keywords(category)
        .iter()
        .chain(priority_keywords(priority))
        .chain(complexity_keywords(complexity))
        .filter(|kw| content.contains(*kw))
        .filter(|kw| seen.insert(**kw))
        .map(|kw| kw.to_string())
        .collect()
}
