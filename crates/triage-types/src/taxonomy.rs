//! Closed classification enums for the triage engine.
//!
//! Every classification axis is a closed tagged variant set rather than a
//! free-form string, so downstream consumers get exhaustiveness checking.
//! Enums serialize to their string tag at the system boundary only:
//! taxonomy levels as `snake_case`, agent routes as `SCREAMING_SNAKE_CASE`.

use serde::{Deserialize, Serialize};

/// Discrete confidence bucket derived from the top retrieval score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    /// Strong knowledge-base coverage; answer directly.
    High,
    /// Partial coverage; answer with previews and an escalation offer.
    Medium,
    /// Weak coverage; hedge and offer escalation.
    Low,
    /// No usable coverage; always escalates.
    None,
}

impl ConfidenceLevel {
    /// Returns the display name for this level.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "high",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::Low => "low",
            ConfidenceLevel::None => "none",
        }
    }
}

impl std::fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ticket category derived from keyword heuristics.
///
/// Escalation keywords preempt every other category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketCategory {
    /// Login, errors, app/site malfunctions.
    Technical,
    /// Payments, subscriptions, refunds.
    Billing,
    /// Profile, settings, data, privacy.
    Account,
    /// Anything without a category signal.
    General,
    /// Human-handoff, legal, security signals.
    Escalation,
}

impl TicketCategory {
    /// Returns the display name for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketCategory::Technical => "technical",
            TicketCategory::Billing => "billing",
            TicketCategory::Account => "account",
            TicketCategory::General => "general",
            TicketCategory::Escalation => "escalation",
        }
    }
}

impl std::fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ticket priority bucket.
///
/// Declaration order is severity order, so `Ord` comparisons read
/// naturally (`Urgent > High`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketPriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl TicketPriority {
    /// Returns the display name for this priority.
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketPriority::Low => "low",
            TicketPriority::Medium => "medium",
            TicketPriority::High => "high",
            TicketPriority::Urgent => "urgent",
        }
    }

    /// Base contribution of this priority to the urgency score.
    pub fn urgency_base(&self) -> f32 {
        match self {
            TicketPriority::Low => 0.1,
            TicketPriority::Medium => 0.3,
            TicketPriority::High => 0.6,
            TicketPriority::Urgent => 0.9,
        }
    }
}

impl std::fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ticket complexity bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketComplexity {
    Simple,
    Moderate,
    Complex,
}

impl TicketComplexity {
    /// Returns the display name for this complexity.
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketComplexity::Simple => "simple",
            TicketComplexity::Moderate => "moderate",
            TicketComplexity::Complex => "complex",
        }
    }
}

impl std::fmt::Display for TicketComplexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Handling route a ticket can be sent to.
///
/// Serialized in upper-case because route names are consumed verbatim by
/// the downstream dispatcher (`"ESCALATION"`, `"KNOWLEDGE_BASE"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgentRoute {
    /// Technical support specialist path.
    Technical,
    /// Billing specialist path.
    Billing,
    /// Account management path.
    Account,
    /// Knowledge-base answer path.
    KnowledgeBase,
    /// Corpus retrieval/search path.
    Retrieval,
    /// Human escalation path.
    Escalation,
}

impl AgentRoute {
    /// Returns the wire name for this route.
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentRoute::Technical => "TECHNICAL",
            AgentRoute::Billing => "BILLING",
            AgentRoute::Account => "ACCOUNT",
            AgentRoute::KnowledgeBase => "KNOWLEDGE_BASE",
            AgentRoute::Retrieval => "RETRIEVAL",
            AgentRoute::Escalation => "ESCALATION",
        }
    }
}

impl std::fmt::Display for AgentRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
