//! Result types for ticket classification.

use serde::{Deserialize, Serialize};

use triage_types::{AgentRoute, TicketCategory, TicketComplexity, TicketPriority};

/// Full classification of one support request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Topic axis of the request.
    pub category: TicketCategory,

    /// Severity axis after keyword and metadata adjustments.
    pub priority: TicketPriority,

    /// Effort axis from keywords and structural signals.
    pub complexity: TicketComplexity,

    /// Continuous urgency measure in [0, 1].
    pub urgency_score: f32,

    /// Whether a human must handle this request.
    pub requires_escalation: bool,

    /// Expected handling window, e.g. "2-4 hours".
    pub estimated_resolution_time: String,

    /// Handling routes, deduplicated, in recommendation order. Always
    /// exactly `[Escalation]` when escalation is required.
    pub recommended_agents: Vec<AgentRoute>,

    /// Human-readable explanation of the routing choice.
    pub routing_reason: String,

    /// Keywords that influenced the classification.
    pub matched_keywords: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_string_tags() {
        let result = ClassificationResult {
            category: TicketCategory::Escalation,
            priority: TicketPriority::Urgent,
            complexity: TicketComplexity::Simple,
            urgency_score: 0.9,
            requires_escalation: true,
            estimated_resolution_time: "1-2 hours".to_string(),
            recommended_agents: vec![AgentRoute::Escalation],
            routing_reason: "test".to_string(),
            matched_keywords: vec!["urgent".to_string()],
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["category"], "escalation");
        assert_eq!(value["priority"], "urgent");
        assert_eq!(value["recommended_agents"][0], "ESCALATION");

        let restored: ClassificationResult = serde_json::from_value(value).unwrap();
        assert_eq!(restored, result);
    }
}
