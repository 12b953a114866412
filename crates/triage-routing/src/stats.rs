//! Batch statistics over classification outcomes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use triage_types::{AgentRoute, TicketCategory, TicketComplexity, TicketPriority};

use crate::types::ClassificationResult;

/// Aggregates over a batch of classifications.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutingStatistics {
    /// Batch size.
    pub total_tickets: usize,

    /// Count of tickets per category.
    pub category_distribution: BTreeMap<TicketCategory, usize>,

    /// Count of tickets per priority.
    pub priority_distribution: BTreeMap<TicketPriority, usize>,

    /// Count of tickets per complexity.
    pub complexity_distribution: BTreeMap<TicketComplexity, usize>,

    /// Fraction of the batch requiring escalation.
    pub escalation_rate: f32,

    /// Mean urgency score across the batch.
    pub average_urgency_score: f32,

    /// How many tickets each route was recommended for.
    pub agent_workload: BTreeMap<AgentRoute, usize>,
}

/// Reduce a batch of classification results into summary statistics.
///
/// Pure over the input slice; an empty batch yields the all-zero struct.
pub fn summarize_classifications(results: &[ClassificationResult]) -> RoutingStatistics {
    let mut stats = RoutingStatistics {
        total_tickets: results.len(),
        ..RoutingStatistics::default()
    };

    if results.is_empty() {
        return stats;
    }

    let mut escalation_count = 0usize;
    let mut total_urgency = 0.0f32;

    for result in results {
        *stats
            .category_distribution
            .entry(result.category)
            .or_insert(0) += 1;
        *stats
            .priority_distribution
            .entry(result.priority)
            .or_insert(0) += 1;
        *stats
            .complexity_distribution
            .entry(result.complexity)
            .or_insert(0) += 1;

        if result.requires_escalation {
            escalation_count += 1;
        }
        total_urgency += result.urgency_score;

        for route in &result.recommended_agents {
            *stats.agent_workload.entry(*route).or_insert(0) += 1;
        }
    }

    let n = results.len() as f32;
    stats.escalation_rate = escalation_count as f32 / n;
    stats.average_urgency_score = total_urgency / n;

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::TicketClassifier;
    use triage_types::TicketContext;

    #[test]
    fn test_empty_batch_is_all_zero() {
        let stats = summarize_classifications(&[]);
        assert_eq!(stats.total_tickets, 0);
        assert_eq!(stats.escalation_rate, 0.0);
        assert_eq!(stats.average_urgency_score, 0.0);
        assert!(stats.category_distribution.is_empty());
        assert!(stats.agent_workload.is_empty());
    }

    #[test]
    fn test_distributions_and_workload() {
        let classifier = TicketClassifier::new();
        let ctx = TicketContext::new();
        let results = vec![
            classifier.classify("the app shows an error on login", &ctx),
            classifier.classify("refund my subscription payment", &ctx),
            classifier.classify("I need a human agent immediately", &ctx),
        ];

        let stats = summarize_classifications(&results);
        assert_eq!(stats.total_tickets, 3);
        assert_eq!(
            stats.category_distribution.get(&TicketCategory::Technical),
            Some(&1)
        );
        assert_eq!(
            stats.category_distribution.get(&TicketCategory::Billing),
            Some(&1)
        );
        assert_eq!(
            stats.category_distribution.get(&TicketCategory::Escalation),
            Some(&1)
        );
        assert!((stats.escalation_rate - 1.0 / 3.0).abs() < 1e-6);
        assert_eq!(stats.agent_workload.get(&AgentRoute::Escalation), Some(&1));
        assert!(stats.average_urgency_score > 0.0);
    }
}
