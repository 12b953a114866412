//! The final routing decision.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use triage_retrieval::RetrievalResult;
use triage_routing::ClassificationResult;

/// Merged outcome of one triage decision.
///
/// Created once per request and immutable thereafter; this is the only
/// entity handed downstream for persistence and audit. Retrieval-origin
/// and classification-origin fields stay individually inspectable as
/// nested records rather than being flattened into prose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingDecision {
    /// Caller-supplied request identifier ("unknown" when absent).
    pub ticket_id: String,

    /// Final verdict: escalate when either signal says so.
    pub escalate: bool,

    /// The classifier's independent view of the request.
    pub classification: ClassificationResult,

    /// The retriever's independent view of the request.
    pub retrieval: RetrievalResult,

    /// When the decision was made.
    pub decided_at: DateTime<Utc>,
}

impl RoutingDecision {
    /// Why the decision came out the way it did, one line per signal.
    pub fn summary(&self) -> String {
        format!(
            "escalate={} | classifier: {} | retriever: {}",
            self.escalate, self.classification.routing_reason, self.retrieval.escalation_reason
        )
    }
}
