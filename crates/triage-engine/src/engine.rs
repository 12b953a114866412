//! The triage engine: composition of retrieval and classification.

use chrono::Utc;
use tracing::{debug, info};

use triage_retrieval::{KnowledgeRetriever, RetrievalResult};
use triage_routing::{ClassificationResult, TicketClassifier};
use triage_types::{Article, RetrievalConfig, TicketContext};

use crate::decision::RoutingDecision;

/// Ticket id used when the caller supplies none.
const UNKNOWN_TICKET_ID: &str = "unknown";

/// Scores requests against the knowledge corpus and classifies them,
/// then fuses both signals into a single escalate-or-resolve decision.
///
/// The two signals are computed independently; the policy itself is just
/// a boolean OR plus a field merge. Construction loads the corpus once;
/// every decision afterwards is a pure `&self` computation.
pub struct TriageEngine {
    retriever: KnowledgeRetriever,
    classifier: TicketClassifier,
}

impl TriageEngine {
    /// Build an engine over a knowledge corpus with default thresholds.
    pub fn new(corpus: Vec<Article>) -> Self {
        Self::with_config(corpus, RetrievalConfig::default())
    }

    /// Build an engine with custom retrieval thresholds.
    pub fn with_config(corpus: Vec<Article>, config: RetrievalConfig) -> Self {
        info!(corpus_size = corpus.len(), "triage engine initialized");
        Self {
            retriever: KnowledgeRetriever::with_config(corpus, config),
            classifier: TicketClassifier::new(),
        }
    }

    /// The underlying retriever.
    pub fn retriever(&self) -> &KnowledgeRetriever {
        &self.retriever
    }

    /// The underlying classifier.
    pub fn classifier(&self) -> &TicketClassifier {
        &self.classifier
    }

    /// Retrieve knowledge for a query without classifying it.
    pub fn retrieve(&self, query: &str, ctx: &TicketContext) -> RetrievalResult {
        self.retriever.retrieve(query, ctx)
    }

    /// Classify a request without touching the corpus.
    pub fn classify(&self, text: &str, ctx: &TicketContext) -> ClassificationResult {
        self.classifier.classify(text, ctx)
    }

    /// Make the full routing decision for one request.
    pub fn decide(&self, query: &str, ctx: &TicketContext) -> RoutingDecision {
        let classification = self.classifier.classify(query, ctx);
        let retrieval = self.retriever.retrieve(query, ctx);

        let escalate = classification.requires_escalation || retrieval.escalate;

        debug!(
            ticket_id = ctx.ticket_id.as_deref().unwrap_or(UNKNOWN_TICKET_ID),
            escalate,
            category = classification.category.as_str(),
            level = retrieval.confidence_level.as_str(),
            "routing decision"
        );

        RoutingDecision {
            ticket_id: ctx
                .ticket_id
                .clone()
                .unwrap_or_else(|| UNKNOWN_TICKET_ID.to_string()),
            escalate,
            classification,
            retrieval,
            decided_at: Utc::now(),
        }
    }
}
