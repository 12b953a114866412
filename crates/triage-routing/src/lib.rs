//! # triage-routing
//!
//! Request classification for the ticket-triage engine.
//!
//! Independently of knowledge retrieval, this crate derives a
//! category/priority/complexity triple, a continuous urgency score, and a
//! set of recommended handling routes from the request text and caller
//! metadata, using fixed keyword tables.
//!
//! ## Usage
//!
//! ```rust
//! use triage_routing::TicketClassifier;
//! use triage_types::{AgentRoute, TicketContext};
//!
//! let classifier = TicketClassifier::new();
//! let result = classifier.classify("I need a human agent now!", &TicketContext::new());
//! assert!(result.requires_escalation);
//! assert_eq!(result.recommended_agents, vec![AgentRoute::Escalation]);
//! ```
//!
//! ## Modules
//!
//! - [`classifier`]: category/priority/complexity heuristics and routing
//! - [`stats`]: batch statistics reduction
//! - [`types`]: result records

pub mod classifier;
pub mod stats;
pub mod types;

// Re-export main types at crate root
pub use classifier::TicketClassifier;
pub use stats::{summarize_classifications, RoutingStatistics};
pub use types::ClassificationResult;
