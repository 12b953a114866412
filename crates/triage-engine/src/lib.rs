//! # triage-engine
//!
//! The escalation policy for ticket triage: the single composition point
//! over knowledge retrieval and request classification.
//!
//! Both leaf signals are computed independently from the same request;
//! the policy itself adds nothing beyond a boolean OR and a field merge.
//! The resulting [`RoutingDecision`] is the one artifact the surrounding
//! workflow persists and acts on.
//!
//! ## Usage
//!
//! ```rust
//! use triage_engine::TriageEngine;
//! use triage_types::{Article, TicketContext};
//!
//! let corpus = vec![Article::new(
//!     "kb-1",
//!     "How Do I Reserve an Event",
//!     "Open the events page, pick a date, and confirm.",
//!     "reserve, events",
//! )];
//! let engine = TriageEngine::new(corpus);
//! let ctx = TicketContext::new().with_ticket_id("T-1001");
//! let decision = engine.decide("How do I reserve an event?", &ctx);
//! assert_eq!(decision.ticket_id, "T-1001");
//! ```
//!
//! ## Modules
//!
//! - [`engine`]: the `TriageEngine` facade
//! - [`decision`]: the merged `RoutingDecision` record

pub mod decision;
pub mod engine;

// Re-export main types at crate root
pub use decision::RoutingDecision;
pub use engine::TriageEngine;
