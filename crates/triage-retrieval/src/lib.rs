//! # triage-retrieval
//!
//! Knowledge retrieval for the ticket-triage engine.
//!
//! Given a free-text request and an immutable article corpus, this crate
//! scores lexical overlap, ranks the corpus, bands the best confidence
//! into a discrete level, applies ordered escalation rules, and renders a
//! level-appropriate answer skeleton.
//!
//! ## Core Concepts
//!
//! - **Relevance**: weighted token overlap across title/body/tags
//! - **Confidence**: relevance adjusted by length ratio and tag matches
//! - **Confidence Level**: High/Medium/Low/None band of the top confidence
//! - **Escalation**: ordered rules deciding when a human must take over
//!
//! ## Usage
//!
//! ```rust
//! use triage_retrieval::KnowledgeRetriever;
//! use triage_types::{Article, TicketContext};
//!
//! let corpus = vec![Article::new(
//!     "kb-1",
//!     "How Do I Reserve an Event",
//!     "Open the events page, pick a date, and confirm.",
//!     "reserve, events",
//! )];
//! let retriever = KnowledgeRetriever::new(corpus);
//! let result = retriever.retrieve("How do I reserve an event?", &TicketContext::new());
//! assert!(!result.response.is_empty());
//! ```
//!
//! ## Modules
//!
//! - [`scorer`]: relevance and confidence estimators
//! - [`retriever`]: corpus scoring loop, banding, escalation rules
//! - [`response`]: confidence-level-specific response rendering
//! - [`stats`]: batch statistics reduction
//! - [`types`]: result records

pub mod response;
pub mod retriever;
pub mod scorer;
pub mod stats;
pub mod types;

// Re-export main types at crate root
pub use retriever::KnowledgeRetriever;
pub use stats::{summarize_retrievals, RetrievalStatistics};
pub use types::{RetrievalMetadata, RetrievalResult, ScoredArticle};
