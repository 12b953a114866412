//! # triage-types
//!
//! Shared domain types for the ticket-triage engine.
//!
//! This crate defines the data model used throughout the system:
//! - Articles: immutable knowledge-base entries (title, body, tags)
//! - Ticket context: caller-supplied metadata accompanying a request
//! - Taxonomy: the closed classification enums (confidence level,
//!   category, priority, complexity, agent route)
//! - Keyword tables: process-wide read-only term lists
//! - Settings: layered configuration for the engine
//!
//! ## Usage
//!
//! ```rust
//! use triage_types::{Article, TicketContext, TicketCategory};
//!
//! let article = Article::new("kb-001", "Password Reset", "Steps...", "account, password");
//! let ctx = TicketContext::new().with_ticket_id("T-1001");
//! assert_eq!(TicketCategory::Billing.as_str(), "billing");
//! assert!(article.tag_list().any(|t| t == "password"));
//! # let _ = ctx;
//! ```

pub mod article;
pub mod context;
pub mod error;
pub mod keywords;
pub mod settings;
pub mod taxonomy;

// Re-export main types at crate root
pub use article::{parse_corpus, Article};
pub use settings::{RetrievalConfig, Settings};
pub use context::{TicketContext, UserType};
pub use error::TriageError;
pub use taxonomy::{
    AgentRoute, ConfidenceLevel, TicketCategory, TicketComplexity, TicketPriority,
};
