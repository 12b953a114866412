//! Caller-supplied ticket metadata.
//!
//! A `TicketContext` travels alongside the request text. Recognized keys
//! influence prioritization and escalation; unrecognized keys are accepted
//! into a flattened passthrough map and echoed back in result metadata,
//! never rejected.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account tier of the requesting user.
///
/// Unknown values degrade to `Standard` rather than failing
/// deserialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    Premium,
    #[default]
    #[serde(other)]
    Standard,
}

/// Metadata accompanying a support request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TicketContext {
    /// Caller-supplied request identifier, carried into the final decision.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_id: Option<String>,

    /// Account tier; premium users get a stricter escalation bar.
    #[serde(default)]
    pub user_type: UserType,

    /// Blocked accounts always escalate.
    #[serde(default)]
    pub user_blocked: bool,

    /// When the ticket was opened; age feeds priority adjustments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Number of earlier tickets from the same user.
    #[serde(default)]
    pub previous_tickets: u32,

    /// Unrecognized keys, preserved for echo but ignored by the engine.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl TicketContext {
    /// Create an empty context (standard user, nothing flagged).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the caller request identifier.
    pub fn with_ticket_id(mut self, id: impl Into<String>) -> Self {
        self.ticket_id = Some(id.into());
        self
    }

    /// Builder: set the account tier.
    pub fn with_user_type(mut self, user_type: UserType) -> Self {
        self.user_type = user_type;
        self
    }

    /// Builder: mark the account blocked.
    pub fn with_blocked(mut self, blocked: bool) -> Self {
        self.user_blocked = blocked;
        self
    }

    /// Builder: set the ticket creation time.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Builder: set the prior-ticket count.
    pub fn with_previous_tickets(mut self, count: u32) -> Self {
        self.previous_tickets = count;
        self
    }

    /// Whether the requesting user is on the premium tier.
    pub fn is_premium(&self) -> bool {
        self.user_type == UserType::Premium
    }

    /// Ticket age in hours at `now`, if a creation time is known.
    pub fn age_hours(&self, now: DateTime<Utc>) -> Option<f32> {
        self.created_at
            .map(|created| (now - created).num_seconds() as f32 / 3600.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_defaults() {
        let ctx = TicketContext::new();
        assert_eq!(ctx.user_type, UserType::Standard);
        assert!(!ctx.user_blocked);
        assert_eq!(ctx.previous_tickets, 0);
        assert!(ctx.ticket_id.is_none());
        assert!(ctx.created_at.is_none());
    }

    #[test]
    fn test_unknown_user_type_degrades_to_standard() {
        let ctx: TicketContext = serde_json::from_str(r#"{"user_type": "vip"}"#).unwrap();
        assert_eq!(ctx.user_type, UserType::Standard);

        let ctx: TicketContext = serde_json::from_str(r#"{"user_type": "premium"}"#).unwrap();
        assert_eq!(ctx.user_type, UserType::Premium);
    }

    #[test]
    fn test_unrecognized_keys_preserved_not_rejected() {
        let ctx: TicketContext =
            serde_json::from_str(r#"{"user_blocked": true, "channel": "email", "retries": 2}"#)
                .unwrap();
        assert!(ctx.user_blocked);
        assert_eq!(ctx.extra["channel"], "email");
        assert_eq!(ctx.extra["retries"], 2);
    }

    #[test]
    fn test_age_hours() {
        let now = Utc::now();
        let ctx = TicketContext::new().with_created_at(now - Duration::hours(30));
        let age = ctx.age_hours(now).unwrap();
        assert!((age - 30.0).abs() < 0.01);

        assert!(TicketContext::new().age_hours(now).is_none());
    }
}
