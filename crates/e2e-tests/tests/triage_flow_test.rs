//! Full-flow scenarios through the triage engine.

use e2e_tests::{covered_query, sample_corpus, uncovered_query, weak_corpus};
use triage_engine::TriageEngine;
use triage_types::{
    AgentRoute, ConfidenceLevel, TicketCategory, TicketComplexity, TicketContext, TicketPriority,
    UserType,
};

#[test]
fn covered_query_resolves_without_escalation() {
    let engine = TriageEngine::new(sample_corpus());
    let decision = engine.decide(covered_query(), &TicketContext::new());

    assert!(matches!(
        decision.retrieval.confidence_level,
        ConfidenceLevel::High | ConfidenceLevel::Medium
    ));
    assert!(!decision.escalate);
    assert_eq!(decision.retrieval.articles[0].article.id, "kb-001");
    assert!(decision.retrieval.response.contains("How Do I Reserve an Event"));
}

#[test]
fn uncovered_query_escalates_with_none_band() {
    let engine = TriageEngine::new(sample_corpus());
    let decision = engine.decide(uncovered_query(), &TicketContext::new());

    assert_eq!(decision.retrieval.confidence_level, ConfidenceLevel::None);
    assert!(decision.escalate);
    assert!(decision
        .retrieval
        .escalation_reason
        .contains("No relevant knowledge base articles found"));
    assert!(decision.retrieval.response.contains("human support team"));
}

#[test]
fn urgent_human_request_routes_to_escalation_regardless_of_corpus() {
    let query = "URGENT: I need a human agent now!";

    // Same outcome with a rich corpus and with none at all.
    for corpus in [sample_corpus(), vec![]] {
        let engine = TriageEngine::new(corpus);
        let decision = engine.decide(query, &TicketContext::new());

        assert_eq!(decision.classification.priority, TicketPriority::Urgent);
        assert!(decision.classification.requires_escalation);
        assert_eq!(
            decision.classification.recommended_agents,
            vec![AgentRoute::Escalation]
        );
        assert!(decision.escalate);
    }
}

#[test]
fn blocked_user_escalates_even_with_high_confidence() {
    let engine = TriageEngine::new(sample_corpus());
    let ctx = TicketContext::new().with_blocked(true);
    let decision = engine.decide(covered_query(), &ctx);

    assert!(matches!(
        decision.retrieval.confidence_level,
        ConfidenceLevel::High | ConfidenceLevel::Medium
    ));
    assert!(decision.retrieval.escalate);
    assert_eq!(decision.retrieval.escalation_reason, "User account is blocked");
}

#[test]
fn long_low_signal_text_is_complex_and_does_not_panic() {
    let engine = TriageEngine::new(sample_corpus());
    let filler = "x ".repeat(1000);
    let decision = engine.decide(&filler, &TicketContext::new());

    assert_eq!(
        decision.classification.complexity,
        TicketComplexity::Complex
    );
    assert!(!decision.retrieval.response.is_empty());
}

#[test]
fn premium_tier_tightens_the_low_band() {
    let engine = TriageEngine::new(weak_corpus());
    let query = "password reset for my account";

    let standard = engine.decide(query, &TicketContext::new());
    assert_eq!(standard.retrieval.confidence_level, ConfidenceLevel::Low);
    assert!(!standard.retrieval.escalate);

    let premium_ctx = TicketContext::new().with_user_type(UserType::Premium);
    let premium = engine.decide(query, &premium_ctx);
    assert_eq!(premium.retrieval.confidence_level, ConfidenceLevel::Low);
    assert!(premium.retrieval.escalate);
    assert!(premium
        .retrieval
        .escalation_reason
        .contains("Premium user"));
}

#[test]
fn category_preemption_survives_keyword_density() {
    let engine = TriageEngine::new(sample_corpus());
    // Four billing keywords against a single escalation keyword: the
    // escalation hit still wins the category outright.
    let decision = engine.decide(
        "My subscription payment charge needs a refund, this is fraud",
        &TicketContext::new(),
    );

    assert_eq!(
        decision.classification.category,
        TicketCategory::Escalation
    );
    assert_eq!(
        decision.classification.recommended_agents,
        vec![AgentRoute::Escalation]
    );
}

#[test]
fn decision_keeps_provenance_of_both_signals() {
    let engine = TriageEngine::new(sample_corpus());
    let ctx = TicketContext::new().with_ticket_id("T-7");
    let decision = engine.decide("refund for my subscription", &ctx);

    // Classification-origin and retrieval-origin fields remain separately
    // inspectable on the merged record.
    assert_eq!(decision.ticket_id, "T-7");
    assert_eq!(decision.classification.category, TicketCategory::Billing);
    assert_eq!(decision.retrieval.metadata.total_articles_searched, 4);
    assert_eq!(
        decision.escalate,
        decision.classification.requires_escalation || decision.retrieval.escalate
    );
}
