use std::collections::HashSet;

use super::super::brackets::{COMPANY_AGE_BRACKETS, HEADCOUNT_BRACKETS, REVENUE_BRACKETS};
use super::super::catalog::DiligenceCatalog;
use super::super::domain::{
    ConditionPredicate, Topic, BUSINESS_MODELS, DATA_SENSITIVITIES, GEOGRAPHIES, GROWTH_STAGES,
    MANUAL_OPERATIONS_MASKING_ID, OPERATING_MODELS, PRODUCT_TYPES, SCALE_INTENSITIES,
    TECH_ARCHETYPES, TRANSACTION_TYPES, TRANSFORMATION_STATES,
};
use super::super::selection::QuestionnaireEngine;
use super::common::{carve_out_profile, lean_mature_profile};

#[test]
fn generation_is_deterministic_modulo_timestamp() {
    let engine = QuestionnaireEngine::standard();
    let profile = carve_out_profile();

    let first = engine.generate(&profile);
    let second = engine.generate(&profile);

    assert_eq!(first.topics, second.topics);
    assert_eq!(first.risk_annotations, second.risk_annotations);
    assert_eq!(
        first.metadata.total_questions,
        second.metadata.total_questions
    );
}

#[test]
fn output_is_bounded_and_topic_balanced() {
    let engine = QuestionnaireEngine::standard();
    let questionnaire = engine.generate(&carve_out_profile());

    let config = engine.config();
    let total = questionnaire.metadata.total_questions;
    assert!(total >= config.min_questions && total <= config.max_questions);

    // Every populated topic keeps its reserved minimum.
    for group in &questionnaire.topics {
        assert!(group.questions.len() >= config.per_topic_reservation);
    }
}

#[test]
fn topics_follow_declaration_order_and_omit_empty_tracks() {
    let engine = QuestionnaireEngine::standard();
    let questionnaire = engine.generate(&carve_out_profile());

    let declaration = Topic::ordered();
    let positions: Vec<usize> = questionnaire
        .topics
        .iter()
        .map(|group| {
            declaration
                .iter()
                .position(|topic| *topic == group.topic)
                .expect("topic is declared")
        })
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);

    for group in &questionnaire.topics {
        assert!(!group.questions.is_empty());
    }
}

#[test]
fn carve_out_scenario_selects_the_expected_content() {
    let engine = QuestionnaireEngine::standard();
    let questionnaire = engine.generate(&carve_out_profile());

    let transaction = questionnaire
        .topics
        .iter()
        .find(|group| group.topic == Topic::TransactionReadiness)
        .expect("carve-out profiles surface the transaction track");
    assert!(!transaction.questions.is_empty());

    let annotation_ids: Vec<&str> = questionnaire
        .risk_annotations
        .iter()
        .map(|annotation| annotation.id)
        .collect();
    assert!(annotation_ids.contains(&"technical-debt-accumulation"));
    assert!(annotation_ids.contains(&"gdpr-exposure"));
    assert!(!annotation_ids.contains(&"us-state-privacy-patchwork"));
    assert!(!annotation_ids.contains(&"ccpa-scope-creep"));
}

#[test]
fn annotations_are_sorted_by_severity() {
    let engine = QuestionnaireEngine::standard();
    let questionnaire = engine.generate(&carve_out_profile());

    let ranks: Vec<u8> = questionnaire
        .risk_annotations
        .iter()
        .map(|annotation| annotation.severity.rank())
        .collect();
    let mut sorted = ranks.clone();
    sorted.sort_unstable();
    assert_eq!(ranks, sorted);
}

#[test]
fn metadata_echoes_the_profile() {
    let engine = QuestionnaireEngine::standard();
    let profile = carve_out_profile();
    let questionnaire = engine.generate(&profile);
    assert_eq!(questionnaire.metadata.profile, profile);
}

#[test]
fn lean_mature_profile_receives_exactly_one_masking_annotation() {
    let engine = QuestionnaireEngine::standard();
    let profile = lean_mature_profile();

    for questionnaire in [engine.generate(&profile), engine.generate(&profile)] {
        let hits = questionnaire
            .risk_annotations
            .iter()
            .filter(|annotation| annotation.id == MANUAL_OPERATIONS_MASKING_ID)
            .count();
        assert_eq!(hits, 1);
    }
}

fn assert_known(set: Option<&[&str]>, domain: &[&str], owner: &str) {
    if let Some(values) = set {
        for value in values {
            assert!(
                domain.contains(value),
                "{owner} references unknown identifier `{value}`"
            );
        }
    }
}

fn assert_predicate_integrity(predicate: &ConditionPredicate, owner: &str) {
    assert_known(predicate.transaction_types, TRANSACTION_TYPES, owner);
    assert_known(predicate.product_types, PRODUCT_TYPES, owner);
    assert_known(predicate.tech_archetypes, TECH_ARCHETYPES, owner);
    assert_known(predicate.growth_stages, GROWTH_STAGES, owner);
    assert_known(predicate.geographies, GEOGRAPHIES, owner);
    assert_known(predicate.business_models, BUSINESS_MODELS, owner);
    assert_known(predicate.scale_intensities, SCALE_INTENSITIES, owner);
    assert_known(predicate.transformation_states, TRANSFORMATION_STATES, owner);
    assert_known(predicate.data_sensitivities, DATA_SENSITIVITIES, owner);
    assert_known(predicate.operating_models, OPERATING_MODELS, owner);
    assert_known(
        predicate.exclude_transaction_types,
        TRANSACTION_TYPES,
        owner,
    );

    if let Some(minimum) = predicate.headcount_min {
        assert!(HEADCOUNT_BRACKETS.contains(&minimum), "{owner}: {minimum}");
    }
    if let Some(minimum) = predicate.revenue_min {
        assert!(REVENUE_BRACKETS.contains(&minimum), "{owner}: {minimum}");
    }
    if let Some(minimum) = predicate.company_age_min {
        assert!(COMPANY_AGE_BRACKETS.contains(&minimum), "{owner}: {minimum}");
    }
}

// Data-integrity property over the shipped catalog: every identifier a
// predicate references must exist in its input-option domain, and record ids
// must be unique. The reserved masking id stays out of the authored table.
#[test]
fn standard_catalog_is_internally_consistent() {
    let catalog = DiligenceCatalog::standard();

    let mut question_ids = HashSet::new();
    for question in catalog.questions() {
        assert!(question_ids.insert(question.id), "dup id {}", question.id);
        assert_predicate_integrity(&question.condition, question.id);
    }

    let mut annotation_ids = HashSet::new();
    for annotation in catalog.annotations() {
        assert!(
            annotation_ids.insert(annotation.id),
            "dup id {}",
            annotation.id
        );
        assert_ne!(annotation.id, MANUAL_OPERATIONS_MASKING_ID);
        assert_predicate_integrity(&annotation.condition, annotation.id);
    }

    assert!(catalog.questions().len() >= 60);
    assert!(catalog.annotations().len() >= 20);
}
