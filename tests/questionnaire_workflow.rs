use diligence_engine::workflows::questionnaire::{
    normalize, sync_multi_region, ConditionPredicate, DiligenceCatalog, Priority,
    ProfileSubmission, QuestionRecord, QuestionnaireEngine, SelectionConfig, Topic,
};

fn carve_out_submission() -> ProfileSubmission {
    ProfileSubmission {
        transaction_type: "carve-out".to_string(),
        product_type: "b2b-saas".to_string(),
        tech_archetype: "hybrid-legacy".to_string(),
        headcount: "51-200".to_string(),
        revenue_range: "5-25m".to_string(),
        growth_stage: "scaling".to_string(),
        company_age: "5-10yr".to_string(),
        geographies: vec!["eu".to_string()],
        business_model: "subscription".to_string(),
        scale_intensity: "moderate".to_string(),
        transformation_state: "stable".to_string(),
        data_sensitivity: "pii".to_string(),
        operating_model: "in-house".to_string(),
    }
}

#[test]
fn carve_out_engagement_produces_a_balanced_questionnaire() {
    let profile = normalize(carve_out_submission()).expect("submission is well formed");
    let engine = QuestionnaireEngine::standard();
    let questionnaire = engine.generate(&profile);

    let total = questionnaire.metadata.total_questions;
    assert!(
        (15..=20).contains(&total),
        "expected a bounded selection, got {total}"
    );

    let transaction = questionnaire
        .topics
        .iter()
        .find(|group| group.topic == Topic::TransactionReadiness)
        .expect("carve-out deals surface separation questions");
    assert!(transaction
        .questions
        .iter()
        .any(|question| question.id == "txn-separation-scope"));

    let annotation_ids: Vec<&str> = questionnaire
        .risk_annotations
        .iter()
        .map(|annotation| annotation.id)
        .collect();
    assert!(annotation_ids.contains(&"technical-debt-accumulation"));
    assert!(annotation_ids.contains(&"gdpr-exposure"));
    assert!(
        !annotation_ids.contains(&"us-state-privacy-patchwork"),
        "US-only guidance must not surface for an EU-only footprint"
    );
}

#[test]
fn repeated_generation_is_stable() {
    let profile = normalize(carve_out_submission()).expect("submission is well formed");
    let engine = QuestionnaireEngine::standard();

    let first = engine.generate(&profile);
    let second = engine.generate(&profile);

    assert_eq!(first.topics, second.topics);
    assert_eq!(first.risk_annotations, second.risk_annotations);
}

#[test]
fn intake_keeps_the_multi_region_marker_in_sync() {
    let mut submission = carve_out_submission();
    submission.geographies = vec!["us".to_string(), "eu".to_string()];
    let profile = normalize(submission).expect("submission is well formed");
    assert!(profile
        .geographies
        .iter()
        .any(|geography| geography == "multi-region"));

    let mut stale = vec!["eu".to_string(), "multi-region".to_string()];
    sync_multi_region(&mut stale);
    assert_eq!(stale, vec!["eu".to_string()]);
}

#[test]
fn intake_rejects_an_empty_geography_set() {
    let mut submission = carve_out_submission();
    submission.geographies.clear();
    assert!(normalize(submission).is_err());
}

#[test]
fn self_hosted_targets_never_see_cloud_only_questions() {
    let mut submission = carve_out_submission();
    submission.product_type = "on-prem-enterprise".to_string();
    submission.tech_archetype = "modern-cloud-native".to_string();

    let profile = normalize(submission).expect("submission is well formed");
    let engine = QuestionnaireEngine::standard();
    let questionnaire = engine.generate(&profile);

    for group in &questionnaire.topics {
        for question in &group.questions {
            assert_ne!(
                question.id, "arch-cloud-cost-governance",
                "cloud-only questions must be pivoted out for on-prem targets"
            );
            assert_ne!(question.id, "arch-managed-services-inventory");
            assert_ne!(question.id, "ops-cloud-resilience-zones");
        }
    }
}

#[test]
fn mixed_archetype_questions_survive_the_pivot() {
    // Substitute table small enough that balancing cannot hide the pivot.
    let question = |id: &'static str, archetypes: Option<&'static [&'static str]>| QuestionRecord {
        id,
        topic: Topic::ArchitectureAndStack,
        priority: Priority::Medium,
        prompt: "prompt",
        rationale: "rationale",
        condition: ConditionPredicate {
            tech_archetypes: archetypes,
            ..ConditionPredicate::any()
        },
        strategic: None,
    };
    let catalog = DiligenceCatalog::new(
        vec![
            question("cloud-only", Some(&["modern-cloud-native"])),
            question("mixed", Some(&["modern-cloud-native", "hybrid-legacy"])),
            question("wildcard", None),
        ],
        Vec::new(),
    );
    let engine = QuestionnaireEngine::new(catalog, SelectionConfig::default());

    let mut submission = carve_out_submission();
    submission.product_type = "on-prem-enterprise".to_string();
    submission.tech_archetype = "modern-cloud-native".to_string();
    let profile = normalize(submission).expect("submission is well formed");

    let questionnaire = engine.generate(&profile);
    let ids: Vec<&str> = questionnaire
        .topics
        .iter()
        .flat_map(|group| group.questions.iter().map(|question| question.id))
        .collect();
    assert_eq!(ids, vec!["mixed", "wildcard"]);
}
