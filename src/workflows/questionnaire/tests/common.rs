use super::super::domain::{
    ConditionPredicate, EngagementProfile, Priority, QuestionRecord, Topic,
};

/// The carve-out scenario used across selection tests: EU-based, scaling
/// B2B SaaS target on a hybrid-legacy stack.
pub(super) fn carve_out_profile() -> EngagementProfile {
    EngagementProfile {
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

/// High revenue, comparatively small team, mature stage: the maturity
/// override trigger.
pub(super) fn lean_mature_profile() -> EngagementProfile {
    EngagementProfile {
        transaction_type: "acquisition".to_string(),
        product_type: "b2b-saas".to_string(),
        tech_archetype: "modern-cloud-native".to_string(),
        headcount: "51-200".to_string(),
        revenue_range: "25-100m".to_string(),
        growth_stage: "mature".to_string(),
        company_age: "10yr+".to_string(),
        geographies: vec!["us".to_string()],
        business_model: "subscription".to_string(),
        scale_intensity: "moderate".to_string(),
        transformation_state: "stable".to_string(),
        data_sensitivity: "low".to_string(),
        operating_model: "in-house".to_string(),
    }
}

pub(super) fn question(id: &'static str, topic: Topic, priority: Priority) -> QuestionRecord {
    QuestionRecord {
        id,
        topic,
        priority,
        prompt: "prompt",
        rationale: "rationale",
        condition: ConditionPredicate::any(),
        strategic: None,
    }
}
