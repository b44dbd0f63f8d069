use super::super::domain::{
    EngagementProfile, QuestionRecord, ARCHETYPE_CLOUD_NATIVE, ARCHETYPE_ON_PREM_MONOLITH,
    ARCHETYPE_SELF_MANAGED, PRODUCT_ON_PREM_ENTERPRISE,
};

/// Second-pass filter removing questions that presuppose a cloud-native stack
/// when the target explicitly runs on-premise or self-managed infrastructure.
///
/// The general predicate language cannot express "cloud-only, unless the
/// product ships on-prem" because product type and archetype live in separate
/// conjunctive fields, so the relationship is encoded here instead.
pub(crate) fn apply_archetype_pivot<'a>(
    questions: Vec<&'a QuestionRecord>,
    profile: &EngagementProfile,
) -> Vec<&'a QuestionRecord> {
    if !pivot_active(profile) {
        return questions;
    }

    questions
        .into_iter()
        .filter(|question| !cloud_native_only(question))
        .collect()
}

fn pivot_active(profile: &EngagementProfile) -> bool {
    profile.product_type == PRODUCT_ON_PREM_ENTERPRISE
        || profile.tech_archetype == ARCHETYPE_SELF_MANAGED
        || profile.tech_archetype == ARCHETYPE_ON_PREM_MONOLITH
}

/// True when the archetype set is populated and names nothing but the
/// cloud-native identifier. Mixed sets and wildcards survive the pivot.
fn cloud_native_only(question: &QuestionRecord) -> bool {
    matches!(
        question.condition.tech_archetypes,
        Some([ARCHETYPE_CLOUD_NATIVE])
    )
}
