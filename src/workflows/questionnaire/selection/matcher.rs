use super::super::brackets::{
    meets_minimum, COMPANY_AGE_BRACKETS, HEADCOUNT_BRACKETS, REVENUE_BRACKETS,
};
use super::super::domain::{ConditionPredicate, EngagementProfile};

/// Evaluates one record predicate against one profile.
///
/// Fields are conjunctive: every populated field must accept its input. A
/// predicate with no populated fields matches every profile. Ordinal minimums
/// are skipped (never failed) when either side is absent from the bracket
/// registry.
pub(crate) fn matches(predicate: &ConditionPredicate, profile: &EngagementProfile) -> bool {
    if let Some(excluded) = predicate.exclude_transaction_types {
        if contains(excluded, &profile.transaction_type) {
            return false;
        }
    }

    let scalar_checks = [
        (predicate.transaction_types, &profile.transaction_type),
        (predicate.product_types, &profile.product_type),
        (predicate.tech_archetypes, &profile.tech_archetype),
        (predicate.growth_stages, &profile.growth_stage),
        (predicate.business_models, &profile.business_model),
        (predicate.scale_intensities, &profile.scale_intensity),
        (predicate.transformation_states, &profile.transformation_state),
        (predicate.data_sensitivities, &profile.data_sensitivity),
        (predicate.operating_models, &profile.operating_model),
    ];
    for (accepted, value) in scalar_checks {
        if let Some(accepted) = accepted {
            if !contains(accepted, value) {
                return false;
            }
        }
    }

    if let Some(accepted) = predicate.geographies {
        let intersects = profile
            .geographies
            .iter()
            .any(|geography| contains(accepted, geography));
        if !intersects {
            return false;
        }
    }

    if let Some(minimum) = predicate.headcount_min {
        if !meets_minimum(HEADCOUNT_BRACKETS, &profile.headcount, minimum) {
            return false;
        }
    }
    if let Some(minimum) = predicate.revenue_min {
        if !meets_minimum(REVENUE_BRACKETS, &profile.revenue_range, minimum) {
            return false;
        }
    }
    if let Some(minimum) = predicate.company_age_min {
        if !meets_minimum(COMPANY_AGE_BRACKETS, &profile.company_age, minimum) {
            return false;
        }
    }

    true
}

fn contains(set: &[&str], value: &str) -> bool {
    set.iter().any(|candidate| *candidate == value)
}
