use super::super::brackets::{rank, HEADCOUNT_BRACKETS, REVENUE_BRACKETS};
use super::super::domain::{
    ConditionPredicate, EngagementProfile, RiskAnnotationRecord, Severity, GROWTH_STAGE_MATURE,
    MANUAL_OPERATIONS_MASKING_ID,
};

/// Revenue floor and headcount ceiling for the maturity override trigger.
const REVENUE_FLOOR: &str = "25-100m";
const HEADCOUNT_CEILING: &str = "201-500";

/// Synthesized at runtime rather than authored in the catalog: its trigger is
/// a cross-field conjunction the predicate language cannot express without
/// enumerating bracket combinations.
static MANUAL_OPERATIONS_MASKING: RiskAnnotationRecord = RiskAnnotationRecord {
    id: MANUAL_OPERATIONS_MASKING_ID,
    title: "Manual operations masking scale limits",
    detail: "Revenue in the upper-mid brackets with a comparatively small team at a mature \
             stage often means heroic manual effort is substituting for automation. Probe \
             runbooks, on-call load, and which revenue-critical processes still depend on \
             specific individuals.",
    severity: Severity::High,
    condition: ConditionPredicate::any(),
};

/// Appends the manual-operations-masking annotation when high revenue, a
/// strictly smaller headcount, and a mature growth stage coincide. Never
/// removes, never duplicates. Both bracket ranks must be recognized for the
/// trigger to fire; unknown brackets do not inject.
pub(crate) fn inject_maturity_override<'a>(
    mut annotations: Vec<&'a RiskAnnotationRecord>,
    profile: &EngagementProfile,
) -> Vec<&'a RiskAnnotationRecord> {
    if !trigger(profile) {
        return annotations;
    }

    let already_present = annotations
        .iter()
        .any(|annotation| annotation.id == MANUAL_OPERATIONS_MASKING_ID);
    if !already_present {
        annotations.push(&MANUAL_OPERATIONS_MASKING);
    }

    annotations
}

fn trigger(profile: &EngagementProfile) -> bool {
    if profile.growth_stage != GROWTH_STAGE_MATURE {
        return false;
    }

    let ranks = (
        rank(REVENUE_BRACKETS, &profile.revenue_range),
        rank(REVENUE_BRACKETS, REVENUE_FLOOR),
        rank(HEADCOUNT_BRACKETS, &profile.headcount),
        rank(HEADCOUNT_BRACKETS, HEADCOUNT_CEILING),
    );

    match ranks {
        (Some(revenue), Some(floor), Some(headcount), Some(ceiling)) => {
            revenue >= floor && headcount < ceiling
        }
        _ => false,
    }
}
