use serde::Deserialize;

use super::domain::{EngagementProfile, GEOGRAPHY_MULTI_REGION};

/// Structural problems in a submitted profile. The engine itself never
/// validates; intake is the caller-side guard in front of it.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("field `{0}` must not be blank")]
    BlankField(&'static str),
    #[error("at least one geography must be selected")]
    EmptyGeographies,
}

/// Raw profile as submitted over the wire, before normalization.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileSubmission {
    pub transaction_type: String,
    pub product_type: String,
    pub tech_archetype: String,
    pub headcount: String,
    pub revenue_range: String,
    pub growth_stage: String,
    pub company_age: String,
    pub geographies: Vec<String>,
    pub business_model: String,
    pub scale_intensity: String,
    pub transformation_state: String,
    pub data_sensitivity: String,
    pub operating_model: String,
}

/// Converts a submission into a normalized profile: trims identifiers,
/// rejects blank required fields, deduplicates geographies, and applies the
/// multi-region sync rule.
pub fn normalize(submission: ProfileSubmission) -> Result<EngagementProfile, IntakeError> {
    let mut geographies: Vec<String> = Vec::new();
    for geography in submission.geographies {
        let trimmed = geography.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !geographies.iter().any(|existing| existing == trimmed) {
            geographies.push(trimmed.to_string());
        }
    }
    if geographies.is_empty() {
        return Err(IntakeError::EmptyGeographies);
    }
    sync_multi_region(&mut geographies);

    Ok(EngagementProfile {
        transaction_type: required(submission.transaction_type, "transaction_type")?,
        product_type: required(submission.product_type, "product_type")?,
        tech_archetype: required(submission.tech_archetype, "tech_archetype")?,
        headcount: required(submission.headcount, "headcount")?,
        revenue_range: required(submission.revenue_range, "revenue_range")?,
        growth_stage: required(submission.growth_stage, "growth_stage")?,
        company_age: required(submission.company_age, "company_age")?,
        geographies,
        business_model: required(submission.business_model, "business_model")?,
        scale_intensity: required(submission.scale_intensity, "scale_intensity")?,
        transformation_state: required(submission.transformation_state, "transformation_state")?,
        data_sensitivity: required(submission.data_sensitivity, "data_sensitivity")?,
        operating_model: required(submission.operating_model, "operating_model")?,
    })
}

/// Keeps the derived multi-region marker consistent with the concrete
/// selections: two or more concrete regions imply it, exactly one forbids it,
/// and a list with no concrete regions is left untouched.
pub fn sync_multi_region(geographies: &mut Vec<String>) {
    let concrete = geographies
        .iter()
        .filter(|geography| *geography != GEOGRAPHY_MULTI_REGION)
        .count();

    match concrete {
        0 => {}
        1 => geographies.retain(|geography| geography != GEOGRAPHY_MULTI_REGION),
        _ => {
            if !geographies
                .iter()
                .any(|geography| geography == GEOGRAPHY_MULTI_REGION)
            {
                geographies.push(GEOGRAPHY_MULTI_REGION.to_string());
            }
        }
    }
}

fn required(value: String, field: &'static str) -> Result<String, IntakeError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(IntakeError::BlankField(field));
    }
    Ok(trimmed.to_string())
}
