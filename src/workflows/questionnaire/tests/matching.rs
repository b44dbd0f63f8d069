use super::super::domain::ConditionPredicate;
use super::super::selection::matcher::matches;
use super::common::carve_out_profile;

#[test]
fn empty_predicate_matches_any_profile() {
    assert!(matches(&ConditionPredicate::any(), &carve_out_profile()));
}

#[test]
fn scalar_set_requires_membership() {
    let predicate = ConditionPredicate {
        transaction_types: Some(&["merger", "acquisition"]),
        ..ConditionPredicate::any()
    };
    assert!(!matches(&predicate, &carve_out_profile()));

    let predicate = ConditionPredicate {
        transaction_types: Some(&["carve-out"]),
        ..ConditionPredicate::any()
    };
    assert!(matches(&predicate, &carve_out_profile()));
}

#[test]
fn geography_matches_on_any_shared_element() {
    let predicate = ConditionPredicate {
        geographies: Some(&["us", "eu"]),
        ..ConditionPredicate::any()
    };
    assert!(matches(&predicate, &carve_out_profile()));

    let predicate = ConditionPredicate {
        geographies: Some(&["apac", "latam"]),
        ..ConditionPredicate::any()
    };
    assert!(!matches(&predicate, &carve_out_profile()));
}

#[test]
fn ordinal_minimum_filters_below_the_threshold() {
    // Profile headcount is 51-200.
    let predicate = ConditionPredicate {
        headcount_min: Some("201-500"),
        ..ConditionPredicate::any()
    };
    assert!(!matches(&predicate, &carve_out_profile()));

    let predicate = ConditionPredicate {
        headcount_min: Some("11-50"),
        ..ConditionPredicate::any()
    };
    assert!(matches(&predicate, &carve_out_profile()));
}

#[test]
fn unknown_ordinal_identifiers_fail_open() {
    let predicate = ConditionPredicate {
        headcount_min: Some("not-a-known-bracket"),
        ..ConditionPredicate::any()
    };
    assert!(matches(&predicate, &carve_out_profile()));

    let mut profile = carve_out_profile();
    profile.revenue_range = "unrecognized".to_string();
    let predicate = ConditionPredicate {
        revenue_min: Some("25-100m"),
        ..ConditionPredicate::any()
    };
    assert!(matches(&predicate, &profile));
}

#[test]
fn exclusion_rejects_even_when_everything_else_passes() {
    let predicate = ConditionPredicate {
        product_types: Some(&["b2b-saas"]),
        exclude_transaction_types: Some(&["carve-out"]),
        ..ConditionPredicate::any()
    };
    assert!(!matches(&predicate, &carve_out_profile()));
}

#[test]
fn fields_are_conjunctive() {
    let predicate = ConditionPredicate {
        product_types: Some(&["b2b-saas"]),
        growth_stages: Some(&["mature"]),
        ..ConditionPredicate::any()
    };
    // Product matches, growth stage does not.
    assert!(!matches(&predicate, &carve_out_profile()));
}
