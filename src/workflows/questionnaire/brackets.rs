//! Ordinal bracket registry for the three scale dimensions.
//!
//! Brackets are compared by index within their ordering. An identifier that
//! is missing from an ordering never filters anything out: the comparison is
//! skipped entirely, so an unrecognized bracket value cannot silently
//! suppress catalog content.

/// Headcount bands, smallest to largest.
pub const HEADCOUNT_BRACKETS: &[&str] = &["1-10", "11-50", "51-200", "201-500", "500+"];

/// Annual revenue bands, smallest to largest.
pub const REVENUE_BRACKETS: &[&str] = &["<1m", "1-5m", "5-25m", "25-100m", "100m+"];

/// Company age bands, youngest to oldest.
pub const COMPANY_AGE_BRACKETS: &[&str] = &["<2yr", "2-5yr", "5-10yr", "10yr+"];

/// Position of `id` within `ordering`, if recognized.
pub fn rank(ordering: &[&str], id: &str) -> Option<usize> {
    ordering.iter().position(|candidate| *candidate == id)
}

/// Fail-open "at least" comparison: true unless both identifiers are
/// recognized and `value` sits strictly below `minimum`.
pub fn meets_minimum(ordering: &[&str], value: &str, minimum: &str) -> bool {
    match (rank(ordering, value), rank(ordering, minimum)) {
        (Some(value_rank), Some(minimum_rank)) => value_rank >= minimum_rank,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_reflects_declaration_order() {
        assert_eq!(rank(HEADCOUNT_BRACKETS, "1-10"), Some(0));
        assert_eq!(rank(HEADCOUNT_BRACKETS, "500+"), Some(4));
        assert_eq!(rank(REVENUE_BRACKETS, "not-a-bracket"), None);
    }

    #[test]
    fn meets_minimum_compares_by_index() {
        assert!(meets_minimum(REVENUE_BRACKETS, "25-100m", "5-25m"));
        assert!(meets_minimum(REVENUE_BRACKETS, "5-25m", "5-25m"));
        assert!(!meets_minimum(REVENUE_BRACKETS, "1-5m", "5-25m"));
    }

    #[test]
    fn unrecognized_identifiers_fail_open() {
        assert!(meets_minimum(HEADCOUNT_BRACKETS, "9001+", "201-500"));
        assert!(meets_minimum(HEADCOUNT_BRACKETS, "1-10", "mystery-bracket"));
    }
}
