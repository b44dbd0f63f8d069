use serde::{Deserialize, Serialize};

/// Archetype identifier for fully managed cloud stacks; questions scoped
/// exclusively to it are dropped by the pivot for self-hosted targets.
pub const ARCHETYPE_CLOUD_NATIVE: &str = "modern-cloud-native";
pub const ARCHETYPE_SELF_MANAGED: &str = "self-managed-infra";
pub const ARCHETYPE_ON_PREM_MONOLITH: &str = "on-prem-monolith";
pub const PRODUCT_ON_PREM_ENTERPRISE: &str = "on-prem-enterprise";
pub const GROWTH_STAGE_MATURE: &str = "mature";

/// Derived geography marker maintained by intake, never selected directly.
pub const GEOGRAPHY_MULTI_REGION: &str = "multi-region";

/// Reserved annotation identifier owned by the maturity override injector.
pub const MANUAL_OPERATIONS_MASKING_ID: &str = "manual-operations-masking";

/// Option domains for every categorical input dimension. Catalog predicates
/// may only reference identifiers listed here; a data-integrity test keeps
/// the two in sync.
pub const TRANSACTION_TYPES: &[&str] = &[
    "acquisition",
    "carve-out",
    "growth-investment",
    "merger",
    "minority-stake",
];
pub const PRODUCT_TYPES: &[&str] = &[
    "b2b-saas",
    "consumer-app",
    "marketplace",
    "on-prem-enterprise",
    "embedded-software",
    "api-platform",
];
pub const TECH_ARCHETYPES: &[&str] = &[
    "modern-cloud-native",
    "hybrid-legacy",
    "self-managed-infra",
    "on-prem-monolith",
];
pub const GROWTH_STAGES: &[&str] = &["startup", "scaling", "mature", "turnaround"];
pub const GEOGRAPHIES: &[&str] = &["us", "eu", "uk", "apac", "latam", "multi-region"];
pub const BUSINESS_MODELS: &[&str] = &[
    "subscription",
    "transactional",
    "perpetual-license",
    "usage-based",
    "services-led",
];
pub const SCALE_INTENSITIES: &[&str] = &["light", "moderate", "intense"];
pub const TRANSFORMATION_STATES: &[&str] = &[
    "stable",
    "migrating",
    "replatforming",
    "post-acquisition-integration",
];
pub const DATA_SENSITIVITIES: &[&str] = &["low", "pii", "regulated"];
pub const OPERATING_MODELS: &[&str] = &["in-house", "outsourced", "hybrid-teams"];

/// Normalized engagement inputs handed to the engine once per generation.
///
/// Identifiers stay open strings rather than closed enums so that bracket
/// values the engine does not recognize flow through the fail-open ordinal
/// comparison instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementProfile {
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

/// Thematic tracks used to balance question coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    ArchitectureAndStack,
    EngineeringPractices,
    InfrastructureAndOperations,
    SecurityDataAndCompliance,
    TeamAndOrganization,
    TransactionReadiness,
}

impl Topic {
    /// Fixed declaration order used for reservation and display grouping.
    pub const fn ordered() -> [Self; 6] {
        [
            Self::ArchitectureAndStack,
            Self::EngineeringPractices,
            Self::InfrastructureAndOperations,
            Self::SecurityDataAndCompliance,
            Self::TeamAndOrganization,
            Self::TransactionReadiness,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ArchitectureAndStack => "Architecture & Technology Stack",
            Self::EngineeringPractices => "Engineering Practices & Delivery",
            Self::InfrastructureAndOperations => "Infrastructure & Operations",
            Self::SecurityDataAndCompliance => "Security, Data & Compliance",
            Self::TeamAndOrganization => "Team & Organization",
            Self::TransactionReadiness => "Transaction & Separation Readiness",
        }
    }

    /// Suggested counterpart on the target side for the interview session.
    pub const fn audience(self) -> &'static str {
        match self {
            Self::ArchitectureAndStack => "CTO / Lead Architect",
            Self::EngineeringPractices => "VP Engineering",
            Self::InfrastructureAndOperations => "Head of Platform",
            Self::SecurityDataAndCompliance => "Security & Data Lead",
            Self::TeamAndOrganization => "CTO / People Lead",
            Self::TransactionReadiness => "CFO / Deal Team",
        }
    }
}

/// Question weighting used for reservation and fill ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Standard,
}

impl Priority {
    /// Lower rank sorts first.
    pub const fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Standard => 2,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Standard => "Standard",
        }
    }
}

/// Relevance ordering for risk annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub const fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

/// Structured filter attached to catalog records.
///
/// `None` means the dimension is a wildcard. Set fields use OR-within-field
/// semantics, geography matches on any shared element, the three `*_min`
/// fields are "at least" thresholds against the ordinal bracket registry, and
/// `exclude_transaction_types` rejects regardless of every other field.
/// Matching is conjunctive across fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionPredicate {
    pub transaction_types: Option<&'static [&'static str]>,
    pub product_types: Option<&'static [&'static str]>,
    pub tech_archetypes: Option<&'static [&'static str]>,
    pub growth_stages: Option<&'static [&'static str]>,
    pub geographies: Option<&'static [&'static str]>,
    pub business_models: Option<&'static [&'static str]>,
    pub scale_intensities: Option<&'static [&'static str]>,
    pub transformation_states: Option<&'static [&'static str]>,
    pub data_sensitivities: Option<&'static [&'static str]>,
    pub operating_models: Option<&'static [&'static str]>,
    pub headcount_min: Option<&'static str>,
    pub revenue_min: Option<&'static str>,
    pub company_age_min: Option<&'static str>,
    pub exclude_transaction_types: Option<&'static [&'static str]>,
}

impl ConditionPredicate {
    /// Universal wildcard: matches every profile.
    pub const fn any() -> Self {
        Self {
            transaction_types: None,
            product_types: None,
            tech_archetypes: None,
            growth_stages: None,
            geographies: None,
            business_models: None,
            scale_intensities: None,
            transformation_states: None,
            data_sensitivities: None,
            operating_models: None,
            headcount_min: None,
            revenue_min: None,
            company_age_min: None,
            exclude_transaction_types: None,
        }
    }
}

impl Default for ConditionPredicate {
    fn default() -> Self {
        Self::any()
    }
}

/// Deal-thesis classification attached to the weightier questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DealImpact {
    ValuationRisk,
    IntegrationRisk,
    OperationalRisk,
    GrowthEnabler,
    CostDriver,
}

/// Optional strategic metadata carried through to the output unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategicContext {
    pub impact: DealImpact,
    pub warning_sign: &'static str,
    pub workstream: &'static str,
}

/// Authored question record. Static content, never created at runtime.
#[derive(Debug, Clone, Copy)]
pub struct QuestionRecord {
    pub id: &'static str,
    pub topic: Topic,
    pub priority: Priority,
    pub prompt: &'static str,
    pub rationale: &'static str,
    pub condition: ConditionPredicate,
    pub strategic: Option<StrategicContext>,
}

/// Authored risk annotation record.
#[derive(Debug, Clone, Copy)]
pub struct RiskAnnotationRecord {
    pub id: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
    pub severity: Severity,
    pub condition: ConditionPredicate,
}
