pub(crate) mod balancer;
pub(crate) mod matcher;
pub(crate) mod overrides;
pub(crate) mod pivot;

use serde::{Deserialize, Serialize};

use super::catalog::DiligenceCatalog;
use super::domain::{EngagementProfile, QuestionRecord, RiskAnnotationRecord};
use super::report::{self, GeneratedQuestionnaire};

/// Hand-tuned selection bounds. The per-topic reservation of 3 and the global
/// cap of 20 are product constants with no derived formula; changing them
/// changes product behavior, not engine correctness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionConfig {
    pub min_questions: usize,
    pub max_questions: usize,
    pub per_topic_reservation: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            min_questions: 15,
            max_questions: 20,
            per_topic_reservation: 3,
        }
    }
}

/// Stateless questionnaire generator over an injected read-only catalog.
///
/// A generation call is a single synchronous pass with no shared mutable
/// state, so one engine instance can serve concurrent callers behind an
/// `Arc` without locking.
pub struct QuestionnaireEngine {
    catalog: DiligenceCatalog,
    config: SelectionConfig,
}

impl QuestionnaireEngine {
    pub fn new(catalog: DiligenceCatalog, config: SelectionConfig) -> Self {
        Self { catalog, config }
    }

    /// Engine over the standard catalog with the shipped selection bounds.
    pub fn standard() -> Self {
        Self::new(DiligenceCatalog::standard(), SelectionConfig::default())
    }

    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    /// Maps one profile to a bounded, topic-balanced questionnaire plus
    /// severity-sorted risk annotations. Pure apart from the metadata
    /// timestamp; never fails for shaped inputs.
    pub fn generate(&self, profile: &EngagementProfile) -> GeneratedQuestionnaire {
        let matched: Vec<&QuestionRecord> = self
            .catalog
            .questions()
            .iter()
            .filter(|question| matcher::matches(&question.condition, profile))
            .collect();
        let pivoted = pivot::apply_archetype_pivot(matched, profile);
        let selected = balancer::balance(pivoted, &self.config);

        let annotations: Vec<&RiskAnnotationRecord> = self
            .catalog
            .annotations()
            .iter()
            .filter(|annotation| matcher::matches(&annotation.condition, profile))
            .collect();
        let annotations = overrides::inject_maturity_override(annotations, profile);

        report::assemble(selected, annotations, profile)
    }
}
