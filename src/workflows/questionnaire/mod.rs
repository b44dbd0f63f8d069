//! Technical due-diligence questionnaire engine.
//!
//! A single stateless pipeline maps a normalized engagement profile to a
//! bounded, topic-balanced question set plus severity-sorted risk
//! annotations: predicate matching, the archetype pivot, topic balancing,
//! the maturity override, and output assembly, in that order.

pub mod brackets;
mod catalog;
pub mod domain;
pub mod intake;
mod report;
mod selection;

#[cfg(test)]
mod tests;

pub use catalog::DiligenceCatalog;
pub use domain::{
    ConditionPredicate, DealImpact, EngagementProfile, Priority, QuestionRecord,
    RiskAnnotationRecord, Severity, StrategicContext, Topic,
};
pub use intake::{normalize, sync_multi_region, IntakeError, ProfileSubmission};
pub use report::{
    GeneratedQuestionnaire, GenerationMetadata, QuestionView, RiskAnnotationView, TopicGroup,
};
pub use selection::{QuestionnaireEngine, SelectionConfig};
