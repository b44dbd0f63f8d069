use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::{
    EngagementProfile, Priority, QuestionRecord, RiskAnnotationRecord, Severity, StrategicContext,
    Topic,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionView {
    pub id: &'static str,
    pub prompt: &'static str,
    pub rationale: &'static str,
    pub priority: Priority,
    pub priority_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategic: Option<StrategicContext>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicGroup {
    pub topic: Topic,
    pub label: &'static str,
    pub audience: &'static str,
    pub questions: Vec<QuestionView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAnnotationView {
    pub id: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
    pub severity: Severity,
    pub severity_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationMetadata {
    pub total_questions: usize,
    pub generated_at: DateTime<Utc>,
    pub profile: EngagementProfile,
}

/// Fully assembled questionnaire. Derived output, recomputed fresh on every
/// generation call; carries no identity across calls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedQuestionnaire {
    pub topics: Vec<TopicGroup>,
    pub risk_annotations: Vec<RiskAnnotationView>,
    pub metadata: GenerationMetadata,
}

/// Groups the selection by topic in declaration order (empty topics omitted),
/// stable-sorts questions by priority and annotations by severity, and stamps
/// the metadata block with a wall-clock timestamp plus an echo of the inputs.
pub(crate) fn assemble(
    selected: Vec<&QuestionRecord>,
    annotations: Vec<&RiskAnnotationRecord>,
    profile: &EngagementProfile,
) -> GeneratedQuestionnaire {
    let mut topics = Vec::new();
    for topic in Topic::ordered() {
        let mut questions: Vec<&QuestionRecord> = selected
            .iter()
            .copied()
            .filter(|question| question.topic == topic)
            .collect();
        if questions.is_empty() {
            continue;
        }
        questions.sort_by_key(|question| question.priority.rank());

        topics.push(TopicGroup {
            topic,
            label: topic.label(),
            audience: topic.audience(),
            questions: questions.into_iter().map(question_view).collect(),
        });
    }

    let mut sorted_annotations = annotations;
    sorted_annotations.sort_by_key(|annotation| annotation.severity.rank());

    GeneratedQuestionnaire {
        metadata: GenerationMetadata {
            total_questions: selected.len(),
            generated_at: Utc::now(),
            profile: profile.clone(),
        },
        topics,
        risk_annotations: sorted_annotations
            .into_iter()
            .map(annotation_view)
            .collect(),
    }
}

fn question_view(record: &QuestionRecord) -> QuestionView {
    QuestionView {
        id: record.id,
        prompt: record.prompt,
        rationale: record.rationale,
        priority: record.priority,
        priority_label: record.priority.label(),
        strategic: record.strategic,
    }
}

fn annotation_view(record: &RiskAnnotationRecord) -> RiskAnnotationView {
    RiskAnnotationView {
        id: record.id,
        title: record.title,
        detail: record.detail,
        severity: record.severity,
        severity_label: record.severity.label(),
    }
}
