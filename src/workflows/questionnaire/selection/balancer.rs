use super::super::domain::{QuestionRecord, Topic};
use super::SelectionConfig;

/// Selects a bounded, topic-balanced subset of the matched questions.
///
/// Reservation first: each topic keeps up to `per_topic_reservation` of its
/// highest-priority matches, in topic-declaration order, so every populated
/// topic stays represented under the global cap. Fill second: the remaining
/// candidates are appended in priority order until the cap is reached. When
/// fewer questions match than the cap allows, both phases degenerate to
/// taking everything.
pub(crate) fn balance<'a>(
    matched: Vec<&'a QuestionRecord>,
    config: &SelectionConfig,
) -> Vec<&'a QuestionRecord> {
    let mut selected: Vec<&QuestionRecord> = Vec::new();
    let mut leftovers: Vec<&QuestionRecord> = Vec::new();

    for topic in Topic::ordered() {
        let mut partition: Vec<&QuestionRecord> = matched
            .iter()
            .copied()
            .filter(|question| question.topic == topic)
            .collect();
        sort_by_priority(&mut partition);

        let reserved = partition.len().min(config.per_topic_reservation);
        leftovers.extend(partition.split_off(reserved));
        selected.extend(partition);
    }

    sort_by_priority(&mut leftovers);
    for question in leftovers {
        if selected.len() >= config.max_questions {
            break;
        }
        selected.push(question);
    }

    selected
}

/// Stable, so equal priorities keep their upstream relative order.
fn sort_by_priority(questions: &mut [&QuestionRecord]) {
    questions.sort_by_key(|question| question.priority.rank());
}
