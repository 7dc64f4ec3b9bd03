//! Quest progress and completion detection.

use crate::model::{Category, Quest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestAdvance {
    pub quests: Vec<Quest>,
    /// Quests that reached their target on this call, in list order.
    pub completions: Vec<Quest>,
}

/// Advances every quest that `category` triggers.
///
/// Progress is clamped at the target. Completion is edge-triggered: a quest
/// is reported only on the call where it first reaches its target, so an
/// already-complete quest never completes again.
pub fn advance(quests: &[Quest], category: Category) -> QuestAdvance {
    let mut completions = Vec::new();
    let quests = quests
        .iter()
        .map(|quest| {
            let mut quest = quest.clone();
            if quest.kind.advances_on(category) && !quest.is_complete() {
                quest.progress += 1;
                if quest.is_complete() {
                    completions.push(quest.clone());
                }
            }
            quest
        })
        .collect();

    QuestAdvance {
        quests,
        completions,
    }
}
