//! The progression state: everything one `log_food` call reads and writes.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{Badges, FoodEntry, Quest};
use crate::ledger;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionState {
    /// Every logged food, oldest first. Append-only.
    pub foods: Vec<FoodEntry>,
    pub points: u64,
    /// Cached `points / 100 + 1`. Kept in sync by the ledger.
    pub level: u64,
    pub streak: u32,
    pub last_logged_date: Option<Date>,
    pub daily_quests: Vec<Quest>,
    pub weekly_challenges: Vec<Quest>,
    pub badges: Badges,
}

impl Default for ProgressionState {
    fn default() -> Self {
        Self {
            foods: Vec::new(),
            points: 0,
            level: 1,
            streak: 0,
            last_logged_date: None,
            daily_quests: Quest::daily(),
            weekly_challenges: Quest::weekly(),
            badges: Badges::default(),
        }
    }
}

impl ProgressionState {
    /// Whether the cached level matches the points.
    pub fn level_is_consistent(&self) -> bool {
        self.level == ledger::level_for(self.points)
    }
}
