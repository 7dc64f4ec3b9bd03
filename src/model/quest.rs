//! Quest types: bounded, single-use progress counters tied to a reward.

use serde::{Deserialize, Serialize};

use super::Category;

/// Which quest this is. Fixes what advances it and which badge it grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestKind {
    /// Daily: advanced by every log, whatever the category.
    LogMeals,
    /// Daily: advanced by fruit logs.
    EatFruits,
    /// Daily: advanced by water logs.
    DrinkWater,
    /// Weekly: advanced by every log.
    WeeklyMeals,
    /// Weekly: no food category advances it.
    Exercise,
}

impl QuestKind {
    /// Whether logging `category` advances a quest of this kind.
    pub fn advances_on(self, category: Category) -> bool {
        match self {
            Self::LogMeals | Self::WeeklyMeals => true,
            Self::EatFruits => category == Category::Fruit,
            Self::DrinkWater => category == Category::Water,
            Self::Exercise => false,
        }
    }

    /// The badge granted when a quest of this kind completes, if any.
    pub fn badge(self) -> Option<&'static str> {
        match self {
            Self::LogMeals => Some("Meal Master"),
            Self::EatFruits => Some("Fruit Lover"),
            Self::DrinkWater => Some("Hydration Hero"),
            Self::WeeklyMeals | Self::Exercise => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    /// Unique within its list.
    pub id: u32,
    pub kind: QuestKind,
    pub description: String,
    /// Always positive.
    pub target: u32,
    /// Always in `0..=target`.
    pub progress: u32,
    pub reward: u64,
}

impl Quest {
    fn new(id: u32, kind: QuestKind, description: &str, target: u32, reward: u64) -> Self {
        Self {
            id,
            kind,
            description: description.to_string(),
            target,
            progress: 0,
            reward,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= self.target
    }

    /// The fresh set of daily quests.
    pub fn daily() -> Vec<Self> {
        vec![
            Self::new(1, QuestKind::LogMeals, "Log 3 meals", 3, 50),
            Self::new(2, QuestKind::EatFruits, "Eat 2 fruits", 2, 30),
            Self::new(3, QuestKind::DrinkWater, "Drink 8 waters", 8, 40),
        ]
    }

    /// The fresh set of weekly challenges.
    pub fn weekly() -> Vec<Self> {
        vec![
            Self::new(1, QuestKind::WeeklyMeals, "Log 15 meals", 15, 200),
            Self::new(2, QuestKind::Exercise, "Exercise 5 times", 5, 150),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daily_quests_start_empty() {
        let quests = Quest::daily();
        assert_eq!(quests.len(), 3);
        assert!(quests.iter().all(|q| q.progress == 0 && q.target > 0));
    }

    #[test]
    fn meal_quest_advances_on_any_category() {
        for category in Category::ALL {
            assert!(QuestKind::LogMeals.advances_on(category));
        }
    }

    #[test]
    fn fruit_and_water_quests_are_category_specific() {
        assert!(QuestKind::EatFruits.advances_on(Category::Fruit));
        assert!(!QuestKind::EatFruits.advances_on(Category::Meal));
        assert!(QuestKind::DrinkWater.advances_on(Category::Water));
        assert!(!QuestKind::DrinkWater.advances_on(Category::Snack));
    }

    #[test]
    fn exercise_never_advances_from_food() {
        assert!(Category::ALL.iter().all(|c| !QuestKind::Exercise.advances_on(*c)));
    }

    #[test]
    fn only_daily_quests_carry_badges() {
        for quest in Quest::daily() {
            assert!(quest.kind.badge().is_some());
        }
        for quest in Quest::weekly() {
            assert!(quest.kind.badge().is_none());
        }
    }
}
