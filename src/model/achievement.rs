//! The achievement catalogue: static, never stored.
//!
//! Achievement progress is derived from the food history on every
//! evaluation, so only the definitions live here.

use super::{Category, FoodEntry};

/// The cumulative count an achievement measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    TotalMeals,
    TotalWater,
    TotalFruits,
}

impl Metric {
    fn category(self) -> Category {
        match self {
            Self::TotalMeals => Category::Meal,
            Self::TotalWater => Category::Water,
            Self::TotalFruits => Category::Fruit,
        }
    }

    /// Counts the entries in `history` this metric covers.
    pub fn measure(self, history: &[FoodEntry]) -> usize {
        let category = self.category();
        history.iter().filter(|f| f.category == category).count()
    }
}

/// A cumulative milestone. The name doubles as its badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Achievement {
    pub id: u32,
    pub name: &'static str,
    pub metric: Metric,
    pub target: usize,
    pub reward: u64,
}

pub const ACHIEVEMENTS: [Achievement; 3] = [
    Achievement {
        id: 1,
        name: "First Meal",
        metric: Metric::TotalMeals,
        target: 1,
        reward: 100,
    },
    Achievement {
        id: 2,
        name: "Hydration Master",
        metric: Metric::TotalWater,
        target: 100,
        reward: 500,
    },
    Achievement {
        id: 3,
        name: "Fruit Ninja",
        metric: Metric::TotalFruits,
        target: 50,
        reward: 300,
    },
];
