//! Achievement evaluation.
//!
//! Progress is recomputed from the full history each time rather than
//! tracked incrementally. The badge set decides whether an achievement has
//! already been granted; there is no separate flag.

use crate::model::{ACHIEVEMENTS, Achievement, Badges, FoodEntry};

/// Achievements whose target `history` meets and whose badge is not yet in
/// `badges`, in catalogue order.
pub fn evaluate(history: &[FoodEntry], badges: &Badges) -> Vec<&'static Achievement> {
    ACHIEVEMENTS
        .iter()
        .filter(|a| !badges.contains(a.name) && a.metric.measure(history) >= a.target)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::Timestamp;

    use crate::model::Category;

    fn log(category: Category, n: usize) -> Vec<FoodEntry> {
        (0..n)
            .map(|_| FoodEntry::new("x", category, Timestamp::UNIX_EPOCH))
            .collect()
    }

    #[test]
    fn empty_history_unlocks_nothing() {
        assert!(evaluate(&[], &Badges::default()).is_empty());
    }

    #[test]
    fn first_meal_unlocks_on_first_meal() {
        let unlocked = evaluate(&log(Category::Meal, 1), &Badges::default());
        let names: Vec<&str> = unlocked.iter().map(|a| a.name).collect();
        assert_eq!(names, ["First Meal"]);
    }

    #[test]
    fn snacks_do_not_count_as_meals() {
        assert!(evaluate(&log(Category::Snack, 5), &Badges::default()).is_empty());
    }

    #[test]
    fn already_badged_achievement_is_skipped() {
        let mut badges = Badges::default();
        badges.unlock("First Meal");
        assert!(evaluate(&log(Category::Meal, 10), &badges).is_empty());
    }

    #[test]
    fn thresholds_are_inclusive() {
        let mut history = log(Category::Fruit, 49);
        assert!(evaluate(&history, &Badges::default()).is_empty());

        history.extend(log(Category::Fruit, 1));
        let unlocked = evaluate(&history, &Badges::default());
        assert_eq!(unlocked.len(), 1);
        assert_eq!(unlocked[0].name, "Fruit Ninja");
        assert_eq!(unlocked[0].reward, 300);
    }

    #[test]
    fn hydration_master_needs_a_hundred_waters() {
        let history = log(Category::Water, 100);
        let unlocked = evaluate(&history, &Badges::default());
        assert_eq!(unlocked[0].name, "Hydration Master");
    }
}
