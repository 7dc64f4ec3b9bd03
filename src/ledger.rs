//! Points and levels.
//!
//! Level is never an independent source of truth: every credit or debit
//! re-derives it from points.

use crate::error::{ProgressionError, Result};
use crate::model::ProgressionState;

pub const POINTS_PER_LEVEL: u64 = 100;

/// The level a points total corresponds to.
pub fn level_for(points: u64) -> u64 {
    points / POINTS_PER_LEVEL + 1
}

/// Adds `amount` points. Returns the new level if it rose.
pub fn credit(state: &mut ProgressionState, amount: u64) -> Option<u64> {
    state.points = state.points.saturating_add(amount);
    let level = level_for(state.points);
    let previous = std::mem::replace(&mut state.level, level);
    (level > previous).then_some(level)
}

/// Removes `amount` points, or fails without touching the state.
pub fn debit(state: &mut ProgressionState, amount: u64) -> Result<()> {
    if amount > state.points {
        return Err(ProgressionError::InsufficientPoints {
            cost: amount,
            available: state.points,
        });
    }
    state.points -= amount;
    state.level = level_for(state.points);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_points(points: u64) -> ProgressionState {
        ProgressionState {
            points,
            level: level_for(points),
            ..ProgressionState::default()
        }
    }

    #[test]
    fn level_boundaries() {
        assert_eq!(level_for(0), 1);
        assert_eq!(level_for(99), 1);
        assert_eq!(level_for(100), 2);
        assert_eq!(level_for(505), 6);
    }

    #[test]
    fn credit_across_level_boundary_levels_up() {
        let mut state = with_points(480);
        let level_up = credit(&mut state, 25);

        assert_eq!(state.points, 505);
        assert_eq!(state.level, 6);
        assert_eq!(level_up, Some(6));
    }

    #[test]
    fn credit_within_level_reports_nothing() {
        let mut state = with_points(10);
        assert_eq!(credit(&mut state, 20), None);
        assert_eq!(state.points, 30);
        assert_eq!(state.level, 1);
    }

    #[test]
    fn credit_skipping_levels_reports_the_final_one() {
        let mut state = with_points(50);
        assert_eq!(credit(&mut state, 300), Some(4));
    }

    #[test]
    fn debit_more_than_balance_fails_unchanged() {
        let mut state = with_points(120);
        let before = state.clone();

        let err = debit(&mut state, 300).unwrap_err();

        assert_eq!(
            err,
            ProgressionError::InsufficientPoints {
                cost: 300,
                available: 120,
            }
        );
        assert_eq!(state, before);
    }

    #[test]
    fn debit_rederives_level() {
        let mut state = with_points(520);
        debit(&mut state, 500).unwrap();
        assert_eq!(state.points, 20);
        assert!(state.level_is_consistent());
        assert_eq!(state.level, 1);
    }

    #[test]
    fn debit_of_exact_balance_succeeds() {
        let mut state = with_points(300);
        debit(&mut state, 300).unwrap();
        assert_eq!(state.points, 0);
    }
}
