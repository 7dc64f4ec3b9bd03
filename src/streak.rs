//! Streak arithmetic: continuation, reset, and bonus points.
//!
//! Pure: the result depends only on today, the last logged day, and the
//! current streak.

use jiff::civil::Date;

const SECONDS_PER_DAY: i64 = 86_400;

/// Bonus for starting (or restarting) a streak.
const START_BONUS: u64 = 10;
const WEEK_BONUS: u64 = 50;
const MONTH_BONUS: u64 = 200;

/// Something worth telling the user about the streak.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreakEvent {
    /// A streak began at 1.
    Started,
    /// The streak reached a multiple of 7 or 30 and earns `badge`.
    Milestone { days: u32, badge: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreakAdvance {
    pub streak: u32,
    pub last_logged_date: Option<Date>,
    pub bonus: u64,
    pub event: Option<StreakEvent>,
}

/// Advances the streak for a log made on `today`.
///
/// At most one increment per calendar day. A gap of more than one day, or a
/// last logged day in the future, restarts the streak at 1.
pub fn advance(today: Date, last_logged_date: Option<Date>, current_streak: u32) -> StreakAdvance {
    let Some(last) = last_logged_date else {
        return restart(today);
    };

    match days_between(last, today) {
        0 => StreakAdvance {
            streak: current_streak,
            last_logged_date: Some(last),
            bonus: 0,
            event: None,
        },
        1 => {
            let streak = current_streak.saturating_add(1);
            let (bonus, event) = continuation_bonus(streak);
            StreakAdvance {
                streak,
                last_logged_date: Some(today),
                bonus,
                event,
            }
        }
        _ => restart(today),
    }
}

/// Whole calendar days from `from` to `to`, floored.
fn days_between(from: Date, to: Date) -> i64 {
    to.duration_since(from).as_secs().div_euclid(SECONDS_PER_DAY)
}

fn restart(today: Date) -> StreakAdvance {
    StreakAdvance {
        streak: 1,
        last_logged_date: Some(today),
        bonus: START_BONUS,
        event: Some(StreakEvent::Started),
    }
}

/// The 30-day milestone takes precedence when both apply.
fn continuation_bonus(streak: u32) -> (u64, Option<StreakEvent>) {
    if streak % 30 == 0 {
        let badge = format!("{streak} Day Streak Master!");
        return (
            MONTH_BONUS,
            Some(StreakEvent::Milestone {
                days: streak,
                badge,
            }),
        );
    }
    if streak % 7 == 0 {
        let badge = format!("{streak} Day Streak!");
        return (
            WEEK_BONUS,
            Some(StreakEvent::Milestone {
                days: streak,
                badge,
            }),
        );
    }
    (START_BONUS + u64::from(streak / 2) * 5, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::civil::date;

    #[test]
    fn first_log_starts_streak() {
        let result = advance(date(2024, 5, 1), None, 0);
        assert_eq!(result.streak, 1);
        assert_eq!(result.bonus, 10);
        assert_eq!(result.event, Some(StreakEvent::Started));
        assert_eq!(result.last_logged_date, Some(date(2024, 5, 1)));
    }

    #[test]
    fn same_day_is_a_no_op() {
        let today = date(2024, 5, 1);
        let result = advance(today, Some(today), 4);
        assert_eq!(result.streak, 4);
        assert_eq!(result.bonus, 0);
        assert_eq!(result.event, None);
        assert_eq!(result.last_logged_date, Some(today));
    }

    #[test]
    fn next_day_increments_with_scaled_bonus() {
        let result = advance(date(2024, 5, 2), Some(date(2024, 5, 1)), 2);
        assert_eq!(result.streak, 3);
        // 10 + floor(3 / 2) * 5
        assert_eq!(result.bonus, 15);
        assert_eq!(result.event, None);
        assert_eq!(result.last_logged_date, Some(date(2024, 5, 2)));
    }

    #[test]
    fn next_day_across_month_boundary() {
        let result = advance(date(2024, 3, 1), Some(date(2024, 2, 29)), 1);
        assert_eq!(result.streak, 2);
        assert_eq!(result.bonus, 15);
    }

    #[test]
    fn seventh_day_is_a_milestone() {
        let result = advance(date(2024, 5, 7), Some(date(2024, 5, 6)), 6);
        assert_eq!(result.streak, 7);
        assert_eq!(result.bonus, 50);
        assert_eq!(
            result.event,
            Some(StreakEvent::Milestone {
                days: 7,
                badge: "7 Day Streak!".into(),
            })
        );
    }

    #[test]
    fn thirtieth_day_is_a_master_milestone() {
        let result = advance(date(2024, 5, 30), Some(date(2024, 5, 29)), 29);
        assert_eq!(result.streak, 30);
        assert_eq!(result.bonus, 200);
        assert_eq!(
            result.event,
            Some(StreakEvent::Milestone {
                days: 30,
                badge: "30 Day Streak Master!".into(),
            })
        );
    }

    #[test]
    fn thirty_day_milestone_overrides_seven() {
        let result = advance(date(2024, 5, 2), Some(date(2024, 5, 1)), 209);
        assert_eq!(result.streak, 210);
        assert_eq!(result.bonus, 200);
        assert!(matches!(
            result.event,
            Some(StreakEvent::Milestone { ref badge, .. }) if badge == "210 Day Streak Master!"
        ));
    }

    #[test]
    fn gap_resets_streak() {
        let result = advance(date(2024, 5, 10), Some(date(2024, 5, 1)), 9);
        assert_eq!(result.streak, 1);
        assert_eq!(result.bonus, 10);
        assert_eq!(result.event, Some(StreakEvent::Started));
        assert_eq!(result.last_logged_date, Some(date(2024, 5, 10)));
    }

    #[test]
    fn last_log_in_the_future_resets_streak() {
        let result = advance(date(2024, 5, 1), Some(date(2024, 5, 3)), 5);
        assert_eq!(result.streak, 1);
        assert_eq!(result.event, Some(StreakEvent::Started));
    }
}
