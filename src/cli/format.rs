//! Plain-text rendering for CLI output.

use jiff::civil::Date;

use foodquest::ledger::POINTS_PER_LEVEL;
use foodquest::model::{Notification, ProgressionState, Quest, ShopItem};

const BAR_WIDTH: u64 = 10;

/// One line per notification.
pub(super) fn format_notifications(notifications: &[Notification]) -> String {
    notifications
        .iter()
        .map(|n| format!("{}\n", n.message()))
        .collect()
}

/// Points, level, and streak at a glance.
pub(super) fn format_status(state: &ProgressionState, today: Date) -> String {
    let to_next_level = POINTS_PER_LEVEL - state.points % POINTS_PER_LEVEL;
    let last = match state.last_logged_date {
        Some(d) if d == today => "today".to_string(),
        Some(d) => d.to_string(),
        None => "never".to_string(),
    };
    format!(
        "Level {}  ·  {} points ({to_next_level} to next level)\n🔥 {} day streak  ·  last logged {last}",
        state.level, state.points, state.streak,
    )
}

pub(super) fn format_quests(state: &ProgressionState) -> String {
    let daily: String = state.daily_quests.iter().map(format_quest).collect();
    let weekly: String = state.weekly_challenges.iter().map(format_quest).collect();
    format!("Daily quests\n{daily}\nWeekly challenges\n{weekly}")
}

fn format_quest(quest: &Quest) -> String {
    let mark = if quest.is_complete() { "✓" } else { " " };
    format!(
        "  [{mark}] {:<18} {} {}/{}  +{}\n",
        quest.description,
        progress_bar(quest.progress, quest.target),
        quest.progress,
        quest.target,
        quest.reward,
    )
}

fn progress_bar(progress: u32, target: u32) -> String {
    let filled = (u64::from(progress.min(target)) * BAR_WIDTH)
        .checked_div(u64::from(target))
        .unwrap_or(0);
    format!(
        "{}{}",
        "█".repeat(usize::try_from(filled).unwrap_or(0)),
        "░".repeat(usize::try_from(BAR_WIDTH - filled).unwrap_or(0)),
    )
}

/// Newest first, at most `limit` entries.
pub(super) fn format_history(state: &ProgressionState, limit: usize) -> String {
    if state.foods.is_empty() {
        return "No foods logged\n".to_string();
    }
    state
        .foods
        .iter()
        .rev()
        .take(limit)
        .map(|food| {
            format!(
                "{}  {:<9}  {}\n",
                food.logged_at.strftime("%Y-%m-%d %H:%M"),
                food.category,
                food.name
            )
        })
        .collect()
}

pub(super) fn format_badges(state: &ProgressionState) -> String {
    if state.badges.is_empty() {
        return "No badges yet\n".to_string();
    }
    state.badges.iter().map(|b| format!("🏅 {b}\n")).collect()
}

pub(super) fn format_shop(items: &[ShopItem], points: u64) -> String {
    items
        .iter()
        .map(|item| {
            let affordable = if item.cost <= points {
                ""
            } else {
                "  (not enough points)"
            };
            format!("{:<16} {:>4} points{affordable}\n", item.name, item.cost)
        })
        .collect()
}
