//! The progression engine: turns a logged food into a new state and the
//! events it produced.
//!
//! The transition functions here are pure. They take the current state by
//! reference, work on a copy, and hand back the copy only on success, so a
//! rejected call never leaves a half-applied state behind.
//! [`ProgressionEngine`] wraps them with a clock, a store, and notification
//! sequencing.

use jiff::Timestamp;
use jiff::civil::Date;
use tracing::{debug, info, warn};

use crate::clock::Clock;
use crate::error::{ProgressionError, Result};
use crate::model::{
    Category, Event, FoodEntry, Notification, ProgressionState, Quest, ShopItem,
};
use crate::storage::{self, PersistentStore, StorageError};
use crate::streak::StreakEvent;
use crate::{achievement, ledger, quest, streak};

/// The result of a successful transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: ProgressionState,
    /// In the order they happened.
    pub events: Vec<Event>,
}

/// A working copy of the state plus the events recorded against it.
///
/// All point credits and badge unlocks go through here so that level-ups and
/// badge notifications are never missed.
struct Working {
    state: ProgressionState,
    events: Vec<Event>,
}

impl Working {
    fn new(state: &ProgressionState) -> Self {
        Self {
            state: state.clone(),
            events: Vec::new(),
        }
    }

    fn credit(&mut self, amount: u64) {
        if let Some(level) = ledger::credit(&mut self.state, amount) {
            info!(level, "level up");
            self.events.push(Event::LevelUp { level });
            self.unlock(&format!("Level {level} Achieved!"));
        }
    }

    /// Unlocks a badge, reporting it only if it is new.
    fn unlock(&mut self, name: &str) -> bool {
        let granted = self.state.badges.unlock(name);
        if granted {
            info!(badge = name, "badge earned");
            self.events.push(Event::BadgeEarned {
                name: name.to_string(),
            });
        }
        granted
    }

    fn finish(self) -> Transition {
        Transition {
            state: self.state,
            events: self.events,
        }
    }
}

/// Logs a food on `today`, applying streak, points, quests, and achievements.
///
/// Weekly challenges are not advanced here; see [`advance_weekly`].
pub fn log_food(
    state: &ProgressionState,
    name: &str,
    category: Category,
    today: Date,
    now: Timestamp,
) -> Result<Transition> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ProgressionError::EmptyFoodName);
    }

    let mut work = Working::new(state);
    work.state.foods.push(FoodEntry::new(name, category, now));
    debug!(name, %category, "food logged");

    let streak = streak::advance(today, work.state.last_logged_date, work.state.streak);
    work.state.streak = streak.streak;
    work.state.last_logged_date = streak.last_logged_date;
    debug!(streak = streak.streak, bonus = streak.bonus, "streak advanced");
    match streak.event {
        Some(StreakEvent::Started) => work.events.push(Event::StreakStarted),
        Some(StreakEvent::Milestone { days, badge }) => {
            work.events.push(Event::StreakMilestone {
                days,
                badge: badge.clone(),
            });
            work.unlock(&badge);
        }
        None => {}
    }

    work.credit(category.base_points() + streak.bonus);

    let daily = quest::advance(&work.state.daily_quests, category);
    work.state.daily_quests = daily.quests;
    for completed in daily.completions {
        complete_quest(&mut work, &completed);
    }

    for achievement in achievement::evaluate(&work.state.foods, &work.state.badges) {
        if work.unlock(achievement.name) {
            info!(achievement = achievement.name, "achievement unlocked");
            work.events.push(Event::AchievementUnlocked {
                name: achievement.name.to_string(),
                reward: achievement.reward,
            });
            work.credit(achievement.reward);
        }
    }

    Ok(work.finish())
}

/// Buys `item`: debits its cost, then grants its name as a badge.
///
/// Buying an item again debits again; the badge is already held, so no new
/// badge event is reported.
pub fn purchase(state: &ProgressionState, item: &ShopItem) -> Result<Transition> {
    let mut work = Working::new(state);
    ledger::debit(&mut work.state, item.cost)?;
    work.unlock(item.name);
    work.events.push(Event::Purchased {
        item: item.name.to_string(),
        cost: item.cost,
    });
    info!(item = item.name, cost = item.cost, "item purchased");
    Ok(work.finish())
}

/// Advances the weekly challenges for a log of `category`.
///
/// Nothing calls this on its own: logging a food advances only the daily
/// quests. Completions credit their reward like daily quests do.
pub fn advance_weekly(state: &ProgressionState, category: Category) -> Transition {
    let mut work = Working::new(state);
    let weekly = quest::advance(&work.state.weekly_challenges, category);
    work.state.weekly_challenges = weekly.quests;
    for completed in weekly.completions {
        complete_quest(&mut work, &completed);
    }
    work.finish()
}

fn complete_quest(work: &mut Working, quest: &Quest) {
    info!(quest = quest.id, reward = quest.reward, "quest completed");
    work.events.push(Event::QuestCompleted {
        id: quest.id,
        description: quest.description.clone(),
        reward: quest.reward,
    });
    work.credit(quest.reward);
    if let Some(badge) = quest.kind.badge() {
        work.unlock(badge);
    }
}

/// Owns the canonical state and applies transitions to it.
///
/// Each successful transition is saved to the store afterwards. A failed save
/// is logged and otherwise ignored: the in-memory state stays authoritative
/// and the next save writes it again.
pub struct ProgressionEngine<C, S> {
    clock: C,
    store: S,
    state: ProgressionState,
    next_seq: u64,
}

impl<C: Clock, S: PersistentStore> ProgressionEngine<C, S> {
    /// Loads the state from `store`.
    pub fn open(clock: C, store: S) -> core::result::Result<Self, StorageError> {
        let state = storage::load_state(&store)?;
        debug!(
            points = state.points,
            streak = state.streak,
            foods = state.foods.len(),
            "progression state loaded"
        );
        Ok(Self {
            clock,
            store,
            state,
            next_seq: 1,
        })
    }

    pub fn state(&self) -> &ProgressionState {
        &self.state
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Logs a food for today.
    pub fn log_food(&mut self, name: &str, category: Category) -> Result<Vec<Notification>> {
        let transition = log_food(
            &self.state,
            name,
            category,
            self.clock.today(),
            self.clock.now(),
        )?;
        Ok(self.apply(transition))
    }

    /// Buys a shop item by name.
    pub fn purchase(&mut self, item_name: &str) -> Result<Vec<Notification>> {
        let item = ShopItem::find(item_name)
            .ok_or_else(|| ProgressionError::UnknownItem(item_name.to_string()))?;
        let transition = purchase(&self.state, item)?;
        Ok(self.apply(transition))
    }

    /// Advances the weekly challenges. See [`advance_weekly`].
    pub fn advance_weekly(&mut self, category: Category) -> Vec<Notification> {
        let transition = advance_weekly(&self.state, category);
        self.apply(transition)
    }

    fn apply(&mut self, transition: Transition) -> Vec<Notification> {
        self.state = transition.state;
        if let Err(e) = storage::save_state(&mut self.store, &self.state) {
            warn!(error = %e, "failed to save progression state");
        }

        let created_at = self.clock.now();
        transition
            .events
            .into_iter()
            .map(|event| {
                let seq = self.next_seq;
                self.next_seq += 1;
                Notification {
                    seq,
                    created_at,
                    event,
                }
            })
            .collect()
    }
}
