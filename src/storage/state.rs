//! Progression state storage: one key per tracked field.
//!
//! Missing keys fall back to the fresh state's value, so a brand-new store
//! loads as a brand-new user. The stored level is informational only; it is
//! always re-derived from points on load.

use jiff::civil::Date;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::ledger;
use crate::model::ProgressionState;

use super::{PersistentStore, Result, StorageError};

pub const FOODS: &str = "foods";
pub const POINTS: &str = "points";
pub const LEVEL: &str = "level";
pub const STREAK: &str = "streak";
pub const LAST_LOGGED_DATE: &str = "lastLoggedDate";
pub const DAILY_QUESTS: &str = "dailyQuests";
pub const WEEKLY_CHALLENGES: &str = "weeklyChallenges";
pub const BADGES: &str = "badges";

/// Loads the full progression state from `store`.
pub fn load_state(store: &impl PersistentStore) -> Result<ProgressionState> {
    let fresh = ProgressionState::default();

    let points = load_field(store, POINTS)?.unwrap_or(fresh.points);
    let level = ledger::level_for(points);
    if let Some(stored) = load_field::<u64>(store, LEVEL)?
        && stored != level
    {
        debug!(stored, derived = level, "stored level disagrees with points");
    }

    Ok(ProgressionState {
        foods: load_field(store, FOODS)?.unwrap_or(fresh.foods),
        points,
        level,
        streak: load_field(store, STREAK)?.unwrap_or(fresh.streak),
        // Stored as JSON null when absent, so flatten the two layers.
        last_logged_date: load_field::<Option<Date>>(store, LAST_LOGGED_DATE)?.flatten(),
        daily_quests: load_field(store, DAILY_QUESTS)?.unwrap_or(fresh.daily_quests),
        weekly_challenges: load_field(store, WEEKLY_CHALLENGES)?
            .unwrap_or(fresh.weekly_challenges),
        badges: load_field(store, BADGES)?.unwrap_or(fresh.badges),
    })
}

/// Saves every field of `state` to `store`.
pub fn save_state(store: &mut impl PersistentStore, state: &ProgressionState) -> Result<()> {
    save_field(store, FOODS, &state.foods)?;
    save_field(store, POINTS, &state.points)?;
    save_field(store, LEVEL, &state.level)?;
    save_field(store, STREAK, &state.streak)?;
    save_field(store, LAST_LOGGED_DATE, &state.last_logged_date)?;
    save_field(store, DAILY_QUESTS, &state.daily_quests)?;
    save_field(store, WEEKLY_CHALLENGES, &state.weekly_challenges)?;
    save_field(store, BADGES, &state.badges)?;
    Ok(())
}

fn load_field<T: DeserializeOwned>(store: &impl PersistentStore, key: &str) -> Result<Option<T>> {
    match store.load(key)? {
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|e| StorageError::Corrupt(format!("invalid {key}: {e}"))),
        None => Ok(None),
    }
}

fn save_field<T: Serialize>(store: &mut impl PersistentStore, key: &str, value: &T) -> Result<()> {
    store.save(key, &serde_json::to_value(value)?)
}
