//! FoodQuest: a personal progression engine for a food-logging habit.
//!
//! Logging a food awards points, advances a daily streak, progresses quests,
//! unlocks achievements, and grants badges. The rules live in pure functions
//! over [`ProgressionState`]; [`ProgressionEngine`] threads the state through
//! them and persists it.

pub mod achievement;
pub mod clock;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod model;
pub mod quest;
pub mod storage;
pub mod streak;

pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::{ProgressionEngine, Transition};
pub use error::ProgressionError;
pub use model::{Category, Event, Notification, ProgressionState};
pub use storage::{MemoryStore, PersistentStore, SqliteStore, StorageError};
