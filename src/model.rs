//! Core data model for FoodQuest.
//!
//! These types describe the progression state and everything that flows
//! through it: logged foods, quests, achievements, badges, the shop, and
//! the events reported back after each transition.

mod achievement;
mod badges;
mod event;
mod food;
mod quest;
mod shop;
mod state;

pub use achievement::{ACHIEVEMENTS, Achievement, Metric};
pub use badges::Badges;
pub use event::{DISPLAY_DURATION, Event, Notification};
pub use food::{Category, FoodEntry};
pub use quest::{Quest, QuestKind};
pub use shop::{SHOP_ITEMS, ShopItem};
pub use state::ProgressionState;
