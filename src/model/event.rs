//! Events and notifications: what a transition reports back to the user.

use std::fmt;

use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};

/// How long a notification stays on screen. Expiry is the display layer's job.
pub const DISPLAY_DURATION: SignedDuration = SignedDuration::from_secs(3);

/// Something that happened during a single transition, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum Event {
    /// A new streak began (first log ever, or after a gap).
    StreakStarted,

    /// The streak hit a 7-day or 30-day multiple.
    StreakMilestone { days: u32, badge: String },

    /// Points crossed into a new level.
    LevelUp { level: u64 },

    /// A badge was granted for the first time.
    BadgeEarned { name: String },

    /// A quest reached its target.
    QuestCompleted {
        id: u32,
        description: String,
        reward: u64,
    },

    /// A cumulative achievement was unlocked.
    AchievementUnlocked { name: String, reward: u64 },

    /// A shop item was bought.
    Purchased { item: String, cost: u64 },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StreakStarted => write!(f, "🔥 New streak started!"),
            Self::StreakMilestone { days, .. } => write!(f, "🎉 {days} day streak!"),
            Self::LevelUp { level } => write!(f, "⬆️ Level up! You reached level {level}"),
            Self::BadgeEarned { name } => write!(f, "🏆 New badge earned: {name}"),
            Self::QuestCompleted {
                description,
                reward,
                ..
            } => write!(f, "✅ Quest complete: {description} (+{reward} points)"),
            Self::AchievementUnlocked { name, reward } => {
                write!(f, "⭐ Achievement unlocked: {name} (+{reward} points)")
            }
            Self::Purchased { item, .. } => write!(f, "🎉 Purchased {item}!"),
        }
    }
}

/// An event stamped for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Strictly increasing per engine.
    pub seq: u64,
    pub created_at: Timestamp,
    pub event: Event,
}

impl Notification {
    pub fn expires_at(&self) -> Timestamp {
        self.created_at.saturating_add(DISPLAY_DURATION).unwrap_or(self.created_at)
    }

    pub fn message(&self) -> String {
        self.event.to_string()
    }
}
