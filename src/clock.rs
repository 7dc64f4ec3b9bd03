//! Where "today" comes from.
//!
//! Streaks work at calendar-day granularity, so the engine only ever asks for
//! a civil date plus a timestamp for stamping entries and notifications.

use jiff::civil::Date;
use jiff::tz::TimeZone;
use jiff::{Timestamp, Zoned};

pub trait Clock {
    /// The current calendar day.
    fn today(&self) -> Date;

    /// The current instant.
    fn now(&self) -> Timestamp;
}

/// The system clock, read in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        Zoned::now().date()
    }

    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// A clock pinned to a given day. Used by tests and by `--date`.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub today: Date,
    pub now: Timestamp,
}

impl FixedClock {
    /// Pins the day. Timestamps fall on that day: the real instant when it
    /// is the current local day, otherwise its local midnight.
    pub fn on(today: Date) -> Self {
        let current = Zoned::now();
        let now = if current.date() == today {
            current.timestamp()
        } else {
            today
                .to_zoned(TimeZone::system())
                .map_or_else(|_| current.timestamp(), |z| z.timestamp())
        };
        Self { today, now }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.today
    }

    fn now(&self) -> Timestamp {
        self.now
    }
}
