//! Food types: what the user logs.

use std::fmt;
use std::str::FromStr;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ProgressionError;

/// The kind of food being logged. Drives base points and quest triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Meal,
    Fruit,
    Vegetable,
    Water,
    Snack,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 5] = [
        Self::Meal,
        Self::Fruit,
        Self::Vegetable,
        Self::Water,
        Self::Snack,
    ];

    /// Points awarded for a single log of this category.
    pub fn base_points(self) -> u64 {
        match self {
            Self::Water => 5,
            Self::Meal | Self::Fruit | Self::Vegetable | Self::Snack => 10,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Meal => "meal",
            Self::Fruit => "fruit",
            Self::Vegetable => "vegetable",
            Self::Water => "water",
            Self::Snack => "snack",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ProgressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ProgressionError::UnknownCategory(s.to_string()))
    }
}

/// A single logged food item. Immutable once created.
///
/// Ids are time-ordered (UUID v7), so sorting by id sorts by logging order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodEntry {
    pub id: Uuid,
    pub name: String,
    pub category: Category,
    pub logged_at: Timestamp,
}

impl FoodEntry {
    pub fn new(name: impl Into<String>, category: Category, logged_at: Timestamp) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            category,
            logged_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn water_earns_less_than_everything_else() {
        assert_eq!(Category::Water.base_points(), 5);
        for category in [
            Category::Meal,
            Category::Fruit,
            Category::Vegetable,
            Category::Snack,
        ] {
            assert_eq!(category.base_points(), 10);
        }
    }

    #[test]
    fn parses_lowercase_names() {
        assert_eq!("fruit".parse::<Category>().unwrap(), Category::Fruit);
        assert_eq!("water".parse::<Category>().unwrap(), Category::Water);
    }

    #[test]
    fn rejects_unknown_category() {
        let err = "dessert".parse::<Category>().unwrap_err();
        assert!(matches!(err, ProgressionError::UnknownCategory(ref s) if s == "dessert"));
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&Category::Vegetable).unwrap();
        assert_eq!(json, "\"vegetable\"");
    }
}
