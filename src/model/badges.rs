//! The badge registry: the single gate for every "award once" reward.

use serde::{Deserialize, Serialize};

/// Unlocked badge names, unique, in unlock order.
///
/// Serialized as a plain JSON array of names. Duplicates in stored data are
/// dropped on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Badges(Vec<String>);

impl Badges {
    /// Unlocks `name`. Returns `false` if it was already unlocked, in which
    /// case nothing changes.
    pub fn unlock(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.0.push(name.to_string());
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|b| b == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for Badges {
    /// Builds a registry from stored names, dropping duplicates.
    fn from(names: Vec<String>) -> Self {
        let mut badges = Self::default();
        for name in &names {
            badges.unlock(name);
        }
        badges
    }
}

impl From<Badges> for Vec<String> {
    fn from(badges: Badges) -> Self {
        badges.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlock_grants_once() {
        let mut badges = Badges::default();
        assert!(badges.unlock("Meal Master"));
        assert!(!badges.unlock("Meal Master"));
        assert_eq!(badges.len(), 1);
    }

    #[test]
    fn keeps_unlock_order() {
        let mut badges = Badges::default();
        badges.unlock("First Meal");
        badges.unlock("Level 2 Achieved!");
        badges.unlock("First Meal");
        badges.unlock("Meal Master");

        let names: Vec<&str> = badges.iter().collect();
        assert_eq!(names, ["First Meal", "Level 2 Achieved!", "Meal Master"]);
    }

    #[test]
    fn from_stored_names_drops_duplicates() {
        let badges = Badges::from(vec!["A".to_string(), "B".to_string(), "A".to_string()]);
        assert_eq!(badges.len(), 2);
    }

    #[test]
    fn deserializing_drops_duplicates() {
        let badges: Badges = serde_json::from_str(r#"["A", "A", "B"]"#).unwrap();
        assert_eq!(badges.iter().collect::<Vec<_>>(), ["A", "B"]);
    }

    #[test]
    fn serializes_as_array() {
        let mut badges = Badges::default();
        badges.unlock("Fruit Lover");
        let json = serde_json::to_string(&badges).unwrap();
        assert_eq!(json, r#"["Fruit Lover"]"#);
    }
}
