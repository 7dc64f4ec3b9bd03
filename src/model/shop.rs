//! The shop catalogue.

/// Something points can buy. The item name is granted as a badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopItem {
    pub id: u32,
    pub name: &'static str,
    pub cost: u64,
}

pub const SHOP_ITEMS: [ShopItem; 3] = [
    ShopItem {
        id: 1,
        name: "Custom Avatar",
        cost: 500,
    },
    ShopItem {
        id: 2,
        name: "Special Theme",
        cost: 300,
    },
    ShopItem {
        id: 3,
        name: "Animated Badge",
        cost: 700,
    },
];

impl ShopItem {
    /// Finds a catalogue item by name, ignoring ASCII case.
    pub fn find(name: &str) -> Option<&'static Self> {
        SHOP_ITEMS
            .iter()
            .find(|item| item.name.eq_ignore_ascii_case(name.trim()))
    }
}
