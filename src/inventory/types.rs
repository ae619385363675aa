use crate::{Error, config::SeedConfig};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, str::FromStr};

/// The closed set of items the inventory knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Item {
    Tshirts,
    Pants,
}

impl Item {
    pub const ALL: [Item; 2] = [Item::Tshirts, Item::Pants];

    pub fn as_str(&self) -> &'static str {
        match self {
            Item::Tshirts => "tshirts",
            Item::Pants => "pants",
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Item {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tshirts" => Ok(Item::Tshirts),
            "pants" => Ok(Item::Pants),
            _ => Err(Error::InvalidItem(s.to_string())),
        }
    }
}

/// Snapshot of every item's stock count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InventoryState(BTreeMap<Item, u32>);

impl InventoryState {
    pub fn new(tshirts: u32, pants: u32) -> Self {
        Self(BTreeMap::from([(Item::Tshirts, tshirts), (Item::Pants, pants)]))
    }

    pub fn get(&self, item: Item) -> u32 {
        self.0.get(&item).copied().unwrap_or(0)
    }

    pub(crate) fn set(&mut self, item: Item, count: u32) {
        self.0.insert(item, count);
    }
}

impl From<&SeedConfig> for InventoryState {
    fn from(seed: &SeedConfig) -> Self {
        Self::new(seed.tshirts, seed.pants)
    }
}

impl Default for InventoryState {
    fn default() -> Self {
        Self::from(&SeedConfig::default())
    }
}

/// Body of `POST /inventory`. The item stays a raw string so that names
/// outside the closed set are reported as invalid items rather than as
/// malformed JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRequest {
    pub item: String,
    pub change: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("tshirts", Item::Tshirts)]
    #[case("TShirts", Item::Tshirts)]
    #[case(" pants ", Item::Pants)]
    #[case("PANTS", Item::Pants)]
    fn test_item_parsing_is_case_insensitive(#[case] raw: &str, #[case] expected: Item) {
        assert_eq!(raw.parse::<Item>().unwrap(), expected);
    }

    #[rstest]
    #[case("hats")]
    #[case("t shirts")]
    #[case("")]
    fn test_item_outside_closed_set(#[case] raw: &str) {
        let err = raw.parse::<Item>().unwrap_err();
        assert!(matches!(err, Error::InvalidItem(name) if name == raw));
    }

    #[test]
    fn test_state_serializes_as_flat_object() {
        let state = InventoryState::new(20, 15);
        assert_eq!(
            serde_json::to_value(&state).unwrap(),
            json!({"tshirts": 20, "pants": 15})
        );
        assert_eq!(
            serde_json::to_string(&state).unwrap(),
            r#"{"tshirts":20,"pants":15}"#
        );
    }

    #[test]
    fn test_state_deserializes_from_service_reply() {
        let state: InventoryState =
            serde_json::from_value(json!({"pants": 2, "tshirts": 7})).unwrap();
        assert_eq!(state, InventoryState::new(7, 2));
    }

    #[test]
    fn test_missing_item_reads_as_zero() {
        let state: InventoryState = serde_json::from_value(json!({"pants": 2})).unwrap();
        assert_eq!(state.get(Item::Tshirts), 0);
    }
}
