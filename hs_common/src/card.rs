use serde::{Deserialize, Serialize};

/// Card rarity tiers that have a crafting cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
    /// Anything else, including "Free" and blank rarities
    Unknown,
}

impl Rarity {
    /// Returns the rarity name as it appears in card data (e.g., "Epic")
    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Unknown => "Unknown",
        }
    }

    /// Parse a rarity name. Matching is exact; unrecognized text is `Unknown`.
    pub fn parse(s: &str) -> Self {
        match s {
            "Common" => Rarity::Common,
            "Rare" => Rarity::Rare,
            "Epic" => Rarity::Epic,
            "Legendary" => Rarity::Legendary,
            _ => Rarity::Unknown,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: String,
    pub name: String,
    #[serde(rename = "localizedName", default)]
    pub localized_name: String,
    #[serde(default)]
    pub rarity: String,
    #[serde(default)]
    pub set: String,
    #[serde(default = "default_count")]
    pub count: u32,
    #[serde(default)]
    pub cost: u32,
    #[serde(rename = "playerClass", default)]
    pub player_class: Option<String>,
}

fn default_count() -> u32 {
    1
}

impl Card {
    pub fn new(id: &str, name: &str, rarity: &str, set: &str, count: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            localized_name: String::new(),
            rarity: rarity.to_string(),
            set: set.to_string(),
            count,
            cost: 0,
            player_class: None,
        }
    }

    /// Parsed rarity of this card
    pub fn rarity(&self) -> Rarity {
        Rarity::parse(&self.rarity)
    }

    /// Returns the localized name, falling back to the English name when blank
    pub fn display_name(&self) -> &str {
        if self.localized_name.trim().is_empty() {
            &self.name
        } else {
            &self.localized_name
        }
    }

    /// Returns true if this card belongs to `set`, ignoring case
    pub fn is_in_set(&self, set: &str) -> bool {
        self.set.to_lowercase() == set.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarity_parse_known_names() {
        assert_eq!(Rarity::parse("Common"), Rarity::Common);
        assert_eq!(Rarity::parse("Rare"), Rarity::Rare);
        assert_eq!(Rarity::parse("Epic"), Rarity::Epic);
        assert_eq!(Rarity::parse("Legendary"), Rarity::Legendary);
    }

    #[test]
    fn test_rarity_parse_unknown() {
        assert_eq!(Rarity::parse("Free"), Rarity::Unknown);
        assert_eq!(Rarity::parse(""), Rarity::Unknown);
        assert_eq!(Rarity::parse("legendary"), Rarity::Unknown);
    }

    #[test]
    fn test_rarity_round_trips_through_as_str() {
        for rarity in [Rarity::Common, Rarity::Rare, Rarity::Epic, Rarity::Legendary] {
            assert_eq!(Rarity::parse(rarity.as_str()), rarity);
        }
    }

    #[test]
    fn test_display_name_falls_back_to_name() {
        let mut card = Card::new("EX1_001", "Lightwarden", "Rare", "Expert", 1);
        assert_eq!(card.display_name(), "Lightwarden");

        card.localized_name = "Gardelumière".to_string();
        assert_eq!(card.display_name(), "Gardelumière");

        card.localized_name = "   ".to_string();
        assert_eq!(card.display_name(), "Lightwarden");
    }

    #[test]
    fn test_is_in_set_ignores_case() {
        let card = Card::new("FP1_014", "Stalagg", "Rare", "Curse of Naxxramas", 1);
        assert!(card.is_in_set("CURSE OF NAXXRAMAS"));
        assert!(card.is_in_set("curse of naxxramas"));
        assert!(!card.is_in_set("PROMOTION"));
    }

    #[test]
    fn test_card_deserialize_defaults() {
        let card: Card =
            serde_json::from_str(r#"{"id":"CS2_029","name":"Fireball"}"#).unwrap();
        assert_eq!(card.count, 1);
        assert_eq!(card.rarity(), Rarity::Unknown);
        assert_eq!(card.display_name(), "Fireball");
        assert!(card.player_class.is_none());
    }
}
