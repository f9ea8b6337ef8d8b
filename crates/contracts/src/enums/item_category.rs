use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Catalog category of the item being composed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    #[default]
    Envelope,
    Scrapbook,
    Coinbox,
    Gaddibox,
    Resin,
    Toran,
    Tag,
    Workshop,
}

/// Which input groups the composer shows for a category.
///
/// Title, price, description and the image links are always visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldVisibility {
    /// Video link and Instagram reel inputs
    pub media: bool,
    /// Tag picker
    pub tags: bool,
    /// Date, time, location, map and features inputs
    pub workshop: bool,
}

impl ItemCategory {
    /// Code used in the UI and in the `?category=` query parameter
    pub fn code(&self) -> &'static str {
        match self {
            ItemCategory::Envelope => "envelope",
            ItemCategory::Scrapbook => "scrapbook",
            ItemCategory::Coinbox => "coinbox",
            ItemCategory::Gaddibox => "gaddibox",
            ItemCategory::Resin => "resin",
            ItemCategory::Toran => "toran",
            ItemCategory::Tag => "tag",
            ItemCategory::Workshop => "workshop",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ItemCategory::Envelope => "Envelope",
            ItemCategory::Scrapbook => "Scrapbook",
            ItemCategory::Coinbox => "Coin Box",
            ItemCategory::Gaddibox => "Gaddi Box",
            ItemCategory::Resin => "Resin",
            ItemCategory::Toran => "Toran",
            ItemCategory::Tag => "Tag",
            ItemCategory::Workshop => "Workshop",
        }
    }

    /// Backend route that accepts items of this category
    pub fn endpoint(&self) -> &'static str {
        match self {
            ItemCategory::Envelope => "/envelope",
            ItemCategory::Scrapbook => "/scrapbook",
            ItemCategory::Coinbox => "/coin",
            ItemCategory::Gaddibox => "/gaddi",
            ItemCategory::Resin => "/resin",
            ItemCategory::Toran => "/torans",
            ItemCategory::Tag => "/tags",
            ItemCategory::Workshop => "/workshops",
        }
    }

    /// All categories in the order the category switch renders them
    pub fn all() -> [ItemCategory; 8] {
        [
            ItemCategory::Envelope,
            ItemCategory::Scrapbook,
            ItemCategory::Coinbox,
            ItemCategory::Gaddibox,
            ItemCategory::Resin,
            ItemCategory::Toran,
            ItemCategory::Tag,
            ItemCategory::Workshop,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.code() == code)
    }

    pub fn is_workshop(&self) -> bool {
        matches!(self, ItemCategory::Workshop)
    }

    /// Everything except workshops is a physical product
    pub fn is_product(&self) -> bool {
        !self.is_workshop()
    }

    pub fn visibility(&self) -> FieldVisibility {
        FieldVisibility {
            media: self.is_product(),
            tags: matches!(self, ItemCategory::Envelope),
            workshop: self.is_workshop(),
        }
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error for a category code outside the known set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid category selected: '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for ItemCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s.trim()).ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for category in ItemCategory::all() {
            assert_eq!(category.code().parse::<ItemCategory>(), Ok(category));
        }
        assert!("furniture".parse::<ItemCategory>().is_err());
    }

    #[test]
    fn test_endpoints_are_unique() {
        let mut endpoints: Vec<_> = ItemCategory::all().iter().map(|c| c.endpoint()).collect();
        endpoints.sort();
        endpoints.dedup();
        assert_eq!(endpoints.len(), 8);
        assert_eq!(ItemCategory::Coinbox.endpoint(), "/coin");
        assert_eq!(ItemCategory::Toran.endpoint(), "/torans");
    }

    #[test]
    fn test_visibility() {
        let workshop = ItemCategory::Workshop.visibility();
        assert!(workshop.workshop && !workshop.media && !workshop.tags);

        let envelope = ItemCategory::Envelope.visibility();
        assert!(envelope.media && envelope.tags && !envelope.workshop);

        let resin = ItemCategory::Resin.visibility();
        assert!(resin.media && !resin.tags && !resin.workshop);
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&ItemCategory::Gaddibox).unwrap();
        assert_eq!(json, "\"gaddibox\"");
    }
}
