use crate::shared::config::ApiConfig;
use std::collections::BTreeSet;

// ============================================================================
// Tags
// ============================================================================

/// Set of tags picked from the fixed vocabulary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet(BTreeSet<String>);

impl TagSet {
    /// Adds the tag if absent, removes it if present.
    ///
    /// Returns `false` and leaves the set untouched for tags outside the vocabulary.
    pub fn toggle(&mut self, tag: &str) -> bool {
        if !ApiConfig::is_known_tag(tag) {
            return false;
        }
        if !self.0.remove(tag) {
            self.0.insert(tag.to_string());
        }
        true
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }
}

// ============================================================================
// Draft
// ============================================================================

/// The item currently being authored.
///
/// Holds every field of every category; which ones matter is decided by the
/// selected category at submission time, so switching categories never loses input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDraft {
    pub title: String,
    /// Free-form: "500" or "500-1000"
    pub price: String,
    pub description: String,
    pub image: String,
    pub image2: String,
    pub image3: String,

    pub tags: TagSet,
    pub video_link: String,
    pub insta_reel: String,

    // Workshop
    pub date: String,
    pub time: String,
    pub location_name: String,
    pub location_address: String,
    pub map_embed_url: String,
    pub map_link: String,
    /// Raw comma-separated input
    pub features: String,
}

fn present(value: &str) -> bool {
    !value.trim().is_empty()
}

impl ItemDraft {
    pub fn has_image(&self) -> bool {
        present(&self.image) || present(&self.image2) || present(&self.image3)
    }

    pub fn has_media(&self) -> bool {
        self.has_image() || present(&self.video_link) || present(&self.insta_reel)
    }

    pub fn feature_list(&self) -> Vec<String> {
        split_features(&self.features)
    }

    pub fn value(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Price => &self.price,
            DraftField::Description => &self.description,
            DraftField::Image => &self.image,
            DraftField::Image2 => &self.image2,
            DraftField::Image3 => &self.image3,
            DraftField::VideoLink => &self.video_link,
            DraftField::InstaReel => &self.insta_reel,
            DraftField::Date => &self.date,
            DraftField::Time => &self.time,
            DraftField::LocationName => &self.location_name,
            DraftField::LocationAddress => &self.location_address,
            DraftField::MapEmbedUrl => &self.map_embed_url,
            DraftField::MapLink => &self.map_link,
            DraftField::Features => &self.features,
        }
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        let slot = match field {
            DraftField::Title => &mut self.title,
            DraftField::Price => &mut self.price,
            DraftField::Description => &mut self.description,
            DraftField::Image => &mut self.image,
            DraftField::Image2 => &mut self.image2,
            DraftField::Image3 => &mut self.image3,
            DraftField::VideoLink => &mut self.video_link,
            DraftField::InstaReel => &mut self.insta_reel,
            DraftField::Date => &mut self.date,
            DraftField::Time => &mut self.time,
            DraftField::LocationName => &mut self.location_name,
            DraftField::LocationAddress => &mut self.location_address,
            DraftField::MapEmbedUrl => &mut self.map_embed_url,
            DraftField::MapLink => &mut self.map_link,
            DraftField::Features => &mut self.features,
        };
        *slot = value;
    }
}

/// Comma split, trim, drop empties. Order is preserved.
pub fn split_features(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(str::to_string)
        .collect()
}

// ============================================================================
// Fields
// ============================================================================

/// Text inputs of the composer form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Title,
    Price,
    Description,
    Image,
    Image2,
    Image3,
    VideoLink,
    InstaReel,
    Date,
    Time,
    LocationName,
    LocationAddress,
    MapEmbedUrl,
    MapLink,
    Features,
}

impl DraftField {
    pub fn label(&self) -> &'static str {
        match self {
            DraftField::Title => "Title",
            DraftField::Price => "Price",
            DraftField::Description => "Description",
            DraftField::Image => "Image Link 1",
            DraftField::Image2 => "Image Link 2",
            DraftField::Image3 => "Image Link 3",
            DraftField::VideoLink => "Video Link",
            DraftField::InstaReel => "Insta Reel URL",
            DraftField::Date => "Date",
            DraftField::Time => "Time",
            DraftField::LocationName => "Location Name",
            DraftField::LocationAddress => "Location Address",
            DraftField::MapEmbedUrl => "Map Embed URL",
            DraftField::MapLink => "Map Link",
            DraftField::Features => "Features",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            DraftField::Price => "e.g. 500 or 500-1000",
            DraftField::Image => "Primary Image URL",
            DraftField::Image2 => "Secondary Image URL",
            DraftField::Image3 => "Third Image URL",
            DraftField::Date => "e.g. Oct 24, 2024",
            DraftField::Time => "e.g. 2:00 PM - 5:00 PM",
            DraftField::Features => "Comma separated, e.g. Materials included, Snacks",
            _ => "",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(
            self,
            DraftField::Title | DraftField::Price | DraftField::Description
        )
    }
}
