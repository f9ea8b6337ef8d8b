use super::aggregate::ItemDraft;
use super::error::SubmitError;
use crate::enums::item_category::ItemCategory;
use serde::Serialize;

// ============================================================================
// Wire payloads
// ============================================================================

/// Fields every category sends
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemBasics {
    pub title: String,
    pub price: String,
    pub description: String,
    pub image: String,
    pub image2: String,
    pub image3: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvelopePayload {
    #[serde(flatten)]
    pub basics: ItemBasics,
    pub tags: Vec<String>,
    pub video_link: String,
    pub insta_reel: String,
}

/// Scrapbooks, coin boxes, gaddi boxes, resin, torans and tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductPayload {
    #[serde(flatten)]
    pub basics: ItemBasics,
    pub video_link: String,
    pub insta_reel: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkshopPayload {
    #[serde(flatten)]
    pub basics: ItemBasics,
    pub date: String,
    pub time: String,
    pub location_name: String,
    pub location_address: String,
    pub map_embed_url: String,
    pub map_link: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CatalogPayload {
    Envelope(EnvelopePayload),
    Product(ProductPayload),
    Workshop(WorkshopPayload),
}

/// Shape family of a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    Envelope,
    Product,
    Workshop,
}

impl PayloadKind {
    pub fn of(category: ItemCategory) -> Self {
        match category {
            ItemCategory::Envelope => PayloadKind::Envelope,
            ItemCategory::Workshop => PayloadKind::Workshop,
            ItemCategory::Scrapbook
            | ItemCategory::Coinbox
            | ItemCategory::Gaddibox
            | ItemCategory::Resin
            | ItemCategory::Toran
            | ItemCategory::Tag => PayloadKind::Product,
        }
    }
}

// ============================================================================
// Shaping
// ============================================================================

fn shape_basics(draft: &ItemDraft) -> ItemBasics {
    ItemBasics {
        title: draft.title.clone(),
        price: draft.price.clone(),
        description: draft.description.clone(),
        image: draft.image.clone(),
        image2: draft.image2.clone(),
        image3: draft.image3.clone(),
    }
}

fn shape_envelope(draft: &ItemDraft) -> EnvelopePayload {
    EnvelopePayload {
        basics: shape_basics(draft),
        tags: draft.tags.to_vec(),
        video_link: draft.video_link.clone(),
        insta_reel: draft.insta_reel.clone(),
    }
}

fn shape_product(draft: &ItemDraft) -> ProductPayload {
    ProductPayload {
        basics: shape_basics(draft),
        video_link: draft.video_link.clone(),
        insta_reel: draft.insta_reel.clone(),
    }
}

fn shape_workshop(draft: &ItemDraft) -> WorkshopPayload {
    WorkshopPayload {
        basics: shape_basics(draft),
        date: draft.date.clone(),
        time: draft.time.clone(),
        location_name: draft.location_name.clone(),
        location_address: draft.location_address.clone(),
        map_embed_url: draft.map_embed_url.clone(),
        map_link: draft.map_link.clone(),
        features: draft.feature_list(),
    }
}

impl CatalogPayload {
    pub fn shape(category: ItemCategory, draft: &ItemDraft) -> Self {
        match PayloadKind::of(category) {
            PayloadKind::Envelope => CatalogPayload::Envelope(shape_envelope(draft)),
            PayloadKind::Product => CatalogPayload::Product(shape_product(draft)),
            PayloadKind::Workshop => CatalogPayload::Workshop(shape_workshop(draft)),
        }
    }

    pub fn basics(&self) -> &ItemBasics {
        match self {
            CatalogPayload::Envelope(p) => &p.basics,
            CatalogPayload::Product(p) => &p.basics,
            CatalogPayload::Workshop(p) => &p.basics,
        }
    }
}

/// A shaped payload together with where it goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapedRequest {
    pub category: ItemCategory,
    pub endpoint: &'static str,
    pub payload: CatalogPayload,
}

impl ShapedRequest {
    pub fn new(category: ItemCategory, draft: &ItemDraft) -> Self {
        Self {
            category,
            endpoint: category.endpoint(),
            payload: CatalogPayload::shape(category, draft),
        }
    }

    /// Shape from a raw category code; unknown codes fail before anything is sent.
    pub fn from_code(code: &str, draft: &ItemDraft) -> Result<Self, SubmitError> {
        let category: ItemCategory = code.parse()?;
        Ok(Self::new(category, draft))
    }

    pub fn to_json(&self) -> Result<String, SubmitError> {
        serde_json::to_string(&self.payload).map_err(|e| SubmitError::Encoding(e.to_string()))
    }
}
