//! Catalog item draft: fields, validation and per-category payload shaping.

pub mod aggregate;
pub mod error;
pub mod payload;
pub mod validation;

pub use aggregate::{split_features, DraftField, ItemDraft, TagSet};
pub use error::SubmitError;
pub use payload::{CatalogPayload, PayloadKind, ShapedRequest};
pub use validation::{validate, ValidationRules};
