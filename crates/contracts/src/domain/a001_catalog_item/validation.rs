//! Submission-time validation, one rule set per payload kind.
//!
//! Rules run in a fixed order and stop at the first failure:
//! image present, any media present, then the required text fields.

use super::aggregate::{DraftField, ItemDraft};
use super::error::SubmitError;
use super::payload::PayloadKind;
use crate::enums::item_category::ItemCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationRules {
    /// Apply the image/media rules to workshops as well as products
    pub media_rules_for_workshops: bool,
}

pub fn validate(
    category: ItemCategory,
    draft: &ItemDraft,
    rules: ValidationRules,
) -> Result<(), SubmitError> {
    match PayloadKind::of(category) {
        PayloadKind::Envelope | PayloadKind::Product => validate_product(draft),
        PayloadKind::Workshop => validate_workshop(draft, rules),
    }
}

fn validate_product(draft: &ItemDraft) -> Result<(), SubmitError> {
    validate_media(draft)?;
    validate_required(draft)
}

fn validate_workshop(draft: &ItemDraft, rules: ValidationRules) -> Result<(), SubmitError> {
    if rules.media_rules_for_workshops {
        validate_media(draft)?;
    }
    validate_required(draft)
}

fn validate_media(draft: &ItemDraft) -> Result<(), SubmitError> {
    if !draft.has_image() {
        return Err(SubmitError::MissingImage);
    }
    // Implied by the image rule today, kept separate so the two can diverge.
    if !draft.has_media() {
        return Err(SubmitError::MissingMedia);
    }
    Ok(())
}

fn validate_required(draft: &ItemDraft) -> Result<(), SubmitError> {
    [DraftField::Title, DraftField::Price, DraftField::Description]
        .into_iter()
        .find(|field| draft.value(*field).trim().is_empty())
        .map_or(Ok(()), |field| Err(SubmitError::MissingField(field)))
}
