use super::aggregate::DraftField;
use crate::enums::item_category::UnknownCategory;

/// Why a submission attempt ended without creating the item.
///
/// `Display` is the text shown to the operator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("At least one image link must be provided.")]
    MissingImage,

    #[error("At least one media type (Image, Video Link, or Insta Reel) must be provided.")]
    MissingMedia,

    #[error("{} is required.", .0.label())]
    MissingField(DraftField),

    #[error(transparent)]
    InvalidCategory(#[from] UnknownCategory),

    /// No response: the request could not be sent or the connection failed
    #[error("{0}")]
    Transport(String),

    /// Backend answered with a non-success status
    #[error("{message}")]
    Application { status: u16, message: String },

    #[error("Failed to encode payload: {0}")]
    Encoding(String),
}
