use crate::domain::a001_catalog_item::{
    validate, DraftField, ItemDraft, ShapedRequest, SubmitError, ValidationRules,
};
use crate::enums::item_category::{FieldVisibility, ItemCategory};

/// Outcome of the last submission attempt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Success(String),
    Error(String),
}

impl SubmissionStatus {
    pub fn message(&self) -> Option<&str> {
        match self {
            SubmissionStatus::Idle => None,
            SubmissionStatus::Success(m) | SubmissionStatus::Error(m) => Some(m.as_str()),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, SubmissionStatus::Error(_))
    }
}

/// Why `begin_submit` did not hand out a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    /// Another submission is still waiting for its response
    InFlight,
    Invalid(SubmitError),
}

/// State of one composer session: selected category, draft, status and the
/// single-flight flag.
///
/// Submission is split in two so the network await happens outside any borrow:
/// `begin_submit` validates and shapes, `finish_submit` applies the outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemComposer {
    category: ItemCategory,
    draft: ItemDraft,
    status: SubmissionStatus,
    in_flight: bool,
    rules: ValidationRules,
}

impl ItemComposer {
    pub fn new(rules: ValidationRules) -> Self {
        Self {
            rules,
            ..Default::default()
        }
    }

    pub fn category(&self) -> ItemCategory {
        self.category
    }

    pub fn draft(&self) -> &ItemDraft {
        &self.draft
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn visibility(&self) -> FieldVisibility {
        self.category.visibility()
    }

    /// Entered values survive the switch; they are only hidden.
    pub fn select_category(&mut self, category: ItemCategory) {
        self.category = category;
    }

    /// Select by code, e.g. from the page URL. Unknown codes keep the current
    /// category and report the error in the status line.
    pub fn select_category_code(&mut self, code: &str) -> Result<(), SubmitError> {
        match code.parse::<ItemCategory>() {
            Ok(category) => {
                self.category = category;
                Ok(())
            }
            Err(e) => {
                let err = SubmitError::from(e);
                self.status = SubmissionStatus::Error(err.to_string());
                Err(err)
            }
        }
    }

    pub fn set_field(&mut self, field: DraftField, value: String) {
        self.draft.set(field, value);
    }

    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        self.draft.tags.toggle(tag)
    }

    /// Validate and shape the draft, marking the composer in flight.
    ///
    /// Clears the previous status. Validation failures land in the status and
    /// leave the composer idle.
    pub fn begin_submit(&mut self) -> Result<ShapedRequest, SubmitRejected> {
        if self.in_flight {
            return Err(SubmitRejected::InFlight);
        }
        self.status = SubmissionStatus::Idle;

        if let Err(err) = validate(self.category, &self.draft, self.rules) {
            self.status = SubmissionStatus::Error(err.to_string());
            return Err(SubmitRejected::Invalid(err));
        }

        self.in_flight = true;
        Ok(ShapedRequest::new(self.category, &self.draft))
    }

    /// Apply the response of the request handed out by `begin_submit`.
    ///
    /// `submitted` is the category the request was shaped for, which may differ
    /// from the current selection if the operator switched while waiting.
    pub fn finish_submit(&mut self, submitted: ItemCategory, outcome: Result<(), SubmitError>) {
        self.in_flight = false;
        match outcome {
            Ok(()) => {
                self.status = SubmissionStatus::Success(format!(
                    "Successfully added to {}!",
                    submitted.code().to_uppercase()
                ));
                self.draft = ItemDraft::default();
            }
            Err(err) => self.status = SubmissionStatus::Error(err.to_string()),
        }
    }

    /// Label of the submit button
    pub fn submit_label(&self) -> String {
        if self.in_flight {
            "SAVING...".to_string()
        } else {
            format!("PUBLISH {}", self.category.code().to_uppercase())
        }
    }
}
