//! ViewModel for the catalog item composer
//!
//! All state lives in one `ItemComposer` from contracts; the ViewModel only
//! exposes reactive reads and turns UI events into composer commands.

use super::model;
use crate::shared::url_state;
use contracts::domain::a001_catalog_item::{DraftField, ValidationRules};
use contracts::enums::item_category::{FieldVisibility, ItemCategory};
use contracts::usecases::u001_publish_item::{ItemComposer, SubmissionStatus, SubmitRejected};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ItemComposerVm {
    pub composer: RwSignal<ItemComposer>,
}

impl ItemComposerVm {
    /// Create the ViewModel, preselecting the category from `?category=` if present
    pub fn new() -> Self {
        let mut composer = ItemComposer::new(ValidationRules::default());
        if let Some(code) = url_state::read_category_code() {
            if let Err(e) = composer.select_category_code(&code) {
                log::warn!("Ignoring ?category={}: {}", code, e);
            }
        }

        Self {
            composer: RwSignal::new(composer),
        }
    }

    // === Reactive reads ===

    pub fn category(&self) -> ItemCategory {
        self.composer.with(|c| c.category())
    }

    pub fn visibility(&self) -> FieldVisibility {
        self.composer.with(|c| c.visibility())
    }

    pub fn field(&self, field: DraftField) -> Signal<String> {
        let composer = self.composer;
        Signal::derive(move || composer.with(|c| c.draft().value(field).to_string()))
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.composer.with(|c| c.draft().tags.contains(tag))
    }

    pub fn status(&self) -> SubmissionStatus {
        self.composer.with(|c| c.status().clone())
    }

    pub fn submit_label(&self) -> Signal<String> {
        let composer = self.composer;
        Signal::derive(move || composer.with(|c| c.submit_label()))
    }

    /// Submit stays disabled while a request is in flight
    pub fn is_submit_disabled(&self) -> Signal<bool> {
        let composer = self.composer;
        Signal::derive(move || composer.with(|c| c.is_in_flight()))
    }

    // === Commands ===

    pub fn select_category(&self, category: ItemCategory) {
        self.composer.update(|c| c.select_category(category));
    }

    pub fn set_field(&self, field: DraftField, value: String) {
        self.composer.update(|c| c.set_field(field, value));
    }

    pub fn toggle_tag(&self, tag: &str) {
        self.composer.update(|c| {
            c.toggle_tag(tag);
        });
    }

    /// Validate, shape and send the draft; the outcome lands in the status line
    pub fn submit(&self) {
        let Some(begun) = self.composer.try_update(|c| c.begin_submit()) else {
            return;
        };
        let request = match begun {
            Ok(request) => request,
            Err(SubmitRejected::InFlight) => {
                log::debug!("Submit ignored: previous submission still in flight");
                return;
            }
            Err(SubmitRejected::Invalid(e)) => {
                log::warn!("Submission rejected: {}", e);
                return;
            }
        };

        log::info!("Publishing {} to {}", request.category, request.endpoint);
        let composer = self.composer;
        leptos::task::spawn_local(async move {
            let outcome = model::publish(&request).await;
            if let Err(e) = &outcome {
                log::error!("Submission Error: {}", e);
            }
            // The page may have been closed while waiting.
            if composer
                .try_update(|c| c.finish_submit(request.category, outcome))
                .is_none()
            {
                log::debug!("Composer disposed before the response arrived");
            }
        });
    }
}

impl Default for ItemComposerVm {
    fn default() -> Self {
        Self::new()
    }
}
