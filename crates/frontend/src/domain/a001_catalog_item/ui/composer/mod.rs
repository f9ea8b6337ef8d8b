//! Catalog Item Composer UI Module
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: API functions (publish)
//! - view_model.rs: ViewModel wrapping the contracts `ItemComposer` in a signal
//! - view.rs: Leptos components (pure UI)

mod model;
mod view;
mod view_model;

pub use view::ItemComposerPage;
pub use view_model::ItemComposerVm;
