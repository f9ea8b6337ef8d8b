use crate::domain::a001_catalog_item::ui::composer::ItemComposerPage;
use crate::shared::keep_alive::use_keep_alive;
use contracts::shared::config::API_CONFIG;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Lives as long as the page; independent of the composer state.
    use_keep_alive(API_CONFIG.keep_alive_interval_ms);

    view! {
        <ItemComposerPage />
    }
}
