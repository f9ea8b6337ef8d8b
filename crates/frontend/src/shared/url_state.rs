//! `?category=` query parameter: read on start, replaced on every switch.

use serde::{Deserialize, Serialize};
use web_sys::window;

#[derive(Debug, Default, Serialize, Deserialize)]
struct PageQuery {
    category: Option<String>,
}

fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

pub fn read_category_code() -> Option<String> {
    let search = current_search();
    serde_qs::from_str::<PageQuery>(search.trim_start_matches('?'))
        .ok()
        .and_then(|q| q.category)
}

pub fn write_category_code(code: &str) {
    let query = PageQuery {
        category: Some(code.to_string()),
    };
    let Ok(query_string) = serde_qs::to_string(&query) else {
        return;
    };
    let new_url = format!("?{}", query_string);

    // Only update URL if it actually changed
    if current_search() == new_url {
        return;
    }
    if let Some(w) = window() {
        if let Ok(history) = w.history() {
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url));
        }
    }
}
