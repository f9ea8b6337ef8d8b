pub mod api_utils;
pub mod components;
pub mod icons;
pub mod keep_alive;
pub mod url_state;
