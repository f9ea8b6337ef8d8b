//! Build-time configuration shared by the composer and the keep-alive task.
//!
//! The backend base URL comes from the `CRAFT_API_URL` environment variable
//! at compile time (the WASM bundle has no process environment at runtime).

/// Fallback backend when `CRAFT_API_URL` is not set during the build
pub const DEFAULT_API_BASE_URL: &str = "https://craftology-backend.onrender.com/api";

/// Fixed tag vocabulary offered for envelopes
pub const TAG_VOCABULARY: [&str; 15] = [
    "Handcrafted",
    "Floral",
    "Modern",
    "Traditional",
    "Minimalist",
    "Royal",
    "Packet Envelope",
    "Diwali",
    "Raksha Bandhan",
    "Wedding",
    "Birthday",
    "Anniversary",
    "Baby Shower",
    "Shagun",
    "House Warming",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: &'static str,
    /// Period of the keep-alive ping (the free hosting tier sleeps after 15 minutes)
    pub keep_alive_interval_ms: u32,
}

pub const API_CONFIG: ApiConfig = ApiConfig {
    base_url: match option_env!("CRAFT_API_URL") {
        Some(url) => url,
        None => DEFAULT_API_BASE_URL,
    },
    keep_alive_interval_ms: 14 * 60 * 1000,
};

impl ApiConfig {
    /// Full URL for an endpoint such as `/envelope`
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), endpoint)
    }

    pub fn is_known_tag(tag: &str) -> bool {
        TAG_VOCABULARY.contains(&tag)
    }
}
