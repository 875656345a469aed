use serde::{Deserialize, Serialize};

/// Price range selector meaning "no price filter"
pub const ALL_PRICES: &str = "all";

/// A shopper's stated preferences, supplied per request
///
/// `price_range` is either the sentinel `"all"` or a `"low-high"` numeric
/// range string, e.g. `"0-100"`. Field order here is the stable key order
/// used when the preferences are serialized into a prompt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserPreferences {
    #[serde(rename = "priceRange", default = "default_price_range")]
    pub price_range: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub brands: Vec<String>,
}

fn default_price_range() -> String {
    ALL_PRICES.to_string()
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            price_range: default_price_range(),
            categories: Vec::new(),
            brands: Vec::new(),
        }
    }
}
