use std::fmt::Write;

use crate::models::{Product, UserPreferences};

/// Default cap on candidate products rendered into a prompt
///
/// Bounds token cost per request. Raising it improves recommendation quality
/// at the price of larger prompts; configurable via `MAX_CANDIDATES`.
pub const DEFAULT_MAX_CANDIDATES: usize = 20;

/// System-role framing sent alongside every recommendation prompt
pub const SYSTEM_PROMPT: &str = "You are a helpful eCommerce product recommendation assistant.";

/// Tunables for prompt construction
#[derive(Debug, Clone)]
pub struct PromptOptions {
    pub max_candidates: usize,
}

impl Default for PromptOptions {
    fn default() -> Self {
        Self {
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }
}

/// Renders preferences, browsing history, and the candidate set into a single
/// instruction string
///
/// The layout is fixed: framing and output contract, then preferences as
/// pretty JSON (struct field order keeps the keys stable), then one line per
/// browsed product, then one line per candidate with its id, then a closing
/// reminder. The reminder matters: the interpreter has no fallback for ids
/// outside the candidate list, so the model has to be told twice.
pub fn build_prompt(
    preferences: &UserPreferences,
    browsed: &[&Product],
    candidates: &[&Product],
    options: &PromptOptions,
) -> String {
    let mut prompt = String::from(
        "You are an intelligent eCommerce recommendation engine.\n\
         \n\
         Given the user's preferences and their browsing history, your job is to \
         recommend exactly 5 products from the candidate list below.\n\
         \n\
         Respond ONLY in a valid JSON array. Each recommendation must include:\n\
         - \"product_id\": string\n\
         - \"explanation\": string\n\
         - \"score\": number (confidence score from 1 to 10)\n\
         \n\
         DO NOT include any extra text before or after the JSON.\n\
         \n\
         User Preferences:\n",
    );

    let preferences_json =
        serde_json::to_string_pretty(preferences).unwrap_or_else(|_| "{}".to_string());
    prompt.push_str(&preferences_json);

    prompt.push_str("\n\nBrowsing History:\n");
    for product in browsed {
        let _ = writeln!(
            prompt,
            "- {} ({}, ${}, Brand: {})",
            product.name, product.category, product.price, product.brand
        );
    }

    prompt.push_str("\nCandidate Products:\n");
    for product in candidates.iter().take(options.max_candidates) {
        let _ = writeln!(
            prompt,
            "- ID: {}, Name: {}, Category: {}, Price: ${}, Brand: {}",
            product.id, product.name, product.category, product.price, product.brand
        );
    }

    prompt.push_str(
        "\nREMEMBER: Choose only from the above product list and follow the JSON format exactly.\n",
    );

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str, price: f64) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            category: "footwear".to_string(),
            subcategory: None,
            price,
            brand: "Northbound".to_string(),
            description: None,
            features: None,
            rating: None,
            inventory: None,
            tags: None,
        }
    }

    #[test]
    fn test_sections_appear_in_fixed_order() {
        let shoe = product("p1", "Trail Shoe", 50.0);
        let prompt = build_prompt(
            &UserPreferences::default(),
            &[&shoe],
            &[&shoe],
            &PromptOptions::default(),
        );

        let framing = prompt.find("recommend exactly 5 products").unwrap();
        let prefs = prompt.find("User Preferences:").unwrap();
        let history = prompt.find("Browsing History:").unwrap();
        let candidates = prompt.find("Candidate Products:").unwrap();
        let reminder = prompt.find("REMEMBER:").unwrap();
        assert!(framing < prefs && prefs < history && history < candidates && candidates < reminder);
    }

    #[test]
    fn test_preferences_rendered_as_json_with_stable_keys() {
        let prefs = UserPreferences {
            price_range: "0-100".to_string(),
            categories: vec!["footwear".to_string()],
            brands: vec!["Northbound".to_string()],
        };
        let prompt = build_prompt(&prefs, &[], &[], &PromptOptions::default());

        assert!(prompt.contains(r#""priceRange": "0-100""#));
        let price_key = prompt.find("priceRange").unwrap();
        let categories_key = prompt.find("categories").unwrap();
        let brands_key = prompt.find("brands").unwrap();
        assert!(price_key < categories_key && categories_key < brands_key);
    }

    #[test]
    fn test_candidate_lines_carry_explicit_id() {
        let shoe = product("p1", "Trail Shoe", 50.0);
        let prompt = build_prompt(
            &UserPreferences::default(),
            &[],
            &[&shoe],
            &PromptOptions::default(),
        );
        assert!(prompt
            .contains("- ID: p1, Name: Trail Shoe, Category: footwear, Price: $50, Brand: Northbound"));
    }

    #[test]
    fn test_browsing_history_lines_have_no_id() {
        let shoe = product("p1", "Trail Shoe", 49.99);
        let prompt = build_prompt(
            &UserPreferences::default(),
            &[&shoe],
            &[],
            &PromptOptions::default(),
        );
        assert!(prompt.contains("- Trail Shoe (footwear, $49.99, Brand: Northbound)"));
    }

    #[test]
    fn test_candidates_truncated_to_max() {
        let products: Vec<Product> = (0..30)
            .map(|i| product(&format!("p{i}"), &format!("Product {i}"), 10.0))
            .collect();
        let refs: Vec<&Product> = products.iter().collect();

        let options = PromptOptions { max_candidates: 20 };
        let prompt = build_prompt(&UserPreferences::default(), &[], &refs, &options);

        assert!(prompt.contains("ID: p19,"));
        assert!(!prompt.contains("ID: p20,"));
    }

    #[test]
    fn test_truncation_cap_is_overridable() {
        let products: Vec<Product> = (0..10)
            .map(|i| product(&format!("p{i}"), &format!("Product {i}"), 10.0))
            .collect();
        let refs: Vec<&Product> = products.iter().collect();

        let options = PromptOptions { max_candidates: 3 };
        let prompt = build_prompt(&UserPreferences::default(), &[], &refs, &options);

        assert!(prompt.contains("ID: p2,"));
        assert!(!prompt.contains("ID: p3,"));
    }

    #[test]
    fn test_deterministic_for_identical_inputs() {
        let shoe = product("p1", "Trail Shoe", 50.0);
        let prefs = UserPreferences::default();
        let options = PromptOptions::default();
        let first = build_prompt(&prefs, &[&shoe], &[&shoe], &options);
        let second = build_prompt(&prefs, &[&shoe], &[&shoe], &options);
        assert_eq!(first, second);
    }
}
