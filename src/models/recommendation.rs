use serde::{Deserialize, Serialize};

use super::{Product, UserPreferences};

/// Request body for the recommendations endpoint
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub preferences: UserPreferences,
    #[serde(default)]
    pub browsing_history: Vec<String>,
}

/// A single recommendation: the model's claim joined with the full catalog record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub product: Product,
    pub explanation: String,
    /// Confidence supplied by the model, passed through verbatim
    pub confidence_score: i64,
}

/// The outcome of one recommendation request
///
/// `count` always equals `recommendations.len()`. `error` is set only when
/// the model reply could not be interpreted; the list is empty in that case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationResult {
    pub recommendations: Vec<Recommendation>,
    pub count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RecommendationResult {
    /// Builds a successful result, deriving `count` from the list
    pub fn from_items(recommendations: Vec<Recommendation>) -> Self {
        let count = recommendations.len();
        Self {
            recommendations,
            count,
            error: None,
        }
    }

    /// Builds the fail-soft result: empty list plus a description of what went wrong
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            recommendations: Vec::new(),
            count: 0,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        Product {
            id: "p1".to_string(),
            name: "Trail Shoe".to_string(),
            category: "footwear".to_string(),
            subcategory: None,
            price: 89.99,
            brand: "Northbound".to_string(),
            description: None,
            features: None,
            rating: None,
            inventory: None,
            tags: None,
        }
    }

    #[test]
    fn test_count_matches_list_length() {
        let result = RecommendationResult::from_items(vec![Recommendation {
            product: sample_product(),
            explanation: "matches budget".to_string(),
            confidence_score: 8,
        }]);
        assert_eq!(result.count, 1);
        assert_eq!(result.count, result.recommendations.len());
        assert!(result.error.is_none());
    }

    #[test]
    fn test_success_body_omits_error_field() {
        let result = RecommendationResult::from_items(vec![]);
        let value = serde_json::to_value(&result).unwrap();
        assert!(value.get("error").is_none());
        assert_eq!(value["count"], 0);
    }

    #[test]
    fn test_failed_result_carries_error_and_empty_list() {
        let result = RecommendationResult::failed("no JSON array found");
        assert!(result.recommendations.is_empty());
        assert_eq!(result.count, 0);
        assert_eq!(result.error.as_deref(), Some("no JSON array found"));
    }

    #[test]
    fn test_request_body_fields_all_default() {
        let request: RecommendationRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.preferences.price_range, "all");
        assert!(request.browsing_history.is_empty());
    }
}
