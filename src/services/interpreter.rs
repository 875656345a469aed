use serde_json::Value;

use crate::models::{Product, Recommendation, RecommendationResult};

/// Confidence assigned when the model omits a usable score
pub const DEFAULT_CONFIDENCE: i64 = 5;

/// Turns a raw model reply into a catalog-validated `RecommendationResult`
///
/// The reply is not trusted to be clean JSON: the array is located by scanning
/// for the first `[` and the last `]`, which tolerates prose wrapping the
/// payload. Anything that fails beyond that point degrades to an empty result
/// with an error description rather than an error return; transport failures
/// never reach this function.
pub fn interpret(reply: &str, catalog: &[Product]) -> RecommendationResult {
    let Some(payload) = locate_array(reply) else {
        return RecommendationResult::failed("could not find a JSON array in the model reply");
    };

    let entries: Vec<Value> = match serde_json::from_str(payload) {
        Ok(entries) => entries,
        Err(e) => {
            return RecommendationResult::failed(format!(
                "model reply is not a valid JSON array: {e}"
            ))
        }
    };

    let mut recommendations = Vec::new();
    for entry in &entries {
        let Some(product_id) = entry.get("product_id").and_then(Value::as_str) else {
            continue;
        };
        // Unknown ids are dropped, not defaulted.
        let Some(product) = catalog.iter().find(|p| p.id == product_id) else {
            continue;
        };

        let explanation = entry
            .get("explanation")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let confidence_score = entry
            .get("score")
            .and_then(Value::as_i64)
            .unwrap_or(DEFAULT_CONFIDENCE);

        recommendations.push(Recommendation {
            product: product.clone(),
            explanation,
            confidence_score,
        });
    }

    RecommendationResult::from_items(recommendations)
}

/// Extracts the substring between the first `[` and the last `]`, inclusive
fn locate_array(reply: &str) -> Option<&str> {
    let start = reply.find('[')?;
    let end = reply.rfind(']')?;
    if end < start {
        return None;
    }
    Some(&reply[start..=end])
}
