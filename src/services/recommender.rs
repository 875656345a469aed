use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{RecommendationResult, UserPreferences},
    services::{
        catalog::Catalog,
        interpreter::interpret,
        price_filter::filter_by_price,
        prompt::{build_prompt, PromptOptions, SYSTEM_PROMPT},
        providers::{ChatMessage, CompletionProvider},
    },
};

/// Orchestrates one recommendation request
///
/// Sequences the pipeline strictly left to right: price filter → browsed
/// product lookup → prompt construction → completion call → interpretation.
/// Holds no state across calls; everything is recomputed per request.
pub struct Recommender {
    provider: Arc<dyn CompletionProvider>,
    options: PromptOptions,
}

impl Recommender {
    pub fn new(provider: Arc<dyn CompletionProvider>, options: PromptOptions) -> Self {
        Self { provider, options }
    }

    /// Produces recommendations for one request
    ///
    /// A failed completion call propagates as a hard error. A reply that
    /// cannot be interpreted comes back as an `Ok` result with an empty list
    /// and an error annotation; distinguishing the two is the HTTP layer's
    /// job.
    pub async fn recommend(
        &self,
        catalog: &Catalog,
        preferences: &UserPreferences,
        browsing_history: &[String],
    ) -> AppResult<RecommendationResult> {
        let candidates = filter_by_price(catalog.products(), &preferences.price_range);

        // Browsing history ids with no catalog match are dropped here.
        let browsed: Vec<_> = browsing_history
            .iter()
            .filter_map(|id| catalog.find(id))
            .collect();

        tracing::info!(
            candidates = candidates.len(),
            browsed = browsed.len(),
            history_len = browsing_history.len(),
            price_range = %preferences.price_range,
            provider = self.provider.name(),
            "Building recommendation prompt"
        );

        let prompt = build_prompt(preferences, &browsed, &candidates, &self.options);
        let messages = [ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(prompt)];

        let reply = self.provider.complete(&messages).await?;

        let result = interpret(&reply, catalog.products());
        if let Some(error) = &result.error {
            tracing::warn!(error = %error, "Model reply could not be interpreted");
        } else {
            tracing::info!(count = result.count, "Recommendations generated");
        }

        Ok(result)
    }
}
