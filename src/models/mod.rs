pub mod preferences;
pub mod product;
pub mod recommendation;

pub use preferences::UserPreferences;
pub use product::Product;
pub use recommendation::{Recommendation, RecommendationRequest, RecommendationResult};
