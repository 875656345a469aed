pub mod catalog;
pub mod interpreter;
pub mod price_filter;
pub mod prompt;
pub mod providers;
pub mod recommender;

pub use catalog::Catalog;
pub use recommender::Recommender;
