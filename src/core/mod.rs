// Core algorithm exports
pub mod relevance;

pub use relevance::{filter_articles, filter_response, is_relevant, ResponseShapeError, RELEVANCE_THRESHOLD};
