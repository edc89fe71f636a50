//! City News Relay - serves city-relevant news articles
//!
//! This library fetches articles for a city from the NewsAPI search endpoint
//! and keeps the ones whose title or body is about that city.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{filter_articles, filter_response, is_relevant, RELEVANCE_THRESHOLD};
pub use models::Article;
pub use routes::AppState;
pub use services::{NewsApiClient, NewsApiError};
