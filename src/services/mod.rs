// Service exports
pub mod news_api;

pub use news_api::{NewsApiClient, NewsApiError};
