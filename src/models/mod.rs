// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::Article;
pub use requests::CityPath;
pub use responses::{ErrorResponse, HealthResponse};
