use serde::{Deserialize, Serialize};

/// Path parameters for `GET /news/{city}`
///
/// The city is passed through as-is; any string is accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityPath {
    pub city: String,
}
