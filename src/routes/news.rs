use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use crate::config::RelaySettings;
use crate::core::relevance::filter_response;
use crate::models::{CityPath, ErrorResponse, HealthResponse};
use crate::services::NewsApiClient;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub news_api: Arc<NewsApiClient>,
    pub relay: RelaySettings,
}

/// Configure all news-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/news/{city}", web::get().to(get_news));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// City news endpoint
///
/// GET /news/{city}
///
/// Returns the upstream search response. With the relevance filter enabled,
/// `articles` only holds the articles judged to be about `city`.
async fn get_news(
    state: web::Data<AppState>,
    path: web::Path<CityPath>,
) -> impl Responder {
    let city = &path.city;
    let page_size = state.relay.page_size;

    tracing::info!(
        "Fetching news for city: {}, page_size: {}, filter: {}",
        city,
        page_size,
        state.relay.enable_relevance_filter
    );

    let body = match state.news_api.search_everything(city, page_size).await {
        Ok(body) => body,
        Err(e) => {
            tracing::error!("Failed to fetch news for {}: {}", city, e);
            return error_response(e.status_code(), "Failed to fetch news", e.to_string());
        }
    };

    if !state.relay.enable_relevance_filter {
        return HttpResponse::Ok().json(body);
    }

    match filter_response(body, city) {
        Ok(filtered) => {
            let returned = filtered
                .get("articles")
                .and_then(|a| a.as_array())
                .map_or(0, |a| a.len());
            tracing::info!("Returning {} relevant articles for {}", returned, city);

            HttpResponse::Ok().json(filtered)
        }
        Err(e) => {
            tracing::error!("Unexpected news response shape for {}: {}", city, e);
            error_response(StatusCode::BAD_GATEWAY, "Invalid upstream response", e.to_string())
        }
    }
}

fn error_response(status: StatusCode, error: &str, message: String) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: status.as_u16(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_status() {
        let response = error_response(StatusCode::BAD_GATEWAY, "Failed", "upstream down".to_string());
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
