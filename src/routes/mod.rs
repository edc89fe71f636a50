// Route exports
pub mod news;

use actix_web::web;

pub use news::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(news::configure);
}
