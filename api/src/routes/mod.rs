//! Routes owned by the service itself

pub mod health;

use actix_web::web;

/// Register the service routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check));
}
