use actix_web::web;

pub mod feedback;
pub mod health;
pub mod interactions;
pub mod questions;

/// Register every route; paths carry no trailing slash, so wrap the app in `NormalizePath::trim()`
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(questions::ask)
        .service(feedback::record_feedback)
        .service(interactions::list_interactions)
        .service(health::health_check);
}
