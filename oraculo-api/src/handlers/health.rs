use crate::state::AppState;
use actix_web::{get, web, HttpResponse, Responder};
use shared_types::{HealthResponse, STATUS_OK};
use std::fmt::Display;
use tracing::warn;

#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let (mongo, redis) = tokio::join!(state.store.ping(), state.cache.ping());

    let response = HealthResponse {
        mongo: status_of("mongo", mongo),
        redis: status_of("redis", redis),
    };

    HttpResponse::Ok().json(response)
}

fn status_of<E: Display>(backend: &str, result: Result<(), E>) -> String {
    match result {
        Ok(()) => STATUS_OK.to_string(),
        Err(e) => {
            warn!(backend = backend, error = %e, "Health check failed");
            format!("Erro: {}", e)
        }
    }
}
