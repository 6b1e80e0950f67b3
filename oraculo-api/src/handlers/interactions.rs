use crate::state::AppState;
use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;
use shared_types::{ErrorResponse, InteractionItem, InteractionListResponse};
use tracing::{debug, error};

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub skip: u64,
    pub limit: Option<u64>,
}

impl ListQuery {
    /// Requested page size, capped at `MAX_PAGE_SIZE`
    pub fn page_size(&self) -> u64 {
        self.limit.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE)
    }
}

#[get("/interacoes")]
pub async fn list_interactions(
    query: web::Query<ListQuery>,
    state: web::Data<AppState>,
) -> impl Responder {
    let limit = query.page_size();
    debug!(skip = query.skip, limit = limit, "Listing interactions");

    match state.store.list(query.skip, limit).await {
        Ok(interactions) => HttpResponse::Ok().json(InteractionListResponse {
            interactions: interactions
                .into_iter()
                .map(InteractionItem::from)
                .collect(),
        }),
        Err(e) => {
            error!(error = %e, "Failed to list interactions");
            HttpResponse::InternalServerError().json(ErrorResponse::new(format!(
                "Failed to list interactions: {}",
                e
            )))
        }
    }
}
