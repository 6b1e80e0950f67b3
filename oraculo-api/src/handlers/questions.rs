use crate::state::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use shared_types::{AskRequest, AskResponse, ErrorResponse};
use tracing::{error, info};

#[post("/perguntar")]
pub async fn ask(req: web::Json<AskRequest>, state: web::Data<AppState>) -> impl Responder {
    let question = req.into_inner().question;
    info!(question = %question, "Question received");

    match state.resolver.resolve(&question).await {
        Ok(resolution) => HttpResponse::Ok().json(AskResponse {
            question,
            answer: resolution.answer,
        }),
        Err(e) => {
            error!(error = %e, "Failed to resolve question");
            HttpResponse::InternalServerError().json(ErrorResponse::new(format!(
                "Failed to resolve question: {}",
                e
            )))
        }
    }
}
