use crate::state::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use shared_types::{ErrorResponse, FeedbackRequest, MessageResponse};
use tracing::{error, info, warn};

pub const FEEDBACK_RECORDED: &str = "Feedback recebido com sucesso!";
pub const INTERACTION_NOT_FOUND: &str = "Interação não encontrada.";

#[post("/feedback")]
pub async fn record_feedback(
    req: web::Json<FeedbackRequest>,
    state: web::Data<AppState>,
) -> impl Responder {
    let feedback = req.into_inner();

    let matched = match state
        .store
        .update_feedback(
            &feedback.question,
            &feedback.answer,
            feedback.useful,
            feedback.comment.as_deref(),
        )
        .await
    {
        Ok(matched) => matched,
        Err(e) => {
            error!(error = %e, "Failed to record feedback");
            return HttpResponse::InternalServerError().json(ErrorResponse::new(format!(
                "Failed to record feedback: {}",
                e
            )));
        }
    };

    if matched == 0 {
        warn!(question = %feedback.question, "Feedback for unknown interaction");
        return HttpResponse::NotFound().json(ErrorResponse::new(INTERACTION_NOT_FOUND));
    }

    info!(question = %feedback.question, useful = feedback.useful, "Feedback recorded");
    HttpResponse::Ok().json(MessageResponse {
        message: FEEDBACK_RECORDED.to_string(),
    })
}
