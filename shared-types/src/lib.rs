//! Wire types shared by the oráculo API and its clients.
//!
//! Field names on the wire are Portuguese
//! (`pergunta`, `resposta`, `util`, `comentario`, `interacoes`).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub mod health;
pub mod interaction;
pub mod question;
pub mod typescript_gen;

pub use health::{HealthResponse, STATUS_OK};
pub use interaction::{FeedbackRequest, InteractionItem, InteractionListResponse, MessageResponse};
pub use question::{AskRequest, AskResponse};
pub use typescript_gen::generate_typescript_definitions;

/// Error body returned with non-2xx responses
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
