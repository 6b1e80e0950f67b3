use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Body of `POST /perguntar/`
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct AskRequest {
    #[serde(rename = "pergunta")]
    pub question: String,
}

/// Answer returned by `POST /perguntar/`
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct AskResponse {
    #[serde(rename = "pergunta")]
    pub question: String,
    #[serde(rename = "resposta")]
    pub answer: String,
}
