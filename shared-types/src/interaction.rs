use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

/// Body of `POST /feedback/`
///
/// The target interaction is located by exact question and answer text.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct FeedbackRequest {
    #[serde(rename = "pergunta")]
    pub question: String,
    #[serde(rename = "resposta")]
    pub answer: String,
    #[serde(rename = "util")]
    pub useful: bool,
    #[serde(rename = "comentario", default)]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct MessageResponse {
    pub message: String,
}

/// A stored interaction as rendered by `GET /interacoes/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
pub struct InteractionItem {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "pergunta")]
    pub question: String,
    #[serde(rename = "resposta")]
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<bool>,
    /// Absent until feedback is given, then the comment or `null`
    #[serde(
        rename = "comentario",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_or_null"
    )]
    #[ts(optional)]
    pub comment: Option<Option<String>>,
}

/// Keep an explicit `null` apart from a missing field
fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct InteractionListResponse {
    #[serde(rename = "interacoes")]
    pub interactions: Vec<InteractionItem>,
}
