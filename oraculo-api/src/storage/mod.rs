use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use shared_types::InteractionItem;

mod memory;
mod mongo;

pub use memory::InMemoryInteractionStore;
pub use mongo::MongoInteractionStore;

/// One resolved question and everything later attached to it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(rename = "pergunta")]
    pub question: String,
    #[serde(rename = "resposta")]
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<bool>,
    #[serde(rename = "comentario", default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Interaction {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id: None,
            question: question.into(),
            answer: answer.into(),
            feedback: None,
            comment: None,
        }
    }
}

impl From<Interaction> for InteractionItem {
    fn from(interaction: Interaction) -> Self {
        // Feedback always sets `comentario`, possibly to null
        let comment = match interaction.feedback {
            Some(_) => Some(interaction.comment),
            None => interaction.comment.map(Some),
        };
        InteractionItem {
            id: interaction.id.map(|id| id.to_hex()).unwrap_or_default(),
            question: interaction.question,
            answer: interaction.answer,
            feedback: interaction.feedback,
            comment,
        }
    }
}

#[async_trait]
pub trait InteractionStore: Send + Sync {
    /// First stored interaction whose question matches exactly
    async fn find_by_question(&self, question: &str) -> Result<Option<Interaction>, StoreError>;

    /// Append a new interaction and return its identifier
    async fn insert(&self, question: &str, answer: &str) -> Result<ObjectId, StoreError>;

    /// Set feedback on the first interaction matching the exact pair, returning how many matched (0 or 1)
    async fn update_feedback(
        &self,
        question: &str,
        answer: &str,
        useful: bool,
        comment: Option<&str>,
    ) -> Result<u64, StoreError>;

    /// A page of interactions in storage order
    async fn list(&self, skip: u64, limit: u64) -> Result<Vec<Interaction>, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Storage operation failed: {0}")]
    OperationFailed(String),
}
