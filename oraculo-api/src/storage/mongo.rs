use super::{Interaction, InteractionStore, StoreError};
use crate::config::MongoConfig;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Client, Collection, Database};
use tracing::debug;

/// Interaction log kept in a MongoDB collection
pub struct MongoInteractionStore {
    database: Database,
    collection: Collection<Interaction>,
}

impl MongoInteractionStore {
    /// Parse the URI and build a pooled client
    ///
    /// No server round trip happens here; an unreachable server only shows up on first use.
    pub async fn connect(config: &MongoConfig) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(&config.uri).await?;
        let database = client.database(&config.database);
        let collection = database.collection::<Interaction>(&config.collection);
        Ok(Self {
            database,
            collection,
        })
    }
}

#[async_trait]
impl InteractionStore for MongoInteractionStore {
    async fn find_by_question(&self, question: &str) -> Result<Option<Interaction>, StoreError> {
        let found = self.collection.find_one(doc! { "pergunta": question }).await?;
        debug!(hit = found.is_some(), "MongoDB lookup");
        Ok(found)
    }

    async fn insert(&self, question: &str, answer: &str) -> Result<ObjectId, StoreError> {
        let result = self
            .collection
            .insert_one(Interaction::new(question, answer))
            .await?;
        result.inserted_id.as_object_id().ok_or_else(|| {
            StoreError::OperationFailed(format!(
                "unexpected inserted id: {}",
                result.inserted_id
            ))
        })
    }

    async fn update_feedback(
        &self,
        question: &str,
        answer: &str,
        useful: bool,
        comment: Option<&str>,
    ) -> Result<u64, StoreError> {
        let result = self
            .collection
            .update_one(
                doc! { "pergunta": question, "resposta": answer },
                doc! { "$set": { "feedback": useful, "comentario": comment } },
            )
            .await?;
        Ok(result.matched_count)
    }

    async fn list(&self, skip: u64, limit: u64) -> Result<Vec<Interaction>, StoreError> {
        // MongoDB reads a limit of 0 as "no limit"
        if limit == 0 {
            return Ok(Vec::new());
        }

        let limit = i64::try_from(limit)
            .map_err(|_| StoreError::OperationFailed(format!("limit out of range: {}", limit)))?;
        let cursor = self.collection.find(doc! {}).skip(skip).limit(limit).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
