use super::{Interaction, InteractionStore, StoreError};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone, Default)]
pub struct InMemoryInteractionStore {
    interactions: Arc<Mutex<Vec<Interaction>>>,
    offline: Arc<AtomicBool>,
}

impl InMemoryInteractionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every stored interaction, in insertion order
    pub fn snapshot(&self) -> Vec<Interaction> {
        self.lock().map(|guard| guard.clone()).unwrap_or_default()
    }

    /// Make every operation fail as if the server were unreachable
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Interaction>>, StoreError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::OperationFailed(
                "server selection timeout".to_string(),
            ));
        }
        self.interactions
            .lock()
            .map_err(|e| StoreError::OperationFailed(format!("Lock error: {}", e)))
    }
}

#[async_trait]
impl InteractionStore for InMemoryInteractionStore {
    async fn find_by_question(&self, question: &str) -> Result<Option<Interaction>, StoreError> {
        Ok(self
            .lock()?
            .iter()
            .find(|interaction| interaction.question == question)
            .cloned())
    }

    async fn insert(&self, question: &str, answer: &str) -> Result<ObjectId, StoreError> {
        let id = ObjectId::new();
        let mut interaction = Interaction::new(question, answer);
        interaction.id = Some(id);
        self.lock()?.push(interaction);
        Ok(id)
    }

    async fn update_feedback(
        &self,
        question: &str,
        answer: &str,
        useful: bool,
        comment: Option<&str>,
    ) -> Result<u64, StoreError> {
        let mut interactions = self.lock()?;
        // Same as update_one: only the first match changes
        match interactions
            .iter_mut()
            .find(|i| i.question == question && i.answer == answer)
        {
            Some(interaction) => {
                interaction.feedback = Some(useful);
                interaction.comment = comment.map(str::to_string);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn list(&self, skip: u64, limit: u64) -> Result<Vec<Interaction>, StoreError> {
        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(self
            .lock()?
            .iter()
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.lock().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_find_returns_first_insert() {
        let store = InMemoryInteractionStore::new();
        store.insert("q", "first").await.unwrap();
        store.insert("q", "second").await.unwrap();

        let found = store.find_by_question("q").await.unwrap().unwrap();
        assert_eq!(found.answer, "first");
        assert!(store.find_by_question("Q").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_feedback_matches_exact_pair() {
        let store = InMemoryInteractionStore::new();
        store.insert("q", "a").await.unwrap();

        assert_eq!(store.update_feedback("q", "b", true, None).await.unwrap(), 0);
        assert_eq!(
            store
                .update_feedback("q", "a", true, Some("nice"))
                .await
                .unwrap(),
            1
        );
        assert_eq!(store.update_feedback("q", "a", false, None).await.unwrap(), 1);

        let stored = &store.snapshot()[0];
        assert_eq!(stored.feedback, Some(false));
        assert!(stored.comment.is_none());
    }

    #[tokio::test]
    async fn test_update_feedback_changes_only_first_duplicate() {
        let store = InMemoryInteractionStore::new();
        store.insert("q", "a").await.unwrap();
        store.insert("q", "a").await.unwrap();

        let matched = store
            .update_feedback("q", "a", true, Some("ok"))
            .await
            .unwrap();

        assert_eq!(matched, 1);
        let stored = store.snapshot();
        assert_eq!(stored[0].feedback, Some(true));
        assert!(stored[1].feedback.is_none());
        assert!(stored[1].comment.is_none());
    }

    #[tokio::test]
    async fn test_list_pages_in_insertion_order() {
        let store = InMemoryInteractionStore::new();
        for i in 0..5 {
            store.insert(&format!("q{}", i), "a").await.unwrap();
        }

        let page = store.list(1, 2).await.unwrap();
        let questions: Vec<_> = page.iter().map(|i| i.question.as_str()).collect();
        assert_eq!(questions, vec!["q1", "q2"]);
        assert!(store.list(10, 2).await.unwrap().is_empty());
        assert!(store.list(0, 0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_offline_store_fails() {
        let store = InMemoryInteractionStore::new();
        store.set_offline(true);

        assert!(store.ping().await.is_err());
        assert!(store.insert("q", "a").await.is_err());
    }
}
