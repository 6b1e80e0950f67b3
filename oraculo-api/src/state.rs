use crate::cache::AnswerCache;
use crate::resolver::AnswerResolver;
use crate::storage::InteractionStore;
use std::sync::Arc;

/// Long-lived backends shared by every request handler
pub struct AppState {
    pub resolver: AnswerResolver,
    pub store: Arc<dyn InteractionStore>,
    pub cache: Arc<dyn AnswerCache>,
}
