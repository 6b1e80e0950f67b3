//! Answer cache keyed by the literal question text.
//!
//! Entries never expire. A newer answer for the same question overwrites the
//! previous one.

use async_trait::async_trait;

mod memory;
mod redis;

pub use self::memory::InMemoryAnswerCache;
pub use self::redis::RedisAnswerCache;

#[async_trait]
pub trait AnswerCache: Send + Sync {
    /// Cached answer for `question`, if any
    async fn get(&self, question: &str) -> Result<Option<String>, CacheError>;

    /// Store `answer` under `question`, replacing any previous value
    async fn set(&self, question: &str, answer: &str) -> Result<(), CacheError>;

    /// Lightweight liveness probe
    async fn ping(&self) -> Result<(), CacheError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Redis error: {0}")]
    Redis(#[from] ::redis::RedisError),

    #[error("Cache unavailable: {0}")]
    Unavailable(String),
}
