use super::{AnswerCache, CacheError};
use async_trait::async_trait;
use redis::aio::{ConnectionManager, ConnectionManagerConfig};
use redis::AsyncCommands;
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::{debug, info};

/// Upper bound on opening the shared connection
const CONNECT_TIMEOUT: Duration = Duration::from_secs(1);

/// Redis-backed answer cache
///
/// The connection is opened on first use and then shared by every request.
/// Until it succeeds each call makes a single attempt, so requests see a miss
/// right away while Redis is down.
pub struct RedisAnswerCache {
    client: redis::Client,
    connection: OnceCell<ConnectionManager>,
}

impl RedisAnswerCache {
    /// Validate `url` without connecting
    pub fn new(url: &str) -> Result<Self, CacheError> {
        let client = redis::Client::open(url)?;
        Ok(Self {
            client,
            connection: OnceCell::new(),
        })
    }

    /// Open the shared connection now instead of on first use
    pub async fn connect(&self) -> Result<(), CacheError> {
        self.connection().await.map(|_| ())
    }

    async fn connection(&self) -> Result<ConnectionManager, CacheError> {
        let manager = self
            .connection
            .get_or_try_init(|| async {
                let config = ConnectionManagerConfig::new()
                    .set_number_of_retries(0)
                    .set_connection_timeout(CONNECT_TIMEOUT);
                let manager = self
                    .client
                    .get_connection_manager_with_config(config)
                    .await?;
                info!("Connected to Redis");
                Ok::<_, CacheError>(manager)
            })
            .await?;

        // ConnectionManager is a cheap handle over one multiplexed connection
        Ok(manager.clone())
    }
}

#[async_trait]
impl AnswerCache for RedisAnswerCache {
    async fn get(&self, question: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self.connection().await?;
        let answer: Option<String> = conn.get(question).await?;
        debug!(hit = answer.is_some(), "Redis cache lookup");
        Ok(answer)
    }

    async fn set(&self, question: &str, answer: &str) -> Result<(), CacheError> {
        let mut conn = self.connection().await?;
        let _: () = conn.set(question, answer).await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), CacheError> {
        let mut conn = self.connection().await?;
        let pong: String = redis::cmd("PING").query_async(&mut conn).await?;
        if pong == "PONG" {
            Ok(())
        } else {
            Err(CacheError::Unavailable(format!("unexpected PING reply: {}", pong)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_url() {
        assert!(RedisAnswerCache::new("not a redis url").is_err());
    }

    #[test]
    fn test_accepts_url_without_connecting() {
        assert!(RedisAnswerCache::new("redis://127.0.0.1:1/0").is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_server_fails_fast() {
        let cache = RedisAnswerCache::new("redis://127.0.0.1:1/0").unwrap();

        let started = std::time::Instant::now();
        assert!(cache.get("q").await.is_err());
        assert!(cache.set("q", "a").await.is_err());
        assert!(cache.ping().await.is_err());

        let elapsed = started.elapsed();
        assert!(
            elapsed < Duration::from_secs(3),
            "unreachable Redis took {:?}",
            elapsed
        );
    }
}
