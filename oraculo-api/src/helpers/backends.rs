use crate::cache::{AnswerCache, RedisAnswerCache};
use crate::config::{MongoConfig, RedisConfig};
use crate::storage::{InteractionStore, MongoInteractionStore};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// How long startup waits on each backend before carrying on without it
const STARTUP_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Build the MongoDB store; an invalid URI is fatal, an unreachable server is not
pub async fn connect_store(config: &MongoConfig) -> anyhow::Result<Arc<dyn InteractionStore>> {
    let store = MongoInteractionStore::connect(config).await?;

    match tokio::time::timeout(STARTUP_PROBE_TIMEOUT, store.ping()).await {
        Ok(Ok(())) => info!(database = %config.database, "Connected to MongoDB"),
        Ok(Err(e)) => warn!(error = %e, "MongoDB unreachable, starting without it"),
        Err(_) => warn!("MongoDB did not answer in time, starting without it"),
    }

    Ok(Arc::new(store))
}

/// Build the Redis cache; an invalid URL is fatal, an unreachable server is not
pub async fn connect_cache(config: &RedisConfig) -> anyhow::Result<Arc<dyn AnswerCache>> {
    let cache = RedisAnswerCache::new(&config.url())?;

    match tokio::time::timeout(STARTUP_PROBE_TIMEOUT, cache.connect()).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => warn!(error = %e, "Redis unreachable, starting without it"),
        Err(_) => warn!("Redis did not answer in time, starting without it"),
    }

    Ok(Arc::new(cache))
}
