//! Answer resolution: cache, then stored interactions, then the local model,
//! then the remote model.
//!
//! The first two steps are read-only. An answer produced by either model (or
//! the apology that replaces a failed remote call) is written to the cache and
//! appended to the interaction store before it is returned.

use crate::cache::AnswerCache;
use crate::config::ApiConfig;
use crate::storage::{InteractionStore, StoreError};
use oraculo_llm_sdk::client::LlmClient;
use oraculo_llm_sdk::error::LlmError;
use oraculo_llm_sdk::types::{CompletionRequest, Message};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Returned when the remote model cannot produce an answer
pub const APOLOGY: &str = "Desculpe, houve um erro ao tentar processar sua pergunta.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerSource {
    Cache,
    Store,
    Local,
    Remote,
    Apology,
}

impl fmt::Display for AnswerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AnswerSource::Cache => "cache",
            AnswerSource::Store => "store",
            AnswerSource::Local => "local",
            AnswerSource::Remote => "remote",
            AnswerSource::Apology => "apology",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub answer: String,
    pub source: AnswerSource,
}

impl Resolution {
    pub fn from_cache(&self) -> bool {
        self.source == AnswerSource::Cache
    }
}

/// What the local model made of a question
#[derive(Debug)]
pub enum LocalOutcome {
    Answer(String),
    Empty,
    Failed(LlmError),
}

/// Model parameters used while resolving
#[derive(Debug, Clone)]
pub struct ResolverSettings {
    pub local_model: String,
    pub local_max_tokens: u32,
    pub remote_model: String,
    pub remote_max_tokens: u32,
    pub system_prompt: String,
    pub answer_prefix: Option<String>,
}

impl From<&ApiConfig> for ResolverSettings {
    fn from(config: &ApiConfig) -> Self {
        Self {
            local_model: config.local.model.clone(),
            local_max_tokens: config.local.max_tokens,
            remote_model: config.remote.model.clone(),
            remote_max_tokens: config.remote.max_tokens,
            system_prompt: config.remote.system_prompt.clone(),
            answer_prefix: config.remote.answer_prefix.clone(),
        }
    }
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self::from(&ApiConfig::default())
    }
}

pub struct AnswerResolver {
    cache: Arc<dyn AnswerCache>,
    store: Arc<dyn InteractionStore>,
    local: Option<Arc<dyn LlmClient>>,
    remote: Option<Arc<dyn LlmClient>>,
    settings: ResolverSettings,
}

impl AnswerResolver {
    pub fn new(
        cache: Arc<dyn AnswerCache>,
        store: Arc<dyn InteractionStore>,
        local: Option<Arc<dyn LlmClient>>,
        remote: Option<Arc<dyn LlmClient>>,
        settings: ResolverSettings,
    ) -> Self {
        Self {
            cache,
            store,
            local,
            remote,
            settings,
        }
    }

    /// Answer `question`, recording newly generated answers
    ///
    /// Only a failing interaction store is an error. Cache failures degrade to
    /// misses and model failures fall through to the next step.
    pub async fn resolve(&self, question: &str) -> Result<Resolution, StoreError> {
        if let Some(answer) = self.cached_answer(question).await {
            info!(source = %AnswerSource::Cache, "Answer resolved");
            return Ok(Resolution {
                answer,
                source: AnswerSource::Cache,
            });
        }

        if let Some(interaction) = self.store.find_by_question(question).await? {
            info!(source = %AnswerSource::Store, "Answer resolved");
            return Ok(Resolution {
                answer: interaction.answer,
                source: AnswerSource::Store,
            });
        }

        let resolution = match self.ask_local(question).await {
            LocalOutcome::Answer(answer) => Resolution {
                answer,
                source: AnswerSource::Local,
            },
            LocalOutcome::Empty => {
                debug!("Local model returned no text, asking remote model");
                self.ask_remote(question).await
            }
            LocalOutcome::Failed(e) => {
                warn!(error = %e, "Local model failed, asking remote model");
                self.ask_remote(question).await
            }
        };

        if let Err(e) = self.cache.set(question, &resolution.answer).await {
            warn!(error = %e, "Failed to cache answer");
        }
        let id = self.store.insert(question, &resolution.answer).await?;

        info!(source = %resolution.source, id = %id, "Answer resolved");
        Ok(resolution)
    }

    async fn cached_answer(&self, question: &str) -> Option<String> {
        match self.cache.get(question).await {
            Ok(Some(answer)) if !answer.is_empty() => Some(answer),
            Ok(_) => None,
            Err(e) => {
                warn!(error = %e, "Cache lookup failed, treating as miss");
                None
            }
        }
    }

    pub async fn ask_local(&self, question: &str) -> LocalOutcome {
        let Some(client) = self.local.as_ref() else {
            return LocalOutcome::Empty;
        };

        let request = CompletionRequest::new(
            self.settings.local_model.clone(),
            self.settings.local_max_tokens,
            vec![Message::user(question)],
        );

        match client.complete(request).await {
            Ok(response) => {
                let text = response.text().trim().to_string();
                if text.is_empty() {
                    LocalOutcome::Empty
                } else {
                    LocalOutcome::Answer(text)
                }
            }
            Err(e) => LocalOutcome::Failed(e),
        }
    }

    async fn ask_remote(&self, question: &str) -> Resolution {
        let apology = Resolution {
            answer: APOLOGY.to_string(),
            source: AnswerSource::Apology,
        };

        let Some(client) = self.remote.as_ref() else {
            error!("No remote model configured (OPENAI_API_KEY is unset)");
            return apology;
        };

        let request = CompletionRequest::new(
            self.settings.remote_model.clone(),
            self.settings.remote_max_tokens,
            vec![
                Message::system(self.settings.system_prompt.clone()),
                Message::user(question),
            ],
        );

        match client.complete(request).await {
            Ok(response) => {
                let text = response.text().trim().to_string();
                if text.is_empty() {
                    error!(provider = client.provider_name(), "Remote model returned no text");
                    return apology;
                }
                let answer = match self.settings.answer_prefix.as_deref() {
                    Some(prefix) => format!("{}{}", prefix, text),
                    None => text,
                };
                Resolution {
                    answer,
                    source: AnswerSource::Remote,
                }
            }
            Err(e) => {
                error!(provider = client.provider_name(), error = %e, "Remote model failed");
                apology
            }
        }
    }
}
