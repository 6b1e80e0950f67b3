use crate::config::{LocalModelConfig, RemoteModelConfig};
use oraculo_llm_sdk::client::LlmClient;
use oraculo_llm_sdk::llama_cpp::LlamaCppClient;
use oraculo_llm_sdk::openai::OpenAIClient;
use std::sync::Arc;
use tracing::{info, warn};

/// llama.cpp client for the local step, or `None` when it is disabled
pub fn create_local_client(
    config: &LocalModelConfig,
) -> anyhow::Result<Option<Arc<dyn LlmClient>>> {
    if !config.enabled {
        info!("Local model disabled");
        return Ok(None);
    }

    let client = LlamaCppClient::new()?
        .with_base_url(config.base_url.clone())
        .with_model(config.model.clone());
    info!(base_url = %config.base_url, model = %config.model, "Local model configured");

    Ok(Some(Arc::new(client)))
}

/// OpenAI client for the remote step, or `None` without an API key
pub fn create_remote_client(
    config: &RemoteModelConfig,
) -> anyhow::Result<Option<Arc<dyn LlmClient>>> {
    let Some(api_key) = config.api_key.as_ref() else {
        warn!("OPENAI_API_KEY is not set; remote fallback will answer with an apology");
        return Ok(None);
    };

    let mut client = OpenAIClient::new(api_key.clone())?.with_model(config.model.clone());
    if let Some(base_url) = config.base_url.as_ref() {
        client = client.with_base_url(base_url.clone());
    }
    info!(model = %config.model, "Remote model configured");

    Ok(Some(Arc::new(client)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_local_model_yields_none() {
        let config = LocalModelConfig {
            enabled: false,
            ..LocalModelConfig::default()
        };
        assert!(create_local_client(&config).unwrap().is_none());
    }

    #[test]
    fn test_local_client_uses_configured_model() {
        let config = LocalModelConfig {
            model: "tinyllama".to_string(),
            ..LocalModelConfig::default()
        };
        let client = create_local_client(&config).unwrap().unwrap();
        assert_eq!(client.provider_name(), "llama_cpp");
        assert_eq!(client.model_name(), "tinyllama");
    }

    #[test]
    fn test_remote_client_requires_api_key() {
        let config = RemoteModelConfig::default();
        assert!(create_remote_client(&config).unwrap().is_none());

        let config = RemoteModelConfig {
            api_key: Some("sk-test".to_string()),
            ..RemoteModelConfig::default()
        };
        let client = create_remote_client(&config).unwrap().unwrap();
        assert_eq!(client.provider_name(), "openai");
        assert_eq!(client.model_name(), "gpt-3.5-turbo");
    }
}
