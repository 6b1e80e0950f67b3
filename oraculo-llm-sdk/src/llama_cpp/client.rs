use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

use crate::{
    error::LlmError,
    llama_cpp::types::{
        LlamaCppChatCompletionRequest, LlamaCppChatCompletionResponse, LlamaCppMessage,
        LlamaCppRole,
    },
    types::{CompletionRequest, CompletionResponse, ContentBlock, Role, Usage},
};

/// llama.cpp local LLM client (OpenAI-compatible)
pub struct LlamaCppClient {
    base_url: String,
    model: String,
    http_client: reqwest::Client,
}

impl LlamaCppClient {
    /// Create a new llama.cpp client with default base URL
    pub fn new() -> Result<Self, LlmError> {
        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(300))
            .build()
            .map_err(|e| LlmError::Network { source: e })?;

        Ok(Self {
            base_url: "http://localhost:8080".to_string(),
            model: crate::models::llama_cpp::DEFAULT_MODEL_ID.to_string(),
            http_client,
        })
    }

    /// Set a custom base URL for the API
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the model name sent with generic completion requests
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Create a chat completion using the OpenAI-compatible endpoint
    pub async fn create_chat_completion(
        &self,
        request: LlamaCppChatCompletionRequest,
    ) -> Result<LlamaCppChatCompletionResponse, LlmError> {
        let url = format!("{}/v1/chat/completions", self.base_url);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let response = self
            .http_client
            .post(&url)
            .headers(headers)
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::Network { source: e })?;

        let status = response.status();

        if status.is_success() {
            let llama_response: LlamaCppChatCompletionResponse = response
                .json()
                .await
                .map_err(|e| LlmError::internal(format!("Failed to parse response: {}", e)))?;
            Ok(llama_response)
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            Err(LlmError::from_status(status, error_text, None))
        }
    }
}

#[async_trait]
impl crate::client::LlmClient for LlamaCppClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let messages = request
            .messages
            .iter()
            .map(|msg| {
                let role = match msg.role {
                    Role::User => LlamaCppRole::User,
                    Role::Assistant => LlamaCppRole::Assistant,
                    Role::System => LlamaCppRole::System,
                };
                LlamaCppMessage::new(role, msg.text_content())
            })
            .collect();

        let llama_request = LlamaCppChatCompletionRequest {
            model: request.model,
            messages,
            max_tokens: Some(request.max_tokens),
            temperature: request.temperature,
            top_p: request.top_p,
            stop: request.stop_sequences,
            stream: None,
        };

        let llama_response = self.create_chat_completion(llama_request).await?;

        let choice = llama_response
            .choices
            .first()
            .ok_or_else(|| LlmError::internal("No choices returned"))?;

        let usage = llama_response
            .usage
            .as_ref()
            .map(|usage| Usage {
                input_tokens: usage.prompt_tokens,
                output_tokens: usage.completion_tokens,
            })
            .unwrap_or(Usage {
                input_tokens: 0,
                output_tokens: 0,
            });

        Ok(CompletionResponse {
            content: vec![ContentBlock::Text {
                text: choice.message.content.clone().unwrap_or_default(),
            }],
            role: Role::Assistant,
            usage,
            stop_reason: choice.finish_reason.clone(),
        })
    }

    fn provider_name(&self) -> &str {
        crate::providers::LLAMA_CPP
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
