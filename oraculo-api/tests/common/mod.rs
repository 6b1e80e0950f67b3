#![allow(dead_code)]

use actix_web::{middleware, test, web, App};
use oraculo_api::cache::InMemoryAnswerCache;
use oraculo_api::handlers;
use oraculo_api::resolver::{AnswerResolver, ResolverSettings};
use oraculo_api::state::AppState;
use oraculo_api::storage::InMemoryInteractionStore;
use oraculo_llm_sdk::client::LlmClient;
use oraculo_llm_sdk::error::LlmError;
use oraculo_llm_sdk::types::{CompletionRequest, CompletionResponse, ContentBlock, Role, Usage};
use std::sync::{Arc, Mutex};

pub struct TestApp<S> {
    pub cache: InMemoryAnswerCache,
    pub store: InMemoryInteractionStore,
    pub local_llm: Arc<MockLlmClient>,
    pub remote_llm: Arc<MockLlmClient>,
    pub app: S,
}

/// Replays scripted replies in order and counts calls
pub struct MockLlmClient {
    pub responses: Arc<Mutex<Vec<Result<CompletionResponse, LlmError>>>>,
    pub call_count: Arc<Mutex<usize>>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        MockLlmClient {
            responses: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn push_text(&self, text: &str) {
        self.responses
            .lock()
            .unwrap()
            .push(Ok(create_completion_response_with_text(text)));
    }

    pub fn push_error(&self, error: LlmError) {
        self.responses.lock().unwrap().push(Err(error));
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, _request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let mut call_count = self.call_count.lock().unwrap();
        *call_count += 1;
        drop(call_count);

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Err(LlmError::internal("no scripted response"))
        } else {
            responses.remove(0)
        }
    }

    fn provider_name(&self) -> &str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

pub fn create_completion_response_with_text(text: &str) -> CompletionResponse {
    CompletionResponse {
        content: vec![ContentBlock::Text {
            text: text.to_string(),
        }],
        role: Role::Assistant,
        usage: Usage {
            input_tokens: 10,
            output_tokens: 20,
        },
        stop_reason: Some("stop".to_string()),
    }
}

pub async fn setup_test_app() -> anyhow::Result<TestApp<impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
>>> {
    let cache = InMemoryAnswerCache::new();
    let store = InMemoryInteractionStore::new();
    let local_llm = Arc::new(MockLlmClient::new());
    let remote_llm = Arc::new(MockLlmClient::new());

    let resolver = AnswerResolver::new(
        Arc::new(cache.clone()),
        Arc::new(store.clone()),
        Some(local_llm.clone() as Arc<dyn LlmClient>),
        Some(remote_llm.clone() as Arc<dyn LlmClient>),
        ResolverSettings::default(),
    );
    let state = web::Data::new(AppState {
        resolver,
        store: Arc::new(store.clone()),
        cache: Arc::new(cache.clone()),
    });

    let app = test::init_service(
        App::new()
            .app_data(state)
            .wrap(middleware::NormalizePath::trim())
            .configure(handlers::configure),
    )
    .await;

    Ok(TestApp {
        cache,
        store,
        local_llm,
        remote_llm,
        app,
    })
}
