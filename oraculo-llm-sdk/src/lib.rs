//! # Oráculo LLM SDK
//!
//! Provider-agnostic text generation for the oráculo services. Two providers
//! are supported: a local llama.cpp server and the hosted OpenAI Chat
//! Completions API. Both speak the same wire format and both implement
//! [`client::LlmClient`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use oraculo_llm_sdk::client::LlmClient;
//! use oraculo_llm_sdk::llama_cpp::LlamaCppClient;
//! use oraculo_llm_sdk::openai::OpenAIClient;
//! use oraculo_llm_sdk::types::{CompletionRequest, Message};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let local = LlamaCppClient::new()?.with_base_url("http://localhost:8080");
//!     let request = CompletionRequest::new(
//!         local.model_name(),
//!         150,
//!         vec![Message::user("Quanto é 2+2?")],
//!     );
//!     let answer = local.complete(request).await?.text();
//!
//!     if answer.trim().is_empty() {
//!         let remote = OpenAIClient::new("your-api-key")?;
//!         let request = CompletionRequest::new(
//!             remote.model_name(),
//!             1024,
//!             vec![
//!                 Message::system("Você é um assistente inteligente."),
//!                 Message::user("Quanto é 2+2?"),
//!             ],
//!         );
//!         println!("Response: {}", remote.complete(request).await?.text());
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod llama_cpp;
pub mod models;
pub mod openai;
pub mod providers;
pub mod types;
