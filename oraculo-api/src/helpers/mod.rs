pub mod backends;
pub mod llm;
pub mod logging;
