pub mod client;
pub mod types;

pub use client::LlamaCppClient;
pub use types::*;
