//! Provider name constants
//!
//! This module defines canonical provider names used throughout the SDK

/// OpenAI provider
pub const OPENAI: &str = "openai";

/// llama.cpp local provider
pub const LLAMA_CPP: &str = "llama_cpp";
