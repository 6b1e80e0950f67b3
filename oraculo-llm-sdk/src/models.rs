//! Model constants for supported LLM providers

/// OpenAI model constants
pub mod openai {
    /// GPT-3.5 Turbo - Fast and efficient model
    pub const GPT_3_5_TURBO_ID: &str = "gpt-3.5-turbo";
    pub const GPT_3_5_TURBO_NAME: &str = "GPT-3.5 Turbo";

    /// GPT-4o Mini - Smaller, faster version of GPT-4o
    pub const GPT_4O_MINI_ID: &str = "gpt-4o-mini";
    pub const GPT_4O_MINI_NAME: &str = "GPT-4o Mini";

    /// GPT-4o - Flagship model
    pub const GPT_4O_ID: &str = "gpt-4o";
    pub const GPT_4O_NAME: &str = "GPT-4o";
}

/// llama.cpp model constants
pub mod llama_cpp {
    /// llama.cpp serves whatever model it was started with and ignores
    /// the name, but the field is required by the wire format
    pub const DEFAULT_MODEL_ID: &str = "local";
}
