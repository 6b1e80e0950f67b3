use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variables that override file settings, with the config key each one sets
const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("OPENAI_API_KEY", "remote.api_key"),
    ("MONGO_URI", "mongo.uri"),
    ("REDIS_HOST", "redis.host"),
    ("REDIS_PORT", "redis.port"),
    ("REDIS_DB", "redis.db"),
    ("LLAMA_CPP_URL", "local.base_url"),
];

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct ApiConfig {
    pub server: ServerConfig,
    pub mongo: MongoConfig,
    pub redis: RedisConfig,
    pub local: LocalModelConfig,
    pub remote: RemoteModelConfig,
    pub cors: Option<CorsConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
    pub collection: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct RedisConfig {
    pub host: String,
    pub port: u16,
    pub db: i64,
}

impl RedisConfig {
    pub fn url(&self) -> String {
        format!("redis://{}:{}/{}", self.host, self.port, self.db)
    }
}

/// Local text generation served by a llama.cpp server
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LocalModelConfig {
    pub enabled: bool,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
}

/// Remote chat completion used when the local model has no answer
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct RemoteModelConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: String,
    pub system_prompt: String,
    pub max_tokens: u32,
    /// Prepended to every answer produced by the remote model
    pub answer_prefix: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    /// Directory for daily-rotated log files, in addition to stdout
    pub directory: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            mongo: MongoConfig::default(),
            redis: RedisConfig::default(),
            local: LocalModelConfig::default(),
            remote: RemoteModelConfig::default(),
            cors: Some(CorsConfig {
                allowed_origins: vec!["http://localhost:3000".to_string()],
            }),
            logging: None,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            uri: "mongodb://localhost:27017".to_string(),
            database: "meu_banco".to_string(),
            collection: "interacoes".to_string(),
        }
    }
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 6379,
            db: 0,
        }
    }
}

impl Default for LocalModelConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: "http://localhost:8080".to_string(),
            model: oraculo_llm_sdk::models::llama_cpp::DEFAULT_MODEL_ID.to_string(),
            max_tokens: 150,
        }
    }
}

impl Default for RemoteModelConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            model: oraculo_llm_sdk::models::openai::GPT_3_5_TURBO_ID.to_string(),
            system_prompt: "Você é um assistente inteligente.".to_string(),
            max_tokens: 1024,
            answer_prefix: None,
        }
    }
}

impl ApiConfig {
    /// Load configuration from `path`, or from the default location when none is given
    ///
    /// The default file is created with commented settings on first run. An explicit
    /// path must exist.
    pub fn load(path: Option<PathBuf>) -> Result<(Self, PathBuf), ConfigError> {
        let (config_path, required) = match path {
            Some(path) => (path, true),
            None => {
                let path = get_config_path();
                write_default_config(&path)?;
                (path, false)
            }
        };

        let config = Self::from_sources(&config_path, required, |name| std::env::var(name).ok())?;
        Ok((config, config_path))
    }

    /// Layer defaults, the TOML file and environment overrides
    ///
    /// `env` resolves an environment variable name; empty values are ignored.
    pub fn from_sources<F>(config_path: &Path, required: bool, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Config::builder().add_source(
            File::from(config_path)
                .format(FileFormat::Toml)
                .required(required),
        );

        for (name, key) in ENV_OVERRIDES {
            let value = env(name).filter(|value| !value.trim().is_empty());
            builder = builder.set_override_option(*key, value)?;
        }

        let mut config: ApiConfig = builder.build()?.try_deserialize()?;

        // Expand tilde in log directory
        if let Some(logging) = config.logging.as_mut() {
            if let Some(directory) = logging.directory.as_ref() {
                if directory.starts_with("~") {
                    if let Some(home) = home::home_dir() {
                        let path_str = directory.to_string_lossy();
                        let expanded = path_str.replacen('~', &home.to_string_lossy(), 1);
                        logging.directory = Some(PathBuf::from(expanded));
                    }
                }
            }
        }

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn write_default_config(config_path: &Path) -> Result<(), ConfigError> {
    if config_path.exists() {
        return Ok(());
    }

    // Create config directory if it doesn't exist
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::Message(format!("Failed to create config directory: {e}"))
        })?;
    }

    let default_config = r#"
[server]
host = "0.0.0.0"
port = 5000

[mongo]
uri = "mongodb://localhost:27017"   # or MONGO_URI
database = "meu_banco"
collection = "interacoes"

[redis]
host = "localhost"   # or REDIS_HOST
port = 6379          # or REDIS_PORT
db = 0               # or REDIS_DB

[local]
enabled = true
base_url = "http://localhost:8080"   # llama.cpp server, or LLAMA_CPP_URL
max_tokens = 150

[remote]
# api_key = "your-openai-key"   # or OPENAI_API_KEY
model = "gpt-3.5-turbo"
system_prompt = "Você é um assistente inteligente."
# answer_prefix = "Ainda estou aprendendo! Consultei na OpenAI esta resposta: "

[cors]
allowed_origins = ["http://localhost:3000"]

# [logging]
# directory = "~/.local/share/oraculo/logs"
"#;

    std::fs::write(config_path, default_config)
        .map_err(|e| ConfigError::Message(format!("Failed to write default config: {e}")))
}

fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("oraculo/api.toml")
    } else {
        PathBuf::from("api.toml")
    }
}
