use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logs: LogsConfig,
    #[serde(default)]
    pub inventory: InventoryServiceConfig,
    #[serde(default)]
    pub query: QueryServiceConfig,
    #[serde(default)]
    pub llm: LlmConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryServiceConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_inventory_port")]
    pub port: u16,
    #[serde(default)]
    pub seed: SeedConfig,
}

/// Counts the in-memory store starts with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default = "default_tshirts")]
    pub tshirts: u32,
    #[serde(default = "default_pants")]
    pub pants: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryServiceConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_query_port")]
    pub port: u16,
    #[serde(default = "default_inventory_url")]
    pub inventory_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default)]
    pub provider: LlmProvider,
    /// Empty means the provider's public endpoint.
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    /// Empty means the provider's default model.
    #[serde(default)]
    pub model: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LlmProvider {
    #[default]
    Gemini,
    Openai,
}

impl LlmProvider {
    pub fn default_base_url(self) -> &'static str {
        match self {
            Self::Gemini => "https://generativelanguage.googleapis.com",
            Self::Openai => "https://api.openai.com/v1",
        }
    }

    pub fn default_model(self) -> &'static str {
        match self {
            Self::Gemini => "gemini-2.0-flash",
            Self::Openai => "gpt-4o-mini",
        }
    }
}

impl LlmConfig {
    pub fn effective_base_url(&self) -> &str {
        if self.base_url.is_empty() {
            self.provider.default_base_url()
        } else {
            &self.base_url
        }
    }

    pub fn effective_model(&self) -> &str {
        if self.model.is_empty() {
            self.provider.default_model()
        } else {
            &self.model
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for InventoryServiceConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_inventory_port(),
            seed: SeedConfig::default(),
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            tshirts: default_tshirts(),
            pants: default_pants(),
        }
    }
}

impl Default for QueryServiceConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_query_port(),
            inventory_url: default_inventory_url(),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: LlmProvider::default(),
            base_url: String::new(),
            api_key: String::new(),
            model: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_inventory_port() -> u16 {
    8000
}

fn default_query_port() -> u16 {
    8001
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tshirts() -> u32 {
    20
}

fn default_pants() -> u32 {
    15
}

fn default_inventory_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}
