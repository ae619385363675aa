use inventory_assistant::{
    config::{LlmConfig, LlmProvider},
    inventory::InventoryStore,
    server,
};
use serde_json::{Value, json};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;

/// Build the JSON text a model would reply with
pub fn command_reply(
    operation: &str,
    item: Option<&str>,
    change: Option<i64>,
    reasoning: &str,
) -> String {
    json!({
        "operation": operation,
        "item": item,
        "change": change,
        "reasoning": reasoning,
    })
    .to_string()
}

/// Wrap model text the way the Gemini API returns it
pub fn gemini_body(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    })
}

/// Gemini configuration pointing at a mock server
pub fn gemini_config(base_url: &str) -> LlmConfig {
    LlmConfig {
        provider: LlmProvider::Gemini,
        base_url: base_url.to_string(),
        api_key: "test-api-key".to_string(),
        model: "gemini-2.0-flash".to_string(),
        timeout_secs: 5,
    }
}

/// Wrap model text the way the OpenAI chat completions API returns it
pub fn openai_body(content: Option<&str>) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1700000000,
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}

/// OpenAI configuration pointing at a mock server
pub fn openai_config(base_url: &str) -> LlmConfig {
    LlmConfig {
        provider: LlmProvider::Openai,
        base_url: base_url.to_string(),
        api_key: "test-api-key".to_string(),
        model: String::new(),
        timeout_secs: 5,
    }
}

/// Serve the inventory router on an ephemeral local port and return its base URL
pub async fn spawn_inventory_service(store: Arc<dyn InventoryStore>) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, server::inventory::router(store))
            .await
            .unwrap();
    });
    format!("http://{}", addr)
}

/// Write a config YAML file into a fresh temporary directory
pub async fn create_test_config_file(content: &str) -> (TempDir, String) {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await.unwrap();
    (dir, config_path.to_string_lossy().to_string())
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
logs:
  level: "debug"

inventory:
  host: "127.0.0.1"
  port: 9100
  seed:
    tshirts: 5
    pants: 7

query:
  host: "127.0.0.1"
  port: 9101
  inventory_url: "http://127.0.0.1:9100"

llm:
  provider: "gemini"
  base_url: "http://127.0.0.1:9999"
  api_key: "test-api-key"
  model: "gemini-2.0-flash"
  timeout_secs: 10
"#;
