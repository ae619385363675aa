use super::types::*;
use crate::{
    Error, Result,
    config::{LlmConfig, LlmProvider},
};
use async_openai::{
    Client,
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        ChatCompletionRequestUserMessageContent, CreateChatCompletionRequestArgs, ResponseFormat,
        ResponseFormatJsonSchema,
    },
};
use async_trait::async_trait;
use std::{sync::Arc, time::Duration};
use tracing::{debug, error};

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Sends `request` and returns the model's raw reply text, which is
    /// expected (but not guaranteed) to be JSON matching the schema.
    async fn generate_structured(&self, request: StructuredRequest) -> Result<String>;
}

pub fn create_llm_client(config: LlmConfig) -> Result<Arc<dyn LlmClient>> {
    debug!("Creating LLM client for provider {:?}", config.provider);
    let client: Arc<dyn LlmClient> = match config.provider {
        LlmProvider::Gemini => Arc::new(GeminiClient::new(config)?),
        LlmProvider::Openai => Arc::new(OpenAiClient::new(config)?),
    };
    Ok(client)
}

fn http_client(timeout_secs: u64) -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()?)
}

fn ensure_api_key(api_key: &str) -> Result<()> {
    if api_key.is_empty() {
        return Err(Error::config(
            "LLM API key is not configured. Please set the GEMINI_API_KEY environment variable.",
        ));
    }
    Ok(())
}

/// Client for the Gemini `generateContent` REST endpoint.
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(config: LlmConfig) -> Result<Self> {
        Ok(Self {
            client: http_client(config.timeout_secs)?,
            base_url: config.effective_base_url().trim_end_matches('/').to_string(),
            model: config.effective_model().to_string(),
            api_key: config.api_key,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn generate_structured(&self, request: StructuredRequest) -> Result<String> {
        ensure_api_key(&self.api_key)?;

        let body = GenerateContentRequest::from_structured(&request);
        debug!(
            "Calling Gemini model {} with {} prompt bytes",
            self.model,
            request.prompt.len()
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Gemini API returned an error: {} - {}", status, body);
            return Err(Error::LlmStatus {
                status: status.as_u16(),
                body,
            });
        }

        let result: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| Error::llm(format!("Failed to parse LLM API response: {}", e)))?;
        debug!("Gemini returned {} candidates", result.candidates.len());

        result.first_text().map(str::to_string).ok_or_else(|| {
            Error::llm(format!(
                "LLM response did not contain expected content structure. Raw result: {}",
                serde_json::to_string(&result).unwrap_or_default()
            ))
        })
    }
}

/// Client for OpenAI-compatible chat completion APIs using a JSON-schema
/// response format.
pub struct OpenAiClient {
    client: Client<OpenAIConfig>,
    api_key_set: bool,
    model: String,
}

impl OpenAiClient {
    pub fn new(config: LlmConfig) -> Result<Self> {
        let api_key_set = !config.api_key.is_empty();
        let model = config.effective_model().to_string();
        let openai_config = OpenAIConfig::new()
            .with_api_base(config.effective_base_url())
            .with_api_key(config.api_key);

        let client =
            Client::with_config(openai_config).with_http_client(http_client(config.timeout_secs)?);

        Ok(Self {
            client,
            api_key_set,
            model,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn generate_structured(&self, request: StructuredRequest) -> Result<String> {
        if !self.api_key_set {
            ensure_api_key("")?;
        }

        let message: ChatCompletionRequestMessage = ChatCompletionRequestUserMessageArgs::default()
            .content(ChatCompletionRequestUserMessageContent::Text(
                request.prompt,
            ))
            .build()
            .map_err(|e| Error::llm(format!("Failed to build user message: {}", e)))?
            .into();

        let response_format = ResponseFormat::JsonSchema {
            json_schema: ResponseFormatJsonSchema {
                description: None,
                name: request.schema_name,
                schema: Some(to_json_schema(&request.schema)),
                strict: Some(false),
            },
        };

        let openai_request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(vec![message])
            .response_format(response_format)
            .temperature(0.0)
            .build()?;

        let response = self.client.chat().create(openai_request).await?;
        debug!(
            "Received chat completion response with {} choices",
            response.choices.len()
        );

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| Error::llm("LLM response contained no message content"))
    }
}
