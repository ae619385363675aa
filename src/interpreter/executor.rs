use super::{
    command::InterpretedCommand,
    prompt::{SCHEMA_NAME, build_prompt, response_schema},
};
use crate::{
    Error, Result,
    inventory::{InventoryState, InventoryStore},
    llm::{LlmClient, StructuredRequest},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// What a successfully interpreted query returns to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    pub message: String,
    pub inventory_state: InventoryState,
}

/// Turns free text into one inventory call via the language model.
pub struct Interpreter {
    llm_client: Arc<dyn LlmClient>,
    store: Arc<dyn InventoryStore>,
}

impl Interpreter {
    pub fn new(llm_client: Arc<dyn LlmClient>, store: Arc<dyn InventoryStore>) -> Self {
        Self { llm_client, store }
    }

    /// Asks the model what `query` means without touching the store.
    pub async fn classify(&self, query: &str) -> Result<InterpretedCommand> {
        if query.trim().is_empty() {
            return Err(Error::unsupported("Query must not be empty"));
        }

        let request = StructuredRequest {
            prompt: build_prompt(query),
            schema_name: SCHEMA_NAME.to_string(),
            schema: response_schema(),
        };

        let reply = self.llm_client.generate_structured(request).await?;
        debug!("Model reply: {}", reply);

        let command = InterpretedCommand::from_model_output(&reply);
        debug!("Interpreted command: {:?}", command);
        Ok(command)
    }

    pub async fn interpret(&self, query: &str) -> Result<QueryResult> {
        info!("Interpreting query: {}", query);

        match self.classify(query).await? {
            InterpretedCommand::Read { item, reasoning } => {
                let inventory_state = self.store.read().await?;
                let message = match item {
                    Some(item) => format!(
                        "Successfully retrieved inventory for {}: {}. Reasoning: {}",
                        item,
                        inventory_state.get(item),
                        reasoning
                    ),
                    None => format!("Successfully retrieved inventory. Reasoning: {}", reasoning),
                };
                Ok(QueryResult {
                    message,
                    inventory_state,
                })
            }
            InterpretedCommand::Write {
                item,
                change,
                reasoning,
            } => {
                let inventory_state = self.store.update(item, change).await?;
                info!("Applied change of {} to {}", change, item);
                Ok(QueryResult {
                    message: format!(
                        "Successfully updated inventory for {} by {}. Reasoning: {}",
                        item, change, reasoning
                    ),
                    inventory_state,
                })
            }
            InterpretedCommand::Unrecognized { reason } => {
                warn!("Rejecting query: {}", reason);
                Err(Error::UnsupportedQuery(reason))
            }
        }
    }
}
