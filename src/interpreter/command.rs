use crate::inventory::Item;
use serde::Deserialize;
use tracing::debug;

const NO_REASONING: &str = "No specific reasoning provided by LLM.";

/// A model reply after validation. Anything that does not describe a
/// read or a write on a known item ends up as `Unrecognized`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterpretedCommand {
    Read {
        item: Option<Item>,
        reasoning: String,
    },
    Write {
        item: Item,
        change: i64,
        reasoning: String,
    },
    Unrecognized {
        reason: String,
    },
}

/// The reply exactly as the model produced it.
#[derive(Debug, Deserialize)]
struct RawCommand {
    operation: Option<String>,
    item: Option<String>,
    change: Option<i64>,
    reasoning: Option<String>,
}

impl InterpretedCommand {
    pub fn from_model_output(text: &str) -> Self {
        let text = strip_code_fence(text);

        let raw: RawCommand = match serde_json::from_str(text) {
            Ok(raw) => raw,
            Err(e) => {
                debug!("Model reply is not a valid command: {}", e);
                return Self::unrecognized(format!(
                    "LLM returned malformed JSON ({}). Raw text: {}",
                    e, text
                ));
            }
        };

        let reasoning = raw
            .reasoning
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| NO_REASONING.to_string());

        let Some(operation) = raw.operation else {
            return Self::unrecognized(format!(
                "LLM response is missing the 'operation' key. LLM Reasoning: {}",
                reasoning
            ));
        };

        match operation.trim().to_uppercase().as_str() {
            "READ" | "GET" => {
                let item = match raw.item.as_deref().map(str::parse::<Item>).transpose() {
                    Ok(item) => item,
                    Err(e) => {
                        return Self::unrecognized(format!("{} LLM Reasoning: {}", e, reasoning));
                    }
                };
                Self::Read { item, reasoning }
            }
            "WRITE" | "POST" => {
                let (Some(item), Some(change)) = (raw.item.as_deref(), raw.change) else {
                    return Self::unrecognized(format!(
                        "LLM failed to extract required 'item' or 'change' for WRITE operation. \
                         LLM Reasoning: {}",
                        reasoning
                    ));
                };
                match item.parse::<Item>() {
                    Ok(item) => Self::Write {
                        item,
                        change,
                        reasoning,
                    },
                    Err(e) => Self::unrecognized(format!("{} LLM Reasoning: {}", e, reasoning)),
                }
            }
            "UNSUPPORTED" => Self::unrecognized(format!(
                "The query is outside what the inventory system supports. LLM Reasoning: {}",
                reasoning
            )),
            _ => Self::unrecognized(format!(
                "LLM returned an unsupported operation: '{}'. LLM Reasoning: {}",
                operation, reasoning
            )),
        }
    }

    fn unrecognized(reason: String) -> Self {
        Self::Unrecognized { reason }
    }
}

fn strip_code_fence(text: &str) -> &str {
    let text = text.trim();
    let Some(inner) = text.strip_prefix("```") else {
        return text;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}
