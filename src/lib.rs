pub mod config;
pub mod error;
pub mod interpreter;
pub mod inventory;
pub mod llm;
pub mod server;
pub mod telemetry;

pub use error::{Error, Result};
