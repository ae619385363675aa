mod command;
mod executor;
pub mod prompt;

pub use command::InterpretedCommand;
pub use executor::{Interpreter, QueryResult};
