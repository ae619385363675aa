mod http;
mod store;
mod types;

pub use http::HttpInventoryStore;
pub use store::{InventoryStore, MemoryStore, apply_change};
pub use types::{InventoryState, Item, UpdateRequest};
