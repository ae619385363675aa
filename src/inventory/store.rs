use super::types::{InventoryState, Item};
use crate::{Error, Result};
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Read and delta-update access to the stock counts. The interpreter only
/// talks to this trait, so the backing store can be swapped out.
#[async_trait]
pub trait InventoryStore: Send + Sync {
    async fn read(&self) -> Result<InventoryState>;

    async fn update(&self, item: Item, change: i64) -> Result<InventoryState>;
}

/// Applies `change` to `item`, leaving `state` untouched on failure.
pub fn apply_change(state: &mut InventoryState, item: Item, change: i64) -> Result<()> {
    let current = state.get(item);
    let new_count = i64::from(current)
        .checked_add(change)
        .ok_or_else(|| Error::CountOverflow {
            item: item.to_string(),
            change,
        })?;

    if new_count < 0 {
        return Err(Error::InsufficientStock {
            item: item.to_string(),
            current,
            change,
        });
    }

    let new_count = u32::try_from(new_count).map_err(|_| Error::CountOverflow {
        item: item.to_string(),
        change,
    })?;

    state.set(item, new_count);
    Ok(())
}

/// Process-memory store. Lost on restart.
pub struct MemoryStore {
    state: RwLock<InventoryState>,
}

impl MemoryStore {
    pub fn new(seed: InventoryState) -> Self {
        info!("Seeding in-memory inventory: {:?}", seed);
        Self {
            state: RwLock::new(seed),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(InventoryState::default())
    }
}

#[async_trait]
impl InventoryStore for MemoryStore {
    async fn read(&self) -> Result<InventoryState> {
        Ok(self.state.read().await.clone())
    }

    async fn update(&self, item: Item, change: i64) -> Result<InventoryState> {
        // Held across the read-modify-write so concurrent updates serialize.
        let mut state = self.state.write().await;
        apply_change(&mut state, item, change)?;
        debug!("Updated {} by {} -> {}", item, change, state.get(item));
        Ok(state.clone())
    }
}
