use super::{ApiError, error_response, health, serve};
use crate::{
    Result,
    config::Config,
    inventory::{InventoryState, InventoryStore, Item, MemoryStore, UpdateRequest},
};
use axum::{Json, Router, extract::State, routing::get};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;

pub const SERVICE_NAME: &str = "inventory-service";

#[derive(Clone)]
pub struct InventoryAppState {
    pub store: Arc<dyn InventoryStore>,
}

pub fn router(store: Arc<dyn InventoryStore>) -> Router {
    Router::new()
        .route("/inventory", get(get_inventory).post(update_inventory))
        .route("/health", get(|| async { health(SERVICE_NAME) }))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(InventoryAppState { store })
}

pub async fn get_inventory(
    State(state): State<InventoryAppState>,
) -> std::result::Result<Json<InventoryState>, ApiError> {
    state.store.read().await.map(Json).map_err(error_response)
}

pub async fn update_inventory(
    State(state): State<InventoryAppState>,
    Json(request): Json<UpdateRequest>,
) -> std::result::Result<Json<InventoryState>, ApiError> {
    info!(
        "Received inventory update: item={} change={}",
        request.item, request.change
    );

    let item: Item = request.item.parse().map_err(error_response)?;
    state
        .store
        .update(item, request.change)
        .await
        .map(Json)
        .map_err(error_response)
}

pub async fn run(config: Config) -> Result<()> {
    let seed = InventoryState::from(&config.inventory.seed);
    let store: Arc<dyn InventoryStore> = Arc::new(MemoryStore::new(seed));

    serve(&config.inventory.host, config.inventory.port, router(store)).await
}
