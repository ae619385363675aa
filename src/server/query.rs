use super::{ApiError, QueryRequest, error_response, health, serve};
use crate::{
    Result,
    config::Config,
    interpreter::{Interpreter, QueryResult},
    inventory::{HttpInventoryStore, InventoryStore},
    llm::create_llm_client,
};
use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

pub const SERVICE_NAME: &str = "query-service";

#[derive(Clone)]
pub struct QueryAppState {
    pub interpreter: Arc<Interpreter>,
}

pub fn router(interpreter: Arc<Interpreter>) -> Router {
    Router::new()
        .route("/process_query", post(process_query))
        .route("/health", get(|| async { health(SERVICE_NAME) }))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(QueryAppState { interpreter })
}

pub async fn process_query(
    State(state): State<QueryAppState>,
    Json(request): Json<QueryRequest>,
) -> std::result::Result<Json<QueryResult>, ApiError> {
    let request_id = Uuid::new_v4();
    let span = info_span!("process_query", %request_id);

    async move {
        info!("Received query: {}", request.query);
        match state.interpreter.interpret(&request.query).await {
            Ok(result) => {
                info!("Query processed: {}", result.message);
                Ok(Json(result))
            }
            Err(e) => Err(error_response(e)),
        }
    }
    .instrument(span)
    .await
}

pub async fn run(config: Config) -> Result<()> {
    if config.llm.api_key.is_empty() {
        warn!(
            "LLM API key is not set. Set GEMINI_API_KEY (or LLM_API_KEY) \
             for query interpretation to work."
        );
    }

    let llm_client = create_llm_client(config.llm.clone())?;
    let store: Arc<dyn InventoryStore> =
        Arc::new(HttpInventoryStore::new(config.query.inventory_url.clone()));
    info!("Relaying inventory calls to {}", config.query.inventory_url);

    let interpreter = Arc::new(Interpreter::new(llm_client, store));

    serve(&config.query.host, config.query.port, router(interpreter)).await
}
