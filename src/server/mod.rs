pub mod inventory;
pub mod query;
mod types;

pub use types::{ErrorResponse, HealthResponse, QueryRequest};

use crate::{Error, Result};
use axum::{Json, Router, http::StatusCode};
use std::net::SocketAddr;
use tracing::{error, info, warn};

pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Converts an error reaching a handler into its HTTP reply. Client-side
/// mistakes are logged as warnings, everything else as errors.
pub fn error_response(err: Error) -> ApiError {
    let status = err.status_code();
    if status.is_client_error() {
        warn!("Request rejected ({}): {}", status, err);
    } else {
        error!("Request failed ({}): {}", status, err);
    }

    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

fn health(service: &str) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: service.to_string(),
    })
}

async fn serve(host: &str, port: u16, app: Router) -> Result<()> {
    let addr = SocketAddr::new(host.parse()?, port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
