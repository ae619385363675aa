use super::{
    store::InventoryStore,
    types::{InventoryState, Item, UpdateRequest},
};
use crate::{Error, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

/// `InventoryStore` backed by a remote inventory service.
pub struct HttpInventoryStore {
    base_url: String,
    client: reqwest::Client,
}

/// Error body of the inventory service. `detail` is what FastAPI-style
/// services put their message under.
#[derive(Debug, Deserialize)]
struct RemoteError {
    error: Option<String>,
    detail: Option<String>,
}

impl HttpInventoryStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        debug!("Creating HTTP inventory store for: {}", base_url);
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    fn inventory_url(&self) -> String {
        format!("{}/inventory", self.base_url)
    }

    async fn decode(response: reqwest::Response) -> Result<InventoryState> {
        let status = response.status();
        if status.is_success() {
            // A 2xx we cannot read is still a bad reply from upstream.
            return response.json().await.map_err(|e| Error::Inventory {
                status: 502,
                message: format!("Malformed reply from Inventory Service: {}", e),
            });
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<RemoteError>(&body)
            .ok()
            .and_then(|e| e.error.or(e.detail))
            .unwrap_or_else(|| "No specific error detail from Inventory Service.".to_string());

        warn!("Inventory service returned {}: {}", status, body);
        Err(Error::Inventory {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl InventoryStore for HttpInventoryStore {
    async fn read(&self) -> Result<InventoryState> {
        let response = self.client.get(self.inventory_url()).send().await?;
        Self::decode(response).await
    }

    async fn update(&self, item: Item, change: i64) -> Result<InventoryState> {
        let body = UpdateRequest {
            item: item.to_string(),
            change,
        };
        let response = self
            .client
            .post(self.inventory_url())
            .json(&body)
            .send()
            .await?;
        Self::decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_json, method, path},
    };

    #[tokio::test]
    async fn test_read_decodes_state() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/inventory"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"tshirts": 4, "pants": 9})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let store = HttpInventoryStore::new(format!("{}/", server.uri()));
        assert_eq!(store.read().await.unwrap(), InventoryState::new(4, 9));
    }

    #[tokio::test]
    async fn test_update_posts_item_and_change() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/inventory"))
            .and(body_json(json!({"item": "tshirts", "change": -3})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"tshirts": 17, "pants": 15})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let store = HttpInventoryStore::new(server.uri());
        let state = store.update(Item::Tshirts, -3).await.unwrap();
        assert_eq!(state, InventoryState::new(17, 15));
    }

    #[tokio::test]
    async fn test_rejection_keeps_status_and_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/inventory"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": "Cannot reduce 'pants' stock below zero."
            })))
            .mount(&server)
            .await;

        let store = HttpInventoryStore::new(server.uri());
        let err = store.update(Item::Pants, -100).await.unwrap_err();
        match err {
            Error::Inventory { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Cannot reduce 'pants' stock below zero.");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_rejection_with_detail_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/inventory"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({"detail": "boom"})))
            .mount(&server)
            .await;

        let store = HttpInventoryStore::new(server.uri());
        let err = store.read().await.unwrap_err();
        assert!(matches!(err, Error::Inventory { status: 500, ref message } if message == "boom"));
    }

    #[tokio::test]
    async fn test_undecodable_success_body_is_bad_gateway() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/inventory"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let store = HttpInventoryStore::new(server.uri());
        let err = store.read().await.unwrap_err();
        assert!(matches!(err, Error::Inventory { status: 502, .. }));
        assert_eq!(err.status_code().as_u16(), 502);
    }

    #[tokio::test]
    async fn test_unreachable_service_is_network_error() {
        // Nothing listens on port 9 locally.
        let store = HttpInventoryStore::new("http://127.0.0.1:9");
        let err = store.read().await.unwrap_err();
        assert!(matches!(err, Error::Network(_)));
    }
}
