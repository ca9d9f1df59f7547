//! Item gateway: an HTTP front for the item service.
//!
//! # Overview
//! Each route builds the item service URL from the client's base URL,
//! forwards the call through a `JsonService`, and returns the decoded result
//! to its own caller.
//!
//! # Design
//! The router is generic over `JsonService`, so it only depends on the
//! contract. The service's default-on-failure results are mapped back to
//! HTTP: an empty `Option` becomes 404 (lookups) or 502 (creation), and an
//! empty list is returned as-is. Client errors are 502.

pub mod config;
pub mod error;

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use json_http_client::JsonService;
use serde::{Deserialize, Serialize};

pub use config::Config;
pub use error::{ConfigError, GatewayError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
}

pub fn router<S: JsonService + 'static>(service: S) -> Router {
    Router::new()
        .route("/api/gateway/items", get(list_items::<S>).post(create_item::<S>))
        .route(
            "/api/gateway/items/{id}",
            get(get_item::<S>).put(update_item::<S>),
        )
        .with_state(Arc::new(service))
}

fn items_url<S: JsonService>(service: &S) -> String {
    format!("{}api/items", service.url_service())
}

async fn list_items<S: JsonService>(
    State(service): State<Arc<S>>,
) -> Result<Json<Vec<Item>>, GatewayError> {
    let items = service.get_async::<Vec<Item>>(&items_url(&*service)).await?;
    Ok(Json(items))
}

async fn get_item<S: JsonService>(
    State(service): State<Arc<S>>,
    Path(id): Path<u64>,
) -> Result<Json<Item>, GatewayError> {
    let url = format!("{}/{id}", items_url(&*service));
    service
        .get_async::<Option<Item>>(&url)
        .await?
        .map(Json)
        .ok_or(GatewayError::NotFound(id))
}

async fn create_item<S: JsonService>(
    State(service): State<Arc<S>>,
    Json(input): Json<NewItem>,
) -> Result<(StatusCode, Json<Item>), GatewayError> {
    let created = service
        .post_async::<Option<Item>, NewItem>(&items_url(&*service), &input)
        .await?
        .ok_or(GatewayError::Rejected)?;
    tracing::info!(id = created.id, "item created through gateway");
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_item<S: JsonService>(
    State(service): State<Arc<S>>,
    Path(id): Path<u64>,
    Json(input): Json<NewItem>,
) -> Result<Json<Item>, GatewayError> {
    let url = format!("{}/{id}", items_url(&*service));
    service
        .put_async::<Option<Item>, NewItem>(&url, &input)
        .await?
        .map(Json)
        .ok_or(GatewayError::NotFound(id))
}
