use std::{collections::BTreeMap, sync::Arc, time::Duration};

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct NewItem {
    pub name: String,
}

/// What `/inspect` observed about the request it received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inspection {
    pub method: String,
    pub accept: Option<String>,
    pub content_type: Option<String>,
    pub body: Option<serde_json::Value>,
}

#[derive(Debug, Default)]
struct Store {
    items: BTreeMap<u64, Item>,
    last_id: u64,
}

impl Store {
    fn seeded(items: impl IntoIterator<Item = Item>) -> Self {
        let mut store = Store::default();
        for item in items {
            store.last_id = store.last_id.max(item.id);
            store.items.insert(item.id, item);
        }
        store
    }

    fn next_id(&mut self) -> u64 {
        self.last_id += 1;
        self.last_id
    }
}

type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    app_with(Vec::new())
}

pub fn app_with(items: impl IntoIterator<Item = Item>) -> Router {
    let db: Db = Arc::new(RwLock::new(Store::seeded(items)));
    Router::new()
        .route("/api/items", get(list_items).post(create_item))
        .route("/api/items/{id}", get(get_item).put(update_item))
        .route("/inspect", get(inspect).post(inspect).put(inspect))
        .route("/status/{code}", get(status).post(status).put(status))
        .route("/malformed", get(malformed))
        .route("/large/{len}", get(large))
        .route("/slow/{millis}", get(slow))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    serve(listener, app()).await
}

pub async fn serve(listener: TcpListener, app: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, app).await
}

async fn list_items(State(db): State<Db>) -> Json<Vec<Item>> {
    let store = db.read().await;
    Json(store.items.values().cloned().collect())
}

async fn create_item(
    State(db): State<Db>,
    Json(input): Json<NewItem>,
) -> (StatusCode, Json<Item>) {
    let mut store = db.write().await;
    let item = Item {
        id: store.next_id(),
        name: input.name,
    };
    store.items.insert(item.id, item.clone());
    tracing::debug!(id = item.id, "item created");
    (StatusCode::CREATED, Json(item))
}

async fn get_item(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Item>, StatusCode> {
    let store = db.read().await;
    store.items.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_item(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<NewItem>,
) -> Result<Json<Item>, StatusCode> {
    let mut store = db.write().await;
    let item = store.items.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    item.name = input.name;
    Ok(Json(item.clone()))
}

async fn inspect(method: Method, headers: HeaderMap, body: Bytes) -> Json<Inspection> {
    let header_str = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    Json(Inspection {
        method: method.to_string(),
        accept: header_str(header::ACCEPT),
        content_type: header_str(header::CONTENT_TYPE),
        body: serde_json::from_slice(&body).ok(),
    })
}

async fn status(Path(code): Path<u16>) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_REQUEST)
}

async fn malformed() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        "{not json",
    )
}

/// A JSON string of `len` ASCII characters, `len + 2` bytes on the wire.
async fn large(Path(len): Path<usize>) -> impl IntoResponse {
    let body = format!("\"{}\"", "a".repeat(len));
    (StatusCode::OK, [(header::CONTENT_TYPE, "application/json")], body)
}

async fn slow(Path(millis): Path<u64>) -> Json<serde_json::Value> {
    tokio::time::sleep(Duration::from_millis(millis)).await;
    Json(serde_json::json!({ "waited_ms": millis }))
}
