//! Integration tests for `HttpStore` against an in-process collection
//! resource served by axum on an ephemeral localhost port.

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, patch};
use axum::{Json, Router};

use listra_client::{ClientConfig, HttpStore};
use listra_core::{Item, ItemId, ItemStore};

type Shared = Arc<Mutex<Vec<Item>>>;

async fn list_items(State(items): State<Shared>) -> Json<Vec<Item>> {
    Json(items.lock().unwrap().clone())
}

async fn create_item(State(items): State<Shared>, Json(item): Json<Item>) -> StatusCode {
    items.lock().unwrap().push(item);
    StatusCode::CREATED
}

async fn update_item(
    State(items): State<Shared>,
    Path(id): Path<u64>,
    Json(body): Json<serde_json::Value>,
) -> StatusCode {
    let checked = body.get("checked").and_then(|v| v.as_bool());
    let Some(checked) = checked else {
        return StatusCode::BAD_REQUEST;
    };
    let mut items = items.lock().unwrap();
    match items.iter_mut().find(|item| item.id == ItemId::new(id)) {
        Some(item) => {
            item.checked = checked;
            StatusCode::OK
        }
        None => StatusCode::NOT_FOUND,
    }
}

async fn delete_item(State(items): State<Shared>, Path(id): Path<u64>) -> StatusCode {
    let mut items = items.lock().unwrap();
    let before = items.len();
    items.retain(|item| item.id != ItemId::new(id));
    if items.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    }
}

/// Serve a fake collection resource, returning its state handle and a store
/// pointed at it.
async fn spawn_resource(seed: Vec<Item>) -> (Shared, HttpStore) {
    let items: Shared = Arc::new(Mutex::new(seed));
    let app = Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/{id}", patch(update_item).delete(delete_item))
        .route("/broken", get(|| async { "this is not json" }))
        .with_state(items.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });

    let config = ClientConfig {
        base_url: format!("http://{addr}/items"),
        timeout_secs: 5,
    };
    let store = HttpStore::new(config).expect("build store");
    (items, store)
}

fn seed() -> Vec<Item> {
    vec![
        Item::new(ItemId::new(1), "one small item"),
        Item::new(ItemId::new(2), "item two"),
    ]
}

#[tokio::test]
async fn list_fetches_all_items() {
    let (_items, store) = spawn_resource(seed()).await;
    let fetched = store.list().await.expect("list");
    assert_eq!(fetched, seed());
}

#[tokio::test]
async fn create_posts_full_item() {
    let (items, store) = spawn_resource(seed()).await;
    let new_item = Item::new(ItemId::new(3), "item three");
    store.create(&new_item).await.expect("create");

    let stored = items.lock().unwrap().clone();
    assert_eq!(stored.len(), 3);
    assert_eq!(stored[2], new_item);
}

#[tokio::test]
async fn set_checked_patches_single_item() {
    let (items, store) = spawn_resource(seed()).await;
    store
        .set_checked(ItemId::new(2), true)
        .await
        .expect("set_checked");

    let stored = items.lock().unwrap().clone();
    assert!(stored[1].checked);
    assert!(!stored[0].checked);
}

#[tokio::test]
async fn delete_removes_item() {
    let (items, store) = spawn_resource(seed()).await;
    store.delete(ItemId::new(1)).await.expect("delete");

    let stored = items.lock().unwrap().clone();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, ItemId::new(2));
}

#[tokio::test]
async fn missing_id_surfaces_status_404() {
    let (_items, store) = spawn_resource(seed()).await;
    let err = store.delete(ItemId::new(99)).await.unwrap_err();
    assert_eq!(err.to_string(), "Unexpected status: 404");
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn patch_missing_id_surfaces_status_404() {
    let (_items, store) = spawn_resource(seed()).await;
    let err = store.set_checked(ItemId::new(99), true).await.unwrap_err();
    assert_eq!(err.to_string(), "Unexpected status: 404");
}

#[tokio::test]
async fn malformed_list_body_is_permanent_serialization_error() {
    let (_items, store) = spawn_resource(seed()).await;
    let config = ClientConfig {
        base_url: store.config().base_url.replace("/items", "/broken"),
        timeout_secs: 5,
    };
    let broken = HttpStore::new(config).expect("build store");
    let err = broken.list().await.unwrap_err();
    assert!(err.to_string().starts_with("Serialization error"));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn unreachable_resource_is_retryable_http_error() {
    // Nothing listens on this port; connection is refused immediately.
    let config = ClientConfig {
        base_url: "http://127.0.0.1:1/items".to_string(),
        timeout_secs: 1,
    };
    let store = HttpStore::new(config).expect("build store");
    let err = store.list().await.unwrap_err();
    assert!(err.is_retryable());
    assert!(err.to_string().contains("list request failed"));
}
