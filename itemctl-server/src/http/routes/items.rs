//! Item endpoints
//!
//! Straight mapping from HTTP verbs to [`ItemStore`](crate::db::ItemStore)
//! calls. Both `/items` and `/items/` serve the collection.

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::extractors::{ItemId, ValidJson, ValidQuery};
use crate::models::{Item, ListParams, NewItem};
use crate::state::AppState;

/// Confirmation returned by DELETE
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct DeleteResponse {
    pub detail: String,
}

/// POST /items/ - create an item
async fn create_item(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<NewItem>,
) -> Result<Json<Item>, ApiError> {
    let item = state.store().create(body).await?;
    tracing::info!(id = item.id, "created item");
    Ok(Json(item))
}

/// GET /items/ - filtered, paged listing
async fn list_items(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<ListParams>,
) -> Result<Json<Vec<Item>>, ApiError> {
    let (filter, page) = params.into_parts();
    let items = state.store().list(&filter, page).await?;
    Ok(Json(items))
}

/// GET /items/{id}
async fn get_item(
    State(state): State<AppState>,
    ItemId(id): ItemId,
) -> Result<Json<Item>, ApiError> {
    let item = state.store().get(id).await?;
    Ok(Json(item))
}

/// PUT /items/{id} - replace every mutable field
async fn update_item(
    State(state): State<AppState>,
    ItemId(id): ItemId,
    ValidJson(body): ValidJson<NewItem>,
) -> Result<Json<Item>, ApiError> {
    let item = state.store().update(id, body).await?;
    tracing::info!(id, "updated item");
    Ok(Json(item))
}

/// DELETE /items/{id}
async fn delete_item(
    State(state): State<AppState>,
    ItemId(id): ItemId,
) -> Result<Json<DeleteResponse>, ApiError> {
    state.store().delete(id).await?;
    tracing::info!(id, "deleted item");
    Ok(Json(DeleteResponse {
        detail: format!("Item with id {} deleted", id),
    }))
}

/// Item routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/", get(list_items).post(create_item))
        .route(
            "/items/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::db::MemoryItemStore;
    use crate::http::server::{build_router, ServerConfig};

    fn app() -> Router {
        build_router(AppState::new(MemoryItemStore::new()), &ServerConfig::default())
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(value) => {
                request = request.header("content-type", "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };

        let response = app
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn create(app: &Router, body: Value) -> Value {
        let (status, item) = send(app, Method::POST, "/items/", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        item
    }

    #[tokio::test]
    async fn create_defaults_in_stock_and_assigns_id() {
        let app = app();
        let item = create(&app, json!({ "name": "Widget", "price": 9.99 })).await;

        assert_eq!(item["in_stock"], json!(true));
        assert!(item["id"].as_i64().unwrap() > 0);
        assert_eq!(item["name"], "Widget");
        assert_eq!(item["price"], json!(9.99));
    }

    #[tokio::test]
    async fn create_ignores_caller_id() {
        let app = app();
        let item = create(&app, json!({ "id": 99, "name": "Widget", "price": 1.0 })).await;
        assert_eq!(item["id"], json!(1));
    }

    #[tokio::test]
    async fn get_after_create_returns_same_record() {
        let app = app();
        let created = create(&app, json!({ "name": "Widget", "price": 9.99, "in_stock": false })).await;

        let uri = format!("/items/{}", created["id"]);
        let (status, fetched) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn unknown_id_is_404() {
        let app = app();
        let (status, body) = send(&app, Method::GET, "/items/12345", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "detail": "Item not found" }));
    }

    #[tokio::test]
    async fn out_of_range_id_is_404() {
        let app = app();
        for method in [Method::GET, Method::DELETE] {
            let (status, body) = send(&app, method, "/items/99999999999", None).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(body, json!({ "detail": "Item not found" }));
        }

        let body = json!({ "name": "Widget", "price": 1.0 });
        let (status, _) = send(&app, Method::PUT, "/items/-99999999999", Some(body)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn list_coerces_loose_in_stock_values() {
        let app = app();
        create(&app, json!({ "name": "shelved", "price": 1.0, "in_stock": true })).await;
        create(&app, json!({ "name": "sold out", "price": 1.0, "in_stock": 0 })).await;

        for (query, expected) in [
            ("in_stock=1", "shelved"),
            ("in_stock=True", "shelved"),
            ("in_stock=yes", "shelved"),
            ("in_stock=0", "sold out"),
            ("in_stock=off", "sold out"),
        ] {
            let (status, items) = send(&app, Method::GET, &format!("/items/?{}", query), None).await;
            assert_eq!(status, StatusCode::OK, "{}", query);
            let items = items.as_array().unwrap();
            assert_eq!(items.len(), 1, "{}", query);
            assert_eq!(items[0]["name"], expected, "{}", query);
        }

        let (status, _) = send(&app, Method::GET, "/items/?in_stock=maybe", None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn malformed_input_is_422() {
        let app = app();

        let (status, _) = send(&app, Method::POST, "/items/", Some(json!({ "name": "Widget" }))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, _) = send(
            &app,
            Method::POST,
            "/items/",
            Some(json!({ "name": "Widget", "price": "free" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, _) = send(&app, Method::GET, "/items/abc", None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, _) = send(&app, Method::GET, "/items/?min_price=lots", None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn missing_content_type_is_422() {
        let app = app();
        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/items/")
                    .body(Body::from(r#"{"name": "Widget", "price": 1}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn list_filters_by_min_price() {
        let app = app();
        for (name, price) in [("cheap", 2.5), ("edge", 10.0), ("dear", 50.0)] {
            create(&app, json!({ "name": name, "price": price })).await;
        }

        let (status, items) = send(&app, Method::GET, "/items/?min_price=10", None).await;
        assert_eq!(status, StatusCode::OK);

        let items = items.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|item| item["price"].as_f64().unwrap() >= 10.0));
    }

    #[tokio::test]
    async fn list_matches_name_case_insensitively() {
        let app = app();
        create(&app, json!({ "name": "Widget", "price": 1.0 })).await;
        create(&app, json!({ "name": "Gadget", "price": 1.0 })).await;

        let (_, items) = send(&app, Method::GET, "/items?name=wid", None).await;
        let names: Vec<&str> = items
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Widget"]);
    }

    #[tokio::test]
    async fn list_filters_by_stock() {
        let app = app();
        create(&app, json!({ "name": "a", "price": 1.0, "in_stock": false })).await;
        create(&app, json!({ "name": "b", "price": 1.0 })).await;

        let (_, items) = send(&app, Method::GET, "/items/?in_stock=false", None).await;
        let items = items.as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["name"], "a");
    }

    #[tokio::test]
    async fn skip_and_limit_select_the_second_item() {
        let app = app();
        for name in ["first", "second", "third"] {
            create(&app, json!({ "name": name, "price": 1.0 })).await;
        }

        let (_, items) = send(&app, Method::GET, "/items/?skip=1&limit=1", None).await;
        let items = items.as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["name"], "second");
    }

    #[tokio::test]
    async fn list_defaults_to_ten() {
        let app = app();
        for i in 0..12 {
            create(&app, json!({ "name": format!("item-{}", i), "price": 1.0 })).await;
        }

        let (_, items) = send(&app, Method::GET, "/items/", None).await;
        assert_eq!(items.as_array().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn list_with_no_matches_is_empty() {
        let app = app();
        let (status, items) = send(&app, Method::GET, "/items/?name=nothing", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(items, json!([]));
    }

    #[tokio::test]
    async fn put_replaces_all_fields() {
        let app = app();
        let created = create(&app, json!({ "name": "Widget", "price": 9.99 })).await;
        let uri = format!("/items/{}", created["id"]);

        let replacement = json!({ "name": "Gizmo", "price": 4.5, "in_stock": false });
        let (status, updated) = send(&app, Method::PUT, &uri, Some(replacement)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            updated,
            json!({ "id": created["id"], "name": "Gizmo", "price": 4.5, "in_stock": false })
        );

        let (_, fetched) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn put_with_identical_values_succeeds() {
        let app = app();
        let created = create(&app, json!({ "name": "Widget", "price": 9.99 })).await;
        let uri = format!("/items/{}", created["id"]);

        let same = json!({ "name": "Widget", "price": 9.99, "in_stock": true });
        let (status, updated) = send(&app, Method::PUT, &uri, Some(same)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated, created);
    }

    #[tokio::test]
    async fn put_unknown_id_is_404() {
        let app = app();
        let body = json!({ "name": "Widget", "price": 1.0, "in_stock": true });
        let (status, body) = send(&app, Method::PUT, "/items/7", Some(body)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Item not found");
    }

    #[tokio::test]
    async fn delete_then_get_is_404() {
        let app = app();
        let created = create(&app, json!({ "name": "Widget", "price": 9.99 })).await;
        let id = created["id"].as_i64().unwrap();
        let uri = format!("/items/{}", id);

        let (status, body) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "detail": format!("Item with id {} deleted", id) }));

        let (status, _) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
