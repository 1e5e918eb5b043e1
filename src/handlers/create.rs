use crate::error::{ApiError, ErrorResponse};
use crate::models::{DataItem, NewDataItem};
use crate::routes;
use crate::state::AppState;
use axum::{body::Bytes, extract::rejection::BytesRejection, extract::State, http::StatusCode, Json};
use serde_json::Value as JsonValue;

/// POST /data handler - Create a data item
///
/// Reads the raw body regardless of content type; bad JSON and failed field
/// checks both answer 400 `{error, details}`. A body that cannot be read at
/// all (for example one over the body size limit) answers 500.
#[utoipa::path(
    post,
    path = routes::DATA_LIST,
    request_body = NewDataItem,
    responses(
        (status = 201, description = "Item created", body = DataItem),
        (status = 400, description = "Invalid data", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "data"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<DataItem>), ApiError> {
    let body = body.map_err(|rejection| {
        ApiError::Internal(anyhow::anyhow!(
            "failed to read request body ({}): {}",
            rejection.status(),
            rejection.body_text()
        ))
    })?;
    let payload: JsonValue = serde_json::from_slice(&body)?;
    tracing::debug!("Create payload: {}", payload);

    let new_item = NewDataItem::from_json(&payload).map_err(ApiError::Validation)?;
    tracing::info!("Creating new item: {}", new_item.name);
    let item = state.store.insert(new_item);

    tracing::info!("Item created successfully with id={}", item.id);
    Ok((StatusCode::CREATED, Json(item)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::store::Store;
    use axum::{body::Body, http::Request, routing::post, Router};
    use tower::ServiceExt;

    fn setup_test_app() -> (Router, Store) {
        let store = Store::new();
        let app = Router::new()
            .route(crate::routes::DATA_LIST, post(create_handler))
            .with_state(AppState::new(store.clone(), Config::default()));
        (app, store)
    }

    async fn post_raw(app: Router, content_type: Option<&str>, body: &str) -> (StatusCode, JsonValue) {
        let mut request = Request::builder().method("POST").uri("/data");
        if let Some(content_type) = content_type {
            request = request.header("content-type", content_type);
        }

        let response = app
            .oneshot(request.body(Body::from(body.to_string())).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    async fn post_json(app: Router, body: JsonValue) -> (StatusCode, JsonValue) {
        post_raw(app, Some("application/json"), &body.to_string()).await
    }

    #[tokio::test]
    async fn test_create_endpoint_success() {
        let (app, store) = setup_test_app();

        let (status, body) =
            post_json(app, serde_json::json!({"name": "Sales", "value": 1000.5})).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, serde_json::json!({"id": 1, "name": "Sales", "value": 1000.5}));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_create_endpoint_assigns_increasing_ids() {
        let (app, _store) = setup_test_app();

        let (_, first) =
            post_json(app.clone(), serde_json::json!({"name": "Item1", "value": 100})).await;
        let (status, second) =
            post_json(app, serde_json::json!({"name": "Item2", "value": 200})).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(first["id"], 1);
        assert_eq!(second["id"], 2);
        assert_eq!(second["value"], 200.0);
    }

    #[tokio::test]
    async fn test_create_endpoint_empty_name_missing_value() {
        let (app, store) = setup_test_app();

        let (status, body) = post_json(app, serde_json::json!({"name": ""})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid data");
        let details = body["details"].as_array().unwrap();
        assert_eq!(details.len(), 2);
        assert_eq!(details[0]["loc"], serde_json::json!(["name"]));
        assert_eq!(details[1]["type"], "missing");
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_create_endpoint_invalid_value_type() {
        let (app, _store) = setup_test_app();

        let (status, body) = post_json(
            app,
            serde_json::json!({"name": "Test", "value": "not_a_number"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"][0]["type"], "float_type");
    }

    #[tokio::test]
    async fn test_create_endpoint_invalid_json() {
        let (app, store) = setup_test_app();

        let (status, body) = post_raw(app, Some("application/json"), "{invalid json}").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid data");
        assert_eq!(body["details"][0]["type"], "json_invalid");
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_create_endpoint_without_content_type() {
        let (app, _store) = setup_test_app();

        let (status, body) = post_raw(app, None, r#"{"name": "Plain", "value": 1}"#).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["name"], "Plain");
    }

    #[tokio::test]
    async fn test_create_endpoint_empty_body() {
        let (app, _store) = setup_test_app();

        let (status, body) = post_raw(app, Some("application/json"), "").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid data");
    }
}
