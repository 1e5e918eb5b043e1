use std::any::Any;

use axum::{
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::error::ApiError;
use crate::handlers::{create_handler, delete_handler, get_handler, health_handler, list_handler};
use crate::routes;
use crate::state::AppState;

/// Build the full application router: API routes, OpenAPI docs, and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(routes::HEALTH, get(health_handler))
        .route(routes::DATA_LIST, get(list_handler).post(create_handler))
        .route(routes::DATA_ITEM, get(get_handler).delete(delete_handler))
        .with_state(state)
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}

/// Turn a handler panic into the generic 500 body.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::Internal(anyhow::anyhow!("handler panicked: {}", detail)).into_response()
}

/// Log every available endpoint, mirroring the route table above.
pub fn log_endpoints(base_url: &str) {
    tracing::info!("Available endpoints:");
    tracing::info!("  GET    {}{} - Health check", base_url, routes::HEALTH);
    tracing::info!("  POST   {}{} - Create item", base_url, routes::DATA_LIST);
    tracing::info!("  GET    {}{} - List all items", base_url, routes::DATA_LIST);
    tracing::info!("  GET    {}{} - Get item by ID", base_url, routes::DATA_ITEM);
    tracing::info!("  DELETE {}{} - Delete item", base_url, routes::DATA_ITEM);
    tracing::info!("  GET    {}{} - API documentation", base_url, routes::SWAGGER_UI);
}
