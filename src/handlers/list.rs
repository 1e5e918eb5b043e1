use crate::models::DataItem;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /data handler - List all data items
///
/// Returns every stored item in insertion order; an empty store yields `[]`.
#[utoipa::path(
    get,
    path = routes::DATA_LIST,
    responses(
        (status = 200, description = "All data items", body = Vec<DataItem>)
    ),
    tag = "data"
)]
pub async fn list_handler(State(state): State<AppState>) -> (StatusCode, Json<Vec<DataItem>>) {
    let items = state.store.list();
    tracing::info!("Listing all items, total count: {}", items.len());
    (StatusCode::OK, Json(items))
}
