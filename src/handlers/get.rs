use crate::error::{parse_id, ApiError, ErrorResponse};
use crate::models::DataItem;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// GET /data/{id} handler - Retrieve a data item
#[utoipa::path(
    get,
    path = routes::DATA_ITEM,
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item found", body = DataItem),
        (status = 400, description = "Id is not an integer", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    ),
    tag = "data"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<DataItem>), ApiError> {
    let id = parse_id(&id_str)?;
    tracing::info!("Retrieving item with id={}", id);

    match state.store.get(id) {
        Some(item) => Ok((StatusCode::OK, Json(item))),
        None => Err(ApiError::NotFound(id.to_string())),
    }
}
