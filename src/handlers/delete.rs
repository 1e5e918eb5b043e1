use crate::error::{parse_id, ApiError, ErrorResponse};
use crate::models::MessageResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// DELETE /data/{id} handler - Remove a data item
#[utoipa::path(
    delete,
    path = routes::DATA_ITEM,
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item deleted", body = MessageResponse),
        (status = 400, description = "Id is not an integer", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    ),
    tag = "data"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let id = parse_id(&id_str)?;
    tracing::info!("Deleting item with id={}", id);

    if state.store.delete(id).is_none() {
        return Err(ApiError::NotFound(id.to_string()));
    }

    tracing::info!("Item with id={} deleted successfully", id);
    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            message: "Item deleted".to_string(),
        }),
    ))
}
