use utoipa::OpenApi;

use crate::error::{ErrorResponse, FieldError};
use crate::handlers;
use crate::models::{DataItem, HealthResponse, MessageResponse, NewDataItem};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "data-items-api",
        version = "1.0.0",
        description = "A minimal in-memory CRUD service for named numeric data items"
    ),
    paths(
        handlers::health::health_handler,
        handlers::create::create_handler,
        handlers::list::list_handler,
        handlers::get::get_handler,
        handlers::delete::delete_handler
    ),
    components(
        schemas(
            DataItem,
            NewDataItem,
            HealthResponse,
            MessageResponse,
            ErrorResponse,
            FieldError
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "data", description = "Data item operations")
    )
)]
pub struct ApiDoc;
