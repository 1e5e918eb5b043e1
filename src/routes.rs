// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const DATA_LIST: &str = "/data";
pub const DATA_ITEM: &str = "/data/{id}";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
pub const SWAGGER_UI: &str = "/swagger-ui";
