use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Server banner returned by the root route
#[derive(Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
}
