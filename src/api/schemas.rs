// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Standard success response wrapper
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    /// Always true for successful responses
    #[schema(example = true)]
    pub success: bool,
    /// Response data
    pub data: T,
}

/// Standard error response
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,

    /// Human-readable error message
    #[schema(example = "Title is required")]
    pub error: String,

    /// Error code for programmatic handling
    #[schema(example = "VALIDATION_ERROR")]
    pub code: String,
}

/// Body of every delete endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct DeletedResponse {
    pub id: Uuid,
}
