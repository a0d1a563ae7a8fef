// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Standard success response wrapper
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    /// Always true for successful responses
    #[schema(example = true)]
    pub success: bool,

    /// Optional human-readable message
    pub message: Option<String>,

    /// Response data
    pub data: T,
}

/// Standard error response wrapper
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,

    /// Human-readable error message
    #[schema(example = "Validation failed")]
    pub message: String,

    /// Field-level details, present on validation failures
    pub errors: Option<Vec<FieldErrorSchema>>,
}

#[derive(Serialize, ToSchema)]
pub struct FieldErrorSchema {
    /// Offending field name
    #[schema(example = "email")]
    pub field: String,

    /// What went wrong with it
    #[schema(example = "Invalid email format")]
    pub message: String,
}
