use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standard error response structure for API errors
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error label (e.g., "Validation error", "Not found")
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Machine-readable error code (e.g., "VALIDATION_ERROR")
    pub code: String,
    /// Field-level issues, present on validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<ErrorDetail>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorDetail {
    pub field: String,
    pub message: String,
    pub code: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
