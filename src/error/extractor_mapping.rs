use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::HttpRequest;

use super::app_error::{AppError, ValidationIssue};

pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    json_payload_error(err).into()
}

pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    query_payload_error(err).into()
}

pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    path_payload_error(err).into()
}

pub(super) fn json_payload_error(err: JsonPayloadError) -> AppError {
    match err {
        JsonPayloadError::Deserialize(error) => {
            let code = if error.is_syntax() || error.is_eof() {
                "invalid_json"
            } else {
                "invalid_type"
            };
            let message = error.to_string();
            let field = field_from_serde_message(&message).unwrap_or("body").to_string();
            AppError::invalid_field(ValidationIssue::new(field, message, code))
        }
        overflow @ (JsonPayloadError::Overflow { .. }
        | JsonPayloadError::OverflowKnownLength { .. }) => {
            AppError::PayloadTooLarge(overflow.to_string())
        }
        JsonPayloadError::ContentType => AppError::invalid_field(ValidationIssue::new(
            "body",
            "request body must be application/json",
            "content_type",
        )),
        other => AppError::invalid_field(ValidationIssue::new(
            "body",
            other.to_string(),
            "invalid_body",
        )),
    }
}

pub(super) fn query_payload_error(err: QueryPayloadError) -> AppError {
    let message = match err {
        QueryPayloadError::Deserialize(error) => error.to_string(),
        other => other.to_string(),
    };
    let field = field_from_serde_message(&message).unwrap_or("query").to_string();
    AppError::invalid_field(ValidationIssue::new(field, message, "invalid_type"))
}

pub(super) fn path_payload_error(err: PathError) -> AppError {
    let message = match err {
        PathError::Deserialize(error) => error.to_string(),
        other => other.to_string(),
    };
    AppError::invalid_field(ValidationIssue::new("path", message, "invalid_type"))
}

/// Field-level serde errors name the field in backticks right after a fixed
/// prefix, e.g. "missing field `name`". Type errors put the submitted value in
/// backticks instead, so only these prefixes are trusted.
const FIELD_ERROR_PREFIXES: [&str; 3] = ["missing field `", "unknown field `", "duplicate field `"];

pub(super) fn field_from_serde_message(message: &str) -> Option<&str> {
    let start = FIELD_ERROR_PREFIXES
        .iter()
        .find(|prefix| message.starts_with(*prefix))?
        .len();
    let end = start + message[start..].find('`')?;
    let field = &message[start..end];
    (!field.is_empty()).then_some(field)
}
