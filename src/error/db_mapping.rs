use super::app_error::AppError;

// SQLite extended result codes, as reported by `DatabaseError::code()`.
const SQLITE_BUSY: &str = "5";
const SQLITE_LOCKED: &str = "6";
const SQLITE_READONLY: &str = "8";
const SQLITE_FULL: &str = "13";
const SQLITE_CANTOPEN: &str = "14";
const SQLITE_CONSTRAINT_CHECK: &str = "275";
const SQLITE_CONSTRAINT_FOREIGNKEY: &str = "787";
const SQLITE_CONSTRAINT_NOTNULL: &str = "1299";
const SQLITE_CONSTRAINT_PRIMARYKEY: &str = "1555";
const SQLITE_CONSTRAINT_UNIQUE: &str = "2067";

pub(super) fn map_database_error(code: Option<&str>, message: &str) -> Option<AppError> {
    match code? {
        SQLITE_CONSTRAINT_UNIQUE | SQLITE_CONSTRAINT_PRIMARYKEY => Some(AppError::Conflict(
            "resource already exists".to_string(),
        )),
        SQLITE_CONSTRAINT_NOTNULL => Some(AppError::validation_error(
            required_field_message_from_db(message)
                .unwrap_or_else(|| "required field is missing".to_string()),
        )),
        SQLITE_CONSTRAINT_CHECK => Some(AppError::validation_error(
            "request violates validation rules",
        )),
        SQLITE_CONSTRAINT_FOREIGNKEY => Some(AppError::BadRequest(
            "referenced resource does not exist".to_string(),
        )),
        SQLITE_BUSY | SQLITE_LOCKED => Some(AppError::ServiceUnavailable {
            service: "database".to_string(),
            message: "Service temporarily unavailable. Please try again later.".to_string(),
        }),
        SQLITE_CANTOPEN | SQLITE_READONLY | SQLITE_FULL => Some(AppError::ServiceUnavailable {
            service: "database".to_string(),
            message: "Unable to write to database. Please try again later.".to_string(),
        }),
        _ => None,
    }
}

/// Pulls the column out of `NOT NULL constraint failed: table.column`.
pub(super) fn required_field_message_from_db(message: &str) -> Option<String> {
    let marker = "constraint failed: ";
    let start = message.find(marker)?;
    let qualified = message[start + marker.len()..].trim();
    let field = qualified.rsplit('.').next()?.trim();
    if field.is_empty() {
        return None;
    }
    Some(format!("{field} is required"))
}
