mod app_error;
mod conversions;
mod db_mapping;
mod extractor_mapping;
mod validation_mapping;


pub use app_error::{AppError, AppResult, ValidationIssue};
pub use extractor_mapping::{json_error_handler, path_error_handler, query_error_handler};
