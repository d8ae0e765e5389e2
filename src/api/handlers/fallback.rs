//! Handler for unmatched routes.

use crate::error::AppError;

/// Answers every unknown path with a JSON 404.
pub async fn not_found_handler() -> AppError {
    AppError::route_not_found()
}
