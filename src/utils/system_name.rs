//! Host-system name validation and sanitization.
//!
//! Names arrive from the URL path and end up inside an ADQL string literal.
//! Validation bounds the raw input; sanitization then deletes (rather than
//! rejects) every character outside a small allow-list.

use crate::error::AppError;
use serde_json::json;

/// Maximum accepted length of a raw system name, in characters.
pub const MAX_SYSTEM_NAME_CHARS: usize = 50;

/// Checks the raw, unsanitized system name.
///
/// # Rules
///
/// - Must not be empty
/// - At most [`MAX_SYSTEM_NAME_CHARS`] characters
///
/// # Errors
///
/// Returns [`AppError::Validation`] if either rule is violated.
pub fn validate_system_name(raw: &str) -> Result<(), AppError> {
    let length = raw.chars().count();

    if length == 0 || length > MAX_SYSTEM_NAME_CHARS {
        return Err(AppError::bad_request(
            "Invalid system name. Must be between 1-50 characters.",
            json!({ "providedLength": length }),
        ));
    }

    Ok(())
}

/// Deletes every character that is not an ASCII letter or digit,
/// whitespace, hyphen, or period.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(sanitize_system_name("Kepler-11"), "Kepler-11");
/// assert_eq!(sanitize_system_name("Kepler<script>"), "Keplerscript");
/// assert_eq!(sanitize_system_name("!!!"), "");
/// ```
pub fn sanitize_system_name(raw: &str) -> String {
    raw.chars().filter(|c| is_allowed(*c)).collect()
}

fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || c.is_whitespace() || c == '-' || c == '.'
}
