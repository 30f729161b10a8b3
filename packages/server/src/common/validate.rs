//! Input shape validation. Runs first in every action, before existence,
//! authorization, or state logic, and reports the first violated
//! constraint as a `Validation` error.

use lazy_static::lazy_static;
use regex::Regex;

use super::error::{ApiError, ApiResult};

lazy_static! {
    // Email pattern - RFC 5322 simplified
    static ref EMAIL_REGEX: Regex = Regex::new(
        r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$"
    ).unwrap();
}

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Requires a non-empty trimmed string of at most `max_chars` characters.
/// `field` is the display name used in error messages.
pub fn require_text(field: &str, value: &str, max_chars: usize) -> ApiResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Validation(format!("{field} is required.")));
    }
    if trimmed.chars().count() > max_chars {
        return Err(ApiError::Validation(format!(
            "{field} must be at most {max_chars} characters."
        )));
    }
    Ok(trimmed.to_string())
}

/// Like [`require_text`] but absent and blank values pass through as `None`.
pub fn optional_text(
    field: &str,
    value: Option<String>,
    max_chars: usize,
) -> ApiResult<Option<String>> {
    match value {
        None => Ok(None),
        Some(v) if v.trim().is_empty() => Ok(None),
        Some(v) => require_text(field, &v, max_chars).map(Some),
    }
}

/// Validates and canonicalizes an email address (trimmed, lowercased).
pub fn require_email(value: &str) -> ApiResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Validation("Email is required.".to_string()));
    }
    if !EMAIL_REGEX.is_match(trimmed) {
        return Err(ApiError::Validation(
            "Email address is not valid.".to_string(),
        ));
    }
    Ok(trimmed.to_lowercase())
}

pub fn require_password(value: &str) -> ApiResult<()> {
    if value.chars().count() < MIN_PASSWORD_LEN {
        return Err(ApiError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters."
        )));
    }
    Ok(())
}

/// Study years run 1 through 6 (integrated programs included).
pub fn optional_year(value: Option<i32>) -> ApiResult<Option<i32>> {
    match value {
        Some(y) if !(1..=6).contains(&y) => Err(ApiError::Validation(
            "Year must be between 1 and 6.".to_string(),
        )),
        other => Ok(other),
    }
}

/// Accepts only the relative paths the upload store hands out. Anything
/// absolute or containing a parent-directory component is rejected.
pub fn require_upload_path(value: &str) -> ApiResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Validation(
            "Document path is required.".to_string(),
        ));
    }
    if trimmed.starts_with('/')
        || trimmed.contains('\\')
        || trimmed.split('/').any(|part| part == "..")
    {
        return Err(ApiError::Validation(
            "Document path is not valid.".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}
