use crate::server::error::AppError;

/// Returns the value when it is present and not blank.
///
/// Whitespace only decides blankness; the value itself is kept verbatim.
pub fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Validates a field of a partial update.
///
/// An absent field means "leave unchanged" and yields `Ok(None)`, while a field that
/// is present but blank is rejected since every text column is required.
///
/// # Arguments
/// - `value` - The field as received in the request body
/// - `field` - Wire name of the field used in the error message
///
/// # Returns
/// - `Ok(Some(String))` - New value, unmodified
/// - `Ok(None)` - Field not provided
/// - `Err(AppError::BadRequest)` - Field provided but blank
pub fn non_blank(value: Option<String>, field: &str) -> Result<Option<String>, AppError> {
    match value {
        None => Ok(None),
        Some(v) if v.trim().is_empty() => Err(AppError::BadRequest(format!(
            "Field {} must not be empty",
            field
        ))),
        Some(v) => Ok(Some(v)),
    }
}

/// Validates a referenced id, rejecting zero and negative values.
pub fn positive_id(value: Option<i32>) -> Option<i32> {
    value.filter(|id| *id > 0)
}
