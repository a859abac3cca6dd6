//! Input validation helpers
//!
//! Text length limits for guest-supplied strings. SQLite TEXT has no
//! built-in length enforcement.

use shared::error::AppError;

/// Identifiers: restaurant slug, table id
pub const MAX_IDENT_LEN: usize = 100;

/// Payment method label
pub const MAX_LABEL_LEN: usize = 50;

/// Line item notes
pub const MAX_NOTE_LEN: usize = 500;

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    validate_len(value, field, max_len)
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: Option<&str>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    match value {
        Some(v) => validate_len(v, field, max_len),
        None => Ok(()),
    }
}

fn validate_len(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        ))
        .with_detail("field", field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("table-5", "table_id", MAX_IDENT_LEN).is_ok());

        let err = validate_required_text("  ", "table_id", MAX_IDENT_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.message, "table_id must not be empty");

        let long = "x".repeat(MAX_IDENT_LEN + 1);
        assert!(validate_required_text(&long, "table_id", MAX_IDENT_LEN).is_err());
    }

    #[test]
    fn test_optional_text() {
        assert!(validate_optional_text(None, "note", MAX_NOTE_LEN).is_ok());
        assert!(validate_optional_text(Some(""), "note", MAX_NOTE_LEN).is_ok());

        let long = "n".repeat(MAX_NOTE_LEN + 1);
        let err = validate_optional_text(Some(&long), "note", MAX_NOTE_LEN).unwrap_err();
        assert_eq!(err.details.unwrap()["field"], "note");
    }
}
