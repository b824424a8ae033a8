//! Small field-level validation helpers used by handlers.

/// Require an optional field to be present and non-blank, returning the
/// value. The error message names the field so clients can highlight it.
pub fn require_present<'a>(
    value: &'a Option<String>,
    field: &'static str,
) -> Result<&'a str, String> {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(format!("Required field '{field}' is missing")),
    }
}

/// Validate a percentage value (0-100).
pub fn validate_percentage(value: i32, field: &'static str) -> Result<(), String> {
    if (0..=100).contains(&value) {
        Ok(())
    } else {
        Err(format!("Field '{field}' must be between 0 and 100"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_option_returns_inner_value() {
        let value = Some("08-123".to_string());
        assert_eq!(require_present(&value, "phoneNumber").unwrap(), "08-123");
    }

    #[test]
    fn missing_option_rejected_with_field_name() {
        let err = require_present(&None, "phoneNumber").unwrap_err();
        assert!(err.contains("phoneNumber"));
    }

    #[test]
    fn whitespace_only_rejected() {
        let value = Some("   ".to_string());
        assert!(require_present(&value, "city").is_err());
    }

    #[test]
    fn percentage_bounds() {
        assert!(validate_percentage(0, "progress").is_ok());
        assert!(validate_percentage(100, "progress").is_ok());
        assert!(validate_percentage(-1, "progress").is_err());
        assert!(validate_percentage(101, "progress").is_err());
    }
}
