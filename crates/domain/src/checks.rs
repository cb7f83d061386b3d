//! Field-level check helpers
//!
//! Small predicates scenarios run over deserialized response models.
//! Each returns `Ok(())` or a [`CheckFailure`] carrying the expected and
//! actual values for reporting; none of them panic.

use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Timestamp format the API uses: ISO-8601 with millisecond precision
/// and a literal `Z` suffix.
pub const TIMESTAMP_MILLIS_UTC: &str = r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d{3}Z$";

/// A failed field check, with the values needed to report it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckFailure {
    /// What went wrong.
    pub message: String,
    /// Expected value, when one applies.
    pub expected: Option<String>,
    /// Actual value, when one was observed.
    pub actual: Option<String>,
}

impl CheckFailure {
    /// Creates a failure with a message only.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            expected: None,
            actual: None,
        }
    }

    /// Creates a failure carrying expected and actual values.
    #[must_use]
    pub fn with_values(
        message: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            expected: Some(expected.into()),
            actual: Some(actual.into()),
        }
    }
}

impl fmt::Display for CheckFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let (Some(expected), Some(actual)) = (&self.expected, &self.actual) {
            write!(f, " (expected {expected}, got {actual})")?;
        }
        Ok(())
    }
}

/// Result type alias for field checks.
pub type CheckResult = Result<(), CheckFailure>;

/// Checks that `actual` equals `expected`.
///
/// # Errors
///
/// Returns a [`CheckFailure`] with both values on mismatch.
pub fn eq<T: fmt::Debug + PartialEq + ?Sized>(field: &str, actual: &T, expected: &T) -> CheckResult {
    if actual == expected {
        Ok(())
    } else {
        Err(CheckFailure::with_values(
            format!("{field} differs from expected value"),
            format!("{expected:?}"),
            format!("{actual:?}"),
        ))
    }
}

/// Checks that `actual` is strictly greater than `floor`.
///
/// # Errors
///
/// Returns a [`CheckFailure`] with both values otherwise.
pub fn gt<T: fmt::Debug + PartialOrd>(field: &str, actual: &T, floor: &T) -> CheckResult {
    if actual > floor {
        Ok(())
    } else {
        Err(CheckFailure::with_values(
            format!("{field} is not greater than the expected floor"),
            format!("> {floor:?}"),
            format!("{actual:?}"),
        ))
    }
}

/// Checks that a sequence has at least one element.
///
/// # Errors
///
/// Returns a [`CheckFailure`] if the sequence is empty.
pub fn not_empty<T>(field: &str, items: &[T]) -> CheckResult {
    if items.is_empty() {
        Err(CheckFailure::new(format!("{field} is empty")))
    } else {
        Ok(())
    }
}

/// Checks that a string contains at least one non-whitespace character.
///
/// # Errors
///
/// Returns a [`CheckFailure`] if the string is blank.
pub fn non_blank(field: &str, value: &str) -> CheckResult {
    if value.trim().is_empty() {
        Err(CheckFailure::new(format!("{field} is blank")))
    } else {
        Ok(())
    }
}

/// Checks that an optional field is absent.
///
/// # Errors
///
/// Returns a [`CheckFailure`] with the unexpected value if present.
pub fn absent<T: fmt::Debug>(field: &str, value: Option<&T>) -> CheckResult {
    match value {
        None => Ok(()),
        Some(v) => Err(CheckFailure::with_values(
            format!("{field} should be absent"),
            "absent".to_string(),
            format!("{v:?}"),
        )),
    }
}

/// Unwraps an optional field for dependent checks.
///
/// # Errors
///
/// Returns a [`CheckFailure`] if the field is absent.
pub fn present<'a, T>(field: &str, value: Option<&'a T>) -> Result<&'a T, CheckFailure> {
    value.ok_or_else(|| CheckFailure::new(format!("{field} is absent")))
}

/// Checks that a string matches a regular expression.
///
/// An invalid pattern counts as a failure rather than a panic.
///
/// # Errors
///
/// Returns a [`CheckFailure`] on non-match or bad pattern.
pub fn matches(field: &str, value: &str, pattern: &str) -> CheckResult {
    match Regex::new(pattern) {
        Ok(regex) if regex.is_match(value) => Ok(()),
        Ok(_) => Err(CheckFailure::with_values(
            format!("{field} does not match the expected pattern"),
            pattern.to_string(),
            value.to_string(),
        )),
        Err(e) => Err(CheckFailure::new(format!(
            "invalid pattern for {field}: {e}"
        ))),
    }
}

/// Checks that a string is a well-formed API timestamp.
///
/// # Errors
///
/// Returns a [`CheckFailure`] if the value does not match
/// [`TIMESTAMP_MILLIS_UTC`].
pub fn timestamp(field: &str, value: &str) -> CheckResult {
    matches(field, value, TIMESTAMP_MILLIS_UTC)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_eq_carries_both_values() {
        assert!(eq("page", &2, &2).is_ok());

        let failure = eq("page", &1, &2).expect_err("must fail");
        assert_eq!(failure.expected.as_deref(), Some("2"));
        assert_eq!(failure.actual.as_deref(), Some("1"));
    }

    #[test]
    fn test_gt() {
        assert!(gt("total", &12, &0).is_ok());
        assert!(gt("total", &0, &0).is_err());
    }

    #[test]
    fn test_not_empty() {
        assert!(not_empty("data", &[1, 2]).is_ok());
        assert!(not_empty::<i32>("data", &[]).is_err());
    }

    #[test]
    fn test_non_blank() {
        assert!(non_blank("id", "842").is_ok());
        assert!(non_blank("id", "   ").is_err());
        assert!(non_blank("id", "").is_err());
    }

    #[test]
    fn test_absent_and_present() {
        assert!(absent::<String>("id", None).is_ok());
        assert!(absent("id", Some(&"3".to_string())).is_err());

        assert!(present("data", Some(&1)).is_ok());
        assert!(present::<i32>("data", None).is_err());
    }

    #[test]
    fn test_timestamp_pattern() {
        assert!(timestamp("createdAt", "2024-01-15T09:30:21.123Z").is_ok());
        // Missing milliseconds
        assert!(timestamp("createdAt", "2024-01-15T09:30:21Z").is_err());
        // Offset instead of literal Z
        assert!(timestamp("createdAt", "2024-01-15T09:30:21.123+00:00").is_err());
        // Trailing content
        assert!(timestamp("createdAt", "2024-01-15T09:30:21.123Z extra").is_err());
    }

    #[test]
    fn test_invalid_pattern_is_a_failure() {
        let failure = matches("field", "value", "([").expect_err("must fail");
        assert!(failure.message.contains("invalid pattern"));
    }

    #[test]
    fn test_failure_display() {
        let failure = CheckFailure::with_values("page differs", "2", "1");
        assert_eq!(failure.to_string(), "page differs (expected 2, got 1)");
    }
}
