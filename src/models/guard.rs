//! Guard functions shared by the domain entities
//!
//! Each guard enforces one invariant and fails fast with a
//! [`ValidationError`] naming the offending field. Guards hold no state.

use chrono::{DateTime, Duration, Utc};

use super::error::{ValidationError, ValidationResult};

/// Reject a missing value, passing a present one through unchanged
pub fn reject_null<T>(value: Option<T>, field_name: &str) -> ValidationResult<T> {
    value.ok_or_else(|| ValidationError::null_argument(field_name))
}

/// Return the text if it has at least one non-whitespace character
///
/// The returned slice is the input as given, untrimmed. `None` means the
/// optional field should be stored as absent.
pub fn normalize_or_absent(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.trim().is_empty())
}

/// Reject zero and negative numbers
pub fn reject_non_positive(value: i32, field_name: &str) -> ValidationResult<i32> {
    if value <= 0 {
        Err(ValidationError::out_of_range(field_name))
    } else {
        Ok(value)
    }
}

/// Reject a date that is not strictly later than the current time
pub fn reject_past_or_present(
    date: DateTime<Utc>,
    field_name: &str,
) -> ValidationResult<DateTime<Utc>> {
    reject_past_or_present_at(date, Utc::now(), field_name)
}

/// Same as [`reject_past_or_present`] against an explicit `now`
pub fn reject_past_or_present_at(
    date: DateTime<Utc>,
    now: DateTime<Utc>,
    field_name: &str,
) -> ValidationResult<DateTime<Utc>> {
    if date > now {
        Ok(date)
    } else {
        Err(ValidationError::invalid_argument(
            field_name,
            format!("{} cannot be in the past.", field_name),
        ))
    }
}

/// Permissive email shape check: non-blank and contains `@`
pub fn is_valid_email(text: Option<&str>) -> bool {
    matches!(normalize_or_absent(text), Some(t) if t.contains('@'))
}

/// Require non-blank text and return it trimmed
///
/// `label` is the capitalised name used in the error message.
pub fn reject_blank(text: Option<&str>, field_name: &str, label: &str) -> ValidationResult<String> {
    let text = reject_null(text, field_name)?;
    match normalize_or_absent(Some(text)) {
        Some(t) => Ok(t.trim().to_string()),
        None => Err(ValidationError::invalid_argument(
            field_name,
            format!("{} cannot be empty or whitespace.", label),
        )),
    }
}

/// Require a duration of at least `min`
pub fn reject_shorter_than(
    duration: Duration,
    min: Duration,
    field_name: &str,
) -> ValidationResult<Duration> {
    if duration < min {
        Err(ValidationError::invalid_argument(
            field_name,
            format!("Duration must be at least {} minutes.", min.num_minutes()),
        ))
    } else {
        Ok(duration)
    }
}
