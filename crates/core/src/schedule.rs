//! Business rules for project schedules and task deadlines.
//!
//! Each check returns `Err(message)` with a human-readable reason; callers
//! wrap it in [`CoreError::Business`](crate::error::CoreError::Business).

use crate::types::Date;

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

pub const MSG_END_BEFORE_START: &str = "End date cannot be before start date";
pub const MSG_NEGATIVE_DUE_DAYS: &str = "Due days cannot be negative";
pub const MSG_STATUS_REQUIRED: &str = "Status is required";

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// When both dates are present the end date must not precede the start date.
pub fn validate_date_range(start: Option<Date>, end: Option<Date>) -> Result<(), String> {
    match (start, end) {
        (Some(start), Some(end)) if end < start => Err(MSG_END_BEFORE_START.to_string()),
        _ => Ok(()),
    }
}

/// Whether the project is scheduled to start before `today`.
///
/// Not an error: creation proceeds and the caller only logs a warning.
pub fn starts_in_past(start: Option<Date>, today: Date) -> bool {
    start.is_some_and(|start| start < today)
}

/// Due days, when given, are an offset and must be zero or positive.
pub fn validate_due_days(due_days: Option<i32>) -> Result<(), String> {
    match due_days {
        Some(days) if days < 0 => Err(MSG_NEGATIVE_DUE_DAYS.to_string()),
        _ => Ok(()),
    }
}

/// Unwrap a status that the caller must provide.
pub fn require_status<S>(status: Option<S>) -> Result<S, String> {
    status.ok_or_else(|| MSG_STATUS_REQUIRED.to_string())
}
