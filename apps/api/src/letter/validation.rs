//! Server-side record validation.
//!
//! The form already blocks empty fields and offers only the fixed course
//! options, but the endpoint is independently callable, so the same rules are
//! re-checked here: every field non-empty, `course` a member of the fixed
//! list. The `returnDate == leaveEnd` derivation is the form's rule and is
//! not re-checked.

use crate::models::{Course, LeaveRequestRecord};

/// One rejected field with the reason it was rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldIssue {
    pub field: &'static str,
    pub message: String,
}

impl FieldIssue {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        FieldIssue {
            field,
            message: message.into(),
        }
    }
}

/// Checks a submitted record, collecting every failing field.
pub fn validate_record(record: &LeaveRequestRecord) -> Result<(), Vec<FieldIssue>> {
    let mut issues = Vec::new();

    for (name, value) in record.fields() {
        if value.trim().is_empty() {
            issues.push(FieldIssue::new(name, "must not be empty"));
        }
    }

    if !record.course.trim().is_empty() && record.course.parse::<Course>().is_err() {
        issues.push(FieldIssue::new(
            "course",
            format!("'{}' is not a recognized course", record.course),
        ));
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

/// Renders a set of issues as one human-readable message.
pub fn issues_message(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("{} {}", issue.field, issue.message))
        .collect::<Vec<_>>()
        .join("; ")
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
