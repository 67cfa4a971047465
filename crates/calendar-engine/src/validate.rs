//! Field checks run before an event is committed.
//!
//! Every rule is evaluated; a report lists all violations in rule order rather
//! than stopping at the first.

use serde::Serialize;
use thiserror::Error;

use crate::event::EventDraft;

pub const MAX_TITLE_CHARS: usize = 100;
pub const MAX_DESCRIPTION_CHARS: usize = 500;

/// A single violated rule. The `Display` text is the user-facing message.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationIssue {
    #[error("Title is required")]
    TitleRequired,

    #[error("Title must be 100 characters or less")]
    TitleTooLong,

    #[error("Description must be 500 characters or less")]
    DescriptionTooLong,

    #[error("Start date is required")]
    StartRequired,

    #[error("End date is required")]
    EndRequired,

    #[error("End date must be after start date")]
    EndNotAfterStart,
}

/// Outcome of validating a draft.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
    #[serde(skip)]
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    fn from_issues(issues: Vec<ValidationIssue>) -> Self {
        Self {
            valid: issues.is_empty(),
            errors: issues.iter().map(ToString::to_string).collect(),
            issues,
        }
    }

    pub fn has(&self, issue: ValidationIssue) -> bool {
        self.issues.contains(&issue)
    }
}

/// Check `draft` against every field rule.
///
/// Lengths are counted in characters. The title length limit applies to the
/// title as given, the required check to the title with surrounding
/// whitespace removed.
pub fn validate(draft: &EventDraft) -> ValidationReport {
    let mut issues = Vec::new();

    let title = draft.title.as_deref().unwrap_or("");
    if title.trim().is_empty() {
        issues.push(ValidationIssue::TitleRequired);
    }
    if title.chars().count() > MAX_TITLE_CHARS {
        issues.push(ValidationIssue::TitleTooLong);
    }

    if let Some(description) = &draft.description {
        if description.chars().count() > MAX_DESCRIPTION_CHARS {
            issues.push(ValidationIssue::DescriptionTooLong);
        }
    }

    if draft.start.is_none() {
        issues.push(ValidationIssue::StartRequired);
    }
    if draft.end.is_none() {
        issues.push(ValidationIssue::EndRequired);
    }
    if let (Some(start), Some(end)) = (draft.start, draft.end) {
        if end <= start {
            issues.push(ValidationIssue::EndNotAfterStart);
        }
    }

    ValidationReport::from_issues(issues)
}
