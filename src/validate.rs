//! Structural and cross-referential checks for meeting documents.
//!
//! Validation runs once, synchronously, before a document enters the cache.
//! Hard failures abort the load and are fail-fast: the first missing field
//! wins, no aggregate report. Warnings never interrupt control flow; the
//! caller logs them and the document is cached anyway.

use std::fmt;

use crate::api::LoaderError;
use crate::models::{Configuration, Meeting, MeetingStatus, Motion};

/// Non-fatal findings from validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// `status` is present but not one of the known values.
    UnknownStatus { status: String, source: String },

    /// A motion's vote count differs from the council roster size.
    VoteCountMismatch {
        title: String,
        expected: usize,
        actual: usize,
        source: String,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::UnknownStatus { status, source } => {
                write!(f, "{}: unexpected status `{}`", source, status)
            }
            Warning::VoteCountMismatch {
                title,
                expected,
                actual,
                source,
            } => write!(
                f,
                "{}: motion `{}` has {} votes, expected {}",
                source, title, actual, expected
            ),
        }
    }
}

/// Validate `meeting` as loaded from `source`.
///
/// Presence of `date`, `status`, `attendance` and `motions` is a hard
/// requirement. An unknown `status` is only a warning, but the per-motion
/// field checks below it are hard again: a completed meeting with motions
/// must have `title`, `description`, `votes` and `result` on every motion,
/// checked in order with fail-fast across the sequence. The vote-count
/// cross-check against the council roster is a warning and is skipped when
/// no configuration is loaded.
pub fn validate(
    meeting: &Meeting,
    source: &str,
    config: Option<&Configuration>,
) -> Result<Vec<Warning>, LoaderError> {
    let mut warnings = Vec::new();

    if meeting.date.is_none() {
        return Err(missing("date", source));
    }
    let status = match meeting.status.as_deref() {
        Some(s) => s,
        None => return Err(missing("status", source)),
    };
    if meeting.attendance.is_none() {
        return Err(missing("attendance", source));
    }
    let motions = match meeting.motions.as_deref() {
        Some(m) => m,
        None => return Err(missing("motions", source)),
    };

    let kind = MeetingStatus::parse(status);
    if kind.is_none() {
        warnings.push(Warning::UnknownStatus {
            status: status.to_string(),
            source: source.to_string(),
        });
    }

    if kind == Some(MeetingStatus::Completed) && !motions.is_empty() {
        for (index, motion) in motions.iter().enumerate() {
            check_motion(motion, index, source, config, &mut warnings)?;
        }
    }

    Ok(warnings)
}

fn check_motion(
    motion: &Motion,
    index: usize,
    source: &str,
    config: Option<&Configuration>,
    warnings: &mut Vec<Warning>,
) -> Result<(), LoaderError> {
    let title = match motion.title.as_deref() {
        Some(t) => t,
        None => return Err(missing_motion(index, "title", source)),
    };
    if motion.description.is_none() {
        return Err(missing_motion(index, "description", source));
    }
    let votes = match motion.votes.as_deref() {
        Some(v) => v,
        None => return Err(missing_motion(index, "votes", source)),
    };
    if motion.result.is_none() {
        return Err(missing_motion(index, "result", source));
    }

    if let Some(config) = config {
        let expected = config.expected_votes();
        if votes.len() != expected {
            warnings.push(Warning::VoteCountMismatch {
                title: title.to_string(),
                expected,
                actual: votes.len(),
                source: source.to_string(),
            });
        }
    }

    Ok(())
}

fn missing(field: &'static str, source: &str) -> LoaderError {
    LoaderError::MissingField {
        field,
        source_label: source.to_string(),
    }
}

fn missing_motion(index: usize, field: &'static str, source: &str) -> LoaderError {
    LoaderError::MissingMotionField {
        index,
        field,
        source_label: source.to_string(),
    }
}
