//! Demand request capture and validation.
//!
//! A [`DemandSubmission`] holds the four form fields exactly as the user
//! entered them. [`DemandSubmission::validate`] applies the intake rules in
//! priority order and produces a [`DemandRequest`], which can only be
//! obtained through validation.

use chrono::NaiveDate;

use super::errors::DemandValidationError;

/// Minimum length of the details field, in characters.
pub const MIN_DETAILS_CHARS: usize = 20;

/// Raw form capture: the four fields as entered, before any validation.
///
/// Empty strings mean the field was left blank; the due date arrives as the
/// `YYYY-MM-DD` text a date input produces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemandSubmission {
    pub requester: String,
    pub request_type: String,
    pub details: String,
    pub due_date: String,
}

impl DemandSubmission {
    /// Validates the submission against the intake rules.
    ///
    /// Checks run in fixed priority order and only the first failure is
    /// reported:
    ///
    /// 1. every field must be filled;
    /// 2. details must be at least [`MIN_DETAILS_CHARS`] characters;
    /// 3. the due date must parse and be `today` or later (day
    ///    granularity, time of day ignored).
    pub fn validate(&self, today: NaiveDate) -> Result<DemandRequest, DemandValidationError> {
        if self.requester.is_empty()
            || self.request_type.is_empty()
            || self.details.is_empty()
            || self.due_date.is_empty()
        {
            return Err(DemandValidationError::MissingFields);
        }

        let detail_chars = self.details.chars().count();
        if detail_chars < MIN_DETAILS_CHARS {
            return Err(DemandValidationError::DetailsTooShort {
                actual: detail_chars,
            });
        }

        // An unparseable date fails the same rule a past date does.
        let due_date = NaiveDate::parse_from_str(&self.due_date, "%Y-%m-%d")
            .ok()
            .filter(|date| *date >= today)
            .ok_or(DemandValidationError::DueDateInPast)?;

        Ok(DemandRequest {
            requester: self.requester.clone(),
            request_type: self.request_type.clone(),
            details: self.details.clone(),
            due_date,
        })
    }
}

/// A demand request that passed validation.
///
/// Lives for a single submission: formatted into a card, sent, discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemandRequest {
    /// Who is asking.
    pub requester: String,
    /// Category of the request, as the form's enumerated text.
    pub request_type: String,
    /// Free-text description, at least [`MIN_DETAILS_CHARS`] characters.
    pub details: String,
    /// Deadline, today or later at validation time.
    pub due_date: NaiveDate,
}
