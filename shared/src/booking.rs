//! Booking draft, validation and the finalized booking payload.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

use crate::time::SlotTime;

/// Deliberately loose: something@something.something, no RFC parsing
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid email pattern"));

/// Fields of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingField {
    Name,
    Email,
    Budget,
    Goals,
}

impl BookingField {
    pub const ALL: [BookingField; 4] = [
        BookingField::Name,
        BookingField::Email,
        BookingField::Budget,
        BookingField::Goals,
    ];

    /// Form label
    pub fn label(&self) -> &'static str {
        match self {
            BookingField::Name => "Name",
            BookingField::Email => "Email",
            BookingField::Budget => "Budget",
            BookingField::Goals => "Campaign Goals",
        }
    }

    /// Input `id`/`name` attribute
    pub fn key(&self) -> &'static str {
        match self {
            BookingField::Name => "name",
            BookingField::Email => "email",
            BookingField::Budget => "budget",
            BookingField::Goals => "goals",
        }
    }
}

impl fmt::Display for BookingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Contact details as typed by the user, not yet validated
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDraft {
    pub name: String,
    pub email: String,
    pub budget: String,
    pub goals: String,
}

impl BookingDraft {
    pub fn get(&self, field: BookingField) -> &str {
        match field {
            BookingField::Name => &self.name,
            BookingField::Email => &self.email,
            BookingField::Budget => &self.budget,
            BookingField::Goals => &self.goals,
        }
    }

    pub fn set(&mut self, field: BookingField, value: impl Into<String>) {
        let slot = match field {
            BookingField::Name => &mut self.name,
            BookingField::Email => &mut self.email,
            BookingField::Budget => &mut self.budget,
            BookingField::Goals => &mut self.goals,
        };
        *slot = value.into();
    }

    /// Check every field, collecting one message per failing field
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.name.trim().is_empty() {
            errors.insert(BookingField::Name, "Name is required");
        }

        if self.email.trim().is_empty() {
            errors.insert(BookingField::Email, "Email is required");
        } else if !is_valid_email(&self.email) {
            errors.insert(BookingField::Email, "Please enter a valid email");
        }

        if self.budget.trim().is_empty() {
            errors.insert(BookingField::Budget, "Budget is required");
        }

        if self.goals.trim().is_empty() {
            errors.insert(BookingField::Goals, "Campaign goals are required");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

/// Per-field validation messages, ordered by field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors(BTreeMap<BookingField, String>);

impl ValidationErrors {
    pub fn insert(&mut self, field: BookingField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: BookingField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: BookingField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.values().map(String::as_str).collect();
        f.write_str(&messages.join("; "))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("No date selected")]
    MissingDate,
    #[error("No time selected")]
    MissingTime,
    #[error("Booking details are invalid: {0}")]
    Invalid(ValidationErrors),
    #[error("Booking has already been submitted")]
    AlreadySubmitted,
    #[error("Failed to submit booking: {0}")]
    Submission(String),
}

/// The composed booking handed to the submission collaborator.
///
/// Only obtainable through [`FinalizedBooking::compose`], so a value of this
/// type always carries a date, a time and validated contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinalizedBooking {
    date: NaiveDate,
    time: SlotTime,
    name: String,
    email: String,
    budget: String,
    goals: String,
}

impl FinalizedBooking {
    pub fn compose(
        date: Option<NaiveDate>,
        time: Option<SlotTime>,
        draft: BookingDraft,
    ) -> Result<Self, BookingError> {
        let date = date.ok_or(BookingError::MissingDate)?;
        let time = time.ok_or(BookingError::MissingTime)?;
        draft.validate().map_err(BookingError::Invalid)?;

        let BookingDraft {
            name,
            email,
            budget,
            goals,
        } = draft;

        Ok(Self {
            date,
            time,
            name,
            email,
            budget,
            goals,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> SlotTime {
        self.time
    }
}

/// Form-local state: the draft being edited and the errors from the last submit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingFormState {
    pub draft: BookingDraft,
    pub errors: ValidationErrors,
}

impl BookingFormState {
    /// Update a field. Existing errors stay until the next submit attempt.
    pub fn update(&mut self, field: BookingField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Re-run validation from scratch. Returns the draft when it is valid.
    pub fn submit(&mut self) -> Option<BookingDraft> {
        match self.draft.validate() {
            Ok(()) => {
                self.errors = ValidationErrors::default();
                Some(self.draft.clone())
            }
            Err(errors) => {
                log::debug!("Booking form has {} invalid field(s): {}", errors.len(), errors);
                self.errors = errors;
                None
            }
        }
    }

    pub fn error(&self, field: BookingField) -> Option<&str> {
        self.errors.get(field)
    }
}
