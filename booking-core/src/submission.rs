use serde::{Deserialize, Serialize};

use crate::date::DateKey;
use crate::error::BookingError;

/// Raw contact-step input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingForm {
    pub booking_type: String,
    pub name: String,
    pub email: String,
}

impl BookingForm {
    pub fn new(
        booking_type: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            booking_type: booking_type.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}

/// A validated booking request. Only ever rendered as a confirmation, never
/// sent anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingSubmission {
    pub date: DateKey,
    pub time: String,
    pub booking_type: String,
    pub name: String,
    pub email: String,
}

impl BookingSubmission {
    /// Selection is checked before the form fields; text fields are trimmed
    /// and must not end up empty.
    pub fn validate(
        date: Option<&DateKey>,
        time: Option<&str>,
        form: &BookingForm,
    ) -> Result<Self, BookingError> {
        let (Some(date), Some(time)) = (date, time.filter(|t| !t.is_empty())) else {
            return Err(BookingError::SelectionIncomplete);
        };

        let booking_type = form.booking_type.trim();
        let name = form.name.trim();
        let email = form.email.trim();
        if booking_type.is_empty() || name.is_empty() || email.is_empty() {
            return Err(BookingError::MissingFields);
        }

        Ok(Self {
            date: *date,
            time: time.to_string(),
            booking_type: booking_type.to_string(),
            name: name.to_string(),
            email: email.to_string(),
        })
    }
}
