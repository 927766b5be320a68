use serde::{Deserialize, Serialize};

use crate::error::BookingError;
use crate::locale::Locale;
use crate::submission::BookingSubmission;
use crate::wizard::{Change, Transition};

/// Text shown in the result region, styled as an error or a confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingMessage {
    pub text: String,
    pub is_error: bool,
}

impl BookingMessage {
    pub fn rejected(locale: Locale, error: BookingError) -> Self {
        Self {
            text: locale.error_message(error).to_string(),
            is_error: true,
        }
    }

    pub fn confirmed(locale: Locale, submission: &BookingSubmission) -> Self {
        Self {
            text: locale.confirmation(submission),
            is_error: false,
        }
    }

    pub fn css_class(&self) -> &'static str {
        if self.is_error {
            "booking-result is-error"
        } else {
            "booking-result is-success"
        }
    }
}

/// What a transition means for the result region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageUpdate {
    Show(BookingMessage),
    Hide,
}

impl Transition {
    /// The last message-related fact wins; `None` leaves the region alone.
    pub fn message_update(&self, locale: Locale) -> Option<MessageUpdate> {
        self.changes.iter().rev().find_map(|change| match change {
            Change::Rejected(error) => {
                Some(MessageUpdate::Show(BookingMessage::rejected(locale, *error)))
            }
            Change::Confirmed(submission) => Some(MessageUpdate::Show(
                BookingMessage::confirmed(locale, submission),
            )),
            Change::MessageCleared => Some(MessageUpdate::Hide),
            _ => None,
        })
    }
}
