use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A user-input problem that blocks a wizard transition or a submission.
///
/// None of these are fatal: the transition becomes a no-op and the renderer
/// shows the matching localized message so the user can retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum BookingError {
    #[error("no date selected")]
    DateNotSelected,
    #[error("no time slot selected")]
    TimeSlotNotSelected,
    #[error("both a date and a time slot are required")]
    SelectionIncomplete,
    #[error("booking type, name and email are required")]
    MissingFields,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateKeyError {
    #[error("date key `{0}` is not in YYYY-MM-DD form")]
    Malformed(String),
    #[error("date key `{0}` does not name a calendar day")]
    OutOfRange(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown locale `{0}`, expected `ko` or `en`")]
    InvalidLocale(String),
    #[error("unknown today highlight policy `{0}`, expected `any-visible` or `current-month`")]
    InvalidTodayHighlight(String),
    #[error("{key} must be `true` or `false`, got `{value}`")]
    InvalidFlag { key: String, value: String },
    #[error("{0} must list at least one entry")]
    Empty(String),
}
