use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::TodayHighlight;
use crate::error::ConfigError;
use crate::locale::Locale;
use crate::wizard::BookingState;

pub const LOCALE_VAR: &str = "BOOKING_LOCALE";
pub const TIME_SLOTS_VAR: &str = "BOOKING_TIME_SLOTS";
pub const BOOKING_TYPES_VAR: &str = "BOOKING_TYPES";
pub const PRESELECT_TODAY_VAR: &str = "BOOKING_PRESELECT_TODAY";
pub const TODAY_HIGHLIGHT_VAR: &str = "BOOKING_TODAY_HIGHLIGHT";

const DEFAULT_TIME_SLOTS: [&str; 6] = ["10:00", "11:00", "13:00", "14:00", "15:00", "16:00"];

/// One entry of the booking type dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingType {
    pub value: String,
    pub label: String,
}

impl BookingType {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// `value:label`, or just `value` to reuse it as the label.
impl FromStr for BookingType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (value, label) = match s.split_once(':') {
            Some((value, label)) => (value.trim(), label.trim()),
            None => (s.trim(), s.trim()),
        };
        if value.is_empty() {
            return Err(ConfigError::Empty(BOOKING_TYPES_VAR.to_string()));
        }
        let label = if label.is_empty() { value } else { label };
        Ok(Self::new(value, label))
    }
}

/// Everything the page needs to know to render the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingOptions {
    pub locale: Locale,
    pub time_slots: Vec<String>,
    pub booking_types: Vec<BookingType>,
    pub preselect_today: bool,
    pub today_highlight: TodayHighlight,
}

impl Default for BookingOptions {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            time_slots: DEFAULT_TIME_SLOTS.iter().map(|s| s.to_string()).collect(),
            booking_types: vec![
                BookingType::new("visit", "방문 상담"),
                BookingType::new("online", "온라인 상담"),
                BookingType::new("phone", "전화 상담"),
            ],
            preselect_today: false,
            today_highlight: TodayHighlight::default(),
        }
    }
}

impl BookingOptions {
    /// Builds options from a key lookup, falling back to defaults for unset keys.
    /// The server passes `std::env::var`; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = Self::default();

        if let Some(locale) = lookup(LOCALE_VAR) {
            options.locale = locale.parse()?;
        }

        if let Some(slots) = lookup(TIME_SLOTS_VAR) {
            options.time_slots = parse_list(&slots)
                .map(str::to_string)
                .collect();
            if options.time_slots.is_empty() {
                return Err(ConfigError::Empty(TIME_SLOTS_VAR.to_string()));
            }
        }

        if let Some(types) = lookup(BOOKING_TYPES_VAR) {
            options.booking_types = parse_list(&types)
                .map(str::parse::<BookingType>)
                .collect::<Result<Vec<_>, _>>()?;
            if options.booking_types.is_empty() {
                return Err(ConfigError::Empty(BOOKING_TYPES_VAR.to_string()));
            }
        }

        if let Some(flag) = lookup(PRESELECT_TODAY_VAR) {
            options.preselect_today = parse_flag(PRESELECT_TODAY_VAR, &flag)?;
        }

        if let Some(policy) = lookup(TODAY_HIGHLIGHT_VAR) {
            options.today_highlight = policy.parse()?;
        }

        Ok(options)
    }

    pub fn initial_state(&self, today: NaiveDate) -> BookingState {
        if self.preselect_today {
            BookingState::with_today_selected(today)
        } else {
            BookingState::new(today)
        }
    }
}

fn parse_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|entry| !entry.is_empty())
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
