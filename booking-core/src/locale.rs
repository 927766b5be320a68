use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::date::{DateKey, ViewMonth};
use crate::error::{BookingError, ConfigError};
use crate::submission::BookingSubmission;
use crate::wizard::WizardStep;

const EN_MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Static interface strings that don't depend on wizard state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiText {
    OpenBooking,
    Close,
    PreviousMonth,
    NextMonth,
    Next,
    Back,
    Submit,
    BookingTypeLabel,
    BookingTypePlaceholder,
    NameLabel,
    EmailLabel,
    TimeSlotsHeading,
    Loading,
    OptionsUnavailable,
}

/// Language the widget renders in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ko,
    En,
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ko" | "ko-kr" => Ok(Locale::Ko),
            "en" | "en-us" => Ok(Locale::En),
            other => Err(ConfigError::InvalidLocale(other.to_string())),
        }
    }
}

impl Locale {
    pub fn month_title(&self, view: ViewMonth) -> String {
        match self {
            Locale::Ko => format!("{}년 {}월", view.year(), view.month()),
            Locale::En => format!("{} {}", EN_MONTHS[(view.month() - 1) as usize], view.year()),
        }
    }

    /// Sunday first, matching the grid layout.
    pub fn weekday_headers(&self) -> [&'static str; 7] {
        match self {
            Locale::Ko => ["일", "월", "화", "수", "목", "금", "토"],
            Locale::En => ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
        }
    }

    pub fn date_label(&self, key: &DateKey) -> String {
        match self {
            Locale::Ko => format!("{}년 {}월 {}일", key.year(), key.month(), key.day()),
            Locale::En => format!(
                "{} {}, {}",
                EN_MONTHS[(key.month() - 1) as usize],
                key.day(),
                key.year()
            ),
        }
    }

    /// Formats a raw `YYYY-MM-DD` key. Empty input gives an empty label and
    /// anything unparseable is echoed back as-is.
    pub fn format_date_label(&self, raw: &str) -> String {
        if raw.is_empty() {
            return String::new();
        }
        match raw.parse::<DateKey>() {
            Ok(key) => self.date_label(&key),
            Err(e) => {
                tracing::warn!(error = %e, "Unable to format date label");
                raw.to_string()
            }
        }
    }

    /// Display text for a slot identifier. `HH:MM` ids get a 12-hour rendering;
    /// anything else is shown as-is.
    pub fn time_slot_label(&self, slot: &str) -> String {
        let Some((hour, minute)) = slot.split_once(':') else {
            return slot.to_string();
        };
        let (Ok(hour), true) = (
            hour.parse::<u32>(),
            minute.len() == 2 && minute.bytes().all(|b| b.is_ascii_digit()),
        ) else {
            return slot.to_string();
        };
        if hour > 23 {
            return slot.to_string();
        }

        let hour_12 = match hour % 12 {
            0 => 12,
            h => h,
        };
        let is_pm = hour >= 12;

        match self {
            Locale::Ko => {
                let period = if is_pm { "오후" } else { "오전" };
                format!("{} {}:{}", period, hour_12, minute)
            }
            Locale::En => {
                let period = if is_pm { "PM" } else { "AM" };
                if minute == "00" {
                    format!("{} {}", hour_12, period)
                } else {
                    format!("{}:{} {}", hour_12, minute, period)
                }
            }
        }
    }

    pub fn date_preview(&self, selected: Option<&DateKey>) -> String {
        match (self, selected) {
            (Locale::Ko, None) => "달력에서 날짜를 선택해주세요.".to_string(),
            (Locale::Ko, Some(key)) => format!("선택일: {}", self.date_label(key)),
            (Locale::En, None) => "Pick a date on the calendar.".to_string(),
            (Locale::En, Some(key)) => format!("Selected: {}", self.date_label(key)),
        }
    }

    pub fn step_title(&self, step: WizardStep) -> &'static str {
        match (self, step) {
            (Locale::Ko, WizardStep::Date) => "날짜 선택",
            (Locale::Ko, WizardStep::Time) => "시간 선택",
            (Locale::Ko, WizardStep::Details) => "예약 정보",
            (Locale::En, WizardStep::Date) => "Date",
            (Locale::En, WizardStep::Time) => "Time",
            (Locale::En, WizardStep::Details) => "Details",
        }
    }

    pub fn error_message(&self, error: BookingError) -> &'static str {
        match (self, error) {
            (Locale::Ko, BookingError::DateNotSelected) => "먼저 날짜를 선택해주세요.",
            (Locale::Ko, BookingError::TimeSlotNotSelected) => "상담 시간을 선택해주세요.",
            (Locale::Ko, BookingError::SelectionIncomplete) => "날짜와 시간을 모두 선택해주세요.",
            (Locale::Ko, BookingError::MissingFields) => {
                "상담 유형, 이름, 이메일을 모두 입력해주세요."
            }
            (Locale::En, BookingError::DateNotSelected) => "Please select a date first.",
            (Locale::En, BookingError::TimeSlotNotSelected) => "Please select a time slot.",
            (Locale::En, BookingError::SelectionIncomplete) => {
                "Please select both a date and a time."
            }
            (Locale::En, BookingError::MissingFields) => {
                "Please fill in the booking type, name, and email."
            }
        }
    }

    pub fn confirmation(&self, submission: &BookingSubmission) -> String {
        let label = self.date_label(&submission.date);
        match self {
            Locale::Ko => format!(
                "예약 요청이 접수되었습니다. {} {}, {} / {} ({})",
                label, submission.time, submission.booking_type, submission.name, submission.email
            ),
            Locale::En => format!(
                "Your booking request was received. {} {}, {} / {} ({})",
                label, submission.time, submission.booking_type, submission.name, submission.email
            ),
        }
    }

    pub fn text(&self, key: UiText) -> &'static str {
        match self {
            Locale::Ko => match key {
                UiText::OpenBooking => "상담 예약하기",
                UiText::Close => "닫기",
                UiText::PreviousMonth => "이전 달",
                UiText::NextMonth => "다음 달",
                UiText::Next => "다음",
                UiText::Back => "이전",
                UiText::Submit => "예약 요청",
                UiText::BookingTypeLabel => "상담 유형",
                UiText::BookingTypePlaceholder => "유형을 선택하세요",
                UiText::NameLabel => "이름",
                UiText::EmailLabel => "이메일",
                UiText::TimeSlotsHeading => "상담 가능 시간",
                UiText::Loading => "예약 정보를 불러오는 중...",
                UiText::OptionsUnavailable => "예약 설정을 불러오지 못했습니다.",
            },
            Locale::En => match key {
                UiText::OpenBooking => "Book a consultation",
                UiText::Close => "Close",
                UiText::PreviousMonth => "Previous month",
                UiText::NextMonth => "Next month",
                UiText::Next => "Next",
                UiText::Back => "Back",
                UiText::Submit => "Request booking",
                UiText::BookingTypeLabel => "Consultation type",
                UiText::BookingTypePlaceholder => "Choose a type",
                UiText::NameLabel => "Name",
                UiText::EmailLabel => "Email",
                UiText::TimeSlotsHeading => "Available times",
                UiText::Loading => "Loading booking options...",
                UiText::OptionsUnavailable => "Booking options could not be loaded.",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_date_label_of_empty_key_is_empty() {
        assert_eq!(Locale::Ko.format_date_label(""), "");
        assert_eq!(Locale::En.format_date_label(""), "");
    }

    #[test]
    fn korean_label_drops_leading_zeros() {
        assert_eq!(Locale::Ko.format_date_label("2024-05-10"), "2024년 5월 10일");
        assert_eq!(Locale::Ko.format_date_label("2024-01-01"), "2024년 1월 1일");
    }

    #[test]
    fn english_label_spells_the_month() {
        assert_eq!(Locale::En.format_date_label("2024-05-10"), "May 10, 2024");
    }

    #[test]
    fn unparseable_key_is_echoed() {
        assert_eq!(Locale::Ko.format_date_label("next tuesday"), "next tuesday");
    }

    #[test]
    fn month_title_per_locale() {
        let view = ViewMonth::from_ym(2024, 12).unwrap();
        assert_eq!(Locale::Ko.month_title(view), "2024년 12월");
        assert_eq!(Locale::En.month_title(view), "December 2024");
    }

    #[test]
    fn preview_prompts_until_a_date_is_picked() {
        let key: DateKey = "2024-05-10".parse().unwrap();
        assert_eq!(Locale::Ko.date_preview(None), "달력에서 날짜를 선택해주세요.");
        assert_eq!(Locale::Ko.date_preview(Some(&key)), "선택일: 2024년 5월 10일");
        assert_eq!(Locale::En.date_preview(Some(&key)), "Selected: May 10, 2024");
    }

    #[test]
    fn slot_labels_use_twelve_hour_clock() {
        assert_eq!(Locale::En.time_slot_label("14:00"), "2 PM");
        assert_eq!(Locale::En.time_slot_label("09:30"), "9:30 AM");
        assert_eq!(Locale::En.time_slot_label("00:00"), "12 AM");
        assert_eq!(Locale::En.time_slot_label("12:15"), "12:15 PM");
        assert_eq!(Locale::Ko.time_slot_label("14:00"), "오후 2:00");
        assert_eq!(Locale::Ko.time_slot_label("10:00"), "오전 10:00");
    }

    #[test]
    fn opaque_slot_ids_are_shown_verbatim() {
        assert_eq!(Locale::En.time_slot_label("morning"), "morning");
        assert_eq!(Locale::En.time_slot_label("25:00"), "25:00");
        assert_eq!(Locale::Ko.time_slot_label("14:0"), "14:0");
    }

    #[test]
    fn locale_parses_case_insensitively() {
        assert_eq!("KO".parse::<Locale>(), Ok(Locale::Ko));
        assert_eq!(" en ".parse::<Locale>(), Ok(Locale::En));
        assert!(matches!(
            "fr".parse::<Locale>(),
            Err(ConfigError::InvalidLocale(_))
        ));
    }

    #[test]
    fn every_error_has_a_message() {
        for error in [
            BookingError::DateNotSelected,
            BookingError::TimeSlotNotSelected,
            BookingError::SelectionIncomplete,
            BookingError::MissingFields,
        ] {
            assert!(!Locale::Ko.error_message(error).is_empty());
            assert!(!Locale::En.error_message(error).is_empty());
        }
    }
}
