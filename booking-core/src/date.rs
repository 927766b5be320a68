use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::DateKeyError;

/// Canonical `YYYY-MM-DD` identity of a calendar day.
///
/// Keys are built from local calendar fields only, so two keys compare equal
/// exactly when they name the same day on the wall calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year = self.0.year();
        if year < 0 {
            f.write_str("-")?;
        }
        write!(
            f,
            "{:04}-{:02}-{:02}",
            year.unsigned_abs(),
            self.0.month(),
            self.0.day()
        )
    }
}

impl FromStr for DateKey {
    type Err = DateKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // years before 0 carry a leading minus; years past 9999 run wider
        let (negative, unsigned) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let parts: Vec<&str> = unsigned.split('-').collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(DateKeyError::Malformed(s.to_string()));
        };

        let well_formed = (year.len() == 4 || (year.len() > 4 && !year.starts_with('0')))
            && month.len() == 2
            && day.len() == 2
            && [year, month, day]
                .iter()
                .all(|part| part.bytes().all(|b| b.is_ascii_digit()));
        if !well_formed {
            return Err(DateKeyError::Malformed(s.to_string()));
        }

        let parse = |part: &str| {
            part.parse::<u32>()
                .map_err(|_| DateKeyError::Malformed(s.to_string()))
        };
        let year = i32::try_from(parse(*year)?)
            .map_err(|_| DateKeyError::OutOfRange(s.to_string()))?;
        let year = if negative { -year } else { year };
        let month = parse(*month)?;
        let day = parse(*day)?;

        NaiveDate::from_ymd_opt(year, month, day)
            .map(DateKey)
            .ok_or_else(|| DateKeyError::OutOfRange(s.to_string()))
    }
}

impl TryFrom<String> for DateKey {
    type Error = DateKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DateKey> for String {
    fn from(key: DateKey) -> Self {
        key.to_string()
    }
}

/// Number of days in `month` (1-12) of `year`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last| last.day())
        // only reachable for December of chrono's last representable year
        .unwrap_or(31)
}

/// 0 = Sunday .. 6 = Saturday
pub fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// The year and month shown by the calendar, always anchored on the 1st.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ViewMonth {
    first: NaiveDate,
}

impl ViewMonth {
    /// The month that contains `date`.
    pub fn containing(date: NaiveDate) -> Self {
        let first = NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date);
        Self { first }
    }

    pub fn from_ym(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| Self { first })
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// Weekday of the 1st, 0 = Sunday.
    pub fn first_weekday(&self) -> u32 {
        weekday_index(self.first)
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// Moves by `delta` months, rolling the year over as needed. Returns `None`
    /// when the result leaves chrono's representable range.
    pub fn shift(&self, delta: i32) -> Option<Self> {
        let months = Months::new(delta.unsigned_abs());
        let first = if delta >= 0 {
            self.first.checked_add_months(months)
        } else {
            self.first.checked_sub_months(months)
        }?;
        Some(Self { first })
    }

    pub fn previous(&self) -> Option<Self> {
        self.shift(-1)
    }

    pub fn next(&self) -> Option<Self> {
        self.shift(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn date_key_is_zero_padded() {
        let key = DateKey::from_date(ymd(2024, 5, 1));
        assert_eq!(key.to_string(), "2024-05-01");
    }

    #[test]
    fn date_key_parses_canonical_form() {
        let key: DateKey = "2024-05-10".parse().unwrap();
        assert_eq!((key.year(), key.month(), key.day()), (2024, 5, 10));
    }

    #[test]
    fn date_key_rejects_unpadded_and_garbage() {
        assert!(matches!(
            "2024-5-10".parse::<DateKey>(),
            Err(DateKeyError::Malformed(_))
        ));
        assert!(matches!("".parse::<DateKey>(), Err(DateKeyError::Malformed(_))));
        assert!(matches!(
            "2024-05-10-01".parse::<DateKey>(),
            Err(DateKeyError::Malformed(_))
        ));
        assert!(matches!(
            "2023-02-29".parse::<DateKey>(),
            Err(DateKeyError::OutOfRange(_))
        ));
    }

    #[test]
    fn date_key_serializes_as_string() {
        let key = DateKey::from_date(ymd(2024, 12, 31));
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"2024-12-31\"");
        let back: DateKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
        assert!(serde_json::from_str::<DateKey>("\"31/12/2024\"").is_err());
    }

    #[test]
    fn date_key_round_trips_outside_four_digit_years() {
        for date in [ymd(10000, 1, 1), ymd(-1, 12, 31), ymd(0, 2, 29)] {
            let key = DateKey::from_date(date);
            let text = key.to_string();
            assert_eq!(text.parse::<DateKey>(), Ok(key), "{text}");
        }
        assert_eq!(DateKey::from_date(ymd(10000, 1, 1)).to_string(), "10000-01-01");
        assert_eq!(DateKey::from_date(ymd(-1, 12, 31)).to_string(), "-0001-12-31");
        assert!(matches!(
            "999-01-01".parse::<DateKey>(),
            Err(DateKeyError::Malformed(_))
        ));
        assert!(matches!(
            "02024-05-10".parse::<DateKey>(),
            Err(DateKeyError::Malformed(_))
        ));
        assert!(matches!(
            "300000-01-01".parse::<DateKey>(),
            Err(DateKeyError::OutOfRange(_))
        ));
    }

    #[test]
    fn navigating_past_year_9999_keeps_keys_parseable() {
        let december = ViewMonth::from_ym(9999, 12).unwrap();
        let january = december.next().unwrap();
        let key = DateKey::from_date(january.first_day());
        let back: DateKey = serde_json::from_str(&serde_json::to_string(&key).unwrap()).unwrap();
        assert_eq!(back, key);
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2024, 12), 31);
        assert_eq!(days_in_month(2024, 4), 30);
    }

    #[test]
    fn view_month_is_anchored_on_the_first() {
        let view = ViewMonth::containing(ymd(2024, 5, 17));
        assert_eq!(view.first_day(), ymd(2024, 5, 1));
        assert!(view.contains(ymd(2024, 5, 31)));
        assert!(!view.contains(ymd(2024, 6, 1)));
    }

    #[test]
    fn shifting_rolls_the_year_over() {
        let december = ViewMonth::from_ym(2024, 12).unwrap();
        assert_eq!(december.next(), ViewMonth::from_ym(2025, 1));

        let january = ViewMonth::from_ym(2024, 1).unwrap();
        assert_eq!(january.previous(), ViewMonth::from_ym(2023, 12));

        assert_eq!(january.shift(-25), ViewMonth::from_ym(2021, 12));
        assert_eq!(january.shift(0), Some(january));
    }

    #[test]
    fn weekday_helpers_start_on_sunday() {
        // 2024-05-05 was a Sunday
        assert_eq!(weekday_index(ymd(2024, 5, 5)), 0);
        assert_eq!(weekday_index(ymd(2024, 5, 11)), 6);
        assert!(is_weekend(ymd(2024, 5, 5)));
        assert!(is_weekend(ymd(2024, 5, 11)));
        assert!(!is_weekend(ymd(2024, 5, 8)));
    }
}
