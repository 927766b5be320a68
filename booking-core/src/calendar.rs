use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date::{is_weekend, DateKey, ViewMonth};
use crate::error::ConfigError;

/// Six full Sunday-first weeks.
pub const GRID_CELLS: u32 = 42;

/// When the grid marks a cell as today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TodayHighlight {
    /// Mark today only while the view month is today's month.
    #[default]
    CurrentMonth,
    /// Mark today wherever it shows up in the 42-cell window, including the
    /// leading and trailing days of neighbouring months.
    AnyVisible,
}

impl FromStr for TodayHighlight {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "any-visible" => Ok(TodayHighlight::AnyVisible),
            "current-month" => Ok(TodayHighlight::CurrentMonth),
            other => Err(ConfigError::InvalidTodayHighlight(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub key: DateKey,
    pub day: u32,
    pub is_other_month: bool,
    pub is_weekend: bool,
    pub is_today: bool,
    pub is_selected: bool,
}

impl DayCell {
    pub fn css_class(&self) -> String {
        let mut classes = vec!["cal-day", "clickable"];

        if self.is_other_month {
            classes.push("is-other");
        }
        if self.is_weekend {
            classes.push("is-weekend");
        }
        if self.is_today {
            classes.push("is-today");
        }
        if self.is_selected {
            classes.push("is-selected");
        }

        classes.join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    pub view: ViewMonth,
    pub cells: Vec<DayCell>,
}

impl CalendarGrid {
    /// Lays out `view` as 42 cells, Sunday first.
    pub fn build(
        view: ViewMonth,
        today: NaiveDate,
        selected: Option<&DateKey>,
        highlight: TodayHighlight,
    ) -> Self {
        let first_weekday = view.first_weekday();
        let days_in_month = view.days_in_month();
        let previous = view.previous();
        let next = view.next();
        let prev_month_days = previous.map(|p| p.days_in_month()).unwrap_or(31);

        let today_key = DateKey::from_date(today);
        let highlight_today = match highlight {
            TodayHighlight::AnyVisible => true,
            TodayHighlight::CurrentMonth => view.contains(today),
        };

        let mut cells = Vec::with_capacity(GRID_CELLS as usize);
        for cell in 0..GRID_CELLS {
            let (month, day, is_other_month) = if cell < first_weekday {
                (previous, prev_month_days - first_weekday + cell + 1, true)
            } else if cell >= first_weekday + days_in_month {
                (next, cell - first_weekday - days_in_month + 1, true)
            } else {
                (Some(view), cell - first_weekday + 1, false)
            };

            // Neighbouring months only go missing at the edges of chrono's range,
            // which navigation never reaches.
            let Some(date) = month.and_then(|m| NaiveDate::from_ymd_opt(m.year(), m.month(), day))
            else {
                tracing::warn!(cell, view = ?view, "Calendar cell falls outside the supported date range");
                continue;
            };

            let key = DateKey::from_date(date);
            cells.push(DayCell {
                key,
                day,
                is_other_month,
                is_weekend: is_weekend(date),
                is_today: highlight_today && key == today_key,
                is_selected: selected == Some(&key),
            });
        }

        Self { view, cells }
    }

    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(7)
    }

    pub fn today_cell(&self) -> Option<&DayCell> {
        self.cells.iter().find(|cell| cell.is_today)
    }

    pub fn selected_cell(&self) -> Option<&DayCell> {
        self.cells.iter().find(|cell| cell.is_selected)
    }
}
