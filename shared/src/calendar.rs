//! Calendar month navigation and grid layout.
//!
//! The displayed month is independent of the selected date: navigating
//! never changes the selection, and selecting a padding day from an
//! adjacent month never changes the displayed month.

use chrono::{Datelike, Days, Local, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Six Sunday-first weeks
pub const GRID_CELLS: usize = 42;

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// The month currently shown by the calendar, held as its first day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayedMonth {
    first: NaiveDate,
}

impl Default for DisplayedMonth {
    fn default() -> Self {
        Self::containing(Local::now().date_naive())
    }
}

impl DisplayedMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| Self { first })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// 1-based month number
    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn next(self) -> Self {
        self.first
            .checked_add_months(Months::new(1))
            .map(|first| Self { first })
            .unwrap_or(self)
    }

    pub fn previous(self) -> Self {
        self.first
            .checked_sub_months(Months::new(1))
            .map(|first| Self { first })
            .unwrap_or(self)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// Header text, e.g. "March 2024"
    pub fn title(&self) -> String {
        self.first.format("%B %Y").to_string()
    }

    /// The 42 cells of the month grid, starting on the Sunday on or before
    /// the first of the month. Leading and trailing cells belong to the
    /// adjacent months.
    pub fn grid(&self) -> Vec<CalendarCell> {
        let lead = u64::from(self.first.weekday().num_days_from_sunday());
        let start = self
            .first
            .checked_sub_days(Days::new(lead))
            .unwrap_or(self.first);

        start
            .iter_days()
            .take(GRID_CELLS)
            .map(|date| CalendarCell {
                date,
                in_displayed_month: self.contains(date),
            })
            .collect()
    }
}

/// One clickable day in the month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub in_displayed_month: bool,
}

impl CalendarCell {
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Only an explicit selection highlights a cell; nothing is highlighted
    /// before the first click.
    pub fn is_selected(&self, selected: Option<NaiveDate>) -> bool {
        selected == Some(self.date)
    }
}

/// Long display form, e.g. "March 15, 2024"
pub fn format_date_long(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
