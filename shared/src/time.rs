//! Time-of-day values used by the slot picker and the booking payload.
//!
//! A [`SlotTime`] is always stored as hour/minute and travels as the
//! zero-padded 24-hour `HH:MM` string. All 12-hour display text in the
//! app goes through [`SlotTime::display_12h`] (or [`format_time_12h`]
//! for raw strings) so the slot labels and the selection summaries can
//! never disagree.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeFormatError {
    #[error("Time '{0}' is not in HH:MM format")]
    MissingSeparator(String),
    #[error("Invalid hour in '{0}'")]
    InvalidHour(String),
    #[error("Invalid minute in '{0}'")]
    InvalidMinute(String),
}

/// A wall-clock time with minute resolution (no date, no time zone)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct SlotTime {
    pub(crate) hour: u8,
    pub(crate) minute: u8,
}

impl SlotTime {
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    /// Build from minutes after midnight; `None` past 23:59
    pub fn from_minutes(minutes: u32) -> Option<Self> {
        let hour = u8::try_from(minutes / 60).ok()?;
        Self::new(hour, (minutes % 60) as u8)
    }

    pub fn minutes_since_midnight(&self) -> u32 {
        u32::from(self.hour) * 60 + u32::from(self.minute)
    }

    /// Machine value, e.g. "09:00" or "14:30"
    pub fn value(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }

    pub fn is_pm(&self) -> bool {
        self.hour >= 12
    }

    /// 12-hour label, e.g. "9:00 AM", "12:30 PM". Midnight and noon both show as 12.
    pub fn display_12h(&self) -> String {
        let period = if self.is_pm() { "PM" } else { "AM" };
        let display_hour = match self.hour {
            0 => 12,
            h if h > 12 => h - 12,
            h => h,
        };
        format!("{}:{:02} {}", display_hour, self.minute, period)
    }
}

impl fmt::Display for SlotTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for SlotTime {
    type Err = TimeFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hours, minutes) = s
            .split_once(':')
            .ok_or_else(|| TimeFormatError::MissingSeparator(s.to_string()))?;

        let hour = hours
            .trim()
            .parse::<u8>()
            .ok()
            .filter(|h| *h < 24)
            .ok_or_else(|| TimeFormatError::InvalidHour(s.to_string()))?;

        let minute = minutes
            .trim()
            .parse::<u8>()
            .ok()
            .filter(|m| *m < 60)
            .ok_or_else(|| TimeFormatError::InvalidMinute(s.to_string()))?;

        Ok(Self { hour, minute })
    }
}

impl From<SlotTime> for String {
    fn from(time: SlotTime) -> Self {
        time.value()
    }
}

impl TryFrom<String> for SlotTime {
    type Error = TimeFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Convert a 24-hour `HH:MM` string into its 12-hour display form
pub fn format_time_12h(time: &str) -> Result<String, TimeFormatError> {
    time.parse::<SlotTime>().map(|t| t.display_12h())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time_12h_morning_and_afternoon() {
        assert_eq!(format_time_12h("09:00").unwrap(), "9:00 AM");
        assert_eq!(format_time_12h("11:30").unwrap(), "11:30 AM");
        assert_eq!(format_time_12h("14:30").unwrap(), "2:30 PM");
        assert_eq!(format_time_12h("17:00").unwrap(), "5:00 PM");
    }

    #[test]
    fn test_format_time_12h_noon_and_midnight() {
        assert_eq!(format_time_12h("12:00").unwrap(), "12:00 PM");
        assert_eq!(format_time_12h("12:30").unwrap(), "12:30 PM");
        assert_eq!(format_time_12h("00:00").unwrap(), "12:00 AM");
        assert_eq!(format_time_12h("00:45").unwrap(), "12:45 AM");
    }

    #[test]
    fn test_format_time_12h_rejects_malformed() {
        assert!(matches!(format_time_12h("0900"), Err(TimeFormatError::MissingSeparator(_))));
        assert!(matches!(format_time_12h("ab:00"), Err(TimeFormatError::InvalidHour(_))));
        assert!(matches!(format_time_12h("24:00"), Err(TimeFormatError::InvalidHour(_))));
        assert!(matches!(format_time_12h("10:60"), Err(TimeFormatError::InvalidMinute(_))));
        assert!(matches!(format_time_12h("10:"), Err(TimeFormatError::InvalidMinute(_))));
    }

    #[test]
    fn test_value_is_zero_padded() {
        let time = SlotTime::new(9, 5).unwrap();
        assert_eq!(time.value(), "09:05");
        assert_eq!(time.to_string(), "09:05");
    }

    #[test]
    fn test_from_minutes() {
        assert_eq!(SlotTime::from_minutes(9 * 60 + 30), SlotTime::new(9, 30));
        assert_eq!(SlotTime::from_minutes(24 * 60), None);
    }

    #[test]
    fn test_serializes_as_string() {
        let time: SlotTime = "14:30".parse().unwrap();
        assert_eq!(serde_json::to_string(&time).unwrap(), "\"14:30\"");

        let parsed: SlotTime = serde_json::from_str("\"08:15\"").unwrap();
        assert_eq!(parsed, SlotTime::new(8, 15).unwrap());
        assert!(serde_json::from_str::<SlotTime>("\"25:00\"").is_err());
    }
}
