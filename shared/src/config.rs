//! Scheduler configuration: the bookable day and widget behaviour.
//!
//! Defaults give 09:00 to 17:00 in 30-minute slots; a JSON block can
//! override any subset of fields.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::time::SlotTime;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Slot interval must be greater than zero")]
    ZeroInterval,
    #[error("Day end {end} is before day start {start}")]
    EndBeforeStart { start: SlotTime, end: SlotTime },
    #[error("Slot interval of {interval} minutes does not evenly divide {span} minutes")]
    UnevenInterval { interval: u32, span: u32 },
    #[error("Failed to parse scheduler configuration: {0}")]
    Parse(String),
}

/// Configuration for the booking day and widget behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// First bookable slot (inclusive)
    pub day_start: SlotTime,
    /// Last bookable slot (inclusive)
    pub day_end: SlotTime,
    pub slot_interval_minutes: u32,
    pub enable_debug_logging: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            day_start: SlotTime { hour: 9, minute: 0 },
            day_end: SlotTime { hour: 17, minute: 0 },
            slot_interval_minutes: 30,
            enable_debug_logging: false,
        }
    }
}

impl SchedulerConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slot_interval_minutes == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        if self.day_end < self.day_start {
            return Err(ConfigError::EndBeforeStart {
                start: self.day_start,
                end: self.day_end,
            });
        }
        let span = self.day_end.minutes_since_midnight() - self.day_start.minutes_since_midnight();
        if span % self.slot_interval_minutes != 0 {
            return Err(ConfigError::UnevenInterval {
                interval: self.slot_interval_minutes,
                span,
            });
        }
        Ok(())
    }

    pub fn log_level(&self) -> log::LevelFilter {
        if self.enable_debug_logging {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }
}
