//! Bookable time slots for a day.
//!
//! The schedule is the same for every date: there is no per-day
//! availability, so every generated slot is always selectable.

use serde::{Deserialize, Serialize};

use crate::config::SchedulerConfig;
use crate::time::SlotTime;

/// One selectable slot with its machine value and display label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub value: SlotTime,
    pub label: String,
}

impl TimeSlot {
    pub fn new(value: SlotTime) -> Self {
        Self {
            label: value.display_12h(),
            value,
        }
    }
}

/// Iterator over the slots of a day, from `day_start` to `day_end` inclusive.
///
/// Cloning the schedule restarts it from the first slot.
#[derive(Debug, Clone)]
pub struct SlotSchedule {
    next_minute: u32,
    last_minute: u32,
    step: u32,
}

impl SlotSchedule {
    /// Caller is expected to pass a config that passed `validate()`; a zero
    /// interval yields an empty schedule rather than looping.
    pub fn new(config: &SchedulerConfig) -> Self {
        if config.slot_interval_minutes == 0 {
            return Self {
                next_minute: 1,
                last_minute: 0,
                step: 1,
            };
        }
        Self {
            next_minute: config.day_start.minutes_since_midnight(),
            last_minute: config.day_end.minutes_since_midnight(),
            step: config.slot_interval_minutes,
        }
    }
}

impl Default for SlotSchedule {
    fn default() -> Self {
        Self::new(&SchedulerConfig::default())
    }
}

impl Iterator for SlotSchedule {
    type Item = TimeSlot;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_minute > self.last_minute {
            return None;
        }
        let time = SlotTime::from_minutes(self.next_minute)?;
        self.next_minute += self.step;
        Some(TimeSlot::new(time))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.next_minute > self.last_minute {
            0
        } else {
            ((self.last_minute - self.next_minute) / self.step + 1) as usize
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SlotSchedule {}

/// Materialize all slots for the configured day
pub fn generate_time_slots(config: &SchedulerConfig) -> Vec<TimeSlot> {
    SlotSchedule::new(config).collect()
}
