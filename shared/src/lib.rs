//! Domain logic for the appointment scheduler widget.
//!
//! Everything here is target-independent so it can be unit tested on the
//! host; the Yew frontend only renders these types and forwards events.

pub mod booking;
pub mod calendar;
pub mod config;
pub mod flow;
pub mod slots;
pub mod submission;
pub mod time;

pub use booking::{
    is_valid_email, BookingDraft, BookingError, BookingField, BookingFormState, FinalizedBooking,
    ValidationErrors,
};
pub use calendar::{format_date_long, CalendarCell, DisplayedMonth, GRID_CELLS, WEEKDAY_LABELS};
pub use config::{ConfigError, SchedulerConfig};
pub use flow::BookingFlow;
pub use slots::{generate_time_slots, SlotSchedule, TimeSlot};
pub use submission::{BookingSubmitter, LogSubmitter};
pub use time::{format_time_12h, SlotTime, TimeFormatError};
