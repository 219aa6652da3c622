//! Booking flow state owned by the top-level view.
//!
//! Children never touch this directly; they report clicks and form
//! submissions through callbacks and the owner applies them here.

use chrono::NaiveDate;

use crate::booking::{BookingDraft, BookingError, FinalizedBooking};
use crate::calendar::format_date_long;
use crate::config::SchedulerConfig;
use crate::slots::{generate_time_slots, TimeSlot};
use crate::submission::BookingSubmitter;
use crate::time::SlotTime;

#[derive(Debug, Clone, PartialEq)]
pub struct BookingFlow {
    slots: Vec<TimeSlot>,
    selected_date: Option<NaiveDate>,
    selected_time: Option<SlotTime>,
    submitted: bool,
}

impl Default for BookingFlow {
    fn default() -> Self {
        Self::new(&SchedulerConfig::default())
    }
}

impl BookingFlow {
    pub fn new(config: &SchedulerConfig) -> Self {
        Self {
            slots: generate_time_slots(config),
            selected_date: None,
            selected_time: None,
            submitted: false,
        }
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn selected_time(&self) -> Option<SlotTime> {
        self.selected_time
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        log::debug!("Date selected: {}", date);
        self.selected_date = Some(date);
    }

    /// Times outside the generated schedule are ignored
    pub fn select_time(&mut self, time: SlotTime) {
        if !self.slots.iter().any(|slot| slot.value == time) {
            log::warn!("Ignoring time {} outside the bookable schedule", time);
            return;
        }
        log::debug!("Time selected: {}", time);
        self.selected_time = Some(time);
    }

    /// Both a date and a time are required, in either order
    pub fn can_submit(&self) -> bool {
        self.selected_date.is_some() && self.selected_time.is_some()
    }

    /// Compose the booking, hand it off and switch to the success view
    pub fn submit(
        &mut self,
        draft: BookingDraft,
        submitter: &dyn BookingSubmitter,
    ) -> Result<FinalizedBooking, BookingError> {
        if self.submitted {
            return Err(BookingError::AlreadySubmitted);
        }
        let booking = FinalizedBooking::compose(self.selected_date, self.selected_time, draft)?;
        submitter.submit(&booking)?;
        self.submitted = true;
        Ok(booking)
    }

    /// Back to the start: no date, no time, form view
    pub fn reset(&mut self) {
        log::debug!("Booking flow reset");
        self.selected_date = None;
        self.selected_time = None;
        self.submitted = false;
    }

    /// "March 15, 2024"
    pub fn selected_date_display(&self) -> Option<String> {
        self.selected_date.map(format_date_long)
    }

    /// "2:30 PM"
    pub fn selected_time_display(&self) -> Option<String> {
        self.selected_time.map(|time| time.display_12h())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::LogSubmitter;
    use serde_json::json;
    use std::cell::RefCell;

    fn valid_draft() -> BookingDraft {
        BookingDraft {
            name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            budget: "5000".to_string(),
            goals: "grow leads".to_string(),
        }
    }

    fn march_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn half_past_two() -> SlotTime {
        "14:30".parse().unwrap()
    }

    #[test]
    fn test_initial_state() {
        let flow = BookingFlow::default();
        assert_eq!(flow.selected_date(), None);
        assert_eq!(flow.selected_time(), None);
        assert!(!flow.is_submitted());
        assert!(!flow.can_submit());
        assert_eq!(flow.slots().len(), 17);
    }

    #[test]
    fn test_time_before_date_does_not_enable_submit() {
        let mut flow = BookingFlow::default();
        flow.select_time(half_past_two());
        assert!(!flow.can_submit());
        flow.select_date(march_15());
        assert!(flow.can_submit());
    }

    #[test]
    fn test_time_outside_schedule_is_ignored() {
        let mut flow = BookingFlow::default();
        flow.select_time("08:30".parse().unwrap());
        assert_eq!(flow.selected_time(), None);
        flow.select_time("09:15".parse().unwrap());
        assert_eq!(flow.selected_time(), None);
    }

    #[test]
    fn test_submit_produces_payload_and_sets_flag() {
        let seen = RefCell::new(None);
        let recorder = |booking: &FinalizedBooking| -> Result<(), BookingError> {
            *seen.borrow_mut() = Some(serde_json::to_value(booking).unwrap());
            Ok(())
        };

        let mut flow = BookingFlow::default();
        flow.select_date(march_15());
        flow.select_time(half_past_two());
        let booking = flow.submit(valid_draft(), &recorder).unwrap();

        assert!(flow.is_submitted());
        assert_eq!(booking.date(), march_15());
        assert_eq!(
            seen.into_inner(),
            Some(json!({
                "date": "2024-03-15",
                "time": "14:30",
                "name": "Jane Doe",
                "email": "jane@x.com",
                "budget": "5000",
                "goals": "grow leads",
            }))
        );
    }

    #[test]
    fn test_invalid_submit_leaves_flag_and_skips_submitter() {
        let calls = RefCell::new(0);
        let counter = |_: &FinalizedBooking| -> Result<(), BookingError> {
            *calls.borrow_mut() += 1;
            Ok(())
        };

        let mut flow = BookingFlow::default();
        flow.select_date(march_15());
        flow.select_time(half_past_two());

        let mut draft = valid_draft();
        draft.goals = "  ".to_string();
        assert!(matches!(flow.submit(draft, &counter), Err(BookingError::Invalid(_))));

        let mut no_time = BookingFlow::default();
        no_time.select_date(march_15());
        assert_eq!(no_time.submit(valid_draft(), &counter), Err(BookingError::MissingTime));

        assert!(!flow.is_submitted());
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_submitter_failure_keeps_form_view() {
        let failing = |_: &FinalizedBooking| -> Result<(), BookingError> {
            Err(BookingError::Submission("offline".to_string()))
        };
        let mut flow = BookingFlow::default();
        flow.select_date(march_15());
        flow.select_time(half_past_two());
        assert!(matches!(flow.submit(valid_draft(), &failing), Err(BookingError::Submission(_))));
        assert!(!flow.is_submitted());
    }

    #[test]
    fn test_double_submit_rejected() {
        let mut flow = BookingFlow::default();
        flow.select_date(march_15());
        flow.select_time(half_past_two());
        flow.submit(valid_draft(), &LogSubmitter).unwrap();
        assert_eq!(
            flow.submit(valid_draft(), &LogSubmitter),
            Err(BookingError::AlreadySubmitted)
        );
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut flow = BookingFlow::default();
        flow.select_date(march_15());
        flow.select_time(half_past_two());
        flow.submit(valid_draft(), &LogSubmitter).unwrap();

        flow.reset();
        assert_eq!(flow.selected_date(), None);
        assert_eq!(flow.selected_time(), None);
        assert!(!flow.is_submitted());
        assert_eq!(flow, BookingFlow::default());
    }

    #[test]
    fn test_selection_display_text() {
        let mut flow = BookingFlow::default();
        assert_eq!(flow.selected_date_display(), None);
        flow.select_date(march_15());
        flow.select_time(half_past_two());
        assert_eq!(flow.selected_date_display().as_deref(), Some("March 15, 2024"));
        assert_eq!(flow.selected_time_display().as_deref(), Some("2:30 PM"));
    }
}
