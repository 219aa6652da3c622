//! Hand-off point for finalized bookings.
//!
//! There is no backend yet: [`LogSubmitter`] writes the payload to the log.
//! A real submitter (e.g. an HTTP client) implements [`BookingSubmitter`]
//! and must keep the serialized shape of [`FinalizedBooking`].

use crate::booking::{BookingError, FinalizedBooking};

pub trait BookingSubmitter {
    fn submit(&self, booking: &FinalizedBooking) -> Result<(), BookingError>;
}

impl<F> BookingSubmitter for F
where
    F: Fn(&FinalizedBooking) -> Result<(), BookingError>,
{
    fn submit(&self, booking: &FinalizedBooking) -> Result<(), BookingError> {
        self(booking)
    }
}

/// Writes the booking as JSON at info level
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LogSubmitter;

impl BookingSubmitter for LogSubmitter {
    fn submit(&self, booking: &FinalizedBooking) -> Result<(), BookingError> {
        let payload = serde_json::to_string(booking)
            .map_err(|e| BookingError::Submission(e.to_string()))?;
        log::info!("Booking submitted: {}", payload);
        Ok(())
    }
}
