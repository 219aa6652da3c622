use chrono::NaiveDate;
use yew::prelude::*;
use shared::{BookingDraft, BookingFlow, LogSubmitter, SchedulerConfig, SlotTime};
use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
pub struct UseBookingFlowActions {
    pub select_date: Callback<NaiveDate>,
    pub select_time: Callback<SlotTime>,
    pub submit: Callback<BookingDraft>,
    pub reset: Callback<()>,
}

pub struct UseBookingFlowResult {
    pub state: BookingFlow,
    pub actions: UseBookingFlowActions,
}

/// Owns the selected date, selected time and the submitted flag.
///
/// Each action works on a copy of the current flow and replaces the state,
/// so children only ever request changes through these callbacks.
#[hook]
pub fn use_booking_flow(config: &SchedulerConfig) -> UseBookingFlowResult {
    let flow = {
        let config = config.clone();
        use_state(move || BookingFlow::new(&config))
    };

    let select_date = {
        let flow = flow.clone();
        use_callback((*flow).clone(), move |date: NaiveDate, current| {
            let mut next = current.clone();
            next.select_date(date);
            flow.set(next);
        })
    };

    let select_time = {
        let flow = flow.clone();
        use_callback((*flow).clone(), move |time: SlotTime, current| {
            let mut next = current.clone();
            next.select_time(time);
            flow.set(next);
        })
    };

    let submit = {
        let flow = flow.clone();
        use_callback((*flow).clone(), move |draft: BookingDraft, current| {
            let mut next = current.clone();
            match next.submit(draft, &LogSubmitter) {
                Ok(booking) => {
                    Logger::info_with_component(
                        "booking",
                        &format!(
                            "Booking confirmed for {} at {}",
                            booking.date(),
                            booking.time().display_12h()
                        ),
                    );
                    flow.set(next);
                }
                Err(e) => {
                    Logger::error_with_component("booking", &format!("Booking not submitted: {}", e));
                }
            }
        })
    };

    let reset = {
        let flow = flow.clone();
        use_callback((*flow).clone(), move |_: (), current| {
            let mut next = current.clone();
            next.reset();
            flow.set(next);
        })
    };

    UseBookingFlowResult {
        state: (*flow).clone(),
        actions: UseBookingFlowActions {
            select_date,
            select_time,
            submit,
            reset,
        },
    }
}
