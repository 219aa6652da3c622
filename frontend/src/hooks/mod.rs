pub mod use_booking_flow;
pub mod use_calendar;
