pub mod booking_success;
pub mod calendar;
pub mod forms;
pub mod time_slot_picker;

pub use booking_success::BookingSuccess;
pub use calendar::Calendar;
pub use forms::BookingForm;
pub use time_slot_picker::TimeSlotPicker;
