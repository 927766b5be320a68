pub mod calendar_grid;
pub mod loading;
pub mod message_bar;
pub mod step_indicator;
pub mod time_slot_picker;

// Re-export commonly used types
pub use calendar_grid::BookingCalendar;
pub use loading::OptionsLoading;
pub use message_bar::{BookingMessageBar, BookingResult};
pub use step_indicator::StepIndicators;
pub use time_slot_picker::TimeSlotPicker;
