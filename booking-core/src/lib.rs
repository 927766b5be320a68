//! DOM-free logic behind the booking widget: calendar layout, the three-step
//! wizard and submission validation. The `web` crate renders these types and
//! feeds user events back through [`update`].

pub mod calendar;
pub mod config;
pub mod date;
pub mod error;
pub mod locale;
pub mod message;
pub mod submission;
pub mod wizard;

pub use calendar::{CalendarGrid, DayCell, TodayHighlight, GRID_CELLS};
pub use config::{BookingOptions, BookingType};
pub use date::{DateKey, ViewMonth};
pub use error::{BookingError, ConfigError, DateKeyError};
pub use locale::{Locale, UiText};
pub use message::{BookingMessage, MessageUpdate};
pub use submission::{BookingForm, BookingSubmission};
pub use wizard::{update, BookingAction, BookingState, Change, Transition, WizardStep};
