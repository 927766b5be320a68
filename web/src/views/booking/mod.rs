pub mod dialog;
pub mod page;
pub mod wizard;

pub use dialog::BookingDialog;
pub use page::BookingPage;
pub use wizard::BookingWizard;
