//! Application views
//!
//! Top-level screens selected by the auth gate in `App`.

mod home;
mod login;
mod reminders;
mod reports;

pub use home::Home;
pub use login::Login;
pub use reminders::Reminders;
pub use reports::Reports;
