//! Console logging and fatal error reporting.

mod dialog;
mod subscriber;

pub use dialog::{console_message, dialog_message, report_fatal};
pub use subscriber::{LOG_ENV_VAR, init_subscriber};
