//! Reporting of fatal launch errors.
use std::error::Error as _;

use tracing::error;

use crate::error::LaunchError;

/// Title of the error message box.
#[cfg(windows)]
const DIALOG_TITLE: &str = "Error";

/// Text shown in the error message box.
///
/// The error's own message, followed on a new line by the failed call and
/// its OS error when the error carries one.
#[must_use]
pub fn dialog_message(err: &LaunchError) -> String {
    match err.os_detail() {
        Some(detail) => format!("{err}\n{detail}"),
        None => err.to_string(),
    }
}

/// One-line console form: the error followed by its causes.
#[must_use]
pub fn console_message(err: &LaunchError) -> String {
    let mut line = err.to_string().replace("\n\n", " ");
    let mut cause = err.source();
    while let Some(e) = cause {
        line.push_str(": ");
        line.push_str(&e.to_string());
        cause = e.source();
    }
    line
}

/// Log `err` and, on Windows, show a blocking message box.
pub fn report_fatal(err: &LaunchError) {
    error!("{}", console_message(err));
    show_dialog(&dialog_message(err));
}

#[cfg(windows)]
fn show_dialog(message: &str) {
    let _ = rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title(DIALOG_TITLE)
        .set_description(message)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

#[cfg(not(windows))]
const fn show_dialog(_message: &str) {}
