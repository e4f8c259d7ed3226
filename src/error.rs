//! Fatal error types for the launcher.
//!
//! Every condition that aborts a launch is a [`LaunchError`] variant. Missing
//! configuration files are not errors at all; they are skipped by the
//! config parser and never reach this module.
//!
//! # Exit codes
//!
//! ```text
//! LaunchError
//! ├── CurrentExe         raw OS error, else 1
//! ├── ManifestUnreadable raw OS error, else 1
//! ├── UndefinedPlatform  1
//! ├── PlatformNotFound   1
//! └── Spawn              255
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Exit code used when the child process could not be started.
pub const SPAWN_FAILURE_EXIT_CODE: i32 = 255;

/// Exit code used for fatal errors that carry no OS error code.
pub const FATAL_EXIT_CODE: i32 = 1;

/// A condition that terminates the launch.
#[derive(Error, Debug)]
pub enum LaunchError {
    /// The path of the running executable could not be determined.
    #[error("Cannot determine launcher location")]
    CurrentExe {
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The cluster manifest could not be opened or read.
    #[error("Cannot read cluster file: {}", path.display())]
    ManifestUnreadable {
        /// Path of the manifest that was tried.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The manifest contained no `platform*` entry.
    #[error("Undefined platform cluster!")]
    UndefinedPlatform,

    /// The platform cluster directory does not exist.
    #[error("Could not find platform cluster:\n\n{}", .0.display())]
    PlatformNotFound(PathBuf),

    /// The child executable could not be started.
    #[error("Cannot start {app}")]
    Spawn {
        /// Application name shown to the user.
        app: String,
        /// Path of the executable that failed to start.
        program: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl LaunchError {
    /// Process exit code for this error.
    ///
    /// Spawn failures use [`SPAWN_FAILURE_EXIT_CODE`]. Errors backed by an OS
    /// error use its raw code when it is non-zero; everything else uses
    /// [`FATAL_EXIT_CODE`].
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Spawn { .. } => SPAWN_FAILURE_EXIT_CODE,
            Self::CurrentExe { source } | Self::ManifestUnreadable { source, .. } => source
                .raw_os_error()
                .filter(|&code| code != 0)
                .unwrap_or(FATAL_EXIT_CODE),
            Self::UndefinedPlatform | Self::PlatformNotFound(_) => FATAL_EXIT_CODE,
        }
    }

    /// Name of the failed host call and its OS error, for the error dialog.
    ///
    /// Only spawn failures report the call, mirroring how the message box
    /// distinguishes "which API failed" from a plain message.
    #[must_use]
    pub fn os_detail(&self) -> Option<String> {
        match self {
            Self::Spawn {
                program, source, ..
            } => Some(format!(
                "{} failed with error {}: {source}",
                program.display(),
                source.raw_os_error().unwrap_or(0)
            )),
            _ => None,
        }
    }
}
