//! Child process execution.

use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};

use tracing::debug;

/// Exit code reported when a process ends without one.
const UNKNOWN_EXIT_CODE: i32 = 1;

/// Start `program` with `args`, inheriting the console, and block until it
/// exits. Returns the child's exit code.
///
/// # Errors
///
/// Returns an error if the process cannot be started or waited on.
pub fn spawn_and_wait(program: &Path, args: &[OsString]) -> io::Result<i32> {
    let mut child = Command::new(program).args(args).spawn()?;
    debug!("started {} (pid {})", program.display(), child.id());
    let status = child.wait()?;
    debug!("{} exited with {status}", program.display());
    Ok(exit_code(status))
}

/// Map an [`ExitStatus`] onto a process exit code.
///
/// On Unix a child killed by signal `N` maps to `128 + N`, the way shells
/// report it.
#[must_use]
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt as _;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    UNKNOWN_EXIT_CODE
}
