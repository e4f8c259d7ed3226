//! The child command line.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::args::tokenizer::{self, Tokens};
use crate::config::LaunchConfig;
use crate::platform::Os;

/// Executable inside the platform cluster that starts the runtime.
pub const RUNTIME_EXECUTABLE: &str = "nbexec";

/// Path of the runtime executable inside `platform_dir`.
#[must_use]
pub fn runtime_executable(platform_dir: &Path) -> PathBuf {
    platform_dir
        .join("lib")
        .join(Os::current().executable_name(RUNTIME_EXECUTABLE))
}

/// Program and arguments for the child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    /// Runtime executable.
    pub program: PathBuf,
    /// Arguments, in order.
    pub args: Vec<OsString>,
}

impl LaunchCommand {
    /// Assemble the child command.
    ///
    /// Argument order: `--jdkhome <jdk>` (when configured), `--branding`,
    /// `--clusters`, `--userdir`, the configured options split with the
    /// command-line tokenizer, then `passthrough` unchanged.
    #[must_use]
    pub fn build(
        program: PathBuf,
        app_name: &str,
        cluster_path: &str,
        config: &LaunchConfig,
        passthrough: &[OsString],
    ) -> Self {
        let mut args: Vec<OsString> = Vec::new();
        if let Some(jdk) = &config.jdk_home {
            args.extend(["--jdkhome".into(), jdk.into()]);
        }
        args.extend([
            "--branding".into(),
            app_name.into(),
            "--clusters".into(),
            cluster_path.into(),
            "--userdir".into(),
            (&config.userdir).into(),
        ]);
        args.extend(Tokens::new(&config.options).map(OsString::from));
        args.extend(passthrough.iter().cloned());
        Self { program, args }
    }
}

impl fmt::Display for LaunchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let words: Vec<String> = std::iter::once(self.program.as_os_str())
            .chain(self.args.iter().map(OsString::as_os_str))
            .map(|w| w.to_string_lossy().into_owned())
            .collect();
        f.write_str(&tokenizer::join(&words))
    }
}
