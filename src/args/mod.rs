//! Interpretation of the launcher's own command-line flags.
//!
//! Only the user-directory override is understood here. Everything else is
//! handed back untouched so it can be forwarded to the child process.

pub mod tokenizer;

use std::ffi::{OsStr, OsString};

use tracing::debug;

use crate::config::LaunchConfig;

/// Flag that overrides the user directory.
pub const USERDIR_FLAG: &str = "--userdir";

/// Single-dash spelling of [`USERDIR_FLAG`] kept for older shortcuts.
pub const LEGACY_USERDIR_FLAG: &str = "-userdir";

/// Apply recognized flags from `args` to `config` and return the rest.
///
/// `--userdir <path>` (or `-userdir <path>`) sets the user directory and both
/// tokens are consumed. A flag with no following value changes nothing and is
/// returned with the other arguments. Arguments that are not valid UTF-8 are
/// returned byte for byte; a non-UTF-8 userdir is decoded lossily.
///
/// # Examples
///
/// ```
/// use cluster_launcher::args::apply_args;
/// use cluster_launcher::config::LaunchConfig;
///
/// let mut config = LaunchConfig::default();
/// let rest = apply_args(
///     ["--userdir", "/home/me/.app", "--open", "file.txt"],
///     &mut config,
/// );
/// assert_eq!(config.userdir, "/home/me/.app");
/// assert_eq!(rest, ["--open", "file.txt"]);
/// ```
pub fn apply_args<I, S>(args: I, config: &mut LaunchConfig) -> Vec<OsString>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::<OsString>::into);
    let mut passthrough = Vec::new();

    while let Some(arg) = args.next() {
        if is_userdir_flag(&arg)
            && let Some(value) = args.next()
        {
            let value = value.to_string_lossy().into_owned();
            debug!("userdir overridden on command line: {value}");
            config.userdir = value;
            continue;
        }
        passthrough.push(arg);
    }

    passthrough
}

fn is_userdir_flag(arg: &OsStr) -> bool {
    arg.to_str()
        .is_some_and(|a| a == USERDIR_FLAG || a == LEGACY_USERDIR_FLAG)
}

/// Tokenize a whole command string and apply it like [`apply_args`].
///
/// # Examples
///
/// ```
/// use cluster_launcher::args::parse_command_line;
/// use cluster_launcher::config::LaunchConfig;
///
/// let mut config = LaunchConfig::default();
/// let rest = parse_command_line(r#"--userdir "C:\My Files\app" -J-ea"#, &mut config);
/// assert_eq!(config.userdir, r"C:\My Files\app");
/// assert_eq!(rest, ["-J-ea"]);
/// ```
pub fn parse_command_line(command_line: &str, config: &mut LaunchConfig) -> Vec<OsString> {
    apply_args(tokenizer::Tokens::new(command_line), config)
}
