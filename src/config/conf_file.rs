//! Parser for `<app>.conf` launcher configuration files.
//!
//! Format:
//!
//! ```text
//! # comment
//! netbeans_default_userdir="${HOME}/.app/1.0"
//! netbeans_default_options="-J-Xms32m --nosplash"
//! netbeans_extraclusters="/opt/extra1;/opt/extra2"
//! netbeans_jdkhome="/usr/lib/jvm/default"
//! ```
//!
//! Only these four keys are recognized, case-sensitively, and only at the
//! start of a line (after leading whitespace). One pair of surrounding double
//! quotes is stripped from a value; there is no other escaping. Any other
//! line is ignored.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::LaunchConfig;
use crate::platform::Host;

/// Token at the start of a userdir value that expands to the home directory.
pub const HOME_TOKEN: &str = "${HOME}";

/// A recognized configuration key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// `netbeans_default_userdir`
    Userdir,
    /// `netbeans_default_options`
    Options,
    /// `netbeans_extraclusters`
    ExtraClusters,
    /// `netbeans_jdkhome`
    JdkHome,
}

impl Directive {
    const ALL: [Self; 4] = [Self::Userdir, Self::Options, Self::ExtraClusters, Self::JdkHome];

    /// The line prefix (key and `=`) that introduces this directive.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Userdir => "netbeans_default_userdir=",
            Self::Options => "netbeans_default_options=",
            Self::ExtraClusters => "netbeans_extraclusters=",
            Self::JdkHome => "netbeans_jdkhome=",
        }
    }
}

/// Whitespace skipped at line starts and trimmed from value ends.
const LINE_WHITESPACE: [char; 4] = [' ', '\t', '\r', '\n'];

/// Classify one line, returning the directive and its unquoted value.
///
/// Returns `None` for comments, blank lines, and unrecognized keys.
///
/// # Examples
///
/// ```
/// use cluster_launcher::config::conf_file::{Directive, parse_line};
///
/// assert_eq!(
///     parse_line("  netbeans_jdkhome=\"C:\\jdk\"  "),
///     Some((Directive::JdkHome, "C:\\jdk"))
/// );
/// assert_eq!(parse_line("# netbeans_jdkhome=x"), None);
/// ```
#[must_use]
pub fn parse_line(line: &str) -> Option<(Directive, &str)> {
    let line = line.trim_start_matches(LINE_WHITESPACE);
    if line.starts_with('#') {
        return None;
    }
    Directive::ALL.into_iter().find_map(|directive| {
        let value = line.strip_prefix(directive.prefix())?;
        Some((directive, strip_quote_pair(value.trim_end_matches(LINE_WHITESPACE))))
    })
}

/// Remove one pair of surrounding double quotes.
///
/// A value consisting of a single `"` counts as both the opening and the
/// closing quote and becomes empty.
fn strip_quote_pair(value: &str) -> &str {
    if value == "\"" {
        return "";
    }
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

/// Apply every directive in `content` to `config`, in order.
///
/// A `${HOME}` prefix on the userdir value is replaced with
/// [`Host::home_dir`]; when the home directory is unknown the current userdir
/// is kept and the rest of the value is appended to it.
pub fn apply_str(content: &str, config: &mut LaunchConfig, host: &dyn Host) {
    for line in content.lines() {
        let Some((directive, value)) = parse_line(line) else {
            continue;
        };
        debug!("{}{value}", directive.prefix());
        match directive {
            Directive::Userdir => config.userdir = expand_userdir(value, &config.userdir, host),
            Directive::Options => config.options = value.to_string(),
            Directive::ExtraClusters => config.extra_clusters = value.to_string(),
            Directive::JdkHome => config.jdk_home = Some(value.to_string()),
        }
    }
}

/// Resolve a userdir value, expanding a leading [`HOME_TOKEN`].
fn expand_userdir(value: &str, current: &str, host: &dyn Host) -> String {
    let Some(rest) = value.strip_prefix(HOME_TOKEN) else {
        return value.to_string();
    };
    let base = host.home_dir().unwrap_or_else(|| {
        debug!("home directory unknown, keeping userdir {current}");
        current.to_string()
    });
    format!("{base}{rest}")
}

/// Read `path` and apply it to `config`.
///
/// A file that cannot be read leaves `config` unchanged. Invalid UTF-8 is
/// decoded lossily.
pub fn load(path: &Path, config: &mut LaunchConfig, host: &dyn Host) {
    match fs::read(path) {
        Ok(bytes) => {
            debug!("reading {}", path.display());
            apply_str(&String::from_utf8_lossy(&bytes), config, host);
        }
        Err(e) => debug!("skipping {}: {e}", path.display()),
    }
}
