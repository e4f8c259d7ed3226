//! Host operating-system services the launcher depends on.
//!
//! All side effects other than reading config files go through the [`Host`]
//! trait so the launch pipeline can be exercised without real processes.

use std::ffi::OsString;
use std::fmt;
use std::path::Path;

use tracing::debug;

use crate::exec;

/// Detected operating system family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    /// Linux and other Unix-like systems.
    Unix,
    /// Microsoft Windows.
    Windows,
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unix => write!(f, "unix"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

impl Os {
    /// The OS this binary was built for.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(windows) { Self::Windows } else { Self::Unix }
    }

    /// User directory used when no configuration names one.
    #[must_use]
    pub const fn default_userdir(self) -> &'static str {
        match self {
            Self::Windows => r"c:\nbuser",
            Self::Unix => "/tmp/nbuser",
        }
    }

    /// File name of an executable called `stem` on this OS.
    #[must_use]
    pub fn executable_name(self, stem: &str) -> String {
        match self {
            Self::Windows => format!("{stem}.exe"),
            Self::Unix => stem.to_string(),
        }
    }
}

/// Services provided by the host OS.
#[cfg_attr(test, mockall::automock)]
pub trait Host {
    /// The current user's home directory, if it can be determined.
    fn home_dir(&self) -> Option<String>;

    /// Whether `path` names an existing directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Total physical memory in bytes.
    fn total_memory(&self) -> u64;

    /// Start `program` with `args`, wait for it, and return its exit code.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be started or waited on.
    fn spawn_and_wait(&self, program: &Path, args: &[OsString]) -> std::io::Result<i32>;
}

/// Environment variables naming the home directory, in lookup order.
const HOME_ENV_VARS: [&str; 2] = ["USERPROFILE", "HOME"];

/// [`Host`] backed by the real operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHost;

impl Host for SystemHost {
    fn home_dir(&self) -> Option<String> {
        if let Some(home) = HOME_ENV_VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|home| !home.is_empty())
        {
            return Some(home);
        }
        debug!("home directory not set in environment");
        home_from_registry()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn total_memory(&self) -> u64 {
        let mut sys = sysinfo::System::new();
        sys.refresh_memory();
        sys.total_memory()
    }

    fn spawn_and_wait(&self, program: &Path, args: &[OsString]) -> std::io::Result<i32> {
        exec::spawn_and_wait(program, args)
    }
}

/// Registry key whose `Desktop` value sits directly below the user's profile.
#[cfg(windows)]
const SHELL_FOLDERS_SUBKEY: &str = r"Software\Microsoft\Windows\CurrentVersion\Explorer\Shell Folders";

/// Derive the profile directory from the per-user `Desktop` shell folder.
#[cfg(windows)]
fn home_from_registry() -> Option<String> {
    use winreg::RegKey;
    use winreg::enums::{HKEY_CURRENT_USER, KEY_READ};

    let hkcu = RegKey::predef(HKEY_CURRENT_USER);
    let key = hkcu
        .open_subkey_with_flags(SHELL_FOLDERS_SUBKEY, KEY_READ)
        .ok()?;
    let desktop: String = key.get_value("Desktop").ok()?;
    parent_of_shell_folder(&desktop)
}

#[cfg(not(windows))]
const fn home_from_registry() -> Option<String> {
    None
}

/// Strip the last `\`-separated component of a shell folder path.
#[cfg_attr(not(windows), allow(dead_code))]
fn parent_of_shell_folder(folder: &str) -> Option<String> {
    folder
        .rsplit_once('\\')
        .map(|(parent, _)| parent.to_string())
}
