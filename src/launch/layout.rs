//! Installation layout derived from the launcher's own location.

use std::path::{Path, PathBuf};

use crate::error::LaunchError;

/// Name of the directory launchers are conventionally installed in.
const BIN_DIR: &str = "bin";

/// Where the application is installed and what it is called.
///
/// ```text
/// <root>/
/// ├── bin/<app>[.exe]        the launcher (optional `bin/` level)
/// ├── etc/<app>.conf         system-wide configuration
/// ├── etc/<app>.clusters     cluster manifest
/// └── platformN/lib/nbexec   platform runtime
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallLayout {
    /// Installation root.
    pub root: PathBuf,
    /// Lowercased application name, used for file names and branding.
    pub app_name: String,
}

impl InstallLayout {
    /// Create a layout from explicit values.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, app_name: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            app_name: app_name.into(),
        }
    }

    /// Derive the layout from the launcher executable's path.
    ///
    /// The root is the executable's directory, or its parent when that
    /// directory is called `bin` (in any letter case). The application name
    /// is the executable's file stem in lowercase.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use cluster_launcher::launch::InstallLayout;
    ///
    /// let layout = InstallLayout::from_executable(Path::new("/opt/jswat/bin/JSwat"));
    /// assert_eq!(layout.root, Path::new("/opt/jswat"));
    /// assert_eq!(layout.app_name, "jswat");
    /// ```
    #[must_use]
    pub fn from_executable(exe: &Path) -> Self {
        let app_name = exe
            .file_stem()
            .map(|s| s.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        let mut root = exe.parent().unwrap_or(exe);
        if root
            .file_name()
            .is_some_and(|name| name.eq_ignore_ascii_case(BIN_DIR))
            && let Some(parent) = root.parent()
        {
            root = parent;
        }
        Self::new(root, app_name)
    }

    /// Derive the layout from the running executable.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchError::CurrentExe`] if the executable path cannot be
    /// determined or canonicalized.
    pub fn current() -> Result<Self, LaunchError> {
        let exe = std::env::current_exe()
            .and_then(dunce::canonicalize)
            .map_err(|source| LaunchError::CurrentExe { source })?;
        Ok(Self::from_executable(&exe))
    }

    /// `<root>/etc`
    #[must_use]
    pub fn etc_dir(&self) -> PathBuf {
        self.root.join("etc")
    }

    /// `<root>/etc/<app>.clusters`
    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.etc_dir().join(format!("{}.clusters", self.app_name))
    }

    /// `<root>/etc/<app>.conf`
    #[must_use]
    pub fn system_conf_path(&self) -> PathBuf {
        self.etc_dir().join(self.conf_file_name())
    }

    /// `<userdir>/etc/<app>.conf`
    #[must_use]
    pub fn user_conf_path(&self, userdir: &str) -> PathBuf {
        Path::new(userdir).join("etc").join(self.conf_file_name())
    }

    fn conf_file_name(&self) -> String {
        format!("{}.conf", self.app_name)
    }
}
