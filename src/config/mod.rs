//! Launch configuration and the files it is read from.
//!
//! - [`conf_file`]: `<app>.conf` directives (system-wide and per-user)
//! - [`clusters`]: the `<app>.clusters` manifest

pub mod clusters;
pub mod conf_file;

use crate::platform::Os;

/// Substring of [`LaunchConfig::options`] that marks an explicit heap size.
pub const HEAP_OPTION: &str = "-J-Xmx";

/// Settings accumulated from config files and the command line.
///
/// Starts from [`Default`] and is updated in place by each source in turn;
/// later sources override earlier ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
    /// Per-user writable directory passed to the child as `--userdir`.
    pub userdir: String,
    /// Extra launch flags, space separated.
    pub options: String,
    /// Additional cluster directories, `;` separated.
    pub extra_clusters: String,
    /// JDK installation passed to the child as `--jdkhome`.
    pub jdk_home: Option<String>,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            userdir: Os::current().default_userdir().to_string(),
            options: String::new(),
            extra_clusters: String::new(),
            jdk_home: None,
        }
    }
}

impl LaunchConfig {
    /// Whether [`options`](Self::options) already sets a maximum heap size.
    #[must_use]
    pub fn has_heap_option(&self) -> bool {
        self.options.contains(HEAP_OPTION)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_platform_userdir() {
        let c = LaunchConfig::default();
        assert_eq!(c.userdir, Os::current().default_userdir());
        assert!(c.options.is_empty());
        assert!(c.extra_clusters.is_empty());
        assert!(c.jdk_home.is_none());
    }

    #[test]
    fn heap_option_detected_anywhere() {
        let c = LaunchConfig {
            options: "--nosplash -J-Xmx2g -J-ea".to_string(),
            ..LaunchConfig::default()
        };
        assert!(c.has_heap_option());
    }

    #[test]
    fn heap_option_absent() {
        let c = LaunchConfig {
            options: "-J-Xms64m".to_string(),
            ..LaunchConfig::default()
        };
        assert!(!c.has_heap_option());
    }
}
