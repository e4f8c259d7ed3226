//! Reader for the `<app>.clusters` manifest.
//!
//! One cluster directory per line, relative to the install root. The first
//! entry whose last path component starts with `platform` names the platform
//! cluster; entries before it are discarded and entries after it (blank lines
//! included) are the default clusters, in file order. Lines starting with `#`
//! after leading whitespace are comments.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::LaunchError;

/// Basename prefix that identifies the platform cluster.
pub const PLATFORM_PREFIX: &str = "platform";

/// Parsed cluster manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterManifest {
    /// The platform cluster entry, if one was found.
    pub platform: Option<String>,
    /// Entries listed after the platform cluster.
    pub clusters: Vec<String>,
}

impl ClusterManifest {
    /// Parse manifest content.
    ///
    /// # Examples
    ///
    /// ```
    /// use cluster_launcher::config::clusters::ClusterManifest;
    ///
    /// let m = ClusterManifest::parse("platform9\nide\njava\n");
    /// assert_eq!(m.platform.as_deref(), Some("platform9"));
    /// assert_eq!(m.clusters, ["ide", "java"]);
    /// ```
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut manifest = Self::default();

        for line in content.lines() {
            let line = line.trim_start_matches([' ', '\t', '\r', '\n']);
            if line.starts_with('#') {
                continue;
            }
            let entry = line
                .split(['\t', '\r', '\n'])
                .next()
                .unwrap_or_default();

            if manifest.platform.is_some() {
                manifest.clusters.push(entry.to_string());
            } else if basename(entry).starts_with(PLATFORM_PREFIX) {
                manifest.platform = Some(entry.to_string());
            }
        }

        manifest
    }

    /// Read and parse the manifest at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchError::ManifestUnreadable`] if the file cannot be read.
    pub fn load(path: &Path) -> Result<Self, LaunchError> {
        let bytes = fs::read(path).map_err(|source| LaunchError::ManifestUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest = Self::parse(&String::from_utf8_lossy(&bytes));
        debug!(
            "{}: platform {:?}, {} cluster(s)",
            path.display(),
            manifest.platform,
            manifest.clusters.len()
        );
        Ok(manifest)
    }
}

/// Text after the last `\` or `/`, or the whole entry.
fn basename(entry: &str) -> &str {
    entry.rsplit(['\\', '/']).next().unwrap_or(entry)
}
