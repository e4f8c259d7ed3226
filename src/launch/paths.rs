//! Cluster search path and platform cluster resolution.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::LaunchError;
use crate::platform::Host;

/// Separator between entries of the cluster search path.
pub const CLUSTER_PATH_SEPARATOR: &str = ";";

/// Turn a manifest entry into a relative path.
///
/// Both `\` and `/` separate components, so manifests written on either
/// family of systems resolve the same way.
#[must_use]
pub fn entry_path(entry: &str) -> PathBuf {
    entry
        .split(['\\', '/'])
        .filter(|part| !part.is_empty())
        .collect()
}

/// Build the `;`-separated cluster search path.
///
/// Each non-empty entry is resolved under `root` and kept only if it is an
/// existing directory. `extra` is appended verbatim when non-empty.
pub fn cluster_path(root: &Path, entries: &[String], extra: &str, host: &dyn Host) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(entries.len() + 1);

    for entry in entries.iter().filter(|e| !e.is_empty()) {
        let dir = root.join(entry_path(entry));
        if host.is_dir(&dir) {
            parts.push(dir.to_string_lossy().into_owned());
        } else {
            warn!("skipping missing cluster {}", dir.display());
        }
    }

    if !extra.is_empty() {
        parts.push(extra.to_string());
    }

    parts.join(CLUSTER_PATH_SEPARATOR)
}

/// Locate the platform cluster directory.
///
/// `platform` is used as given when it names an existing directory,
/// otherwise it is taken relative to `root`.
///
/// # Errors
///
/// Returns [`LaunchError::PlatformNotFound`] if neither location is a
/// directory.
pub fn resolve_platform(root: &Path, platform: &str, host: &dyn Host) -> Result<PathBuf, LaunchError> {
    let as_given = PathBuf::from(platform);
    if host.is_dir(&as_given) {
        debug!("platform cluster {}", as_given.display());
        return Ok(as_given);
    }
    let under_root = root.join(entry_path(platform));
    if host.is_dir(&under_root) {
        debug!("platform cluster {}", under_root.display());
        Ok(under_root)
    } else {
        Err(LaunchError::PlatformNotFound(under_root))
    }
}
