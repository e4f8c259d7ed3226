//! Default maximum heap size for the child runtime.

use tracing::debug;

use crate::config::{HEAP_OPTION, LaunchConfig};
use crate::platform::Host;

/// Smallest heap the launcher will pick, in MiB.
pub const MIN_HEAP_MB: u64 = 96;

/// Largest heap the launcher will pick, in MiB.
pub const MAX_HEAP_MB: u64 = 512;

/// Share of physical memory given to the heap (one fifth).
const MEMORY_DIVISOR: u64 = 5;

/// Heap size in MiB for a machine with `total_memory` bytes of RAM.
///
/// # Examples
///
/// ```
/// use cluster_launcher::launch::heap::default_heap_mb;
///
/// assert_eq!(default_heap_mb(1024 * 1024 * 1024), 204);
/// assert_eq!(default_heap_mb(0), 96);
/// assert_eq!(default_heap_mb(64 * 1024 * 1024 * 1024), 512);
/// ```
#[must_use]
pub const fn default_heap_mb(total_memory: u64) -> u64 {
    let mb = total_memory / 1024 / 1024 / MEMORY_DIVISOR;
    if mb < MIN_HEAP_MB {
        MIN_HEAP_MB
    } else if mb > MAX_HEAP_MB {
        MAX_HEAP_MB
    } else {
        mb
    }
}

/// Append a default `-J-Xmx` flag to the options unless one is present.
///
/// Physical memory is only queried when a flag is added. Returns whether the
/// options were changed.
pub fn adjust(config: &mut LaunchConfig, host: &dyn Host) -> bool {
    if config.has_heap_option() {
        debug!("keeping explicit heap size");
        return false;
    }
    let mb = default_heap_mb(host.total_memory());
    debug!("default heap size {mb} MiB");
    config.options.push_str(&format!(" {HEAP_OPTION}{mb}m"));
    true
}
