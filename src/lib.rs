//! Native launcher for cluster-based desktop applications.
//!
//! The launcher sits in `<root>/bin`, works out where the application's
//! clusters live, merges system, command-line and per-user configuration,
//! sizes the JVM heap from physical memory, and hands everything to the
//! platform runtime executable. It then waits and relays the exit code.
//!
//! - **[`config`]**: configuration files and the cluster manifest
//! - **[`args`]**: command-line handling and the option tokenizer
//! - **[`launch`]**: the pipeline from install layout to child process
//! - **[`platform`]**: the [`platform::Host`] seam over OS facilities
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod args;
/// Clap definition of the launcher's command line.
pub mod cli;
pub mod config;
pub mod error;
pub mod exec;
pub mod launch;
pub mod logging;
pub mod platform;
