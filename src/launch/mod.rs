//! The launch pipeline.
//!
//! ```text
//! manifest ─▶ system conf ─▶ command line ─▶ user conf ─▶ heap ─▶ clusters ─▶ spawn
//! ```
//!
//! [`prepare`] runs every step up to the spawn and returns the child
//! command; [`launch`] also runs it and relays the exit code.

pub mod command;
pub mod heap;
pub mod layout;
pub mod paths;

use std::ffi::OsString;

use tracing::debug;

pub use command::LaunchCommand;
pub use layout::InstallLayout;

use crate::args;
use crate::config::clusters::ClusterManifest;
use crate::config::{LaunchConfig, conf_file};
use crate::error::LaunchError;
use crate::platform::{Host, Os};

/// Resolve configuration and build the child command without running it.
///
/// The user config cannot move the user directory: the userdir in effect
/// before it is read is restored afterwards.
///
/// # Errors
///
/// Returns an error if the manifest cannot be read, names no platform
/// cluster, or the platform cluster directory does not exist.
pub fn prepare(
    layout: &InstallLayout,
    cli_args: Vec<OsString>,
    host: &dyn Host,
) -> Result<LaunchCommand, LaunchError> {
    debug!("install root {} ({})", layout.root.display(), Os::current());
    let manifest = ClusterManifest::load(&layout.manifest_path())?;

    let mut config = LaunchConfig::default();
    conf_file::load(&layout.system_conf_path(), &mut config, host);

    let passthrough = args::apply_args(cli_args, &mut config);

    let userdir = config.userdir.clone();
    conf_file::load(&layout.user_conf_path(&userdir), &mut config, host);
    config.userdir = userdir;

    heap::adjust(&mut config, host);

    let cluster_path = paths::cluster_path(
        &layout.root,
        &manifest.clusters,
        &config.extra_clusters,
        host,
    );

    let platform = manifest
        .platform
        .as_deref()
        .ok_or(LaunchError::UndefinedPlatform)?;
    let platform_dir = paths::resolve_platform(&layout.root, platform, host)?;

    Ok(LaunchCommand::build(
        command::runtime_executable(&platform_dir),
        &layout.app_name,
        &cluster_path,
        &config,
        &passthrough,
    ))
}

/// Run the whole pipeline and wait for the child.
///
/// Returns the child's exit code.
///
/// # Errors
///
/// Returns any error from [`prepare`], or [`LaunchError::Spawn`] if the
/// child cannot be started.
pub fn launch(
    layout: &InstallLayout,
    cli_args: Vec<OsString>,
    host: &dyn Host,
) -> Result<i32, LaunchError> {
    let command = prepare(layout, cli_args, host)?;
    debug!("command line: {command}");
    host.spawn_and_wait(&command.program, &command.args)
        .map_err(|source| LaunchError::Spawn {
            app: layout.app_name.clone(),
            program: command.program.clone(),
            source,
        })
}

/// Launch relative to the running executable.
///
/// # Errors
///
/// See [`launch`]; additionally fails if the executable cannot be located.
pub fn run(cli_args: Vec<OsString>, host: &dyn Host) -> Result<i32, LaunchError> {
    let layout = InstallLayout::current()?;
    launch(&layout, cli_args, host)
}
