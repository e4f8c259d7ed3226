// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed application install and a fake host
// so each integration test can set up an isolated environment without
// repeating filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::cell::RefCell;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use cluster_launcher::launch::InstallLayout;
use cluster_launcher::platform::Host;

/// Application name used by every test install.
pub const APP: &str = "jswat";

/// An isolated application install backed by a [`tempfile::TempDir`].
///
/// ```text
/// <tmp>/
/// ├── etc/jswat.conf
/// ├── etc/jswat.clusters
/// └── <clusters...>/
/// ```
pub struct TestInstall {
    dir: tempfile::TempDir,
    /// Layout rooted at the temp directory.
    pub layout: InstallLayout,
}

impl TestInstall {
    /// Start a new install with an `etc/` directory and no files.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let layout = InstallLayout::new(dir.path(), APP);
        std::fs::create_dir_all(layout.etc_dir()).expect("create etc dir");
        Self { dir, layout }
    }

    /// Install root.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write the cluster manifest.
    pub fn manifest(self, content: &str) -> Self {
        std::fs::write(self.layout.manifest_path(), content).expect("write manifest");
        self
    }

    /// Write the system-wide config file.
    pub fn system_conf(self, content: &str) -> Self {
        std::fs::write(self.layout.system_conf_path(), content).expect("write system conf");
        self
    }

    /// Write the per-user config file below `userdir`.
    pub fn user_conf(self, userdir: &Path, content: &str) -> Self {
        let path = self.layout.user_conf_path(&userdir.to_string_lossy());
        std::fs::create_dir_all(path.parent().expect("user conf has a parent"))
            .expect("create user etc dir");
        std::fs::write(path, content).expect("write user conf");
        self
    }

    /// Create `rel` (a cluster directory) below the root.
    pub fn cluster(self, rel: &str) -> Self {
        std::fs::create_dir_all(self.root().join(rel)).expect("create cluster dir");
        self
    }

    /// Absolute path of `rel` below the root, as a string.
    pub fn path(&self, rel: &str) -> String {
        self.root().join(rel).to_string_lossy().into_owned()
    }
}

/// [`Host`] with fixed answers that records spawned commands.
pub struct FakeHost {
    /// Answer for [`Host::home_dir`].
    pub home: Option<String>,
    /// Answer for [`Host::total_memory`], in bytes.
    pub memory: u64,
    /// Result of every spawn; `None` simulates a start failure.
    pub exit_code: Option<i32>,
    /// Commands passed to [`Host::spawn_and_wait`], in order.
    pub spawned: RefCell<Vec<(PathBuf, Vec<OsString>)>>,
}

impl FakeHost {
    /// A host with a home directory, 1 GiB of memory and a child that exits 0.
    pub fn new() -> Self {
        Self {
            home: Some("/home/me".to_string()),
            memory: 1024 * 1024 * 1024,
            exit_code: Some(0),
            spawned: RefCell::new(Vec::new()),
        }
    }
}

impl Host for FakeHost {
    fn home_dir(&self) -> Option<String> {
        self.home.clone()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn total_memory(&self) -> u64 {
        self.memory
    }

    fn spawn_and_wait(&self, program: &Path, args: &[OsString]) -> io::Result<i32> {
        self.spawned
            .borrow_mut()
            .push((program.to_path_buf(), args.to_vec()));
        self.exit_code
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }
}

/// Value following `flag` in `args`, if it is valid UTF-8.
pub fn value_of<'a>(args: &'a [OsString], flag: &str) -> Option<&'a str> {
    let pos = args.iter().position(|a| a == flag)?;
    args.get(pos + 1).and_then(|a| a.to_str())
}

/// Whether `args` contains `arg`.
pub fn has_arg(args: &[OsString], arg: &str) -> bool {
    args.iter().any(|a| a == arg)
}
