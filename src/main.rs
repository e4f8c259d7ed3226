//! `launcher` binary: start the application next to this executable.
use anyhow::Context as _;
use tracing::warn;

use cluster_launcher::{cli, launch, logging, platform::SystemHost};

fn main() {
    let _ = enable_ansi_support::enable_ansi_support();
    let cli = cli::Cli::parse_verbatim(std::env::args_os());
    logging::init_subscriber();

    // The child receives Ctrl-C itself; the launcher must outlive it to
    // relay its exit code.
    if let Err(e) = ctrlc::set_handler(|| {}).context("installing Ctrl-C handler") {
        warn!("{e:#}");
    }

    let code = match launch::run(cli.args, &SystemHost) {
        Ok(code) => code,
        Err(e) => {
            logging::report_fatal(&e);
            e.exit_code()
        }
    };
    std::process::exit(code);
}
