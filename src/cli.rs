use std::ffi::OsString;

use clap::Parser;

/// Marker that clap would otherwise swallow in first position.
const END_OF_OPTIONS: &str = "--";

/// Command line of the launcher.
///
/// The launcher owns no flags of its own: `--help` and `--version` are
/// forwarded to the application like everything else.
#[derive(Parser, Debug)]
#[command(
    name = "launcher",
    about = "Start a cluster-based desktop application",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Arguments for the launched application, in order
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        num_args = 0..,
        value_parser = clap::value_parser!(OsString)
    )]
    pub args: Vec<OsString>,
}

impl Cli {
    /// Parse `argv` (program name first) keeping every argument verbatim.
    ///
    /// Arguments need not be valid UTF-8. A `--` in first position, which
    /// clap reads as its end-of-options marker, is put back.
    #[must_use]
    pub fn parse_verbatim<I, T>(argv: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
        let leading_marker = argv.get(1).is_some_and(|a| a == END_OF_OPTIONS);
        let mut cli = Self::parse_from(argv);
        if leading_marker {
            cli.args.insert(0, OsString::from(END_OF_OPTIONS));
        }
        cli
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_no_arguments() {
        let cli = Cli::parse_from(["launcher"]);
        assert!(cli.args.is_empty());
    }

    #[test]
    fn parse_userdir_pair() {
        let cli = Cli::parse_from(["launcher", "--userdir", "/home/me/.app"]);
        assert_eq!(cli.args, ["--userdir", "/home/me/.app"]);
    }

    #[test]
    fn parse_unknown_flags_pass_through() {
        let cli = Cli::parse_from(["launcher", "--open", "Main.java", "-J-ea"]);
        assert_eq!(cli.args, ["--open", "Main.java", "-J-ea"]);
    }

    #[test]
    fn parse_help_is_forwarded() {
        let cli = Cli::parse_from(["launcher", "--help"]);
        assert_eq!(cli.args, ["--help"]);
    }

    #[test]
    fn parse_version_is_forwarded() {
        let cli = Cli::parse_from(["launcher", "-V", "--version"]);
        assert_eq!(cli.args, ["-V", "--version"]);
    }

    #[test]
    fn parse_keeps_spaces_inside_arguments() {
        let cli = Cli::parse_from(["launcher", "--userdir", "C:\\My Files\\app"]);
        assert_eq!(cli.args[1], "C:\\My Files\\app");
    }

    #[test]
    fn parse_verbatim_keeps_leading_double_dash() {
        let cli = Cli::parse_verbatim(["launcher", "--", "--userdir", "/x"]);
        assert_eq!(cli.args, ["--", "--userdir", "/x"]);
    }

    #[test]
    fn parse_verbatim_without_marker_is_unchanged() {
        let cli = Cli::parse_verbatim(["launcher", "--open", "a"]);
        assert_eq!(cli.args, ["--open", "a"]);
    }

    #[test]
    fn parse_verbatim_lone_marker() {
        let cli = Cli::parse_verbatim(["launcher", "--"]);
        assert_eq!(cli.args, ["--"]);
    }

    #[cfg(unix)]
    #[test]
    fn parse_accepts_non_utf8() {
        use std::os::unix::ffi::OsStringExt as _;

        let raw = OsString::from_vec(vec![b'f', 0xff, b'.', b'j']);
        let cli = Cli::try_parse_from([OsString::from("launcher"), raw.clone()]).unwrap();
        assert_eq!(cli.args, [raw]);
    }

    #[test]
    fn parse_keeps_later_double_dash() {
        let cli = Cli::parse_from(["launcher", "--open", "--", "-x"]);
        assert_eq!(cli.args, ["--open", "--", "-x"]);
    }
}
