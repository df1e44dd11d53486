//! Command-line argument parsing.

use std::path::PathBuf;

/// Options that adjust the TUI run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub no_feed: bool,
    pub log_file: Option<PathBuf>,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI application (default)
    RunTui(RunOptions),
}

/// Parse command-line arguments and return the command to execute.
///
/// Unknown flags are ignored. `--version` and `--help` win over everything
/// else, in the order they appear.
///
/// # Examples
///
/// ```
/// use tcreactions::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["tcreactions".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--no-feed" => options.no_feed = true,
            "--log-file" => {
                if let Some(path) = args.next() {
                    options.log_file = Some(PathBuf::from(path));
                }
            }
            other => {
                if let Some(path) = other.strip_prefix("--log-file=") {
                    options.log_file = Some(PathBuf::from(path));
                }
            }
        }
    }

    CliCommand::RunTui(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        let mut full = vec!["tcreactions".to_string()];
        full.extend(args.iter().map(|s| s.to_string()));
        parse_args(full.into_iter())
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["--version"]), CliCommand::Version);
        assert_eq!(parse(&["-V"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_help_flags() {
        assert_eq!(parse(&["--help"]), CliCommand::Help);
        assert_eq!(parse(&["-h"]), CliCommand::Help);
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), CliCommand::RunTui(RunOptions::default()));
    }

    #[test]
    fn test_parse_run_options() {
        let expected = RunOptions {
            no_feed: true,
            log_file: Some(PathBuf::from("/tmp/r.log")),
        };
        assert_eq!(
            parse(&["--no-feed", "--log-file", "/tmp/r.log"]),
            CliCommand::RunTui(expected.clone())
        );
        assert_eq!(
            parse(&["--log-file=/tmp/r.log", "--no-feed"]),
            CliCommand::RunTui(expected)
        );
    }

    #[test]
    fn test_parse_log_file_without_value() {
        assert_eq!(parse(&["--log-file"]), CliCommand::RunTui(RunOptions::default()));
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(parse(&["--unknown"]), CliCommand::RunTui(RunOptions::default()));
    }

    #[test]
    fn test_version_wins_after_options() {
        assert_eq!(parse(&["--no-feed", "-V"]), CliCommand::Version);
    }
}
