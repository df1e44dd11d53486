//! Command-line interface.
//!
//! Call [`run_cli_command`] early in `main()`; it handles the informational
//! flags and hands back the options for a TUI run.
//!
//! ```ignore
//! use tcreactions::cli::{parse_args, run_cli_command};
//!
//! let options = run_cli_command(parse_args(std::env::args()));
//! // continue to the TUI with `options`
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, RunOptions};
pub use version::{handle_help_command, handle_version_command, USAGE, VERSION};

use crate::config::AppConfig;

/// Run an informational command or return the options for a TUI run.
///
/// `Version` and `Help` never return: they print and exit.
pub fn run_cli_command(command: CliCommand) -> RunOptions {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => handle_help_command(),
        CliCommand::RunTui(options) => options,
    }
}

impl RunOptions {
    /// Layer these options over `config`.
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if self.no_feed {
            config.feed_enabled = false;
        }
        if let Some(path) = &self.log_file {
            config.log_file = Some(path.clone());
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_run_tui_returns_options() {
        let options = RunOptions {
            no_feed: true,
            log_file: None,
        };
        assert_eq!(run_cli_command(CliCommand::RunTui(options.clone())), options);
    }

    #[test]
    fn test_options_override_config() {
        let options = RunOptions {
            no_feed: true,
            log_file: Some(PathBuf::from("/tmp/a.log")),
        };
        let config = options.apply(AppConfig::default());
        assert!(!config.feed_enabled);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/a.log")));
    }

    #[test]
    fn test_default_options_keep_config() {
        let config = RunOptions::default().apply(AppConfig::default());
        assert_eq!(config, AppConfig::default());
    }
}
