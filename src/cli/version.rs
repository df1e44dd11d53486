//! Version and help output.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Usage text printed by `--help`.
pub const USAGE: &str = "\
Usage: tcreactions [OPTIONS]

Options:
      --no-feed          Don't stream extra reactions into open previews
      --log-file <PATH>  Write logs to PATH instead of the temp dir
  -V, --version          Print version
  -h, --help             Print help

Keys:
  Up/Down      move between messages
  Enter/Space  long-press the highlighted message
  Left/Right   move across reactions    1-9  pick a reaction directly
  Tab          switch between reactions and the menu
  Esc          close the preview        q    quit";

/// Handle the --version command.
pub fn handle_version_command() -> ! {
    println!("tcreactions {}", VERSION);
    std::process::exit(0)
}

/// Handle the --help command.
pub fn handle_help_command() -> ! {
    println!("tcreactions {}\n\n{}", VERSION, USAGE);
    std::process::exit(0)
}
