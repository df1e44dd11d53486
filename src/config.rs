//! Host configuration.
//!
//! Built with `with_*` methods or read from the environment:
//!
//! | Variable | Effect |
//! |----------|--------|
//! | `TCREACTIONS_FEED_DELAY_MS` | Delay before the demo feed delivers (default 3000) |
//! | `TCREACTIONS_NO_FEED` | Set to disable the demo feed |
//! | `TCREACTIONS_LOG` | Log filter, read by the logging setup |

use std::path::PathBuf;
use std::time::Duration;

use crate::capsule::CapsuleConfig;
use crate::feed::DEFAULT_FEED_DELAY;
use crate::geometry::Size;
use crate::preview::PreviewMetrics;
use crate::selection::SelectionConfig;

/// Titles the demo feed delivers while a preview is open.
pub const DEFAULT_FEED_TITLES: [&str; 3] = ["😂", "😮", "🎉"];

/// Messages shown when the app starts.
pub const DEFAULT_MESSAGES: [&str; 5] = ["Hello", "What's up?", "Hey", "Howdy", "Hey y'all"];

/// How long a mouse button must stay down on a row to open a preview.
pub const DEFAULT_LONG_PRESS: Duration = Duration::from_millis(500);

/// Capsule box in terminal cells.
pub const TERMINAL_CAPSULE_SIZE: Size = Size {
    width: 34.0,
    height: 3.0,
};

const FEED_DELAY_ENV: &str = "TCREACTIONS_FEED_DELAY_MS";
const NO_FEED_ENV: &str = "TCREACTIONS_NO_FEED";

/// Selection settings scaled for a terminal: cell-sized capsule, no gap,
/// and an anchor that puts the snapshot exactly over the row.
pub fn terminal_selection_config() -> SelectionConfig {
    let lift = TERMINAL_CAPSULE_SIZE.height / 2.0;
    SelectionConfig::default()
        .with_capsule_size(TERMINAL_CAPSULE_SIZE)
        .with_metrics(PreviewMetrics::new(0.0, lift))
}

/// Configuration for the demo host.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub selection: SelectionConfig,
    pub messages: Vec<String>,
    pub feed_enabled: bool,
    pub feed_titles: Vec<String>,
    pub feed_delay: Duration,
    pub long_press: Duration,
    /// Log destination; `None` picks a file in the temp dir.
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            selection: terminal_selection_config(),
            messages: DEFAULT_MESSAGES.iter().map(|s| s.to_string()).collect(),
            feed_enabled: true,
            feed_titles: DEFAULT_FEED_TITLES.iter().map(|s| s.to_string()).collect(),
            feed_delay: DEFAULT_FEED_DELAY,
            long_press: DEFAULT_LONG_PRESS,
            log_file: None,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selection(mut self, selection: SelectionConfig) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_capsule(mut self, capsule: CapsuleConfig) -> Self {
        self.selection.capsule = capsule;
        self
    }

    pub fn with_messages<I, S>(mut self, messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.messages = messages.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_feed_enabled(mut self, enabled: bool) -> Self {
        self.feed_enabled = enabled;
        self
    }

    pub fn with_feed_titles<I, S>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.feed_titles = titles.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_feed_delay(mut self, delay: Duration) -> Self {
        self.feed_delay = delay;
        self
    }

    pub fn with_long_press(mut self, threshold: Duration) -> Self {
        self.long_press = threshold;
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Defaults overridden by environment variables.
    ///
    /// An unparsable delay is ignored with a warning.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var(FEED_DELAY_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.feed_delay = Duration::from_millis(ms),
                Err(e) => tracing::warn!(value = %raw, "Ignoring {}: {}", FEED_DELAY_ENV, e),
            }
        }

        if std::env::var_os(NO_FEED_ENV).is_some() {
            config.feed_enabled = false;
        }

        config
    }
}
