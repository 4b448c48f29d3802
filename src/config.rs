use tracing::Level;

/// Runtime options handed to the [`Loader`](crate::rom::loader::Loader) and
/// the log subscriber. Built once from the command line.
#[derive(PartialEq, Debug, Clone, Copy, Default)]
pub struct Config {
    /// Verbose mode: DEBUG level output, source locations, and a log line per cursor read.
    pub debug: bool,
}

impl Config {
    pub fn new(debug: bool) -> Config {
        Config { debug }
    }

    /// The most verbose level the subscriber should let through.
    pub fn max_level(&self) -> Level {
        if self.debug {
            Level::DEBUG
        } else {
            Level::INFO
        }
    }

    /// Whether log lines carry the file and line they came from.
    pub fn show_source_location(&self) -> bool {
        self.debug
    }
}
