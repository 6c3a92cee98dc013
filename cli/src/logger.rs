//! Application-level logging configuration.

use log::{LevelFilter, SetLoggerError};

/// The timestamp format prefixed to each log line.
const TIMESTAMP_FORMAT: &str = "%a %Y-%m-%d %H:%M:%S%.3f";

/// The application-level logger. Writes to standard error so that formatted
/// output on standard output stays clean.
struct FormatLogger;

impl log::Log for FormatLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "[{}] {} {}",
                chrono::Local::now().format(TIMESTAMP_FORMAT),
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

/// The global logging instance.
static LOGGER: FormatLogger = FormatLogger;

/// Returns the maximum log level for the given debug setting.
const fn max_level(debug: bool) -> LevelFilter {
    if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Initializes logging.
///
/// # Errors
///
/// This will return an error if the logger has already been initialized.
pub fn init_logger(debug: bool) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| log::set_max_level(max_level(debug)))
}
