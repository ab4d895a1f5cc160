use std::io::stderr;
use std::io::Write;
use std::ops::Deref;

use indicatif::MultiProgress;
use indicatif::ProgressBar;
use indicatif::ProgressStyle;
use log::Level;
use log::LevelFilter;
use log::Log;
use log::Metadata;
use log::Record;
use log::SetLoggerError;
use parking_lot::const_mutex;
use parking_lot::Mutex;

/// Writes messages to stderr, or above the progress bar while one is shown.
pub struct Logger {
    progress: Mutex<Option<MultiProgress>>,
}

static LOGGER: Logger = Logger {
    progress: const_mutex(None),
};

impl Logger {
    pub fn init(max_level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_logger(&LOGGER)?;
        log::set_max_level(max_level);
        Ok(())
    }

    /// Shows a progress bar until the returned guard is dropped.
    pub fn progress(len: u64, message: &'static str) -> Progress {
        let bar = ProgressBar::new(len).with_message(message);
        if let Ok(style) = ProgressStyle::with_template("{msg} {wide_bar} {pos}/{len}") {
            bar.set_style(style);
        }
        let multi = MultiProgress::new();
        let bar = multi.add(bar);
        *LOGGER.progress.lock() = Some(multi);
        Progress { bar }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Info || metadata.target().starts_with("unicode_range_finder")
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = match record.level() {
            Level::Warn => format!("WARNING: {}", record.args()),
            Level::Error => format!("ERROR: {}", record.args()),
            _ => record.args().to_string(),
        };
        match self.progress.lock().as_ref() {
            Some(multi) => {
                let _ = multi.println(message);
            }
            None => {
                let _ = writeln!(stderr(), "{message}");
            }
        }
    }

    fn flush(&self) {
        let _ = stderr().flush();
    }
}

pub struct Progress {
    bar: ProgressBar,
}

impl Deref for Progress {
    type Target = ProgressBar;

    fn deref(&self) -> &Self::Target {
        &self.bar
    }
}

impl Drop for Progress {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
        if let Some(multi) = LOGGER.progress.lock().take() {
            let _ = multi.clear();
        }
    }
}
