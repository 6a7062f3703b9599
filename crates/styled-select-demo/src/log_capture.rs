/// Event log capture system
///
/// This module provides a custom logger that captures all log messages
/// into a thread-safe circular buffer for display in the event log pane.
use chrono::{DateTime, Utc};
use log::{Level, Log, Metadata, Record};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Maximum number of log entries to keep in memory
const MAX_LOG_ENTRIES: usize = 1000;

/// A single log entry with timestamp and metadata
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

/// Thread-safe log buffer shared between logger and UI
pub type LogBuffer = Arc<Mutex<VecDeque<LogEntry>>>;

/// Custom logger that captures logs to both env_logger and our buffer
pub struct EventLogLogger {
    logs: LogBuffer,
    env_logger: env_logger::Logger,
    pane_filter: env_logger::Logger,
}

impl EventLogLogger {
    /// Create a new event log logger with env_logger backend
    pub fn new(logs: LogBuffer) -> Self {
        // Terminal output stays at Error so the alternate screen is not disturbed
        let env_logger = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Error)
            .build();

        // Pane: this workspace's crates at Debug unless RUST_LOG says otherwise
        let pane_filter = if std::env::var("RUST_LOG").is_ok() {
            env_logger::Builder::from_default_env().build()
        } else {
            env_logger::Builder::new()
                .filter_module("styled_select", log::LevelFilter::Debug)
                .filter_module("styled_select_demo", log::LevelFilter::Debug)
                .build()
        };

        Self {
            logs,
            env_logger,
            pane_filter,
        }
    }

    /// Create a new empty log buffer
    pub fn create_buffer() -> LogBuffer {
        Arc::new(Mutex::new(VecDeque::with_capacity(MAX_LOG_ENTRIES)))
    }

    fn capture(&self, record: &Record) {
        let entry = LogEntry {
            timestamp: Utc::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: format!("{}", record.args()),
        };
        push_entry(&self.logs, entry);
    }
}

/// Append an entry, dropping the oldest one once the buffer is full
pub fn push_entry(logs: &LogBuffer, entry: LogEntry) {
    if let Ok(mut logs) = logs.lock() {
        if logs.len() >= MAX_LOG_ENTRIES {
            logs.pop_front();
        }
        logs.push_back(entry);
    }
}

impl Log for EventLogLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.pane_filter.enabled(metadata) || self.env_logger.enabled(metadata)
    }

    fn log(&self, record: &Record) {
        if self.pane_filter.enabled(record.metadata()) {
            self.capture(record);
        }

        if self.env_logger.enabled(record.metadata()) {
            self.env_logger.log(record);
        }
    }

    fn flush(&self) {
        self.env_logger.flush();
    }
}

/// Initialize the event log logger
///
/// Call once at startup before any logging occurs. Returns the buffer shared
/// with the UI.
///
/// # Filtering with RUST_LOG
///
/// - No RUST_LOG (default): logs from `styled_select` and `styled_select_demo` at Debug+
/// - `RUST_LOG=info`: Info+ from all modules
/// - `RUST_LOG=styled_select=debug`: only the widget core
///
/// Terminal output is always Error-level only.
pub fn init_logger() -> LogBuffer {
    let logs = EventLogLogger::create_buffer();
    let logger = EventLogLogger::new(logs.clone());

    if log::set_boxed_logger(Box::new(logger)).is_ok() {
        log::set_max_level(log::LevelFilter::Debug);
    }

    log::info!("Event log initialized - press ` or ~ to toggle");

    logs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(message: &str) -> LogEntry {
        LogEntry {
            timestamp: Utc::now(),
            level: Level::Info,
            target: "styled_select_demo".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_buffer_is_bounded() {
        let logs = EventLogLogger::create_buffer();
        for i in 0..(MAX_LOG_ENTRIES + 5) {
            push_entry(&logs, entry(&i.to_string()));
        }

        let logs = logs.lock().unwrap();
        assert_eq!(logs.len(), MAX_LOG_ENTRIES);
        assert_eq!(logs.front().unwrap().message, "5");
    }
}
