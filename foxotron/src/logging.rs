//! Logging for model loading
//!
//! Messages go to a global [`Logger`] which fans them out to any attached
//! [`LogStream`]s. Nothing is printed until a stream is attached.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use crate::error::{Error, Result};

/// Log levels, ordered by severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Verbose debug information
    Debug,
    /// Informational messages
    Info,
    /// Warning messages
    Warn,
    /// Error messages
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            LogLevel::Debug => "Debug",
            LogLevel::Info => "Info",
            LogLevel::Warn => "Warn",
            LogLevel::Error => "Error",
        };
        f.write_str(tag)
    }
}

/// Trait for custom log stream implementations
pub trait LogStream: Send {
    /// Write a log message
    fn write(&mut self, level: LogLevel, message: &str);
}

/// A log stream that writes to stdout
pub struct StdoutLogStream;

impl LogStream for StdoutLogStream {
    fn write(&mut self, level: LogLevel, message: &str) {
        println!("[foxotron] {}: {}", level, message);
    }
}

/// A log stream that writes to stderr
pub struct StderrLogStream;

impl LogStream for StderrLogStream {
    fn write(&mut self, level: LogLevel, message: &str) {
        eprintln!("[foxotron] {}: {}", level, message);
    }
}

/// A log stream that appends to a file
pub struct FileLogStream {
    file: std::fs::File,
}

impl FileLogStream {
    /// Create a new file log stream
    pub fn new<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        use std::io::Write;
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| Error::file_error(e.to_string()))?;

        writeln!(file, "=== Foxotron Log Started ===")
            .map_err(|e| Error::file_error(e.to_string()))?;

        Ok(Self { file })
    }
}

impl LogStream for FileLogStream {
    fn write(&mut self, level: LogLevel, message: &str) {
        use std::io::Write;
        let _ = writeln!(self.file, "{}: {}", level, message);
        let _ = self.file.flush();
    }
}

/// A log stream that collects messages in memory
#[derive(Debug, Default)]
pub struct MemoryLogStream {
    messages: Vec<(LogLevel, String)>,
}

impl MemoryLogStream {
    /// Create a new memory log stream
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all collected messages
    pub fn messages(&self) -> &[(LogLevel, String)] {
        &self.messages
    }

    /// Check whether any collected message contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.messages.iter().any(|(_, m)| m.contains(needle))
    }

    /// Clear all collected messages
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

impl LogStream for MemoryLogStream {
    fn write(&mut self, level: LogLevel, message: &str) {
        self.messages.push((level, message.to_string()));
    }
}

/// Dispatches messages at or above a minimum level to attached streams
pub struct Logger {
    streams: Vec<Arc<Mutex<dyn LogStream>>>,
    min_level: LogLevel,
}

impl Logger {
    /// Create a new logger with no streams, passing `Info` and above
    pub fn new() -> Self {
        Self {
            streams: Vec::new(),
            min_level: LogLevel::Info,
        }
    }

    /// Attach a log stream
    pub fn attach_stream(&mut self, stream: Arc<Mutex<dyn LogStream>>) {
        self.streams.push(stream);
    }

    /// Detach a previously attached log stream
    pub fn detach_stream(&mut self, stream: &Arc<Mutex<dyn LogStream>>) {
        self.streams.retain(|s| !Arc::ptr_eq(s, stream));
    }

    /// Detach all log streams
    pub fn detach_all_streams(&mut self) {
        self.streams.clear();
    }

    /// Get the number of attached streams
    pub fn stream_count(&self) -> usize {
        self.streams.len()
    }

    /// Set the lowest level that gets through
    pub fn set_min_level(&mut self, level: LogLevel) {
        self.min_level = level;
    }

    /// Check if a level would be written
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    /// Write a message to every attached stream
    pub fn log(&self, level: LogLevel, message: &str) {
        if !self.enabled(level) {
            return;
        }
        for stream in &self.streams {
            if let Ok(mut stream) = stream.lock() {
                stream.write(level, message);
            }
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Global logger instance
static GLOBAL_LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

/// Get the global logger instance
pub fn global_logger() -> &'static Mutex<Logger> {
    GLOBAL_LOGGER.get_or_init(|| Mutex::new(Logger::new()))
}

fn lock_global() -> MutexGuard<'static, Logger> {
    // A panic while logging must not silence every later message.
    global_logger()
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Convenience function to attach a stdout log stream
pub fn attach_stdout_stream() {
    lock_global().attach_stream(Arc::new(Mutex::new(StdoutLogStream)));
}

/// Convenience function to attach a stderr log stream
pub fn attach_stderr_stream() {
    lock_global().attach_stream(Arc::new(Mutex::new(StderrLogStream)));
}

/// Convenience function to attach a file log stream
pub fn attach_file_stream<P: AsRef<std::path::Path>>(path: P) -> Result<()> {
    let stream = Arc::new(Mutex::new(FileLogStream::new(path)?));
    lock_global().attach_stream(stream);
    Ok(())
}

/// Convenience function to attach any stream to the global logger
pub fn attach_stream(stream: Arc<Mutex<dyn LogStream>>) {
    lock_global().attach_stream(stream);
}

/// Convenience function to detach one stream from the global logger
pub fn detach_stream(stream: &Arc<Mutex<dyn LogStream>>) {
    lock_global().detach_stream(stream);
}

/// Convenience function to detach all log streams
pub fn detach_all_streams() {
    lock_global().detach_all_streams();
}

/// Convenience function to change the global minimum level
pub fn set_min_level(level: LogLevel) {
    lock_global().set_min_level(level);
}

/// Log a message through the global logger
pub fn log(level: LogLevel, message: &str) {
    lock_global().log(level, message);
}

/// Log a debug message through the global logger
pub fn debug(message: &str) {
    log(LogLevel::Debug, message);
}

/// Log an informational message through the global logger
pub fn info(message: &str) {
    log(LogLevel::Info, message);
}

/// Log a warning through the global logger
pub fn warn(message: &str) {
    log(LogLevel::Warn, message);
}

/// Log an error through the global logger
pub fn error(message: &str) {
    log(LogLevel::Error, message);
}
