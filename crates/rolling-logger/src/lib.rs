//! Rolling Logger
//!
//! Installs a `tracing` subscriber that writes to stderr and to a daily
//! rotated file (`<app>.<YYYY-MM-DD>.log`) in a log directory. Old files
//! are pruned by the appender, and the most recent lines stay available
//! in memory for diagnostics screens.

use std::collections::VecDeque;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, OnceLock};

use tracing_appender::rolling::{Builder, RollingFileAppender, Rotation};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Daily log files kept in the directory
    pub max_files: usize,
    /// Lines kept for `recent_lines()`
    pub buffer_lines: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            max_files: 7,
            buffer_lines: 500,
        }
    }
}

static RECENT: OnceLock<RecentLines> = OnceLock::new();

/// Initialize the global logger with default limits
pub fn init_logger(log_dir: impl AsRef<Path>, app_name: &str) -> Result<(), String> {
    init_logger_with(log_dir, app_name, LoggerConfig::default())
}

pub fn init_logger_with(log_dir: impl AsRef<Path>, app_name: &str, config: LoggerConfig) -> Result<(), String> {
    let log_dir = log_dir.as_ref();
    if RECENT.get().is_some() {
        return Err("logger already initialized".to_string());
    }

    let appender = file_appender(log_dir, app_name, config)?;
    let recent = RecentLines::new(config.buffer_lines);

    let file_layer = fmt::layer()
        .with_writer(TeeWriter::new(appender, recent.clone()))
        .with_ansi(false)
        .with_target(true);
    let console_layer = fmt::layer().with_writer(io::stderr).with_target(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // `try_init` also bridges `log` records into the subscriber
    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .map_err(|e| format!("Failed to initialize tracing: {}", e))?;

    RECENT
        .set(recent)
        .map_err(|_| "logger already initialized".to_string())?;
    tracing::info!("Logging to {}", log_dir.display());
    Ok(())
}

/// Daily rotated `<app>.<date>.log` files, keeping at most `max_files`
pub fn file_appender(log_dir: &Path, app_name: &str, config: LoggerConfig) -> Result<RollingFileAppender, String> {
    std::fs::create_dir_all(log_dir)
        .map_err(|e| format!("Failed to create log dir {}: {}", log_dir.display(), e))?;
    Builder::new()
        .rotation(Rotation::DAILY)
        .filename_prefix(app_name)
        .filename_suffix("log")
        .max_log_files(config.max_files.max(1))
        .build(log_dir)
        .map_err(|e| format!("Failed to open log file in {}: {}", log_dir.display(), e))
}

/// Most recent lines written by the global logger, oldest first
pub fn recent_lines() -> Vec<String> {
    RECENT.get().map(RecentLines::lines).unwrap_or_default()
}

fn ensure_init() -> Result<(), String> {
    if RECENT.get().is_none() {
        return Err("logger not initialized".to_string());
    }
    Ok(())
}

pub fn info(msg: &str) -> Result<(), String> {
    ensure_init()?;
    tracing::info!("{}", msg);
    Ok(())
}

pub fn warn(msg: &str) -> Result<(), String> {
    ensure_init()?;
    tracing::warn!("{}", msg);
    Ok(())
}

pub fn error(msg: &str) -> Result<(), String> {
    ensure_init()?;
    tracing::error!("{}", msg);
    Ok(())
}

/// Bounded in-memory tail of the log output
#[derive(Debug, Clone)]
pub struct RecentLines {
    lines: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl RecentLines {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    fn push(&self, buf: &[u8]) {
        if self.capacity == 0 {
            return;
        }
        let Ok(mut lines) = self.lines.lock() else {
            return;
        };
        for line in String::from_utf8_lossy(buf).lines().filter(|l| !l.is_empty()) {
            if lines.len() == self.capacity {
                lines.pop_front();
            }
            lines.push_back(line.to_string());
        }
    }
}

/// `MakeWriter` that copies everything written to `inner` into a `RecentLines`
pub struct TeeWriter<M> {
    inner: M,
    recent: RecentLines,
}

impl<M> TeeWriter<M> {
    pub fn new(inner: M, recent: RecentLines) -> Self {
        Self { inner, recent }
    }
}

impl<'a, M: MakeWriter<'a>> MakeWriter<'a> for TeeWriter<M> {
    type Writer = Tee<'a, M::Writer>;

    fn make_writer(&'a self) -> Self::Writer {
        Tee {
            inner: self.inner.make_writer(),
            recent: &self.recent,
        }
    }
}

pub struct Tee<'a, W> {
    inner: W,
    recent: &'a RecentLines,
}

impl<W: Write> Write for Tee<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = self.inner.write(buf)?;
        self.recent.push(&buf[..written]);
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
