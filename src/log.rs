use std::fmt::Arguments;
use std::fs::{self, OpenOptions};
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use once_cell::sync::Lazy;
use std::sync::Mutex;

const DEFAULT_MAX_BYTES: u64 = 5 * 1024 * 1024; // 5 MiB
const DEFAULT_KEEP_BACKUPS: u32 = 5;

#[derive(PartialEq, PartialOrd, Clone, Debug)]
pub enum LogLevel {
    Error = 1,
    Warn  = 2,
    Info  = 3,
    Debug = 4,
}

impl LogLevel {
    /// Get ANSI color code for terminal output
    fn color(&self) -> &'static str {
        match self {
            LogLevel::Error => "\x1b[31m", // Red
            LogLevel::Warn  => "\x1b[33m", // Yellow
            LogLevel::Info  => "\x1b[36m", // Cyan
            LogLevel::Debug => "\x1b[90m", // Gray
        }
    }
}

const RESET_COLOR: &str = "\x1b[0m";

pub struct Config {
    pub level: LogLevel,
    pub use_colors: bool,
    pub console: bool,
}

pub static GLOBAL_CONFIG: Lazy<Mutex<Config>> = Lazy::new(|| {
    Mutex::new(Config {
        level: LogLevel::Info,
        use_colors: io::stdout().is_terminal(),
        console: true,
    })
});

/// Set verbose/debug mode
pub fn set_verbose(enabled: bool) {
    let mut config = GLOBAL_CONFIG.lock().unwrap();
    config.level = if enabled { LogLevel::Debug } else { LogLevel::Info };
}

/// Set the minimum log level
pub fn set_log_level(level: LogLevel) {
    let mut config = GLOBAL_CONFIG.lock().unwrap();
    config.level = level;
}

/// Enable or disable console echo (file logging is unaffected)
pub fn set_console(enabled: bool) {
    let mut config = GLOBAL_CONFIG.lock().unwrap();
    config.console = enabled;
}

/// Core logging function
pub fn log_message(level: LogLevel, prefix: &str, args: Arguments) {
    let config = GLOBAL_CONFIG.lock().unwrap();

    // Skip message if level is lower than configured
    if level > config.level {
        return;
    }

    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    let level_str = match level {
        LogLevel::Error => "ERR",
        LogLevel::Warn  => "WRN",
        LogLevel::Info  => "INF",
        LogLevel::Debug => "DBG",
    };

    // File format (with short level indicator)
    let file_line = format!("[{}][{}][{}] {}", timestamp, level_str, prefix, args);

    // Console format (with colored bullet if enabled)
    let console_line = if config.use_colors {
        format!("{}●{} [{}][{}] {}",
            level.color(),
            RESET_COLOR,
            timestamp,
            prefix,
            args)
    } else {
        file_line.clone()
    };

    // Write to log file
    if let Err(e) = write_line_to_log(&file_line) {
        eprintln!("Failed to write log: {}", e);
    }

    // Print to console if debug mode or error
    if config.console && (config.level == LogLevel::Debug || level == LogLevel::Error) {
        match level {
            LogLevel::Error => eprintln!("{}", console_line),
            _ => println!("{}", console_line),
        }
    }
}

/// Flexible macro to allow formatted logging
#[macro_export]
macro_rules! tlog {
    ($level:expr, $prefix:expr, $($arg:tt)*) => {
        $crate::log::log_message($level, $prefix, format_args!($($arg)*))
    };
}

/// Convenience macros
#[macro_export]
macro_rules! tinfo {
    ($prefix:expr, $($arg:tt)*) => { $crate::tlog!($crate::log::LogLevel::Info, $prefix, $($arg)*) };
}

#[macro_export]
macro_rules! twarn {
    ($prefix:expr, $($arg:tt)*) => { $crate::tlog!($crate::log::LogLevel::Warn, $prefix, $($arg)*) };
}

#[macro_export]
macro_rules! terr {
    ($prefix:expr, $($arg:tt)*) => { $crate::tlog!($crate::log::LogLevel::Error, $prefix, $($arg)*) };
}

#[macro_export]
macro_rules! tdebug {
    ($prefix:expr, $($arg:tt)*) => { $crate::tlog!($crate::log::LogLevel::Debug, $prefix, $($arg)*) };
}

/// Get log file path
pub fn log_path() -> PathBuf {
    let mut path = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("/tmp"));
    path.push("torpor");
    if !path.exists() {
        let _ = fs::create_dir_all(&path);
    }
    path.push("torpor.log");
    path
}

pub struct LogPolicy {
    pub max_bytes: u64,
    pub keep_backups: u32,
}

impl Default for LogPolicy {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
            keep_backups: DEFAULT_KEEP_BACKUPS,
        }
    }
}

/// Rotate the daemon log if needed and append a run header so separate
/// runs can be told apart in the file.
pub fn init_daemon_log() {
    let path = log_path();
    let needs_blank = prepare_log_file(&path, LogPolicy::default()).unwrap_or(false);

    if needs_blank {
        let _ = write_raw_blank_line(&path);
    }
    let _ = write_raw_line(&path, &run_header());
}

/// Ensures the log file exists and rotates it if needed.
/// Returns whether to insert a raw blank line before the next run header.
pub fn prepare_log_file(path: &Path, policy: LogPolicy) -> io::Result<bool> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let meta = match fs::metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };

    if meta.len() == 0 {
        return Ok(false);
    }

    if meta.len() >= policy.max_bytes {
        rotate(path, policy.keep_backups)?;
        return Ok(false);
    }

    Ok(true)
}

fn run_header() -> String {
    let pid = std::process::id();
    format!("==================== torpor daemon run start (pid={pid}) ====================")
}

fn write_raw_blank_line(path: &Path) -> io::Result<()> {
    let mut f = OpenOptions::new().create(true).append(true).open(path)?;
    f.write_all(b"\n")?;
    f.flush()?;
    Ok(())
}

fn write_raw_line(path: &Path, line: &str) -> io::Result<()> {
    let mut f = OpenOptions::new().create(true).append(true).open(path)?;
    f.write_all(line.as_bytes())?;
    f.write_all(b"\n")?;
    f.flush()?;
    Ok(())
}

fn rotate(path: &Path, keep_backups: u32) -> io::Result<()> {
    if keep_backups == 0 {
        let _ = fs::remove_file(path);
        return Ok(());
    }

    let base = path.to_path_buf();

    for i in (1..keep_backups).rev() {
        let from = rotated_name(&base, i);
        let to = rotated_name(&base, i + 1);
        if from.exists() {
            let _ = fs::rename(from, to);
        }
    }

    let first = rotated_name(&base, 1);
    let _ = fs::rename(path, first);
    Ok(())
}

fn rotated_name(base: &PathBuf, n: u32) -> PathBuf {
    PathBuf::from(format!("{}.{}", base.display(), n))
}

/// Write a line to the log file, rotating first when the file has
/// outgrown the policy size.
fn write_line_to_log(line: &str) -> io::Result<()> {
    let path = log_path();

    if let Ok(meta) = fs::metadata(&path) {
        if meta.len() >= DEFAULT_MAX_BYTES {
            let _ = rotate(&path, DEFAULT_KEEP_BACKUPS);
        }
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)?;

    writeln!(file, "{}", line)?;
    Ok(())
}
