use std::fmt;
use std::sync::OnceLock;

use derive_more::Display;
use serde::Deserialize;
use strum::{Display as StrumDisplay, EnumString};

/// Severity, ordered from most to least verbose
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, StrumDisplay, EnumString, Deserialize)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// Where a line comes from: the layer plus the unit inside it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum LogComponent {
    #[display(fmt = "domain/{}", _0)]
    Domain(&'static str),
    #[display(fmt = "app/{}", _0)]
    Application(&'static str),
    #[display(fmt = "infra/{}", _0)]
    Infrastructure(&'static str),
    #[display(fmt = "ui/{}", _0)]
    Presentation(&'static str),
}

/// One log line with optional `key=value` context
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: u64,
    pub level: LogLevel,
    pub component: LogComponent,
    pub message: String,
    pub fields: Vec<(&'static str, String)>,
}

impl LogEntry {
    pub fn new(level: LogLevel, component: LogComponent, message: impl Into<String>) -> Self {
        Self {
            timestamp: get_time_provider().current_timestamp(),
            level,
            component,
            message: message.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, key: &'static str, value: impl fmt::Display) -> Self {
        self.fields.push((key, value.to_string()));
        self
    }

    /// `[time] LEVEL component: message key=value ...`
    pub fn render(&self) -> String {
        let mut line = format!(
            "[{}] {:<5} {}: {}",
            get_time_provider().format_timestamp(self.timestamp),
            self.level,
            self.component,
            self.message
        );
        for (key, value) in &self.fields {
            line.push_str(&format!(" {key}={value}"));
        }
        line
    }
}

/// Wall clock used to stamp entries
pub trait TimeProvider: Send + Sync {
    fn current_timestamp(&self) -> u64;
    fn format_timestamp(&self, timestamp: u64) -> String;
}

/// Log sink. `enabled` is checked before the message is formatted.
pub trait Logger: Send + Sync {
    fn enabled(&self, _level: LogLevel) -> bool {
        true
    }

    fn log(&self, entry: LogEntry);
}

static LOGGER: OnceLock<Box<dyn Logger>> = OnceLock::new();
static TIME_PROVIDER: OnceLock<Box<dyn TimeProvider>> = OnceLock::new();

/// Install the global logger. Only the first call has an effect.
pub fn init_logger(logger: Box<dyn Logger>) {
    let _ = LOGGER.set(logger);
}

/// Install the global clock. Only the first call has an effect.
pub fn init_time_provider(time_provider: Box<dyn TimeProvider>) {
    let _ = TIME_PROVIDER.set(time_provider);
}

pub fn get_logger() -> &'static dyn Logger {
    match LOGGER.get() {
        Some(logger) => logger.as_ref(),
        None => &Silent,
    }
}

pub fn get_time_provider() -> &'static dyn TimeProvider {
    match TIME_PROVIDER.get() {
        Some(provider) => provider.as_ref(),
        None => &Ticks,
    }
}

/// Entry point of the `log_*!` macros
pub fn emit(level: LogLevel, component: LogComponent, args: fmt::Arguments<'_>) {
    let logger = get_logger();
    if logger.enabled(level) {
        logger.log(LogEntry::new(level, component, args.to_string()));
    }
}

struct Silent;

impl Logger for Silent {
    fn enabled(&self, _level: LogLevel) -> bool {
        false
    }

    fn log(&self, _entry: LogEntry) {}
}

/// Monotonic counter standing in for a clock until one is installed
struct Ticks;

impl TimeProvider for Ticks {
    fn current_timestamp(&self) -> u64 {
        use std::sync::atomic::{AtomicU64, Ordering};
        static TICK: AtomicU64 = AtomicU64::new(0);
        TICK.fetch_add(1, Ordering::Relaxed)
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        format!("#{timestamp}")
    }
}

/// Compiled out of release builds
#[macro_export]
macro_rules! log_trace {
    ($component:expr, $($arg:tt)*) => {
        if cfg!(debug_assertions) {
            $crate::domain::logging::emit($crate::domain::logging::LogLevel::Trace, $component, format_args!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! log_debug {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::emit($crate::domain::logging::LogLevel::Debug, $component, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::emit($crate::domain::logging::LogLevel::Info, $component, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::emit($crate::domain::logging::LogLevel::Warn, $component, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::emit($crate::domain::logging::LogLevel::Error, $component, format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn level_parsing_and_order() {
        assert_eq!(LogLevel::from_str("debug").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel::Warn);
        assert!(LogLevel::from_str("loud").is_err());
        assert!(LogLevel::Trace < LogLevel::Info && LogLevel::Info < LogLevel::Error);
        assert_eq!(LogLevel::Info.to_string(), "INFO");
    }

    #[test]
    fn render_includes_fields() {
        let entry = LogEntry::new(LogLevel::Warn, LogComponent::Infrastructure("CoinGecko"), "slow response")
            .with_field("ms", 900)
            .with_field("coin", "bitcoin");
        let line = entry.render();
        assert!(line.ends_with("WARN  infra/CoinGecko: slow response ms=900 coin=bitcoin"), "{line}");
    }

    #[test]
    fn unset_logger_is_silent() {
        assert!(!get_logger().enabled(LogLevel::Error));
        log_error!(LogComponent::Domain("test"), "dropped {}", 1);
    }
}
