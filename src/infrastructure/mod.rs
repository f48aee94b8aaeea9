pub mod http;
pub mod rendering;

/// Browser-backed logger and clock
pub mod services {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    use crate::domain::logging::{LogEntry, LogLevel, Logger, TimeProvider};

    /// Devtools console sink; entries below `min_level` are skipped
    #[derive(Debug, Clone, Copy)]
    pub struct ConsoleLogger {
        min_level: LogLevel,
    }

    impl ConsoleLogger {
        pub fn new(min_level: LogLevel) -> Self {
            Self { min_level }
        }
    }

    impl Default for ConsoleLogger {
        fn default() -> Self {
            Self::new(if cfg!(debug_assertions) { LogLevel::Debug } else { LogLevel::Info })
        }
    }

    impl Logger for ConsoleLogger {
        fn enabled(&self, level: LogLevel) -> bool {
            level >= self.min_level
        }

        fn log(&self, entry: LogEntry) {
            let line = JsValue::from_str(&entry.render());
            let write: fn(&JsValue) = match entry.level {
                LogLevel::Trace | LogLevel::Debug => console::debug_1,
                LogLevel::Info => console::info_1,
                LogLevel::Warn => console::warn_1,
                LogLevel::Error => console::error_1,
            };
            write(&line);
        }
    }

    /// `Date.now()` clock; entries show local `HH:MM:SS.mmm`
    #[derive(Debug, Default, Clone, Copy)]
    pub struct BrowserTimeProvider;

    impl TimeProvider for BrowserTimeProvider {
        fn current_timestamp(&self) -> u64 {
            js_sys::Date::now() as u64
        }

        fn format_timestamp(&self, timestamp: u64) -> String {
            let at = js_sys::Date::new(&JsValue::from_f64(timestamp as f64));
            format!(
                "{:02}:{:02}:{:02}.{:03}",
                at.get_hours(),
                at.get_minutes(),
                at.get_seconds(),
                at.get_milliseconds()
            )
        }
    }
}
