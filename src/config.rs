//! Reporter configuration.
//!
//! Settings the handler is installed with: log file base name, whether to
//! capture backtraces, whether to bypass the runtime's internal handler.
//! Can be built directly or parsed from INI-style directives.
//!
//! Reference: php-src/main/php_ini.c

use std::path::PathBuf;

/// Default base name for the error log.
pub const DEFAULT_LOG_FILE: &str = "php_errors.log";

/// Configuration for one handler installation.
///
/// Immutable for the duration of a `handle` call.
#[derive(Debug, Clone)]
pub struct ReporterConfig {
    /// Log a backtrace of the calling functions with each record.
    ///
    /// Backtraces can generate a lot of output and make log files very
    /// large and difficult to read.
    pub capture_backtrace: bool,
    /// Bypass the runtime's internal error handler after logging.
    pub suppress_default_handler: bool,
    /// Base name of the log file; the date stamp is prepended on write.
    pub log_file: String,
    /// Directory the log file is created in. `None` means the process
    /// working directory.
    pub log_dir: Option<PathBuf>,
}

impl ReporterConfig {
    pub fn new() -> Self {
        Self {
            capture_backtrace: false,
            suppress_default_handler: true,
            log_file: DEFAULT_LOG_FILE.to_string(),
            log_dir: None,
        }
    }

    /// Enable or disable backtrace capture.
    pub fn with_backtrace(mut self, capture: bool) -> Self {
        self.capture_backtrace = capture;
        self
    }

    /// Choose whether the runtime's internal handler runs after this one.
    pub fn with_suppress_default(mut self, suppress: bool) -> Self {
        self.suppress_default_handler = suppress;
        self
    }

    /// Set the log file base name.
    pub fn with_log_file(mut self, name: impl Into<String>) -> Self {
        self.log_file = name.into();
        self
    }

    /// Set the directory log files are written to.
    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    /// The base name actually used: trimmed, falling back to
    /// [`DEFAULT_LOG_FILE`] when empty.
    pub fn effective_log_file(&self) -> &str {
        let trimmed = self.log_file.trim();
        if trimmed.is_empty() {
            DEFAULT_LOG_FILE
        } else {
            trimmed
        }
    }

    /// Build a config from INI-style directives.
    ///
    /// Recognized directives: `error_log` (base name), `log_backtrace`,
    /// `bypass_internal`. Unknown directives are ignored. Comment, section,
    /// and quoting rules follow php.ini.
    pub fn from_ini_str(content: &str) -> Self {
        let mut config = Self::new();

        for line in content.lines() {
            let line = line.trim();

            // Skip comments and empty lines
            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }

            // Skip section headers [section]
            if line.starts_with('[') && line.ends_with(']') {
                continue;
            }

            if let Some(eq_pos) = line.find('=') {
                let key = line[..eq_pos].trim();
                let mut value = line[eq_pos + 1..].trim();

                // Strip inline comments
                if let Some(comment_pos) = value.find(';') {
                    if !value.starts_with('"') && !value.starts_with('\'') {
                        value = value[..comment_pos].trim();
                    }
                }

                // Strip quotes
                if (value.starts_with('"') && value.ends_with('"') && value.len() >= 2)
                    || (value.starts_with('\'') && value.ends_with('\'') && value.len() >= 2)
                {
                    value = &value[1..value.len() - 1];
                }

                match key {
                    "error_log" => {
                        if !value.trim().is_empty() {
                            config.log_file = value.trim().to_string();
                        }
                    }
                    "log_backtrace" => config.capture_backtrace = ini_bool(value),
                    "bypass_internal" => config.suppress_default_handler = ini_bool(value),
                    _ => {}
                }
            }
        }

        config
    }
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Interpret an INI value as a boolean ("On", "1", "yes", "true").
fn ini_bool(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "1" | "on" | "yes" | "true")
}
