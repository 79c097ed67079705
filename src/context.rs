//! Runtime environment context.
//!
//! Everything the handler would otherwise read from global state — the
//! active error_reporting mask, the configured timezone, the runtime
//! version and platform identifiers — is carried explicitly so the
//! reporter can be tested in isolation.

use chrono::{Local, NaiveDateTime, Utc};

use crate::level::ErrorLevel;

/// Ambient runtime state, injected per call.
#[derive(Debug, Clone)]
pub struct RuntimeContext {
    /// Active error_reporting bitmask (which levels get reported).
    pub error_reporting: u32,
    /// Configured timezone identifier, if any. When unset, timestamps
    /// silently fall back to UTC — no diagnostic is ever emitted for the
    /// fallback, so the handler cannot recurse into itself.
    pub timezone: Option<String>,
    /// Runtime version identifier written into each record.
    pub version: String,
    /// Platform identifier written into each record.
    pub os: String,
}

impl RuntimeContext {
    /// Context with the defaults: report everything, no timezone,
    /// this crate's version and the host OS as identifiers.
    pub fn new() -> Self {
        Self {
            error_reporting: ErrorLevel::ALL,
            timezone: None,
            version: env!("CARGO_PKG_VERSION").to_string(),
            os: std::env::consts::OS.to_string(),
        }
    }

    /// Set the error_reporting mask.
    pub fn with_error_reporting(mut self, mask: u32) -> Self {
        self.error_reporting = mask;
        self
    }

    /// Set the configured timezone.
    pub fn with_timezone(mut self, tz: impl Into<String>) -> Self {
        self.timezone = Some(tz.into());
        self
    }

    /// Override the version/platform identifiers.
    pub fn with_identifiers(mut self, version: impl Into<String>, os: impl Into<String>) -> Self {
        self.version = version.into();
        self.os = os.into();
        self
    }

    /// Current wall-clock time: local time when a timezone is configured,
    /// UTC otherwise.
    pub fn now(&self) -> NaiveDateTime {
        match self.timezone {
            Some(_) => Local::now().naive_local(),
            None => Utc::now().naive_utc(),
        }
    }
}

impl Default for RuntimeContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_defaults() {
        let ctx = RuntimeContext::new();
        assert_eq!(ctx.error_reporting, ErrorLevel::ALL);
        assert!(ctx.timezone.is_none());
        assert!(!ctx.version.is_empty());
        assert!(!ctx.os.is_empty());
    }

    #[test]
    fn test_context_builders() {
        let ctx = RuntimeContext::new()
            .with_error_reporting(ErrorLevel::Error.mask() | ErrorLevel::Warning.mask())
            .with_timezone("UTC")
            .with_identifiers("8.6.0", "Linux");
        assert_eq!(ctx.error_reporting, 3);
        assert_eq!(ctx.timezone.as_deref(), Some("UTC"));
        assert_eq!(ctx.version, "8.6.0");
        assert_eq!(ctx.os, "Linux");
    }

    #[test]
    fn test_now_is_monotonic_enough() {
        let ctx = RuntimeContext::new();
        let a = ctx.now();
        let b = ctx.now();
        assert!(b >= a);
    }
}
