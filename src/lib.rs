//! PHP-style configurable error handler
//!
//! This crate implements a custom error handler useful for debugging: the
//! runtime registers it as its error callback, and for every reportable
//! event it appends a severity-labelled record to a date-stamped log file
//! and decides whether to halt, suppress the built-in handler, or fall
//! through to it.
//!
//! - Error levels and classification (E_ERROR, E_WARNING, etc.)
//! - Variable-context snapshots rendered var_export() style
//! - Reporter configuration (directly or from INI directives)
//! - The reporter itself: filter, format, locked best-effort append,
//!   disposition
//! - A handler registry with error_reporting and @-operator silencing
//!
//! The handler never fails: every internal fault, timezone fallback and
//! write error included, is absorbed locally so error handling can never
//! recurse into itself.

pub mod config;
pub mod context;
pub mod event;
pub mod handler;
pub mod level;
pub mod reporter;
pub mod value;

pub use config::{ReporterConfig, DEFAULT_LOG_FILE};
pub use context::RuntimeContext;
pub use event::{ErrorEvent, StackFrame};
pub use handler::HandlerRegistry;
pub use level::{classify, ErrorLevel, Severity};
pub use reporter::{Disposition, ErrorReporter};
pub use value::{ArrayKey, Value};
