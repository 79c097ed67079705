//! The error reporter — formats and persists one record per reported event.
//!
//! This is the handler the runtime registers as its error callback. For
//! each event that passes the error_reporting filter it builds a
//! severity-labelled text record, appends it to a date-stamped log file
//! under an exclusive lock, and returns a disposition telling the caller
//! whether to terminate, suppress the built-in handler, or delegate to it.
//!
//! Reference: php-src/main/main.c (php_error_cb)

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::config::ReporterConfig;
use crate::context::RuntimeContext;
use crate::event::{ErrorEvent, StackFrame};
use crate::level::{classify, ErrorLevel};
use crate::value::{export_context, ArrayKey, Value};

/// Outcome of handling one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Below the reporting threshold — nothing written, defer to default
    /// handling.
    PassThrough,
    /// Logged; the runtime's built-in handler must not run.
    Suppress,
    /// Logged; the runtime's built-in handler should still run.
    Delegate,
    /// Logged; the process must end immediately.
    Terminate,
}

impl Disposition {
    /// The boolean return contract of the callback: true means default
    /// handling is suppressed. `Terminate` never returns to the caller in
    /// practice; it maps to true for completeness.
    pub fn suppresses_default(self) -> bool {
        matches!(self, Disposition::Suppress | Disposition::Terminate)
    }
}

/// Formats error records and appends them to the daily log file.
#[derive(Debug, Clone, Default)]
pub struct ErrorReporter {
    context: RuntimeContext,
}

impl ErrorReporter {
    pub fn new(context: RuntimeContext) -> Self {
        Self { context }
    }

    /// The injected runtime context.
    pub fn context(&self) -> &RuntimeContext {
        &self.context
    }

    /// Handle one error event.
    ///
    /// Events outside the error_reporting mask are a silent no-op. For
    /// everything else exactly one record is assembled and appended; the
    /// write is best-effort and a failed write never changes the returned
    /// disposition. This function never fails: an error handler that can
    /// itself throw risks infinite recursion.
    pub fn handle(&self, event: &ErrorEvent, config: &ReporterConfig) -> Disposition {
        // Not included in the error_reporting bitmask: defer to the
        // runtime's own handling without writing anything.
        if event.code & self.context.error_reporting == 0 {
            return Disposition::PassThrough;
        }

        let now = self.context.now();
        let record = self.format_record(event, config, now);

        // Best-effort append. Failures (permissions, disk full, bad path)
        // are swallowed; silent data loss is the accepted trade-off.
        let _ = append_record(&log_path(config, now), &record);

        if ErrorLevel::terminates(event.code) {
            Disposition::Terminate
        } else if config.suppress_default_handler {
            Disposition::Suppress
        } else {
            Disposition::Delegate
        }
    }

    /// Assemble the full text record for one event.
    ///
    /// The timestamp runs directly into the label line, as the original
    /// handler built its string:
    /// `2026-08-27 10:00:00** WARNING ** [2] message`.
    pub fn format_record(
        &self,
        event: &ErrorEvent,
        config: &ReporterConfig,
        now: NaiveDateTime,
    ) -> String {
        let severity = classify(event.code);

        let mut record = format!(
            "{}** {} ** [{}] {}\r\n   {} on line {} in file {}",
            now.format("%Y-%m-%d %H:%M:%S"),
            severity.label,
            event.code,
            event.message,
            severity.phrase,
            event.line,
            event.file,
        );

        record.push_str(&format!(
            ", PHP {} ({})\r\nThe variable context was: {}\r\n",
            self.context.version,
            self.context.os,
            export_context(&event.context),
        ));

        if config.capture_backtrace {
            if let Some(frames) = &event.backtrace {
                record.push_str(&format!("   BACKTRACE: {}\r\n", export_backtrace(frames)));
            }
        }

        record
    }
}

/// Daily log file path: `<dir>/<YYYYMMDD>-<base>`, where `dir` defaults to
/// the process working directory.
pub fn log_path(config: &ReporterConfig, now: NaiveDateTime) -> PathBuf {
    let name = format!("{}-{}", now.format("%Y%m%d"), config.effective_log_file());
    match &config.log_dir {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}

/// Append one record under an exclusive advisory lock.
///
/// The lock covers only this single write and is released on every exit
/// path when the handle drops.
fn append_record(path: &Path, record: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.lock()?;
    let result = file.write_all(record.as_bytes());
    let _ = file.unlock();
    result
}

/// Render a backtrace in var_export() style: an integer-keyed array of
/// frames, each with function, file, line, and args entries.
fn export_backtrace(frames: &[StackFrame]) -> String {
    let entries: Vec<(ArrayKey, Value)> = frames
        .iter()
        .enumerate()
        .map(|(i, frame)| {
            let frame_entries = vec![
                (ArrayKey::Str("function".into()), Value::Str(frame.function.clone())),
                (ArrayKey::Str("file".into()), Value::Str(frame.file.clone())),
                (ArrayKey::Str("line".into()), Value::Int(frame.line as i64)),
                (
                    ArrayKey::Str("args".into()),
                    Value::Array(
                        frame
                            .args
                            .iter()
                            .enumerate()
                            .map(|(j, arg)| (ArrayKey::Int(j as i64), arg.clone()))
                            .collect(),
                    ),
                ),
            ];
            (ArrayKey::Int(i as i64), Value::Array(frame_entries))
        })
        .collect();
    Value::Array(entries).export()
}
