//! Handler registry — ties the reporter into the runtime's error machinery.
//!
//! Owns the active error_reporting mask, the @-operator silence stack, and
//! the installed reporter configuration, and translates dispositions into
//! the callback contract the environment expects (boolean return, process
//! exit on fatal levels).
//!
//! Reference: php-src/Zend/zend.c (set_error_handler plumbing)

use std::process;

use crate::config::ReporterConfig;
use crate::context::RuntimeContext;
use crate::event::ErrorEvent;
use crate::reporter::{Disposition, ErrorReporter};

/// The error handling subsystem surrounding the reporter.
pub struct HandlerRegistry {
    /// Ambient runtime state, including the error_reporting mask.
    context: RuntimeContext,
    /// Stack of saved error_reporting levels (for the @ operator).
    silence_stack: Vec<u32>,
    /// Installed reporter configuration (set via install()).
    installed: Option<ReporterConfig>,
}

impl HandlerRegistry {
    /// Registry with default context (E_ALL) and no handler installed.
    pub fn new() -> Self {
        Self::with_context(RuntimeContext::new())
    }

    /// Registry with an explicit runtime context.
    pub fn with_context(context: RuntimeContext) -> Self {
        Self {
            context,
            silence_stack: Vec::new(),
            installed: None,
        }
    }

    /// Get the current error_reporting level.
    pub fn error_reporting(&self) -> u32 {
        self.context.error_reporting
    }

    /// Set the error_reporting level. Returns the previous value.
    pub fn set_error_reporting(&mut self, mask: u32) -> u32 {
        std::mem::replace(&mut self.context.error_reporting, mask)
    }

    /// Install the reporter. Returns the previously installed config.
    pub fn install(&mut self, config: ReporterConfig) -> Option<ReporterConfig> {
        self.installed.replace(config)
    }

    /// Remove the installed reporter, restoring default handling.
    pub fn restore(&mut self) -> Option<ReporterConfig> {
        self.installed.take()
    }

    /// Whether a reporter is currently installed.
    pub fn is_installed(&self) -> bool {
        self.installed.is_some()
    }

    /// Begin error suppression (@ operator). Saves the mask and zeroes it.
    pub fn begin_silence(&mut self) {
        self.silence_stack.push(self.context.error_reporting);
        self.context.error_reporting = 0;
    }

    /// End error suppression (@ operator). Restores the saved mask.
    pub fn end_silence(&mut self) {
        if let Some(mask) = self.silence_stack.pop() {
            self.context.error_reporting = mask;
        }
    }

    /// Check if errors are currently suppressed (@ operator active).
    pub fn is_silenced(&self) -> bool {
        !self.silence_stack.is_empty()
    }

    /// Run the installed reporter for one event without the out-of-band
    /// effects. With no reporter installed the event passes through.
    pub fn dispatch(&self, event: &ErrorEvent) -> Disposition {
        match &self.installed {
            Some(config) => ErrorReporter::new(self.context.clone()).handle(event, config),
            None => Disposition::PassThrough,
        }
    }

    /// The environment-facing callback: logs the event, exits the process
    /// on fatal levels, and otherwise returns whether default handling is
    /// suppressed (true) or should proceed (false).
    pub fn raise(&self, event: &ErrorEvent) -> bool {
        match self.dispatch(event) {
            Disposition::Terminate => process::exit(1),
            Disposition::Suppress => true,
            Disposition::Delegate | Disposition::PassThrough => false,
        }
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
