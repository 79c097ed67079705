//! Error events and backtrace frames.
//!
//! An [`ErrorEvent`] is the read-only payload the runtime hands to the
//! handler: severity code, message, source location, the variable context
//! in scope at the time, and optionally a backtrace snapshot.

use crate::value::Value;

/// One frame of a captured backtrace, as debug_backtrace() reports it.
#[derive(Debug, Clone, PartialEq)]
pub struct StackFrame {
    /// Function (or method) name.
    pub function: String,
    /// File the call site lives in.
    pub file: String,
    /// Line of the call site.
    pub line: u32,
    /// Arguments the function was called with, best effort.
    pub args: Vec<Value>,
}

impl StackFrame {
    pub fn new(function: impl Into<String>, file: impl Into<String>, line: u32) -> Self {
        Self {
            function: function.into(),
            file: file.into(),
            line,
            args: Vec::new(),
        }
    }

    /// Attach call arguments.
    pub fn with_args(mut self, args: Vec<Value>) -> Self {
        self.args = args;
        self
    }
}

/// An error condition as reported by the runtime.
#[derive(Debug, Clone)]
pub struct ErrorEvent {
    /// Raw severity code (one of the E_* values, or anything else — unknown
    /// codes are still logged).
    pub code: u32,
    /// Error message.
    pub message: String,
    /// File where the error occurred.
    pub file: String,
    /// Line number.
    pub line: u32,
    /// Every variable in scope when the error fired (name → snapshot).
    pub context: Vec<(String, Value)>,
    /// Backtrace of the calling functions, if the runtime captured one.
    pub backtrace: Option<Vec<StackFrame>>,
}

impl ErrorEvent {
    /// Create a new event with an empty context and no backtrace.
    pub fn new(code: u32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            file: String::new(),
            line: 0,
            context: Vec::new(),
            backtrace: None,
        }
    }

    /// Set the source file.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = file.into();
        self
    }

    /// Set the source line.
    pub fn with_line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }

    /// Add one in-scope variable to the context snapshot.
    pub fn with_var(mut self, name: impl Into<String>, value: Value) -> Self {
        self.context.push((name.into(), value));
        self
    }

    /// Attach a backtrace snapshot.
    pub fn with_backtrace(mut self, frames: Vec<StackFrame>) -> Self {
        self.backtrace = Some(frames);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_builder() {
        let event = ErrorEvent::new(2, "division by zero")
            .with_file("calc.php")
            .with_line(42)
            .with_var("denominator", Value::Int(0));

        assert_eq!(event.code, 2);
        assert_eq!(event.message, "division by zero");
        assert_eq!(event.file, "calc.php");
        assert_eq!(event.line, 42);
        assert_eq!(event.context.len(), 1);
        assert!(event.backtrace.is_none());
    }

    #[test]
    fn test_event_with_backtrace() {
        let frames = vec![
            StackFrame::new("divide", "calc.php", 42).with_args(vec![Value::Int(1), Value::Int(0)]),
            StackFrame::new("main", "index.php", 7),
        ];
        let event = ErrorEvent::new(2, "division by zero").with_backtrace(frames);
        let bt = event.backtrace.unwrap();
        assert_eq!(bt.len(), 2);
        assert_eq!(bt[0].function, "divide");
        assert_eq!(bt[0].args.len(), 2);
        assert_eq!(bt[1].line, 7);
    }
}
