//! PHP error levels and severity classification.
//!
//! Implements the E_* bitmask constants (E_ERROR, E_WARNING, etc.) and the
//! severity-to-label table used when formatting log records.
//!
//! Reference: php-src/Zend/zend_errors.h

use std::fmt;

/// PHP error levels (bitmask).
///
/// Reference: php-src/Zend/zend_errors.h
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ErrorLevel {
    /// Fatal error — execution cannot continue.
    Error = 1, // E_ERROR
    /// Non-fatal warning — execution continues.
    Warning = 2, // E_WARNING
    /// Parser error.
    Parse = 4, // E_PARSE
    /// Informational notice.
    Notice = 8, // E_NOTICE
    /// Fatal error triggered by the core during startup.
    CoreError = 16, // E_CORE_ERROR
    /// Warning triggered by the core during startup.
    CoreWarning = 32, // E_CORE_WARNING
    /// Fatal error during compilation.
    CompileError = 64, // E_COMPILE_ERROR
    /// Warning during compilation.
    CompileWarning = 128, // E_COMPILE_WARNING
    /// User-triggered error (trigger_error).
    UserError = 256, // E_USER_ERROR
    /// User-triggered warning.
    UserWarning = 512, // E_USER_WARNING
    /// User-triggered notice.
    UserNotice = 1024, // E_USER_NOTICE
    /// Coding standards / interoperability suggestion.
    Strict = 2048, // E_STRICT
    /// Catchable fatal error.
    RecoverableError = 4096, // E_RECOVERABLE_ERROR
    /// Feature deprecation notice.
    Deprecated = 8192, // E_DEPRECATED
    /// User-triggered deprecation.
    UserDeprecated = 16384, // E_USER_DEPRECATED
}

impl ErrorLevel {
    /// E_ALL constant — all error levels combined.
    pub const ALL: u32 = 32767;

    /// Get the bitmask value.
    pub fn mask(self) -> u32 {
        self as u32
    }

    /// Whether a raw severity code must terminate the process after logging.
    ///
    /// This is the literal set the handler dies on: E_USER_ERROR, E_ERROR,
    /// E_PARSE, E_CORE_ERROR, E_COMPILE_ERROR. E_RECOVERABLE_ERROR is
    /// catchable and does not terminate here, and the core/compile warning
    /// variants never do.
    pub fn terminates(code: u32) -> bool {
        matches!(
            ErrorLevel::from_code(code),
            Some(
                ErrorLevel::UserError
                    | ErrorLevel::Error
                    | ErrorLevel::Parse
                    | ErrorLevel::CoreError
                    | ErrorLevel::CompileError
            )
        )
    }

    /// Get the PHP name for this error level (e.g., "E_WARNING").
    pub fn name(self) -> &'static str {
        match self {
            ErrorLevel::Error => "E_ERROR",
            ErrorLevel::Warning => "E_WARNING",
            ErrorLevel::Parse => "E_PARSE",
            ErrorLevel::Notice => "E_NOTICE",
            ErrorLevel::CoreError => "E_CORE_ERROR",
            ErrorLevel::CoreWarning => "E_CORE_WARNING",
            ErrorLevel::CompileError => "E_COMPILE_ERROR",
            ErrorLevel::CompileWarning => "E_COMPILE_WARNING",
            ErrorLevel::UserError => "E_USER_ERROR",
            ErrorLevel::UserWarning => "E_USER_WARNING",
            ErrorLevel::UserNotice => "E_USER_NOTICE",
            ErrorLevel::Strict => "E_STRICT",
            ErrorLevel::RecoverableError => "E_RECOVERABLE_ERROR",
            ErrorLevel::Deprecated => "E_DEPRECATED",
            ErrorLevel::UserDeprecated => "E_USER_DEPRECATED",
        }
    }

    /// Try to convert a raw severity code to an ErrorLevel.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(ErrorLevel::Error),
            2 => Some(ErrorLevel::Warning),
            4 => Some(ErrorLevel::Parse),
            8 => Some(ErrorLevel::Notice),
            16 => Some(ErrorLevel::CoreError),
            32 => Some(ErrorLevel::CoreWarning),
            64 => Some(ErrorLevel::CompileError),
            128 => Some(ErrorLevel::CompileWarning),
            256 => Some(ErrorLevel::UserError),
            512 => Some(ErrorLevel::UserWarning),
            1024 => Some(ErrorLevel::UserNotice),
            2048 => Some(ErrorLevel::Strict),
            4096 => Some(ErrorLevel::RecoverableError),
            8192 => Some(ErrorLevel::Deprecated),
            16384 => Some(ErrorLevel::UserDeprecated),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A severity classification: the log label and the location-line phrase.
///
/// Every record reads `** <label> ** [<code>] <message>` followed by
/// `   <phrase> on line <n> in file <f>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Severity {
    pub label: &'static str,
    pub phrase: &'static str,
}

/// Severity table, one row per E_* level.
///
/// E_ALL and any unregistered code fall through to [`UNKNOWN_SEVERITY`];
/// classification never fails.
const SEVERITY_TABLE: &[(u32, Severity)] = &[
    (1, Severity { label: "FATAL", phrase: "Error" }),
    (2, Severity { label: "WARNING", phrase: "Warning" }),
    (4, Severity { label: "PARSE", phrase: "Parse exception" }),
    (8, Severity { label: "NOTICE", phrase: "Notice" }),
    (16, Severity { label: "CORE_ERROR", phrase: "Core error" }),
    (32, Severity { label: "CORE_WARNING", phrase: "Core warning" }),
    (64, Severity { label: "COMPILE_ERROR", phrase: "Compile error" }),
    (128, Severity { label: "COMPILE_WARNING", phrase: "Compile warning" }),
    (256, Severity { label: "USER_ERROR", phrase: "User error" }),
    (512, Severity { label: "USER_WARNING", phrase: "User warning" }),
    (1024, Severity { label: "USER_NOTICE", phrase: "User notice" }),
    (2048, Severity { label: "STRICT", phrase: "Strict exception" }),
    (4096, Severity { label: "RECOVERABLE_ERROR", phrase: "Recoverable error" }),
    (8192, Severity { label: "DEPRECATED", phrase: "Deprecated exception" }),
    (16384, Severity { label: "USER_DEPRECATED", phrase: "User deprecated exception" }),
];

/// Catch-all classification for unrecognized or aggregate codes.
pub const UNKNOWN_SEVERITY: Severity = Severity {
    label: "Unknown error type",
    phrase: "Unknown error",
};

/// Classify a raw severity code. Total: unknown codes get the catch-all row.
pub fn classify(code: u32) -> Severity {
    SEVERITY_TABLE
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, s)| *s)
        .unwrap_or(UNKNOWN_SEVERITY)
}
