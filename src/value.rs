//! Variable snapshot values and var_export-style rendering.
//!
//! Log records include a textual dump of every variable that was in scope
//! when the error fired, formatted the way PHP's var_export() prints values.
//!
//! Reference: php-src/ext/standard/var.c (var_export)

use std::fmt;

/// Array keys are either integers or strings, as in a PHP array.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayKey {
    Int(i64),
    Str(String),
}

/// A best-effort snapshot of a runtime value, arbitrarily nested.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Array(Vec<(ArrayKey, Value)>),
}

impl Value {
    /// Render in var_export() style: `NULL`, `true`, `'it\'s'`,
    /// `array (\n  0 => 'a',\n)`.
    pub fn export(&self) -> String {
        match self {
            Value::Null => "NULL".to_string(),
            Value::Bool(true) => "true".to_string(),
            Value::Bool(false) => "false".to_string(),
            Value::Int(n) => n.to_string(),
            Value::Float(f) => format_float(*f),
            Value::Str(s) => format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'")),
            Value::Array(entries) => {
                let mut s = "array (\n".to_string();
                for (key, v) in entries {
                    let key_str = match key {
                        ArrayKey::Int(n) => n.to_string(),
                        ArrayKey::Str(k) => format!("'{}'", k),
                    };
                    s.push_str(&format!("  {} => {},\n", key_str, v.export()));
                }
                s.push(')');
                s
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.export())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// Render a float the way PHP prints it: integral values keep a trailing
/// `.0` in var_export output.
fn format_float(f: f64) -> String {
    if f.is_finite() && f == f.trunc() && f.abs() < 1e15 {
        format!("{:.1}", f)
    } else {
        format!("{}", f)
    }
}

/// Render a named variable context: `array (\n  'name' => <value>,\n)`.
///
/// The context is keyed by variable name, so the whole snapshot exports as
/// one string-keyed array.
pub fn export_context(vars: &[(String, Value)]) -> String {
    let entries: Vec<(ArrayKey, Value)> = vars
        .iter()
        .map(|(name, v)| (ArrayKey::Str(name.clone()), v.clone()))
        .collect();
    Value::Array(entries).export()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_scalars() {
        assert_eq!(Value::Null.export(), "NULL");
        assert_eq!(Value::Bool(true).export(), "true");
        assert_eq!(Value::Bool(false).export(), "false");
        assert_eq!(Value::Int(-42).export(), "-42");
        assert_eq!(Value::Float(1.5).export(), "1.5");
        assert_eq!(Value::Float(3.0).export(), "3.0");
    }

    #[test]
    fn test_export_string_escaping() {
        assert_eq!(Value::Str("plain".into()).export(), "'plain'");
        assert_eq!(Value::Str("it's".into()).export(), "'it\\'s'");
        assert_eq!(Value::Str("a\\b".into()).export(), "'a\\\\b'");
    }

    #[test]
    fn test_export_nested_array() {
        let inner = Value::Array(vec![
            (ArrayKey::Int(0), Value::Str("a".into())),
            (ArrayKey::Int(1), Value::Int(2)),
        ]);
        let outer = Value::Array(vec![(ArrayKey::Str("list".into()), inner)]);
        assert_eq!(
            outer.export(),
            "array (\n  'list' => array (\n  0 => 'a',\n  1 => 2,\n),\n)"
        );
    }

    #[test]
    fn test_export_context() {
        let vars = vec![
            ("count".to_string(), Value::Int(3)),
            ("name".to_string(), Value::Str("calc".into())),
        ];
        let dump = export_context(&vars);
        assert!(dump.starts_with("array (\n"));
        assert!(dump.contains("'count' => 3,"));
        assert!(dump.contains("'name' => 'calc',"));
    }

    #[test]
    fn test_export_empty_context() {
        assert_eq!(export_context(&[]), "array (\n)");
    }
}
