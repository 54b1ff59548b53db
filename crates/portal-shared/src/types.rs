//! Common types

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A value that can be carried into a URL parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl Scalar {
    /// Empty strings, zero and `false` are treated as absent values.
    pub fn is_truthy(&self) -> bool {
        match self {
            Scalar::Bool(b) => *b,
            Scalar::Int(i) => *i != 0,
            Scalar::Str(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Str(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Str(s)
    }
}

impl From<i64> for Scalar {
    fn from(i: i64) -> Self {
        Scalar::Int(i)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

impl From<Uuid> for Scalar {
    fn from(id: Uuid) -> Self {
        Scalar::Str(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(Scalar::from("acme").is_truthy());
        assert!(!Scalar::from("").is_truthy());
        assert!(!Scalar::Int(0).is_truthy());
        assert!(Scalar::Int(7).is_truthy());
        assert!(!Scalar::Bool(false).is_truthy());
    }

    #[test]
    fn test_untagged_deserialize() {
        let values: Vec<Scalar> = serde_json::from_str(r#"["acme", 42, true]"#).unwrap();
        assert_eq!(values, vec![Scalar::from("acme"), Scalar::Int(42), Scalar::Bool(true)]);
        assert_eq!(values[1].to_string(), "42");
    }
}
