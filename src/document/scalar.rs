//! Scalar translation values.

use serde::{Deserialize, Serialize};

/// A scalar value attached to a translation key.
///
/// Values are normally strings, but booleans, numbers, and null must pass
/// through reconciliation and rewriting unchanged, so each shape is a
/// distinct variant and serialization dispatches on the tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Scalar {
    /// Render the canonical literal form of this value.
    ///
    /// Strings become double-quoted literals with backslash, quote, and
    /// control characters escaped; booleans, integers, and null are
    /// emitted bare. Non-finite floats have no literal form and render as
    /// `null`.
    pub fn to_literal(&self) -> Result<String, serde_json::Error> {
        match self {
            Scalar::Null => Ok("null".to_string()),
            Scalar::Bool(value) => Ok(value.to_string()),
            Scalar::Int(value) => Ok(value.to_string()),
            Scalar::Float(value) if !value.is_finite() => Ok("null".to_string()),
            Scalar::Float(value) => serde_json::to_string(value),
            Scalar::Str(value) => serde_json::to_string(value),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Str(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Str(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_is_quoted() {
        let value = Scalar::from("Hello");
        assert_eq!(value.to_literal().unwrap(), "\"Hello\"");
    }

    #[test]
    fn test_embedded_quotes_escaped() {
        let value = Scalar::from("say \"hi\"");
        assert_eq!(value.to_literal().unwrap(), "\"say \\\"hi\\\"\"");
    }

    #[test]
    fn test_backslash_and_newline_escaped() {
        let value = Scalar::from("a\\b\nc");
        assert_eq!(value.to_literal().unwrap(), "\"a\\\\b\\nc\"");
    }

    #[test]
    fn test_non_strings_are_bare() {
        assert_eq!(Scalar::Bool(true).to_literal().unwrap(), "true");
        assert_eq!(Scalar::Int(-7).to_literal().unwrap(), "-7");
        assert_eq!(Scalar::Float(1.5).to_literal().unwrap(), "1.5");
        assert_eq!(Scalar::Null.to_literal().unwrap(), "null");
    }

    #[test]
    fn test_non_finite_floats_render_null() {
        assert_eq!(Scalar::Float(f64::NAN).to_literal().unwrap(), "null");
        assert_eq!(Scalar::Float(f64::INFINITY).to_literal().unwrap(), "null");
    }

    #[test]
    fn test_yaml_scalars_decode_into_variants() {
        assert_eq!(serde_yaml::from_str::<Scalar>("Hello").unwrap(), Scalar::from("Hello"));
        assert_eq!(serde_yaml::from_str::<Scalar>("true").unwrap(), Scalar::Bool(true));
        assert_eq!(serde_yaml::from_str::<Scalar>("42").unwrap(), Scalar::Int(42));
        assert_eq!(serde_yaml::from_str::<Scalar>("2.5").unwrap(), Scalar::Float(2.5));
        assert_eq!(serde_yaml::from_str::<Scalar>("null").unwrap(), Scalar::Null);
    }

    #[test]
    fn test_quoted_literal_round_trips() {
        let original = Scalar::from("line one\nline \"two\"");
        let literal = original.to_literal().unwrap();
        let decoded: Scalar = serde_yaml::from_str(&literal).unwrap();
        assert_eq!(decoded, original);
    }
}
