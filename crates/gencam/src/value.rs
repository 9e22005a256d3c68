//! Feature values.

/// Value of a feature, tagged by its runtime data type.
///
/// Exactly one variant applies to a given feature, determined by the
/// descriptor's type code at the time of the call. Values are built per
/// call and never cached by the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureValue {
    /// 64-bit signed integer feature.
    Int(i64),
    /// Double-precision float feature.
    Float(f64),
    /// Boolean feature.
    Bool(bool),
    /// Enumeration feature, represented by its text token.
    Enum(String),
    /// ASCII string feature.
    Str(String),
}

impl FeatureValue {
    /// Short name of the active variant, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            FeatureValue::Int(_) => "int",
            FeatureValue::Float(_) => "float",
            FeatureValue::Bool(_) => "bool",
            FeatureValue::Enum(_) => "enum",
            FeatureValue::Str(_) => "string",
        }
    }

    /// Integer value, if this is an `Int`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            FeatureValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Float value, if this is a `Float`.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            FeatureValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Boolean value, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FeatureValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Text content, if this is an `Enum` token or a `Str`.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FeatureValue::Enum(s) | FeatureValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<i64> for FeatureValue {
    fn from(v: i64) -> Self {
        FeatureValue::Int(v)
    }
}

impl From<i32> for FeatureValue {
    fn from(v: i32) -> Self {
        FeatureValue::Int(v as i64)
    }
}

impl From<f64> for FeatureValue {
    fn from(v: f64) -> Self {
        FeatureValue::Float(v)
    }
}

impl From<bool> for FeatureValue {
    fn from(v: bool) -> Self {
        FeatureValue::Bool(v)
    }
}

impl From<&str> for FeatureValue {
    fn from(v: &str) -> Self {
        FeatureValue::Str(v.to_string())
    }
}

impl From<String> for FeatureValue {
    fn from(v: String) -> Self {
        FeatureValue::Str(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_match_variant() {
        assert_eq!(FeatureValue::Int(10).as_int(), Some(10));
        assert_eq!(FeatureValue::Int(10).as_float(), None);
        assert_eq!(FeatureValue::Bool(true).as_bool(), Some(true));
        assert_eq!(FeatureValue::Str("x".into()).as_text(), Some("x"));
        assert_eq!(FeatureValue::Enum("Mono8".into()).as_text(), Some("Mono8"));
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(FeatureValue::from(10i64), FeatureValue::Int(10));
        assert_eq!(FeatureValue::from(10i32), FeatureValue::Int(10));
        assert_eq!(FeatureValue::from(2.5f64), FeatureValue::Float(2.5));
        assert_eq!(FeatureValue::from(true), FeatureValue::Bool(true));
        assert_eq!(FeatureValue::from("Mono8"), FeatureValue::Str("Mono8".into()));
    }
}
