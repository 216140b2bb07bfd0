//! Named algorithm parameters.
//!
//! [`Parameters`] is a flat `name -> value` map. Lookups take a default whose
//! type selects the conversion, mirroring how thresholding rules read their
//! options: `params.get("window", 75)` or `params.get("k", 0.2)`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single parameter value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Int(i64),
    Float(f64),
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        ParamValue::Int(v as i64)
    }
}

impl From<usize> for ParamValue {
    fn from(v: usize) -> Self {
        ParamValue::Int(v as i64)
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

/// Types that can be read out of a [`ParamValue`].
pub trait FromParam: Sized {
    fn from_param(value: ParamValue) -> Option<Self>;
}

impl FromParam for i64 {
    fn from_param(value: ParamValue) -> Option<Self> {
        match value {
            ParamValue::Int(v) => Some(v),
            ParamValue::Float(v) if v.is_finite() => Some(v.trunc() as i64),
            ParamValue::Float(_) => None,
        }
    }
}

impl FromParam for i32 {
    fn from_param(value: ParamValue) -> Option<Self> {
        i64::from_param(value).and_then(|v| i32::try_from(v).ok())
    }
}

impl FromParam for usize {
    fn from_param(value: ParamValue) -> Option<Self> {
        i64::from_param(value).and_then(|v| usize::try_from(v).ok())
    }
}

impl FromParam for f64 {
    fn from_param(value: ParamValue) -> Option<Self> {
        match value {
            ParamValue::Int(v) => Some(v as f64),
            ParamValue::Float(v) => Some(v),
        }
    }
}

/// Errors from parsing `name=value` assignments.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ParamError {
    #[error("expected `name=value`, got `{0}`")]
    Malformed(String),
    #[error("invalid value `{value}` for parameter `{name}`")]
    InvalidValue { name: String, value: String },
}

/// Immutable-by-convention map of named parameters.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Parameters {
    values: BTreeMap<String, ParamValue>,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Read `name`, falling back to `default` when it is absent or does not
    /// convert to `T`.
    pub fn get<T: FromParam>(&self, name: &str, default: T) -> T {
        self.values
            .get(name)
            .copied()
            .and_then(T::from_param)
            .unwrap_or(default)
    }

    /// Copy every value of `other` over `self`.
    pub fn merge(&mut self, other: &Parameters) {
        for (name, value) in &other.values {
            self.values.insert(name.clone(), *value);
        }
    }

    /// Parse and insert a `name=value` assignment.
    ///
    /// Values without a fractional part or exponent are stored as integers.
    pub fn parse_assignment(&mut self, raw: &str) -> Result<(), ParamError> {
        let (name, value) = raw
            .split_once('=')
            .ok_or_else(|| ParamError::Malformed(raw.to_string()))?;
        let name = name.trim();
        let value = value.trim();
        if name.is_empty() || value.is_empty() {
            return Err(ParamError::Malformed(raw.to_string()));
        }

        let parsed = if let Ok(v) = value.parse::<i64>() {
            ParamValue::Int(v)
        } else if let Ok(v) = value.parse::<f64>() {
            ParamValue::Float(v)
        } else {
            return Err(ParamError::InvalidValue {
                name: name.to_string(),
                value: value.to_string(),
            });
        };
        self.values.insert(name.to_string(), parsed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_use_defaults() {
        let params = Parameters::new();
        assert_eq!(params.get("window", 75), 75);
        assert_eq!(params.get("k", 0.2), 0.2);
    }

    #[test]
    fn conversion_is_lenient_between_int_and_float() {
        let params = Parameters::new().with("window", 31.9).with("k", 1);
        assert_eq!(params.get("window", 75usize), 31);
        assert_eq!(params.get("k", 0.2), 1.0);
    }

    #[test]
    fn negative_value_for_unsigned_falls_back() {
        let params = Parameters::new().with("window", -5);
        assert_eq!(params.get("window", 75usize), 75);
        assert_eq!(params.get("window", 75i32), -5);
    }

    #[test]
    fn parses_assignments() {
        let mut params = Parameters::new();
        params.parse_assignment("window=31").expect("int");
        params.parse_assignment(" k = 0.35 ").expect("float");
        assert_eq!(params.get("window", 0), 31);
        assert_eq!(params.get("k", 0.0), 0.35);

        assert_eq!(
            params.parse_assignment("window"),
            Err(ParamError::Malformed("window".to_string()))
        );
        assert!(matches!(
            params.parse_assignment("k=abc"),
            Err(ParamError::InvalidValue { .. })
        ));
    }

    #[test]
    fn deserializes_from_flat_json() {
        let params: Parameters =
            serde_json::from_str(r#"{"window": 15, "k": 0.5}"#).expect("json");
        assert_eq!(params.get("window", 75), 15);
        assert_eq!(params.get("k", 0.2), 0.5);

        let json = serde_json::to_string(&params).expect("serialize");
        assert_eq!(json, r#"{"k":0.5,"window":15}"#);
    }

    #[test]
    fn merge_overrides_existing() {
        let mut base = Parameters::new().with("window", 75).with("k", 0.2);
        base.merge(&Parameters::new().with("k", 0.4));
        assert_eq!(base.get("window", 0), 75);
        assert_eq!(base.get("k", 0.0), 0.4);
    }
}
