use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// A boolean as it may appear on the wire: native, numeric, or textual.
#[derive(Debug, Clone, PartialEq)]
pub enum BooleanLike {
    Bool(bool),
    Number(serde_json::Number),
    String(String),
}

/// What to do with a string token that is neither truthy nor falsy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnrecognizedPolicy {
    #[default]
    Reject,
    TreatAsFalse,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized boolean token {token:?}")]
pub struct UnrecognizedValueError {
    pub token: String,
}

/// Outcome of normalizing a flag under an [`UnrecognizedPolicy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalized {
    Recognized(bool),
    /// Unknown token mapped to `false` by [`UnrecognizedPolicy::TreatAsFalse`].
    Defaulted { token: String },
}

impl Normalized {
    pub fn value(&self) -> bool {
        matches!(self, Self::Recognized(true))
    }
}

impl BooleanLike {
    /// Maps the value to a canonical boolean, rejecting unknown tokens.
    pub fn normalize(&self) -> Result<bool, UnrecognizedValueError> {
        self.normalize_with(UnrecognizedPolicy::Reject)
            .map(|normalized| normalized.value())
    }

    pub fn normalize_with(
        &self,
        policy: UnrecognizedPolicy,
    ) -> Result<Normalized, UnrecognizedValueError> {
        match self {
            Self::Bool(value) => Ok(Normalized::Recognized(*value)),
            Self::Number(number) => Ok(Normalized::Recognized(!is_zero(number))),
            Self::String(raw) => match (parse_token(raw), policy) {
                (Some(value), _) => Ok(Normalized::Recognized(value)),
                (None, UnrecognizedPolicy::Reject) => Err(UnrecognizedValueError {
                    token: raw.clone(),
                }),
                (None, UnrecognizedPolicy::TreatAsFalse) => Ok(Normalized::Defaulted {
                    token: raw.clone(),
                }),
            },
        }
    }
}

/// Float literals that underflow (`1e-400`) are parsed as `0.0` and so count as zero.
fn is_zero(number: &serde_json::Number) -> bool {
    if let Some(value) = number.as_u64() {
        return value == 0;
    }
    if let Some(value) = number.as_i64() {
        return value == 0;
    }
    number.as_f64().is_some_and(|value| value == 0.0)
}

fn parse_token(raw: &str) -> Option<bool> {
    let token = raw.trim();
    if token.eq_ignore_ascii_case("true") || token == "1" {
        Some(true)
    } else if token.eq_ignore_ascii_case("false") || token == "0" {
        Some(false)
    } else {
        None
    }
}

impl<'de> Deserialize<'de> for BooleanLike {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        match value {
            serde_json::Value::Bool(value) => Ok(Self::Bool(value)),
            serde_json::Value::Number(number) => Ok(Self::Number(number)),
            serde_json::Value::String(raw) => Ok(Self::String(raw)),
            other => Err(D::Error::custom(format!(
                "expected boolean, number, or string, found {}",
                value_kind(&other)
            ))),
        }
    }
}

fn value_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
