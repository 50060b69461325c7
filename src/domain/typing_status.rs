//! Typing-status presence record.
//!
//! On the wire the typing flag may arrive under either `isTyping` or `typing`
//! and as a boolean, a number, or a string. [`TypingStatus`] always holds the
//! canonical boolean and serializes it back as a plain JSON boolean.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::boolean_like::{
    BooleanLike, Normalized, UnrecognizedPolicy, UnrecognizedValueError,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "TypingStatusWire")]
pub struct TypingStatus {
    pub sender_id: String,
    pub recipient_id: String,
    pub is_typing: bool,
}

/// Record as decoded from JSON, before the flag is normalized.
///
/// Missing ids decode as empty strings; only the flag is interpreted here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypingStatusWire {
    #[serde(default)]
    pub sender_id: String,
    #[serde(default)]
    pub recipient_id: String,
    #[serde(default)]
    pub is_typing: Option<BooleanLike>,
    #[serde(default)]
    pub typing: Option<BooleanLike>,
}

impl TypingStatusWire {
    /// Returns the flag value to use. `isTyping` wins when both keys are set.
    pub fn resolve_flag(&self) -> Option<&BooleanLike> {
        self.is_typing.as_ref().or(self.typing.as_ref())
    }

    pub fn has_both_aliases(&self) -> bool {
        self.is_typing.is_some() && self.typing.is_some()
    }
}

/// A decoded record plus what happened to its flag on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedStatus {
    pub status: TypingStatus,
    /// Unknown token that the policy turned into `false`.
    pub defaulted_token: Option<String>,
    /// Both `isTyping` and `typing` were present.
    pub alias_conflict: bool,
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed typing status record: {0}")]
    Format(#[from] serde_json::Error),
    #[error(transparent)]
    UnrecognizedValue(#[from] UnrecognizedValueError),
}

impl TypingStatus {
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn new(
        sender_id: impl Into<String>,
        recipient_id: impl Into<String>,
        is_typing: bool,
    ) -> Self {
        Self {
            sender_id: sender_id.into(),
            recipient_id: recipient_id.into(),
            is_typing,
        }
    }

    /// Normalizes a decoded wire record. A missing flag means not typing.
    pub fn decode_wire(
        wire: TypingStatusWire,
        policy: UnrecognizedPolicy,
    ) -> Result<DecodedStatus, UnrecognizedValueError> {
        let alias_conflict = wire.has_both_aliases();
        let normalized = match wire.resolve_flag() {
            Some(flag) => flag.normalize_with(policy)?,
            None => Normalized::Recognized(false),
        };

        let is_typing = normalized.value();
        let defaulted_token = match normalized {
            Normalized::Defaulted { token } => Some(token),
            Normalized::Recognized(_) => None,
        };

        Ok(DecodedStatus {
            status: Self {
                sender_id: wire.sender_id,
                recipient_id: wire.recipient_id,
                is_typing,
            },
            defaulted_token,
            alias_conflict,
        })
    }

    pub fn decode_json(
        raw: &str,
        policy: UnrecognizedPolicy,
    ) -> Result<DecodedStatus, DecodeError> {
        // Record must be an object; with defaulted fields a bare `[]` would
        // otherwise decode positionally.
        let fields: serde_json::Map<String, serde_json::Value> = serde_json::from_str(raw)?;
        let wire = TypingStatusWire::deserialize(serde_json::Value::Object(fields))?;
        Ok(Self::decode_wire(wire, policy)?)
    }

    /// Strict decode: unknown flag tokens are an error.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn from_json(raw: &str) -> Result<Self, DecodeError> {
        Self::decode_json(raw, UnrecognizedPolicy::Reject).map(|decoded| decoded.status)
    }
}

impl TryFrom<TypingStatusWire> for TypingStatus {
    type Error = UnrecognizedValueError;

    fn try_from(wire: TypingStatusWire) -> Result<Self, Self::Error> {
        Self::decode_wire(wire, UnrecognizedPolicy::Reject).map(|decoded| decoded.status)
    }
}
