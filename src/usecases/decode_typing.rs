//! Use case for decoding typing-status payloads.
//!
//! A payload is either a single JSON record or JSON Lines. Each record is
//! decoded independently, so one bad line never hides the others.

use crate::domain::{
    boolean_like::UnrecognizedPolicy,
    typing_status::{DecodeError, TypingStatus},
};

const TYPING_ALIAS_CONFLICT: &str = "TYPING_ALIAS_CONFLICT";
const TYPING_FLAG_DEFAULTED: &str = "TYPING_FLAG_DEFAULTED";
const TYPING_DECODE_FAILED: &str = "TYPING_DECODE_FAILED";

/// A line of a JSON Lines payload that failed to decode.
#[derive(Debug)]
pub struct LineFailure {
    /// 1-based line number within the payload.
    pub line: usize,
    pub error: DecodeError,
}

#[derive(Debug, Default)]
pub struct DecodeReport {
    pub records: Vec<TypingStatus>,
    pub failures: Vec<LineFailure>,
}

impl DecodeReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn total(&self) -> usize {
        self.records.len() + self.failures.len()
    }
}

/// Decodes a single record, applying `policy` to unrecognized flag tokens.
pub fn decode_one(raw: &str, policy: UnrecognizedPolicy) -> Result<TypingStatus, DecodeError> {
    let decoded = TypingStatus::decode_json(raw, policy)?;

    if decoded.alias_conflict {
        tracing::debug!(
            code = TYPING_ALIAS_CONFLICT,
            sender_id = %decoded.status.sender_id,
            "both isTyping and typing present; isTyping takes precedence"
        );
    }

    if let Some(token) = &decoded.defaulted_token {
        tracing::warn!(
            code = TYPING_FLAG_DEFAULTED,
            token = %token,
            "unrecognized typing flag treated as false"
        );
    }

    Ok(decoded.status)
}

/// Decodes every non-blank line of a JSON Lines payload.
pub fn decode_lines(raw: &str, policy: UnrecognizedPolicy) -> DecodeReport {
    let mut report = DecodeReport::default();

    for (index, line) in raw.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        match decode_one(line, policy) {
            Ok(record) => report.records.push(record),
            Err(error) => {
                tracing::warn!(
                    code = TYPING_DECODE_FAILED,
                    line = index + 1,
                    error = %error,
                    "typing status line rejected"
                );
                report.failures.push(LineFailure {
                    line: index + 1,
                    error,
                });
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_single_record() {
        let record = decode_one(
            r#"{"senderId":"a","recipientId":"b","typing":"1"}"#,
            UnrecognizedPolicy::Reject,
        )
        .expect("record should decode");

        assert_eq!(record, TypingStatus::new("a", "b", true));
    }

    #[test]
    fn single_record_respects_reject_policy() {
        let error = decode_one(
            r#"{"senderId":"a","recipientId":"b","typing":"on"}"#,
            UnrecognizedPolicy::Reject,
        )
        .expect_err("unknown token should fail");

        assert!(matches!(error, DecodeError::UnrecognizedValue(_)));
    }

    #[test]
    fn single_record_respects_treat_as_false_policy() {
        let record = decode_one(
            r#"{"senderId":"a","recipientId":"b","typing":"on"}"#,
            UnrecognizedPolicy::TreatAsFalse,
        )
        .expect("policy should default the flag");

        assert!(!record.is_typing);
    }

    #[test]
    fn decodes_all_lines_and_skips_blank_ones() {
        let raw = concat!(
            r#"{"senderId":"a","recipientId":"b","isTyping":true}"#,
            "\n\n",
            r#"{"senderId":"b","recipientId":"a","typing":0}"#,
            "\n   \n",
        );

        let report = decode_lines(raw, UnrecognizedPolicy::Reject);

        assert!(report.is_clean());
        assert_eq!(
            report.records,
            vec![
                TypingStatus::new("a", "b", true),
                TypingStatus::new("b", "a", false),
            ]
        );
    }

    #[test]
    fn reports_failures_with_line_numbers_and_keeps_good_lines() {
        let raw = [
            r#"{"senderId":"a","recipientId":"b","isTyping":"true"}"#,
            "{not json",
            r#"{"senderId":"a","recipientId":"b","typing":"perhaps"}"#,
            r#"{"senderId":"a","recipientId":"b","typing":"0"}"#,
        ]
        .join("\n");

        let report = decode_lines(&raw, UnrecognizedPolicy::Reject);

        assert_eq!(report.total(), 4);
        assert_eq!(report.records.len(), 2);
        assert_eq!(report.failures.len(), 2);
        assert_eq!(report.failures[0].line, 2);
        assert!(matches!(report.failures[0].error, DecodeError::Format(_)));
        assert_eq!(report.failures[1].line, 3);
        assert!(matches!(
            report.failures[1].error,
            DecodeError::UnrecognizedValue(_)
        ));
    }

    #[test]
    fn decodes_lines_without_ids() {
        let raw = concat!(r#"{"typing":"1"}"#, "\n", r#"{"isTyping":0}"#, "\n");

        let report = decode_lines(raw, UnrecognizedPolicy::Reject);

        assert!(report.is_clean());
        assert_eq!(
            report.records,
            vec![TypingStatus::new("", "", true), TypingStatus::new("", "", false)]
        );
    }

    #[test]
    fn empty_payload_yields_empty_report() {
        let report = decode_lines("", UnrecognizedPolicy::Reject);

        assert!(report.is_clean());
        assert_eq!(report.total(), 0);
    }
}
