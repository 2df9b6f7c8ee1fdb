//! Decode callback payloads for inspection

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;
use twiml::{
    CallbackRequest, DialActionRequest, RecordActionRequest, RecordingStatusCallbackRequest,
    TranscribeCallbackRequest, VoiceRequest,
};

/// Callback shapes understood by `--kind`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CallbackKind {
    Voice,
    DialAction,
    RecordAction,
    RecordingStatus,
    Transcribe,
}

/// Decode a form-encoded payload into the record for `kind`
pub fn decode_callback(kind: CallbackKind, payload: &str) -> Result<serde_json::Value> {
    // Payloads saved to disk usually end with a newline
    let body = payload.trim().as_bytes();

    match kind {
        CallbackKind::Voice => decode::<VoiceRequest>(body),
        CallbackKind::DialAction => decode::<DialActionRequest>(body),
        CallbackKind::RecordAction => decode::<RecordActionRequest>(body),
        CallbackKind::RecordingStatus => decode::<RecordingStatusCallbackRequest>(body),
        CallbackKind::Transcribe => decode::<TranscribeCallbackRequest>(body),
    }
}

fn decode<T: CallbackRequest + Serialize>(body: &[u8]) -> Result<serde_json::Value> {
    let record = T::from_form(body)
        .with_context(|| format!("Failed to decode {} callback", T::KIND))?;
    Ok(serde_json::to_value(record)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_dial_action() {
        let value = decode_callback(
            CallbackKind::DialAction,
            "CallSid=CA1&DialCallStatus=completed&DialCallDuration=31\n",
        )
        .unwrap();

        assert_eq!(value["CallSid"], "CA1");
        assert_eq!(value["DialCallStatus"], "completed");
        assert_eq!(value["DialCallDuration"], 31);
    }

    #[test]
    fn test_decode_recording_status() {
        let value = decode_callback(
            CallbackKind::RecordingStatus,
            "RecordingSid=RE1&RecordingDuration=5",
        )
        .unwrap();
        assert_eq!(value["RecordingDuration"], 5);
    }

    #[test]
    fn test_decode_error_names_kind() {
        let err = decode_callback(CallbackKind::RecordAction, "RecordingDuration=x").unwrap_err();
        assert_eq!(err.to_string(), "Failed to decode record-action callback");
    }

    #[test]
    fn test_kind_names() {
        let kind = CallbackKind::from_str("recording-status", false).unwrap();
        assert_eq!(kind, CallbackKind::RecordingStatus);
    }
}
